/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, ops::Not, str::FromStr};

use anyhow::{bail, Result};

/// One of the two players.
///
/// Black always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[repr(u8)]
pub enum Side {
    #[default]
    Black,
    White,
}

impl Side {
    /// Number of side variants.
    pub const COUNT: usize = 2;

    /// Both sides, starting with Black.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Black, Self::White]
    }

    /// Returns this [`Side`]'s opponent.
    ///
    /// # Example
    /// ```
    /// # use amazons::Side;
    /// assert_eq!(Side::Black.opponent(), Side::White);
    /// assert_eq!(Side::White.opponent(), Side::Black);
    /// ```
    #[inline(always)]
    pub const fn opponent(&self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// The tile occupied by a piece of this side.
    #[inline(always)]
    pub const fn piece(&self) -> Tile {
        match self {
            Self::Black => Tile::Black,
            Self::White => Tile::White,
        }
    }

    /// Human-readable name of this side.
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::White => "White",
        }
    }

    /// Creates a [`Side`] from a `char`; `b` for Black and `w` for White, case-insensitive.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'b' | 'B' => Ok(Self::Black),
            'w' | 'W' => Ok(Self::White),
            _ => bail!("Invalid char for Side: Must be one of 'b' or 'w'. Got {c:?}"),
        }
    }

    /// Lowercase `char` for this side, as used in board notation.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Black => 'b',
            Self::White => 'w',
        }
    }
}

impl Not for Side {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl FromStr for Side {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Self::Black),
            "w" | "white" => Ok(Self::White),
            _ => bail!("Invalid str for Side: Must be \"black\" or \"white\". Got {s:?}"),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// State of a single tile on the board.
///
/// The discriminants double as the tile codes of the save file format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
    Barrier = 3,
}

impl Tile {
    /// Returns `true` if nothing occupies this tile.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The side whose piece occupies this tile, if any.
    #[inline(always)]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Self::Black => Some(Side::Black),
            Self::White => Some(Side::White),
            _ => None,
        }
    }

    /// Numeric code of this tile.
    #[inline(always)]
    pub const fn code(&self) -> u8 {
        *self as u8
    }

    /// Creates a [`Tile`] from its numeric code.
    ///
    /// # Example
    /// ```
    /// # use amazons::Tile;
    /// assert_eq!(Tile::from_code(3).unwrap(), Tile::Barrier);
    /// assert!(Tile::from_code(4).is_err());
    /// ```
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Black),
            2 => Ok(Self::White),
            3 => Ok(Self::Barrier),
            _ => bail!("Invalid code for Tile: Must be between [0,3]. Got {code}."),
        }
    }

    /// Creates an occupied [`Tile`] from its notation `char`.
    ///
    /// Empty tiles are written as digits in notation, so they have no `char` here.
    pub fn from_char(c: char) -> Result<Self> {
        match c {
            'b' => Ok(Self::Black),
            'w' => Ok(Self::White),
            'x' => Ok(Self::Barrier),
            _ => bail!("Invalid char for Tile: Must be one of 'b', 'w', or 'x'. Got {c:?}"),
        }
    }

    /// Notation `char` of this tile; `.` for empty.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'b',
            Self::White => 'w',
            Self::Barrier => 'x',
        }
    }

    /// Glyph used when pretty-printing a board.
    #[inline(always)]
    pub const fn glyph(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::Black => 'B',
            Self::White => 'W',
            Self::Barrier => '#',
        }
    }
}

impl FromStr for Tile {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "." | "empty" => Ok(Self::Empty),
            "b" | "black" => Ok(Self::Black),
            "w" | "white" => Ok(Self::White),
            "x" | "barrier" | "arrow" => Ok(Self::Barrier),
            _ => bail!("Invalid str for Tile: Must be one of black, white, barrier, or empty. Got {s:?}"),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
