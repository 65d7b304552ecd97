/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};

use super::Square;

/// A list of moves, in generation order.
pub type MoveList = Vec<Move>;

/// A complete turn: a piece slides from `from` to `to`, then shoots a barrier onto `arrow`.
///
/// A [`Move`] carries no reference to the board it was made for;
/// it is only meaningful against the position and side it was generated or validated for.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Move {
    /// Square the moving piece starts on.
    pub from: Square,

    /// Square the moving piece lands on.
    pub to: Square,

    /// Square that receives the barrier.
    pub arrow: Square,
}

impl Move {
    /// The "no move" sentinel, returned when a side has nothing to play.
    ///
    /// All of its coordinates are `-1`.
    pub const NONE: Self = Self {
        from: Square::NONE,
        to: Square::NONE,
        arrow: Square::NONE,
    };

    /// Constructs a new [`Move`] from its three squares.
    #[inline(always)]
    pub const fn new(from: Square, to: Square, arrow: Square) -> Self {
        Self { from, to, arrow }
    }

    /// Constructs a new [`Move`] from six raw coordinates, in the order `from`, `to`, `arrow`.
    ///
    /// # Example
    /// ```
    /// # use amazons::{Move, Square};
    /// let mv = Move::from_coords(0, 2, 0, 3, 0, 4);
    /// assert_eq!(mv.to, Square::new(0, 3));
    /// assert_eq!(mv.to_string(), "0 2 0 3 0 4");
    /// ```
    #[inline(always)]
    pub const fn from_coords(
        from_row: i8,
        from_col: i8,
        to_row: i8,
        to_col: i8,
        arrow_row: i8,
        arrow_col: i8,
    ) -> Self {
        Self::new(
            Square::new(from_row, from_col),
            Square::new(to_row, to_col),
            Square::new(arrow_row, arrow_col),
        )
    }

    /// Returns `true` if this is the [`Move::NONE`] sentinel.
    #[inline(always)]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// The six coordinates of this move, in the order `from`, `to`, `arrow`.
    #[inline(always)]
    pub const fn coords(&self) -> [i8; 6] {
        [
            self.from.row,
            self.from.col,
            self.to.row,
            self.to.col,
            self.arrow.row,
            self.arrow.col,
        ]
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;
    /// Parses six integers separated by whitespace and/or commas: `fr fc tr tc ar ac`.
    ///
    /// No bounds checks are performed; that is the job of move validation.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let coords = s
            .split(|c: char| c.is_ascii_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i8>()
                    .with_context(|| format!("Invalid coordinate {part:?} in move {s:?}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let &[fr, fc, tr, tc, ar, ac] = coords.as_slice() else {
            bail!(
                "A move must have exactly 6 coordinates (FromRow FromCol ToRow ToCol ArrowRow ArrowCol). Got {} in {s:?}",
                coords.len()
            );
        };

        Ok(Self::from_coords(fr, fc, tr, tc, ar, ac))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "(none)");
        }

        let [fr, fc, tr, tc, ar, ac] = self.coords();
        write!(f, "{fr} {fc} {tr} {tc} {ar} {ac}")
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Move::NONE");
        }

        write!(f, "{:?} -> {:?} @ {:?}", self.from, self.to, self.arrow)
    }
}
