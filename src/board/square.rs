/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Context};

use crate::BOARD_SIZE;

/// Returns `true` if both `row` and `col` lie in `[0, 8)`.
///
/// # Example
/// ```
/// # use amazons::position_is_on_board;
/// assert!(position_is_on_board(0, 7));
/// assert!(!position_is_on_board(8, 0));
/// assert!(!position_is_on_board(3, -1));
/// ```
#[inline(always)]
pub const fn position_is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE && col >= 0 && col < BOARD_SIZE
}

/// A `(row, col)` coordinate on the board.
///
/// Row `0` is the top of the board, column `0` is the left edge.
/// Coordinates are signed so that off-board positions (and the "no move" sentinel) are representable;
/// use [`Square::is_on_board`] before indexing with one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

    /// An off-board coordinate, used by [`crate::Move::NONE`].
    pub const NONE: Self = Self::new(-1, -1);

    /// Constructs a new [`Square`] without any bounds checks.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Constructs the [`Square`] at `index` in row-major order.
    ///
    /// `index` must be less than [`Square::COUNT`].
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Square index out of range");
        Self::new(
            (index / BOARD_SIZE as usize) as i8,
            (index % BOARD_SIZE as usize) as i8,
        )
    }

    /// Row-major index of this square.
    ///
    /// Only meaningful if this square [is on the board](Self::is_on_board).
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Returns `true` if this square lies within the board.
    #[inline(always)]
    pub const fn is_on_board(&self) -> bool {
        position_is_on_board(self.row, self.col)
    }

    /// Every square on the board, in row-major order.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index_unchecked)
    }

    /// The square `distance` steps away from `self` in `direction`.
    ///
    /// The result may be off the board.
    #[inline(always)]
    pub const fn offset(&self, direction: Direction, distance: i8) -> Self {
        Self::new(
            self.row + direction.dr * distance,
            self.col + direction.dc * distance,
        )
    }

    /// Unit step from `self` towards `other`, and the number of such steps between them.
    ///
    /// Only meaningful if the two squares lie on a [queen line](Self::is_queen_line_to).
    #[inline(always)]
    pub fn step_towards(&self, other: Self) -> (Direction, i8) {
        let dr = (other.row - self.row).signum();
        let dc = (other.col - self.col).signum();
        let distance = (other.row - self.row)
            .abs()
            .max((other.col - self.col).abs());

        (Direction::new(dr, dc), distance)
    }

    /// Returns `true` if `other` shares a row, column, or exact diagonal with `self`.
    ///
    /// A square is trivially on a queen line with itself.
    ///
    /// # Example
    /// ```
    /// # use amazons::Square;
    /// let origin = Square::new(2, 2);
    /// assert!(origin.is_queen_line_to(Square::new(2, 7)));
    /// assert!(origin.is_queen_line_to(Square::new(5, 5)));
    /// assert!(!origin.is_queen_line_to(Square::new(3, 4)));
    /// ```
    #[inline(always)]
    pub const fn is_queen_line_to(&self, other: Self) -> bool {
        let dr = (other.row - self.row).abs();
        let dc = (other.col - self.col).abs();
        dr == 0 || dc == 0 || dr == dc
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;
    /// Parses a square written as `row,col`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (row, col) = s
            .trim()
            .split_once(',')
            .ok_or(anyhow!("Square must be written as \"row,col\". Got {s:?}"))?;

        let row = row
            .trim()
            .parse()
            .with_context(|| format!("Invalid row in square {s:?}"))?;
        let col = col
            .trim()
            .parse()
            .with_context(|| format!("Invalid column in square {s:?}"))?;

        let square = Self::new(row, col);
        if !square.is_on_board() {
            bail!("Square {square} is not on the board");
        }

        Ok(square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A unit step in one of the eight queen directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const RIGHT: Self = Self::new(0, 1);
    pub const LEFT: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(-1, 0);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);
    pub const DOWN_LEFT: Self = Self::new(1, -1);
    pub const UP_RIGHT: Self = Self::new(-1, 1);
    pub const UP_LEFT: Self = Self::new(-1, -1);

    /// All eight directions, in the order move generation walks them.
    pub const ALL: [Self; 8] = [
        Self::RIGHT,
        Self::LEFT,
        Self::DOWN,
        Self::UP,
        Self::DOWN_RIGHT,
        Self::DOWN_LEFT,
        Self::UP_RIGHT,
        Self::UP_LEFT,
    ];

    #[inline(always)]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        for (i, square) in Square::iter().enumerate() {
            assert!(square.is_on_board());
            assert_eq!(square.index(), i);
        }
        assert_eq!(Square::iter().count(), 64);
    }

    #[test]
    fn test_parse_square() {
        assert_eq!("2,7".parse::<Square>().unwrap(), Square::new(2, 7));
        assert_eq!(" 0 , 3 ".parse::<Square>().unwrap(), Square::new(0, 3));
        assert!("8,0".parse::<Square>().is_err());
        assert!("27".parse::<Square>().is_err());
        assert!("a,1".parse::<Square>().is_err());
    }

    #[test]
    fn test_step_towards() {
        let from = Square::new(5, 1);
        assert_eq!(
            from.step_towards(Square::new(2, 4)),
            (Direction::UP_RIGHT, 3)
        );
        assert_eq!(from.step_towards(Square::new(5, 0)), (Direction::LEFT, 1));
        assert_eq!(from.step_towards(from), (Direction::new(0, 0), 0));
    }

    #[test]
    fn test_none_is_off_board() {
        assert!(!Square::NONE.is_on_board());
    }
}
