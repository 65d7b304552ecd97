/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use anyhow::{bail, Result};

use crate::{Direction, Side, Square, Tile, BOARD_SIZE};

/// Produces the starting position: four pieces per side on their fixed squares, everything else empty.
///
/// # Example
/// ```
/// # use amazons::{init_board, Side, Square, Tile};
/// let board = init_board();
/// assert_eq!(board[Square::new(0, 2)], Tile::Black);
/// assert_eq!(board[Square::new(7, 5)], Tile::White);
/// assert_eq!(board.count(Tile::Black), 4);
/// assert_eq!(board.count(Tile::Barrier), 0);
/// ```
#[inline(always)]
pub fn init_board() -> Board {
    Board::new()
}

/// Returns `true` if every square strictly between `from` and `to` is on the board and empty.
///
/// The two squares must lie on a queen line (or be equal); see [`Board::path_is_clear`].
#[inline(always)]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    board.path_is_clear(from, to)
}

/// An `8x8` grid of [`Tile`]s, stored as a flat array in row-major order.
///
/// This is a plain value type; copying it is how search and move generation explore
/// alternatives without disturbing the caller's board.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [Tile; Square::COUNT],
}

impl Board {
    /// The starting position.
    #[inline(always)]
    pub fn new() -> Self {
        let mut board = Self::empty();

        for (row, col) in [(0, 2), (0, 5), (2, 0), (2, 7)] {
            board[Square::new(row, col)] = Tile::Black;
        }
        for (row, col) in [(5, 0), (5, 7), (7, 2), (7, 5)] {
            board[Square::new(row, col)] = Tile::White;
        }

        board
    }

    /// A board with no pieces or barriers on it.
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            tiles: [Tile::Empty; Square::COUNT],
        }
    }

    /// Fetches the tile at `square`, if `square` is on the board.
    #[inline(always)]
    pub fn get(&self, square: Square) -> Option<Tile> {
        square.is_on_board().then(|| self.tiles[square.index()])
    }

    /// Returns `true` if `square` is on the board and unoccupied.
    #[inline(always)]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_some_and(|tile| tile.is_empty())
    }

    /// Number of tiles in the given state.
    #[inline(always)]
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Squares holding `side`'s pieces, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        let piece = side.piece();
        Square::iter().filter(move |&square| self[square] == piece)
    }

    /// Iterates over every square and its tile, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Tile)> + '_ {
        Square::iter().map(|square| (square, self[square]))
    }

    /// Walks from `from` in `direction`, yielding empty squares until the edge of the board or an occupied tile.
    ///
    /// `from` itself is never yielded.
    #[inline(always)]
    pub fn ray(&self, from: Square, direction: Direction) -> impl Iterator<Item = Square> + '_ {
        (1..BOARD_SIZE)
            .map(move |distance| from.offset(direction, distance))
            .take_while(|&square| self.is_empty_at(square))
    }

    /// Returns `true` if every square strictly between `from` and `to` is on the board and empty.
    ///
    /// The endpoints themselves are not inspected.
    /// Callers must ensure `from` and `to` lie on a queen line or are equal;
    /// for any other pair the walk follows the unit step towards `to` and the answer is meaningless.
    ///
    /// # Example
    /// ```
    /// # use amazons::{Board, Square};
    /// let board = Board::new();
    /// // (0, 2) -> (0, 5) passes over (0, 3) and (0, 4), both empty.
    /// assert!(board.path_is_clear(Square::new(0, 2), Square::new(0, 5)));
    /// // (0, 0) -> (0, 7) is blocked at (0, 2).
    /// assert!(!board.path_is_clear(Square::new(0, 0), Square::new(0, 7)));
    /// ```
    pub fn path_is_clear(&self, from: Square, to: Square) -> bool {
        let (direction, distance) = from.step_towards(to);

        (1..distance).all(|i| self.is_empty_at(from.offset(direction, i)))
    }

    /// Parses the placement part of board notation, like `2b2b2/8/b6b/8/8/w6w/8/2w2w2`.
    ///
    /// Rows are listed top (row `0`) to bottom, digits are runs of empty tiles,
    /// and `b`, `w`, `x` are Black pieces, White pieces, and barriers.
    pub fn from_notation(notation: &str) -> Result<Self> {
        let mut board = Self::empty();
        let rows = notation.trim().split('/').collect::<Vec<_>>();

        if rows.len() != BOARD_SIZE as usize {
            bail!(
                "Board notation must have {BOARD_SIZE} rows separated by '/'. Got {} in {notation:?}",
                rows.len()
            );
        }

        for (row, placements) in rows.into_iter().enumerate() {
            let mut col = 0;

            for c in placements.chars() {
                if let Some(empties) = c.to_digit(10) {
                    col += empties as usize;
                } else {
                    let tile = Tile::from_char(c)?;
                    if col < BOARD_SIZE as usize {
                        board[Square::new(row as i8, col as i8)] = tile;
                    }
                    col += 1;
                }

                if col > BOARD_SIZE as usize {
                    break;
                }
            }

            if col != BOARD_SIZE as usize {
                bail!("Row {row} of board notation {placements:?} must describe exactly {BOARD_SIZE} tiles");
            }
        }

        Ok(board)
    }

    /// Generates the board notation for this board.
    ///
    /// # Example
    /// ```
    /// # use amazons::{Board, NOTATION_STARTPOS};
    /// assert_eq!(Board::new().to_notation(), NOTATION_STARTPOS);
    /// ```
    pub fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(Square::COUNT + BOARD_SIZE as usize);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                notation.push('/');
            }

            let mut empties = 0;
            for col in 0..BOARD_SIZE {
                let tile = self[Square::new(row, col)];
                if tile.is_empty() {
                    empties += 1;
                    continue;
                }

                if empties > 0 {
                    notation += &empties.to_string();
                    empties = 0;
                }
                notation.push(tile.char());
            }

            if empties > 0 {
                notation += &empties.to_string();
            }
        }

        notation
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Square> for Board {
    type Output = Tile;
    /// # Panics
    /// If `square` is not on the board.
    #[inline(always)]
    fn index(&self, square: Square) -> &Self::Output {
        &self.tiles[square.index()]
    }
}

impl IndexMut<Square> for Board {
    /// # Panics
    /// If `square` is not on the board.
    #[inline(always)]
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self.tiles[square.index()]
    }
}

impl FromStr for Board {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board = String::with_capacity(256);

        board += "   ";
        for col in 0..BOARD_SIZE {
            board += &format!(" {col}");
        }
        board += "\n  +";
        for _ in 0..BOARD_SIZE {
            board += "--";
        }
        board += "\n";

        for row in 0..BOARD_SIZE {
            board += &format!("{row} |");
            for col in 0..BOARD_SIZE {
                board += &format!(" {}", self[Square::new(row, col)]);
            }
            board += "\n";
        }

        write!(f, "{}", board.trim_end())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NOTATION_STARTPOS;

    #[test]
    fn test_startpos_notation() {
        let board: Board = NOTATION_STARTPOS.parse().unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_notation(), NOTATION_STARTPOS);
    }

    #[test]
    fn test_notation_with_barriers() {
        let notation = "bx6/xx6/8/3x4/8/8/8/7w";
        let board: Board = notation.parse().unwrap();
        assert_eq!(board[Square::new(0, 1)], Tile::Barrier);
        assert_eq!(board[Square::new(3, 3)], Tile::Barrier);
        assert_eq!(board[Square::new(7, 7)], Tile::White);
        assert_eq!(board.count(Tile::Barrier), 4);
        assert_eq!(board.to_notation(), notation);
    }

    #[test]
    fn test_bad_notation() {
        // Too few rows
        assert!(Board::from_notation("8/8/8").is_err());
        // Row too long
        assert!(Board::from_notation("9/8/8/8/8/8/8/8").is_err());
        assert!(Board::from_notation("b8/8/8/8/8/8/8/8").is_err());
        // Row too short
        assert!(Board::from_notation("7/8/8/8/8/8/8/8").is_err());
        // Unknown tile
        assert!(Board::from_notation("q7/8/8/8/8/8/8/8").is_err());
    }

    #[test]
    fn test_path_is_clear() {
        let board: Board = "8/8/8/3x4/8/8/8/8".parse().unwrap();
        let origin = Square::new(3, 0);

        // Blocked by the barrier at (3, 3)
        assert!(!board.path_is_clear(origin, Square::new(3, 5)));
        // The endpoint itself is not inspected
        assert!(board.path_is_clear(origin, Square::new(3, 3)));
        // Adjacent and zero-length paths have no intermediate squares
        assert!(board.path_is_clear(origin, Square::new(3, 1)));
        assert!(board.path_is_clear(origin, origin));
        // Diagonal through (4, 1) and (5, 2)
        assert!(board.path_is_clear(origin, Square::new(6, 3)));
    }

    #[test]
    fn test_ray_stops_at_obstacles() {
        let board = Board::new();
        // From (0, 2) heading right: (0, 3), (0, 4), then (0, 5) is occupied.
        let squares = board
            .ray(Square::new(0, 2), Direction::RIGHT)
            .collect::<Vec<_>>();
        assert_eq!(squares, vec![Square::new(0, 3), Square::new(0, 4)]);

        // Heading up from row 0 immediately leaves the board.
        assert_eq!(board.ray(Square::new(0, 2), Direction::UP).count(), 0);
    }

    #[test]
    fn test_display_has_all_rows() {
        let display = Board::new().to_string();
        assert_eq!(display.lines().count(), 2 + BOARD_SIZE as usize);
        assert!(display.contains("0 | . . B . . B . ."));
        assert!(display.contains("7 | . . W . . W . ."));
    }
}
