/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

use super::{Board, Direction, Move, MoveList, Side, Square, Tile};

/// The reason a [`Move`] was rejected by [`Board::check_move`].
///
/// Variants are listed in the order the checks are performed; only the first failure is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// One of the three squares is outside the board.
    #[error("square {square:?} is not on the board")]
    OffBoard { square: Square },

    /// The source square does not hold one of the mover's pieces.
    #[error("{side} has no piece on {square:?}")]
    NotYourPiece { side: Side, square: Square },

    /// The destination square is occupied.
    #[error("destination {square:?} is occupied")]
    DestinationOccupied { square: Square },

    /// Source and destination do not share a row, column, or diagonal.
    #[error("{from:?} -> {to:?} is not a straight queen move")]
    NotAQueenLine { from: Square, to: Square },

    /// Something stands between source and destination.
    #[error("the path from {from:?} to {to:?} is blocked")]
    BlockedPath { from: Square, to: Square },

    /// Destination and arrow do not share a row, column, or diagonal.
    #[error("the arrow shot {from:?} -> {to:?} is not a straight queen line")]
    ArrowNotAQueenLine { from: Square, to: Square },

    /// The arrow square is occupied once the piece has moved.
    #[error("arrow square {square:?} is occupied")]
    ArrowOccupied { square: Square },

    /// Something stands between the destination and the arrow square once the piece has moved.
    #[error("the arrow's path from {from:?} to {to:?} is blocked")]
    ArrowBlocked { from: Square, to: Square },
}

impl Board {
    /// Checks whether `side` may legally play `mv` on this board, reporting the first rule it breaks.
    ///
    /// The board is never modified; the piece's relocation is simulated on a copy before the arrow is checked,
    /// so the arrow may pass over (or land on) the square the piece just left.
    pub fn check_move(&self, mv: Move, side: Side) -> Result<(), IllegalMove> {
        for square in [mv.from, mv.to, mv.arrow] {
            if !square.is_on_board() {
                return Err(IllegalMove::OffBoard { square });
            }
        }

        if self[mv.from] != side.piece() {
            return Err(IllegalMove::NotYourPiece {
                side,
                square: mv.from,
            });
        }

        if !self[mv.to].is_empty() {
            return Err(IllegalMove::DestinationOccupied { square: mv.to });
        }

        // `path_is_clear` only walks unit steps, so anything off a queen line must be rejected first.
        if !mv.from.is_queen_line_to(mv.to) {
            return Err(IllegalMove::NotAQueenLine {
                from: mv.from,
                to: mv.to,
            });
        }

        if !self.path_is_clear(mv.from, mv.to) {
            return Err(IllegalMove::BlockedPath {
                from: mv.from,
                to: mv.to,
            });
        }

        if !mv.to.is_queen_line_to(mv.arrow) {
            return Err(IllegalMove::ArrowNotAQueenLine {
                from: mv.to,
                to: mv.arrow,
            });
        }

        let mut moved = *self;
        moved[mv.from] = Tile::Empty;
        moved[mv.to] = side.piece();

        if !moved[mv.arrow].is_empty() {
            return Err(IllegalMove::ArrowOccupied { square: mv.arrow });
        }

        if !moved.path_is_clear(mv.to, mv.arrow) {
            return Err(IllegalMove::ArrowBlocked {
                from: mv.to,
                to: mv.arrow,
            });
        }

        Ok(())
    }

    /// Returns `true` if `side` may legally play `mv` on this board.
    ///
    /// # Example
    /// ```
    /// # use amazons::{Board, Move, Side};
    /// let board = Board::new();
    /// // Black slides (2, 0) -> (4, 2) and shoots back along the diagonal onto (2, 0).
    /// assert!(board.is_move_valid(Move::from_coords(2, 0, 4, 2, 2, 0), Side::Black));
    /// // ...but White cannot move Black's pieces.
    /// assert!(!board.is_move_valid(Move::from_coords(2, 0, 4, 2, 2, 0), Side::White));
    /// ```
    #[inline(always)]
    pub fn is_move_valid(&self, mv: Move, side: Side) -> bool {
        self.check_move(mv, side).is_ok()
    }

    /// Plays `mv` for `side`: empties the source, places the piece on the destination, and drops a barrier on the arrow square.
    ///
    /// No legality checks are performed. Callers must validate `mv` first.
    ///
    /// # Panics
    /// If any square of `mv` is off the board.
    #[inline(always)]
    pub fn apply_move(&mut self, mv: Move, side: Side) {
        self[mv.from] = Tile::Empty;
        self[mv.to] = side.piece();
        self[mv.arrow] = Tile::Barrier;
    }

    /// Copy-make: returns a copy of this board with `mv` applied for `side`.
    #[inline(always)]
    pub fn with_move_made(&self, mv: Move, side: Side) -> Self {
        let mut board = *self;
        board.apply_move(mv, side);
        board
    }

    /// Enumerates every legal move for `side`.
    ///
    /// Moves are produced piece by piece in row-major order.
    /// For each piece, destinations are walked direction by direction (in [`Direction::ALL`] order) with increasing distance,
    /// and for each destination, arrow squares are walked the same way on a board where the piece has already relocated.
    ///
    /// An empty list means `side` has lost.
    ///
    /// # Example
    /// ```
    /// # use amazons::{Board, Move, Side};
    /// let moves = Board::new().generate_valid_moves(Side::Black);
    /// assert_eq!(moves.len(), 1232);
    /// assert_eq!(moves[0], Move::from_coords(0, 2, 0, 3, 0, 4));
    /// ```
    pub fn generate_valid_moves(&self, side: Side) -> MoveList {
        let mut moves = MoveList::with_capacity(1024);

        for from in self.pieces(side) {
            for direction in Direction::ALL {
                for to in self.ray(from, direction) {
                    let mut moved = *self;
                    moved[from] = Tile::Empty;
                    moved[to] = side.piece();

                    for arrow_direction in Direction::ALL {
                        moves.extend(
                            moved
                                .ray(to, arrow_direction)
                                .map(|arrow| Move::new(from, to, arrow)),
                        );
                    }
                }
            }
        }

        moves
    }

    /// Returns `true` if `side` has at least one legal move.
    ///
    /// This short-circuits on the first piece that can reach an empty square having an empty neighbour
    /// once the piece has left its origin. Only arrows at distance one are probed; that suffices because
    /// the neighbour one step back along the path just travelled is always empty.
    pub fn has_valid_moves(&self, side: Side) -> bool {
        self.pieces(side).any(|from| {
            let mut vacated = *self;
            vacated[from] = Tile::Empty;

            Direction::ALL.into_iter().any(|direction| {
                self.ray(from, direction).any(|to| {
                    Direction::ALL
                        .into_iter()
                        .any(|arrow_direction| vacated.is_empty_at(to.offset(arrow_direction, 1)))
                })
            })
        })
    }
}
