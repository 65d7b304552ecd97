/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::{Board, Score, Side};

/// Scores `board` from `side`'s perspective; see [`Evaluator::eval_for`].
///
/// # Example
/// ```
/// # use amazons::{evaluate, init_board, Score, Side};
/// // The starting position is symmetric.
/// assert_eq!(evaluate(&init_board(), Side::Black), Score::DRAW);
/// ```
#[inline(always)]
pub fn evaluate(board: &Board, side: Side) -> Score {
    Evaluator::new(board).eval_for(side)
}

/// Encapsulates the logic of scoring a position by mobility.
///
/// Mobility is the number of legal moves (destination and arrow combinations) a side has.
/// A position is better for a side the more mobility it has relative to its opponent.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    /// Number of legal moves available to each side, indexed by [`Side`].
    mobility: [usize; Side::COUNT],
}

impl Evaluator {
    /// Construct a new [`Evaluator`], counting the mobility of both sides.
    #[inline(always)]
    pub fn new(board: &Board) -> Self {
        let mut mobility = [0; Side::COUNT];
        for side in Side::all() {
            mobility[side as usize] = board.generate_valid_moves(side).len();
        }

        Self { mobility }
    }

    /// Number of legal moves `side` has.
    #[inline(always)]
    pub const fn mobility(&self, side: Side) -> usize {
        self.mobility[side as usize]
    }

    /// Evaluate the position from `side`'s perspective.
    ///
    /// If `side` cannot move, this is [`Score::LOSS`].
    /// Otherwise, if the opponent cannot move, this is [`Score::WIN`].
    /// Otherwise it is the difference between the two sides' mobility.
    #[inline(always)]
    pub fn eval_for(&self, side: Side) -> Score {
        let ours = self.mobility(side);
        let theirs = self.mobility(side.opponent());

        if ours == 0 {
            Score::LOSS
        } else if theirs == 0 {
            Score::WIN
        } else {
            Score::new(ours as i32 - theirs as i32)
        }
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for side in Side::all() {
            writeln!(f, "{:<6} mobility: {}", side.name(), self.mobility(side))?;
        }

        write!(f, "Black relative: {}", self.eval_for(Side::Black))
    }
}
