/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::time::Instant;

use log::{debug, trace};

use crate::{evaluate, Board, Move, Score, Side};

/// Depth searched when no other depth is configured: one ply for the mover, one for the reply.
pub const DEFAULT_DEPTH: usize = 2;

/// Picks the move `side` should play on `board`, searching at [`DEFAULT_DEPTH`].
///
/// Returns [`Move::NONE`] if `side` has no legal moves.
///
/// # Example
/// ```
/// # use amazons::{get_best_move, Board, Move, Side};
/// let board: Board = "bx6/xx6/8/8/8/8/8/7w".parse().unwrap();
/// assert_eq!(get_best_move(&board, Side::Black), Move::NONE);
/// ```
#[inline(always)]
pub fn get_best_move(board: &Board, side: Side) -> Move {
    Search::new(board, side, SearchConfig::default())
        .start()
        .bestmove
        .unwrap_or(Move::NONE)
}

/// The result of a search, containing the best move found, score, and total nodes searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Number of nodes searched.
    pub nodes: u64,

    /// Best move found during the search, if the side to move had any.
    pub bestmove: Option<Move>,

    /// Evaluation of the position after `bestmove` is made, from the mover's perspective.
    pub score: Score,
}

impl Default for SearchResult {
    /// A default search result should initialize to a *very bad* value,
    /// since there isn't a move to play.
    #[inline(always)]
    fn default() -> Self {
        Self {
            nodes: 0,
            bestmove: None,
            score: -Score::INF,
        }
    }
}

/// Configuration variables for executing a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of plies to search, including the root move.
    ///
    /// A depth of `0` is treated as `1`, since the root move is always searched.
    pub depth: usize,
}

impl SearchConfig {
    /// A config that searches `depth` plies.
    #[inline(always)]
    pub const fn with_depth(depth: usize) -> Self {
        Self { depth }
    }
}

impl Default for SearchConfig {
    #[inline(always)]
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

/// Executes a fixed-depth search for one side on a given board.
#[derive(Debug)]
pub struct Search<'a> {
    /// The board to search on.
    ///
    /// This board will be copied when moves are applied to it.
    board: &'a Board,

    /// The side whose move is being chosen.
    side: Side,

    /// Number of nodes visited so far.
    nodes: u64,

    /// Configuration variables for this instance of the search.
    config: SearchConfig,
}

impl<'a> Search<'a> {
    /// Construct a new [`Search`] instance to execute on the provided [`Board`].
    #[inline(always)]
    pub fn new(board: &'a Board, side: Side, config: SearchConfig) -> Self {
        Self {
            board,
            side,
            nodes: 0,
            config,
        }
    }

    /// Start the search, returning its results.
    ///
    /// Every root move is searched with a full window; there is no pruning at the root,
    /// so the first move (in generation order) with the strictly highest score is chosen.
    pub fn start(mut self) -> SearchResult {
        let starttime = Instant::now();
        let mut res = SearchResult::default();

        let moves = self.board.generate_valid_moves(self.side);
        if moves.is_empty() {
            res.score = Score::LOSS;
            debug!("{} has no legal moves to search", self.side);
            return res;
        }

        let depth = self.config.depth.max(1);
        let mut alpha = Score::ALPHA;
        let beta = Score::BETA;

        for mv in moves {
            let new_board = self.board.with_move_made(mv, self.side);

            // Remember; the child is scored from the opponent's perspective, so we need to negate it.
            let score = -self.negamax(&new_board, depth - 1, -beta, -alpha, self.side.opponent());
            trace!("root move {mv} scored {score}");

            if score > res.score {
                res.score = score;
                res.bestmove = Some(mv);
            }

            alpha = alpha.max(res.score);
        }

        res.nodes = self.nodes;
        debug!(
            "{} searched depth {depth}: bestmove {} score {} nodes {} time {}ms",
            self.side,
            res.bestmove.unwrap_or(Move::NONE),
            res.score,
            res.nodes,
            starttime.elapsed().as_millis()
        );

        res
    }

    /// Primary location of search logic.
    ///
    /// Uses the [negamax](https://www.chessprogramming.org/Negamax) algorithm with alpha-beta pruning.
    /// The returned score is always from `side`'s perspective.
    fn negamax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        beta: Score,
        side: Side,
    ) -> Score {
        self.nodes += 1;

        // If we've reached a leaf node, evaluate the position
        if depth == 0 {
            return evaluate(board, side);
        }

        let moves = board.generate_valid_moves(side);

        // Having nothing to play is a loss, regardless of remaining depth.
        if moves.is_empty() {
            return Score::LOSS;
        }

        // Start with a *really bad* initial score
        let mut best = -Score::INF;

        for mv in moves {
            // Copy-make the new position and recurse
            let new_board = board.with_move_made(mv, side);
            let score = -self.negamax(&new_board, depth - 1, -beta, -alpha, side.opponent());

            best = best.max(score);
            alpha = alpha.max(best);

            // Fail high; the opponent already has a better alternative earlier in the tree.
            if alpha >= beta {
                break;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(notation: &str, side: Side, depth: usize) -> SearchResult {
        let board: Board = notation.parse().unwrap();
        Search::new(&board, side, SearchConfig::with_depth(depth)).start()
    }

    #[test]
    fn test_finds_trapping_move() {
        // White's lone piece can only escape through (6, 7); Black can seal it with a diagonal shot.
        let fen = "xxxxxxxx/xxxxxxxx/xxxxxxxx/b7/8/8/xxxxxxx1/xxxxxxxw";

        for depth in [2, 3] {
            let res = search(fen, Side::Black, depth);
            assert_eq!(res.bestmove, Some(Move::from_coords(3, 0, 3, 4, 6, 7)));
            assert_eq!(res.score, Score::WIN);
        }
    }

    #[test]
    fn test_escaping_side() {
        let res = search(
            "xxxxxxxx/xxxxxxxx/xxxxxxxx/b7/8/8/xxxxxxx1/xxxxxxxw",
            Side::White,
            DEFAULT_DEPTH,
        );
        assert_eq!(res.bestmove, Some(Move::from_coords(7, 7, 3, 7, 3, 2)));
        assert_eq!(res.score, Score::new(-51));
    }

    #[test]
    fn test_no_moves() {
        let res = search("bx6/xx6/8/8/8/8/8/7w", Side::Black, DEFAULT_DEPTH);
        assert!(res.bestmove.is_none());
        assert_eq!(res.score, Score::LOSS);
        assert_eq!(res.nodes, 0);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        // At depth 1, each root move is scored by the opponent's evaluation of the resulting position.
        let board: Board = "xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx"
            .parse()
            .unwrap();
        let res = Search::new(&board, Side::Black, SearchConfig::with_depth(1)).start();

        let expected = board
            .generate_valid_moves(Side::Black)
            .into_iter()
            .map(|mv| -evaluate(&board.with_move_made(mv, Side::Black), Side::White))
            .max()
            .unwrap();

        assert_eq!(res.score, expected);
        assert_eq!(res.nodes, board.generate_valid_moves(Side::Black).len() as u64);
    }

    #[test]
    fn test_depth_zero_is_clamped() {
        let fen = "xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx";
        assert_eq!(search(fen, Side::White, 0), search(fen, Side::White, 1));
    }

    #[test]
    fn test_get_best_move_uses_default_depth() {
        let board: Board = "xxxxxxxx/xxxxxxxx/xxxxxxxx/b6w/8/8/xxxxxxxx/xxxxxxxx"
            .parse()
            .unwrap();
        let res = Search::new(&board, Side::Black, SearchConfig::default()).start();

        assert_eq!(get_best_move(&board, Side::Black), res.bestmove.unwrap());
        assert_eq!(res.bestmove, Some(Move::from_coords(3, 0, 3, 5, 4, 6)));
        assert_eq!(res.score, Score::new(26));
    }
}
