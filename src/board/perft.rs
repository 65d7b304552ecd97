/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::{Board, Side};

/// Perform a perft at the specified depth, collecting only data about the number of possible positions (nodes).
///
/// This performs bulk counting, meaning that, at depth 1, it returns the number of available moves,
/// rather than making them, recursing again, and returning 1 for each terminal case.
/// If you do *not* want to use bulk counting, use [`perft_generic`].
#[inline(always)]
pub fn perft(board: &Board, side: Side, depth: usize) -> u64 {
    perft_generic::<true, false>(board, side, depth)
}

/// Perform a splitperft at the specified depth, printing the number of nodes reachable after each move available at the root node.
#[inline(always)]
pub fn splitperft(board: &Board, side: Side, depth: usize) -> u64 {
    perft_generic::<true, true>(board, side, depth)
}

/// Generic version of `perft` that allows you to specify whether to perform bulk counting and splitperft.
///
/// If `BULK` is set to `true`, this will perform bulk counting.
/// If `SPLIT` is set to `true`, this will perform a splitperft.
pub fn perft_generic<const BULK: bool, const SPLIT: bool>(
    board: &Board,
    side: Side,
    depth: usize,
) -> u64 {
    // Bulk counting; no need to recurse again just to apply a singular move and return 1.
    if BULK && !SPLIT && depth == 1 {
        return board.generate_valid_moves(side).len() as u64;
    }
    // Recursion limit; return 1, since we're fathoming this node.
    else if depth == 0 {
        return 1;
    }

    board
        .generate_valid_moves(side)
        .into_iter()
        .fold(0, |nodes, mv| {
            let new_nodes =
                perft_generic::<BULK, false>(&board.with_move_made(mv, side), side.opponent(), depth - 1);

            if SPLIT {
                println!("{mv}\t{new_nodes}");
            }

            nodes + new_nodes
        })
}

/// Runs a perft and prints the total node count, along with timing information.
pub fn print_perft<const SPLIT: bool>(board: &Board, side: Side, depth: usize) -> u64 {
    let now = std::time::Instant::now();
    let nodes = if SPLIT {
        splitperft(board, side, depth)
    } else {
        perft(board, side, depth)
    };
    let elapsed = now.elapsed();

    let nps = nodes as f32 / elapsed.as_secs_f32();
    let m_nps = nps / 1_000_000.0;
    println!("\n{nodes} nodes in {elapsed:?} ({m_nps:.1} Mnps)");

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_bulk_matches_plain() {
        let board: Board = "xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx"
            .parse()
            .unwrap();

        for depth in 0..=2 {
            assert_eq!(
                perft_generic::<true, false>(&board, Side::Black, depth),
                perft_generic::<false, false>(&board, Side::Black, depth),
            );
        }
    }

    #[test]
    fn test_perft_terminal_position() {
        let board: Board = "bx6/xx6/8/8/8/8/8/7w".parse().unwrap();
        assert_eq!(perft(&board, Side::Black, 1), 0);
        assert_eq!(perft(&board, Side::Black, 3), 0);
        assert_eq!(perft(&board, Side::Black, 0), 1);
    }
}
