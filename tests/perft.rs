/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use amazons::{perft_generic, Game};

fn test_perft_notation_nodes(depth: usize, notation: &str, expected: u64) {
    let game = Game::from_notation(notation).unwrap();
    let res = perft_generic::<true, false>(game.board(), game.side_to_move(), depth);
    assert_eq!(res, expected, "PERFT({depth}) failed on {notation}");

    // Bulk counting must not change the result
    if depth <= 2 {
        let res = perft_generic::<false, false>(game.board(), game.side_to_move(), depth);
        assert_eq!(res, expected, "PERFT({depth}) without bulk counting failed on {notation}");
    }
}

#[cfg(test)]
mod startpos_perft {
    use crate::test_perft_notation_nodes;

    const STARTPOS: &str = "2b2b2/8/b6b/8/8/w6w/8/2w2w2 b";

    #[test]
    fn test_startpos_perft_0() {
        test_perft_notation_nodes(0, STARTPOS, 1);
    }

    #[test]
    fn test_startpos_perft_1() {
        test_perft_notation_nodes(1, STARTPOS, 1232);
    }

    #[test]
    fn test_startpos_perft_1_white() {
        test_perft_notation_nodes(1, "2b2b2/8/b6b/8/8/w6w/8/2w2w2 w", 1232);
    }

    #[test]
    fn test_startpos_perft_2() {
        test_perft_notation_nodes(2, STARTPOS, 1331198);
    }

    #[test]
    fn test_after_first_move_perft_1() {
        // Black played 0 2 0 3 0 4
        test_perft_notation_nodes(1, "3bxb2/8/b6b/8/8/w6w/8/2w2w2 w", 1247);
    }
}

/// Positions where most of the board has been walled off.
#[cfg(test)]
mod corridor_perft {
    use crate::test_perft_notation_nodes;

    const OPEN_CORRIDOR: &str = "xxxxxxxx/xxxxxxxx/xxxxxxxx/b6w/8/8/xxxxxxxx/xxxxxxxx b";
    const WALLED_CORRIDOR: &str = "xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx b";

    #[test]
    fn test_open_corridor_perft_1() {
        test_perft_notation_nodes(1, OPEN_CORRIDOR, 118);
    }

    #[test]
    fn test_open_corridor_perft_2() {
        test_perft_notation_nodes(2, OPEN_CORRIDOR, 9479);
    }

    #[test]
    fn test_open_corridor_perft_3() {
        test_perft_notation_nodes(3, OPEN_CORRIDOR, 788276);
    }

    #[test]
    fn test_walled_corridor_perft_1() {
        test_perft_notation_nodes(1, WALLED_CORRIDOR, 57);
    }

    #[test]
    fn test_walled_corridor_perft_2() {
        test_perft_notation_nodes(2, WALLED_CORRIDOR, 2953);
    }

    #[test]
    fn test_walled_corridor_perft_3() {
        test_perft_notation_nodes(3, WALLED_CORRIDOR, 174110);
    }
}

#[cfg(test)]
mod midgame_perft {
    use crate::test_perft_notation_nodes;

    #[test]
    fn test_midgame_perft_1() {
        let notation = "2x2b2/8/2xx3w/x3bbw1/1x1x4/w3x3/4x3/x4bxw b";
        test_perft_notation_nodes(1, notation, 493);
        test_perft_notation_nodes(2, notation, 175417);
    }

    #[test]
    fn test_midgame_perft_2() {
        let notation = "2x4b/5xx1/2xx3w/x4xw1/1xxxb2x/1x2x1wx/2b1x3/xxxxwbx1 b";
        test_perft_notation_nodes(1, notation, 149);
        test_perft_notation_nodes(2, notation, 17339);
    }

    #[test]
    fn test_midgame_perft_3() {
        let notation = "2xb4/2x1xxx1/2xxx1xw/x2bxxw1/1xxxxx1x/1xx1x1wx/2b1x1xx/xxxxwbx1 b";
        test_perft_notation_nodes(1, notation, 53);
        test_perft_notation_nodes(2, notation, 1671);
        test_perft_notation_nodes(3, notation, 71648);
    }

    #[test]
    fn test_no_moves_perft() {
        test_perft_notation_nodes(1, "bx6/xx6/8/8/8/8/8/7w b", 0);
        test_perft_notation_nodes(2, "bx6/xx6/8/8/8/8/8/7w b", 0);
    }
}
