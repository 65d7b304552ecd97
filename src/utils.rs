/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Board notation for the starting position.
pub const NOTATION_STARTPOS: &str = "2b2b2/8/b6b/8/8/w6w/8/2w2w2";

/// File used by `save` and `load` when no path is given.
pub const DEFAULT_SAVE_FILE: &str = "amazons.sav";

/// Positions (in game notation, with side to move) used by the `bench` command.
pub const BENCHMARK_POSITIONS: [&str; 5] = [
    "2b2b2/8/b6b/8/8/w6w/8/2w2w2 b",
    "2x2b2/8/2xx3w/x3bbw1/1x1x4/w3x3/4x3/x4bxw b",
    "2x4b/5xx1/2xx3w/x4xw1/1xxxb2x/1x2x1wx/2b1x3/xxxxwbx1 b",
    "2xb4/2x1xxx1/2xxx1xw/x2bxxw1/1xxxxx1x/1xx1x1wx/2b1x1xx/xxxxwbx1 w",
    "xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx b",
];
