/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Rules of the game: the board, pieces, moves, and move generation.
mod board;

/// Commands that can be sent to the engine.
mod cli;

/// Code related to the engine's functionality, such as user input handling.
mod engine;

/// Evaluation of positions by mobility.
mod eval;

/// A game in progress, with history and save files.
mod game;

/// Numerical scores of positions.
mod score;

/// Main engine logic; all search related code.
mod search;

/// Misc utility functions, constants, and types.
mod utils;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use eval::*;
pub use game::*;
pub use score::*;
pub use search::*;
pub use utils::*;
