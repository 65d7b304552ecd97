/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Move legality, application, and enumeration.
mod movegen;

/// The [`Move`] type and its text format.
mod moves;

/// Perft node counting for testing move generation.
mod perft;

/// The [`Board`] grid and its notation.
mod position;

/// Players and tile states.
mod side;

/// Coordinates and directions.
mod square;

pub use movegen::*;
pub use moves::*;
pub use perft::*;
pub use position::*;
pub use side::*;
pub use square::*;
