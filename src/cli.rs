/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{path::PathBuf, str::FromStr};

use crate::{Side, Square, Tile};
use clap::{builder::PossibleValue, Parser, ValueEnum};

/// A command to be sent to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<ENGINE COMMAND>")
)]
pub enum EngineCommand {
    /// Run a benchmark with the provided parameters.
    Bench {
        /// If set, the benchmarking results will be printed in a well-formatted table.
        #[arg(short, long, default_value = "false")]
        pretty: bool,

        /// Override the default benchmark depth.
        #[arg(short, long, required = false)]
        depth: Option<usize>,
    },

    /// Print a visual representation of the current board state.
    #[command(alias = "d")]
    Display,

    /// Print an evaluation of the current position, from the perspective of the side to move.
    Eval {
        /// If set, the mobility of each side will be printed as well.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Quit the engine.
    #[command(alias = "quit")]
    Exit,

    /// Flips the side-to-move without moving a piece.
    Flip,

    /// Search the current position and print the best move for the side to move.
    Go {
        /// Number of plies to search. Also becomes the depth of all future searches.
        #[arg(short, long, required = false)]
        depth: Option<usize>,

        /// If set, the best move found will be played.
        #[arg(short, long, default_value = "false")]
        play: bool,
    },

    /// Load a game from a save file.
    Load {
        /// Defaults to `amazons.sav` in the working directory.
        path: Option<PathBuf>,
    },

    /// Shows all legal moves in the current position, or for a specific piece.
    Moves { square: Option<Square> },

    /// Start a new game from the starting position, with Black to move.
    New {
        /// Side played automatically by the engine. Keeps the current setting if omitted.
        #[arg(short, long)]
        ai: Option<AiSide>,
    },

    /// Print the game notation of the current position.
    #[command(alias = "fen")]
    Notation,

    /// Performs a perft on the current position at the supplied depth, printing total node count.
    Perft { depth: usize },

    /// Place a tile on the provided square, ignoring all game rules.
    Place { tile: Tile, square: Square },

    /// Play a move for the side to move, if it is legal.
    ///
    /// Moves are written as `FromRow FromCol ToRow ToCol ArrowRow ArrowCol`,
    /// separated by spaces or commas.
    #[command(alias = "move")]
    Play {
        #[arg(required = true, num_args = 1..)]
        coords: Vec<String>,
    },

    /// Save the current game.
    Save {
        /// Defaults to `amazons.sav` in the working directory.
        path: Option<PathBuf>,
    },

    /// Performs a split perft on the current position at the supplied depth.
    #[command(alias = "sperft")]
    Splitperft { depth: usize },

    /// Clear the provided square, ignoring all game rules.
    Take { square: Square },

    /// Take back the most recent move.
    ///
    /// If the engine then has the move, its move is taken back as well.
    Undo,
}

impl FromStr for EngineCommand {
    type Err = clap::Error;
    /// Attempt to parse an [`EngineCommand`] from a string.
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

/// Which side, if any, the engine plays automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiSide {
    Black,
    White,
    None,
}

impl AiSide {
    /// The [`Side`] the engine controls, if any.
    #[inline(always)]
    pub const fn side(&self) -> Option<Side> {
        match self {
            Self::Black => Some(Side::Black),
            Self::White => Some(Side::White),
            Self::None => None,
        }
    }
}

impl ValueEnum for AiSide {
    fn value_variants<'a>() -> &'a [Self] {
        &[AiSide::Black, AiSide::White, AiSide::None]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            AiSide::Black => PossibleValue::new("black").alias("b"),
            AiSide::White => PossibleValue::new("white").alias("w"),
            AiSide::None => PossibleValue::new("none").aliases(["off", "human"]),
        };

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> EngineCommand {
        s.parse().unwrap()
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("d"), EngineCommand::Display);
        assert_eq!(parse("display"), EngineCommand::Display);
        assert_eq!(parse("notation"), EngineCommand::Notation);
        assert_eq!(parse("undo"), EngineCommand::Undo);
        assert_eq!(parse("exit"), EngineCommand::Exit);
        assert_eq!(parse("perft 2"), EngineCommand::Perft { depth: 2 });
        assert_eq!(parse("sperft 1"), EngineCommand::Splitperft { depth: 1 });
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            parse("go --depth 3 --play"),
            EngineCommand::Go {
                depth: Some(3),
                play: true
            }
        );
        assert_eq!(
            parse("go"),
            EngineCommand::Go {
                depth: None,
                play: false
            }
        );
        assert_eq!(parse("eval -p"), EngineCommand::Eval { pretty: true });
        assert_eq!(
            parse("bench -d 1"),
            EngineCommand::Bench {
                pretty: false,
                depth: Some(1)
            }
        );
    }

    #[test]
    fn test_ai_side() {
        assert_eq!(
            parse("new --ai black"),
            EngineCommand::New {
                ai: Some(AiSide::Black)
            }
        );
        assert_eq!(
            parse("new -a off"),
            EngineCommand::New {
                ai: Some(AiSide::None)
            }
        );
        assert_eq!(parse("new"), EngineCommand::New { ai: None });
        assert!("new --ai red".parse::<EngineCommand>().is_err());

        assert_eq!(AiSide::White.side(), Some(Side::White));
        assert_eq!(AiSide::None.side(), None);
    }

    #[test]
    fn test_square_and_tile_arguments() {
        assert_eq!(
            parse("place x 3,4"),
            EngineCommand::Place {
                tile: Tile::Barrier,
                square: Square::new(3, 4)
            }
        );
        assert_eq!(
            parse("moves 0,2"),
            EngineCommand::Moves {
                square: Some(Square::new(0, 2))
            }
        );
        assert!("take 8,0".parse::<EngineCommand>().is_err());
        assert!("place q 0,0".parse::<EngineCommand>().is_err());
    }

    #[test]
    fn test_play_collects_coordinates() {
        assert_eq!(
            parse("play 0 2 3 2 0 2"),
            EngineCommand::Play {
                coords: ["0", "2", "3", "2", "0", "2"].map(String::from).to_vec()
            }
        );
        assert_eq!(
            parse("play 0,2,3,2,0,2"),
            EngineCommand::Play {
                coords: vec![String::from("0,2,3,2,0,2")]
            }
        );
        assert!("play".parse::<EngineCommand>().is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert!("castle kingside".parse::<EngineCommand>().is_err());
    }
}
