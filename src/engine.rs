/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    path::Path,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use log::info;

use crate::{
    print_perft, EngineCommand, Evaluator, Game, Move, Search, SearchConfig, Side, Tile,
    BENCHMARK_POSITIONS, DEFAULT_SAVE_FILE,
};

/// Default depth at which to run the benchmark searches.
const BENCH_DEPTH: usize = 2;

/// An interactive Amazons engine, driven by [`EngineCommand`]s.
#[derive(Debug)]
pub struct Engine {
    /// The game being played, as known to the engine.
    ///
    /// This is modified whenever moves are played or new positions are given,
    /// and is reset whenever the engine is told to start a new game.
    game: Game,

    /// The side the engine replies for automatically, if any.
    ai_side: Option<Side>,

    /// Parameters used for every search the engine runs outside of benchmarks.
    config: SearchConfig,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with [`Engine::run`].
    ///
    /// The engine plays White, leaving Black to the user.
    pub fn new() -> Self {
        let (sender, receiver) = channel();

        Self {
            game: Game::new(),
            ai_side: Some(Side::White),
            config: SearchConfig::default(),
            sender,
            receiver,
        }
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// The game currently being played.
    #[inline(always)]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// The side the engine replies for automatically, if any.
    #[inline(always)]
    pub const fn ai_side(&self) -> Option<Side> {
        self.ai_side
    }

    /// Sends an [`EngineCommand`] to the engine to be executed once [`Engine::run`] is called.
    pub fn send_command(&self, command: EngineCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Engine is no longer receiving commands")
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits on received commands.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.name());

        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                eprintln!("Input handler thread stopping after fatal error: {err}");
            }
        });

        // Loop on user input
        while let Ok(cmd) = self.receiver.recv() {
            if cmd == EngineCommand::Exit {
                break;
            }

            // Keep running, even on error
            if let Err(e) = self.execute(cmd) {
                eprintln!("Error: {e:#}");
            }
        }

        Ok(())
    }

    /// Execute a single [`EngineCommand`].
    ///
    /// [`EngineCommand::Exit`] is only meaningful to [`Engine::run`] and does nothing here.
    pub fn execute(&mut self, cmd: EngineCommand) -> Result<()> {
        match cmd {
            EngineCommand::Bench { depth, pretty } => self.bench(depth, pretty)?,

            EngineCommand::Display => println!("{}", self.game),

            EngineCommand::Eval { pretty } => self.eval(pretty),

            EngineCommand::Exit => {}

            EngineCommand::Flip => self.game.toggle_side_to_move(),

            EngineCommand::Go { depth, play } => self.go(depth, play)?,

            EngineCommand::Load { path } => {
                let path = path.as_deref().unwrap_or(Path::new(DEFAULT_SAVE_FILE));
                self.game = Game::load(path)?;
                println!("Loaded game from {}", path.display());
                self.after_move()?;
            }

            EngineCommand::Moves { square } => {
                // Get the legal moves
                let moves = if let Some(square) = square {
                    self.game.legal_moves_from(square)
                } else {
                    self.game.legal_moves()
                };

                // If there are none, print "(none)"
                let moves_string = if moves.is_empty() {
                    String::from("(none)")
                } else {
                    // Otherwise, join them by comma-space
                    moves
                        .into_iter()
                        .map(|mv| mv.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                println!("{moves_string}");
            }

            EngineCommand::New { ai } => {
                if let Some(ai) = ai {
                    self.ai_side = ai.side();
                }
                self.game = Game::new();
                self.reply_if_engine_to_move()?;
            }

            EngineCommand::Notation => println!("{}", self.game.to_notation()),

            EngineCommand::Perft { depth } => {
                print_perft::<false>(self.game.board(), self.game.side_to_move(), depth);
            }

            EngineCommand::Place { tile, square } => self.game.place(tile, square),

            EngineCommand::Play { coords } => {
                let mv: Move = coords.join(" ").parse()?;
                self.game.play(mv)?;
                self.after_move()?;
            }

            EngineCommand::Save { path } => {
                let path = path.as_deref().unwrap_or(Path::new(DEFAULT_SAVE_FILE));
                self.game.save(path)?;
                println!("Saved game to {}", path.display());
            }

            EngineCommand::Splitperft { depth } => {
                print_perft::<true>(self.game.board(), self.game.side_to_move(), depth);
            }

            EngineCommand::Take { square } => self.game.place(Tile::Empty, square),

            EngineCommand::Undo => self.undo()?,
        };

        Ok(())
    }

    /// Execute the `go` command, searching the current position and optionally playing the result.
    fn go(&mut self, depth: Option<usize>, play: bool) -> Result<()> {
        if let Some(depth) = depth {
            self.config = SearchConfig::with_depth(depth);
        }

        let res = Search::new(self.game.board(), self.game.side_to_move(), self.config).start();
        let Some(bestmove) = res.bestmove else {
            println!("bestmove (none) score {} nodes {}", res.score, res.nodes);
            return Ok(());
        };
        println!("bestmove {bestmove} score {} nodes {}", res.score, res.nodes);

        if play {
            self.game.play(bestmove)?;
            self.after_move()?;
        }

        Ok(())
    }

    /// Called whenever a move has been played or a game loaded: announces the end of the game, or lets the engine reply.
    fn after_move(&mut self) -> Result<()> {
        if self.announce_game_over() {
            return Ok(());
        }

        self.reply_if_engine_to_move()
    }

    /// If the engine plays the side to move, searches and plays its move.
    fn reply_if_engine_to_move(&mut self) -> Result<()> {
        let side = self.game.side_to_move();
        if self.ai_side != Some(side) || self.game.is_over() {
            return Ok(());
        }

        let res = Search::new(self.game.board(), side, self.config).start();
        let Some(mv) = res.bestmove else {
            bail!("{side} has legal moves but the search returned none");
        };

        self.game.play(mv)?;
        info!("Engine played {mv} for {side} (score {})", res.score);
        println!("{side} plays {mv}");

        self.announce_game_over();
        Ok(())
    }

    /// Prints the winner if the game is over, returning `true` if it was.
    fn announce_game_over(&self) -> bool {
        let Some(winner) = self.game.winner() else {
            return false;
        };

        println!(
            "{} has no legal moves. {winner} wins!",
            self.game.side_to_move()
        );
        true
    }

    /// Execute the `undo` command.
    ///
    /// Takes back moves until it is no longer the engine's turn, so the user can replay their own move.
    fn undo(&mut self) -> Result<()> {
        let Some(mv) = self.game.undo() else {
            bail!("There are no moves to undo");
        };
        println!("Took back {mv}");

        if self.ai_side == Some(self.game.side_to_move()) {
            if let Some(mv) = self.game.undo() {
                println!("Took back {mv}");
            }
        }

        Ok(())
    }

    /// Execute the `bench` command, running a benchmark of a fixed search on a series of positions and displaying the results.
    fn bench(&mut self, depth: Option<usize>, pretty: bool) -> Result<()> {
        // Set up the benchmarking config
        let config = SearchConfig::with_depth(depth.unwrap_or(BENCH_DEPTH));

        let benches = BENCHMARK_POSITIONS;
        let num_tests = benches.len();
        let mut nodes = 0;
        let starttime = Instant::now();

        // Run a fixed search on each position
        for (i, notation) in benches.into_iter().enumerate() {
            println!("Benchmark position {}/{}: {notation}", i + 1, num_tests);

            let game = Game::from_notation(notation)?;
            let res = Search::new(game.board(), game.side_to_move(), config).start();
            nodes += res.nodes;
        }

        // Compute results
        let elapsed = starttime.elapsed();
        let nps = (nodes as f32 / elapsed.as_secs_f32()) as u64;
        let m_nps = nodes as f32 / elapsed.as_secs_f32() / 1_000_000.0;
        let ms = elapsed.as_millis();

        if pretty {
            // Display the results in a nice table
            println!();
            println!("+--- Benchmark Complete ---+");
            println!("| time (ms)  : {ms:<12}|");
            println!("| nodes      : {nodes:<12}|");
            println!("| nps        : {nps:<12}|");
            println!("| Mnps       : {m_nps:<12.2}|");
            println!("+--------------------------+");
        } else {
            println!("{nodes} nodes {nps} nps");
        }

        Ok(())
    }

    /// Executes the `eval` command, printing an evaluation of the current position.
    fn eval(&self, pretty: bool) {
        let evaluator = Evaluator::new(self.game.board());
        if pretty {
            print!("{evaluator}\n\nScore: ");
        }

        println!("{}", evaluator.eval_for(self.game.side_to_move()));
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing engine commands")?;

        // For ctrl + d
        if 0 == bytes {
            // Send the Exit command and exit this function
            sender
                .send(EngineCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            bail!("Engine received input of 0 bytes and is quitting");
        }

        // Trim any leading/trailing whitespace
        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match buf.parse::<EngineCommand>() {
            // If successful, send the command to the engine
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            // If an invalid command was received, just print the error and continue running
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AiSide;

    fn exec(engine: &mut Engine, cmd: &str) -> Result<()> {
        engine.execute(cmd.parse().unwrap())
    }

    #[test]
    fn test_engine_replies_as_white() {
        let mut engine = Engine::new();
        assert_eq!(engine.ai_side(), Some(Side::White));
        engine.game =
            Game::from_notation("xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx b").unwrap();

        exec(&mut engine, "play 3 0 3 1 3 2").unwrap();

        // Black's move and White's reply
        assert_eq!(engine.game().moves().count(), 2);
        assert_eq!(engine.game().side_to_move(), Side::Black);

        // Both moves are taken back, so Black can try again
        exec(&mut engine, "undo").unwrap();
        assert_eq!(engine.game().moves().count(), 0);
        assert_eq!(engine.game().side_to_move(), Side::Black);
    }

    #[test]
    fn test_engine_opens_as_black() {
        let mut engine = Engine::new();
        engine.config = SearchConfig::with_depth(1);
        exec(&mut engine, "new --ai black").unwrap();

        assert_eq!(engine.ai_side(), Some(Side::Black));
        assert_eq!(engine.game().moves().count(), 1);
        assert_eq!(engine.game().side_to_move(), Side::White);
        assert_eq!(engine.game().board().count(Tile::Barrier), 1);
    }

    #[test]
    fn test_engine_replies_after_load() {
        let path = std::env::temp_dir().join(format!("amazons-engine-{}.sav", std::process::id()));
        Game::from_notation("xxxxxxxx/xxxxxxxx/xxxx1xxx/b2x3w/5x2/8/xxxxxxxx/xxxxxxxx w")
            .unwrap()
            .save(&path)
            .unwrap();

        let mut engine = Engine::new();
        let loaded = engine.execute(EngineCommand::Load {
            path: Some(path.clone()),
        });
        std::fs::remove_file(&path).unwrap();
        loaded.unwrap();

        // White is the engine's side, so it moves straight away
        assert_eq!(engine.game().moves().count(), 1);
        assert_eq!(engine.game().side_to_move(), Side::Black);
    }

    #[test]
    fn test_human_vs_human() {
        let mut engine = Engine::new();
        engine
            .execute(EngineCommand::New {
                ai: Some(AiSide::None),
            })
            .unwrap();

        exec(&mut engine, "play 0,2,3,2,0,2").unwrap();
        assert_eq!(engine.game().moves().count(), 1);
        assert_eq!(engine.game().side_to_move(), Side::White);

        exec(&mut engine, "undo").unwrap();
        assert_eq!(engine.game(), &Game::new());
        assert!(exec(&mut engine, "undo").is_err());
    }

    #[test]
    fn test_illegal_play_is_rejected() {
        let mut engine = Engine::new();
        assert!(exec(&mut engine, "play 5 0 4 0 3 0").is_err());
        assert!(exec(&mut engine, "play 0 2 3 2").is_err());
        assert_eq!(engine.game(), &Game::new());
    }

    #[test]
    fn test_go_play_uses_configured_depth() {
        let mut engine = Engine::new();
        exec(&mut engine, "new --ai none").unwrap();
        exec(&mut engine, "place x 0,0").unwrap();
        exec(&mut engine, "take 0,0").unwrap();
        assert_eq!(engine.game().board().count(Tile::Barrier), 0);

        exec(&mut engine, "go --depth 1 --play").unwrap();
        assert_eq!(engine.config, SearchConfig::with_depth(1));
        assert_eq!(engine.game().moves().count(), 1);
    }

    #[test]
    fn test_game_over_stops_engine() {
        let mut engine = Engine::new();
        engine.game =
            Game::from_notation("xxxxxxxx/xxxxxxxx/xxxxxxxx/b7/8/8/xxxxxxx1/xxxxxxxw b").unwrap();

        // Shooting into (6, 7) seals White's only piece in the corner
        exec(&mut engine, "play 3 0 3 4 6 7").unwrap();

        assert!(engine.game().is_over());
        assert_eq!(engine.game().winner(), Some(Side::Black));
        assert_eq!(engine.game().moves().count(), 1);
        assert!(exec(&mut engine, "go --play").is_ok());
        assert_eq!(engine.game().moves().count(), 1);
    }
}
