/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, fs, path::Path, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};

use crate::{Board, Move, MoveList, Side, Square, Tile, BOARD_SIZE};

/// A game in progress: the board, whose turn it is, and how we got here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Current state of the board.
    board: Board,

    /// Side whose turn it is.
    side_to_move: Side,

    /// Every previous board and side to move, oldest first, paired with the move played from it.
    history: Vec<(Board, Side, Move)>,
}

impl Game {
    /// A new game from the starting position, with Black to move.
    #[inline(always)]
    pub fn new() -> Self {
        Self::from_parts(Board::new(), Side::Black)
    }

    /// A game with no history on `board`, with `side_to_move` to play.
    #[inline(always)]
    pub fn from_parts(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            history: Vec::with_capacity(92),
        }
    }

    /// Replays `moves` from the starting position, validating each one.
    pub fn from_moves(moves: impl IntoIterator<Item = Move>) -> Result<Self> {
        let mut game = Self::new();
        for (i, mv) in moves.into_iter().enumerate() {
            game.play(mv)
                .with_context(|| format!("Failed to replay move #{}", i + 1))?;
        }

        Ok(game)
    }

    /// The current board.
    #[inline(always)]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|&(_, _, mv)| mv)
    }

    /// Legal moves for the side to move.
    #[inline(always)]
    pub fn legal_moves(&self) -> MoveList {
        self.board.generate_valid_moves(self.side_to_move)
    }

    /// Legal moves for the side to move whose piece starts on `square`.
    pub fn legal_moves_from(&self, square: Square) -> MoveList {
        let mut moves = self.legal_moves();
        moves.retain(|mv| mv.from == square);
        moves
    }

    /// Returns `true` if the side to move has no legal moves.
    #[inline(always)]
    pub fn is_over(&self) -> bool {
        !self.board.has_valid_moves(self.side_to_move)
    }

    /// The side that has won, if the game is over.
    #[inline(always)]
    pub fn winner(&self) -> Option<Side> {
        self.is_over().then(|| self.side_to_move.opponent())
    }

    /// Plays `mv` for the side to move, if it is legal.
    ///
    /// On failure, the game is left untouched.
    pub fn play(&mut self, mv: Move) -> Result<()> {
        if let Err(err) = self.board.check_move(mv, self.side_to_move) {
            debug!("{} attempted illegal move {mv}: {err}", self.side_to_move);
            bail!("Illegal move {mv} for {}: {err}", self.side_to_move);
        }

        self.history.push((self.board, self.side_to_move, mv));
        self.board.apply_move(mv, self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();

        Ok(())
    }

    /// Takes back the most recent move, returning it.
    pub fn undo(&mut self) -> Option<Move> {
        let (board, side, mv) = self.history.pop()?;
        self.board = board;
        self.side_to_move = side;
        Some(mv)
    }

    /// Hands the turn to the other side without moving.
    #[inline(always)]
    pub fn toggle_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Sets the tile on `square`, bypassing all game rules.
    pub fn place(&mut self, tile: Tile, square: Square) {
        self.board[square] = tile;
    }

    /// Parses game notation: board notation, optionally followed by `b` or `w` for the side to move (default Black).
    ///
    /// # Example
    /// ```
    /// # use amazons::{Game, Side};
    /// let game = Game::from_notation("2b2b2/8/b6b/8/8/w6w/8/2w2w2 w").unwrap();
    /// assert_eq!(game.side_to_move(), Side::White);
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self> {
        let mut split = notation.split_ascii_whitespace();
        let placements = split
            .next()
            .ok_or(anyhow!("Game notation must have tile placements."))?;
        let board = Board::from_notation(placements)?;

        let side = match split.next() {
            Some(side) => side.parse()?,
            None => Side::Black,
        };

        if let Some(extra) = split.next() {
            bail!("Unexpected trailing field {extra:?} in game notation {notation:?}");
        }

        Ok(Self::from_parts(board, side))
    }

    /// Generates game notation: board notation followed by the side to move.
    pub fn to_notation(&self) -> String {
        format!("{} {}", self.board.to_notation(), self.side_to_move.char())
    }

    /// Serializes this game in the save file format.
    ///
    /// Each of the 8 rows is a line of space-separated tile codes, followed by a line holding the side to move
    /// (`1` for Black, `2` for White).
    pub fn to_save_string(&self) -> String {
        let mut save = String::with_capacity(160);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                save += &format!("{} ", self.board[Square::new(row, col)].code());
            }
            save += "\n";
        }
        save += &format!("{}\n", self.side_to_move.piece().code());

        save
    }

    /// Parses a game from the save file format; see [`Game::to_save_string`].
    ///
    /// Only whitespace separation matters, so the layout of lines is not enforced.
    pub fn from_save_str(save: &str) -> Result<Self> {
        let mut codes = save.split_ascii_whitespace().map(|code| {
            code.parse::<u8>()
                .with_context(|| format!("Invalid tile code {code:?} in save data"))
        });

        let mut board = Board::empty();
        for square in Square::iter() {
            let code = codes
                .next()
                .ok_or(anyhow!("Save data ended early at square {square}"))??;
            board[square] = Tile::from_code(code)?;
        }

        let side = codes
            .next()
            .ok_or(anyhow!("Save data is missing the side to move"))??;
        let side = Tile::from_code(side)?
            .side()
            .ok_or(anyhow!("Side to move must be 1 (Black) or 2 (White). Got {side}"))?;

        if codes.next().is_some() {
            bail!("Save data has trailing values after the side to move");
        }

        Ok(Self::from_parts(board, side))
    }

    /// Writes this game to `path` in the save file format.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_save_string())
            .with_context(|| format!("Could not save game to {}", path.display()))?;

        info!("Saved game to {}", path.display());
        Ok(())
    }

    /// Reads a game from `path` in the save file format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read save file {}", path.display()))?;

        let game = Self::from_save_str(&contents)
            .with_context(|| format!("Save file {} is corrupted", path.display()))?;

        info!("Loaded game from {}", path.display());
        Ok(game)
    }
}

impl Default for Game {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        writeln!(f)?;
        writeln!(f, "Notation: {}", self.to_notation())?;
        write!(f, "    Side: {}", self.side_to_move)
    }
}
