//! The Stack Othello rules engine.
//!
//! `StackOthello` owns the `GameState` of one session and is the only thing
//! that mutates it. Every change goes through `place` (or, for a side with
//! nothing to play, `pass`), which:
//! - validates the placement,
//! - drops the disc and hands every captured stack to the mover,
//! - advances the turn, applying at most one forced pass, and
//! - ends the game when neither side can move.

use log::{debug, info, trace};

use crate::core::{
    Board, Captures, Color, ConfigError, Difficulty, GameConfig, GameResult, GameState,
    IllegalMove, Move, MoveRecord, PassError, StackInfo, TurnOutcome,
};

use super::capture;

/// A Stack Othello session.
#[derive(Clone, Debug)]
pub struct StackOthello {
    config: GameConfig,
    state: GameState,
}

impl StackOthello {
    /// Start a session in the opening position.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(config.board_size, config.max_stack_height);
        info!(
            "game start: {} board, max stack {}, {} to move",
            config.board_size,
            config.max_stack_height,
            state.current_turn()
        );
        Ok(Self { config, state })
    }

    /// Start a session from an arbitrary board with `turn` to move.
    ///
    /// If `turn` has no legal move the usual pass rule applies straight
    /// away, and a board where neither side can move starts out finished.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        turn: Color,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.size() != config.board_size {
            return Err(ConfigError::BoardSizeMismatch {
                expected: config.board_size.side(),
                actual: board.side(),
            });
        }
        let board = board.with_max_stack_height(config.max_stack_height)?;

        let mut engine = Self {
            config,
            state: GameState::from_board(board, turn),
        };
        if !capture::has_legal_move(engine.board(), turn) {
            // Treat the side that did not move as having just moved
            engine.state.turn = turn.opponent();
            engine.advance_turn();
        }
        Ok(engine)
    }

    /// Reset to the opening position with the same configuration.
    pub fn init_board(&mut self) {
        self.state = GameState::new(self.config.board_size, self.config.max_stack_height);
        info!("board reset, {} to move", self.state.current_turn());
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Color to move.
    #[must_use]
    pub fn current_turn(&self) -> Color {
        self.state.current_turn()
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Final result, `None` while the game is in progress.
    #[must_use]
    pub fn winner(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Discs owned by `color`, counting whole stacks.
    #[must_use]
    pub fn count_discs(&self, color: Color) -> u32 {
        self.state.count_discs(color)
    }

    /// Height and owner of a cell. Off-board coordinates report an empty
    /// cell.
    #[must_use]
    pub fn stack_info(&self, x: i32, y: i32) -> StackInfo {
        let board = self.board();
        board
            .position(x, y)
            .map_or_else(StackInfo::default, |pos| board.stack(pos).into())
    }

    /// Stacks `color` would capture at `(x, y)`, `None` if that placement is
    /// illegal on the current board. Ignores turn order.
    #[must_use]
    pub fn is_legal(&self, x: i32, y: i32, color: Color) -> Option<Captures> {
        capture::is_legal(self.board(), x, y, color)
    }

    /// Legal moves for `color` in row-major order.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        capture::legal_moves(self.board(), color)
    }

    /// Strength configured for the computer player.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    /// Whether the computer is to move.
    #[must_use]
    pub fn is_cpu_turn(&self) -> bool {
        !self.is_over() && self.config.is_cpu(self.current_turn())
    }

    /// Place a disc of `color` at `(x, y)`.
    ///
    /// On rejection nothing changes. On success the placement is appended to
    /// the history and returned.
    pub fn place(&mut self, x: i32, y: i32, color: Color) -> Result<MoveRecord, IllegalMove> {
        let checked = self.validate_placement(x, y, color);
        let (mv, captured) = checked.inspect_err(|reason| {
            trace!("rejected {color} at ({x},{y}): {reason}");
        })?;

        let board = &mut self.state.board;
        board.drop_disc(mv.position, color);
        for &pos in &captured {
            board.flip(pos, color);
        }

        debug!(
            "placed {color} at {} [stack {}] Black={} White={}",
            mv.position,
            board.height(mv.position),
            board.count_discs(Color::Black),
            board.count_discs(Color::White),
        );

        let outcome = self.advance_turn();
        let record = MoveRecord {
            ply: self.state.ply() + 1,
            color,
            mv,
            captured,
            outcome,
        };
        self.state.history.push(record.clone());
        Ok(record)
    }

    /// Pass for `color`, which must be on turn with no legal move.
    ///
    /// Forced passes are applied automatically after each placement and on
    /// `from_position`, so a session reached through the public API never
    /// has a stuck side to move and this always returns an error there. It
    /// exists so a caller driving the selector can handle a `None` choice
    /// without a panic path.
    pub fn pass(&mut self, color: Color) -> Result<TurnOutcome, PassError> {
        if self.is_over() {
            return Err(PassError::GameOver);
        }
        if color != self.current_turn() {
            return Err(PassError::OutOfTurn);
        }
        if capture::has_legal_move(self.board(), color) {
            return Err(PassError::MovesAvailable);
        }
        debug!("{color} passes");
        Ok(self.advance_turn())
    }

    fn validate_placement(
        &self,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(Move, Captures), IllegalMove> {
        if self.is_over() {
            return Err(IllegalMove::GameOver);
        }
        if color != self.current_turn() {
            return Err(IllegalMove::OutOfTurn);
        }
        capture::check_placement(self.board(), x, y, color)
    }

    /// Hand the turn to the opponent, with a single forced pass back if the
    /// opponent cannot move, or end the game if neither side can.
    fn advance_turn(&mut self) -> TurnOutcome {
        let mover = self.state.turn;
        let next = mover.opponent();
        self.state.turn = next;

        if capture::has_legal_move(self.board(), next) {
            return TurnOutcome::Continue { next };
        }

        if capture::has_legal_move(self.board(), mover) {
            debug!("{next} has no moves -> PASS");
            self.state.turn = mover;
            return TurnOutcome::Pass {
                passed: next,
                next: mover,
            };
        }

        self.state.over = true;
        let black = self.count_discs(Color::Black);
        let white = self.count_discs(Color::White);
        let result = GameResult::from_counts(black, white);
        info!("game over: Black={black} White={white} ({result})");
        TurnOutcome::GameOver(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BoardSize, MoveKind, Position};

    fn engine() -> StackOthello {
        StackOthello::new(GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = GameConfig::default().with_max_stack_height(0);
        assert_eq!(
            StackOthello::new(config).unwrap_err(),
            ConfigError::InvalidStackHeight(0)
        );
    }

    #[test]
    fn test_place_records_history() {
        let mut game = engine();
        let record = game.place(2, 3, Color::Black).unwrap();

        assert_eq!(record.ply, 1);
        assert_eq!(record.mv, Move::new(Position::new(2, 3), MoveKind::Normal));
        assert_eq!(record.captured.as_slice(), &[Position::new(3, 3)]);
        assert_eq!(record.outcome, TurnOutcome::Continue { next: Color::White });
        assert_eq!(game.state().history(), &[record]);
    }

    #[test]
    fn test_rejection_precedence() {
        let mut game = engine();

        // Wrong turn beats out-of-bounds
        assert_eq!(game.place(-5, 99, Color::White), Err(IllegalMove::OutOfTurn));
        assert_eq!(game.place(-5, 99, Color::Black), Err(IllegalMove::OutOfBounds));
        assert_eq!(game.place(4, 4, Color::Black), Err(IllegalMove::CannotOccupy));
        assert_eq!(game.place(0, 0, Color::Black), Err(IllegalMove::NoCaptures));
    }

    #[test]
    fn test_pass_rejected_with_moves() {
        let mut game = engine();
        assert_eq!(game.pass(Color::White), Err(PassError::OutOfTurn));
        assert_eq!(game.pass(Color::Black), Err(PassError::MovesAvailable));
    }

    #[test]
    fn test_pass_hands_turn_to_opponent() {
        let board = Board::from_rows(2, &["bw..", "....", "....", "...."]).unwrap();
        let mut game = StackOthello {
            config: GameConfig::new(BoardSize::Four),
            state: GameState::from_board(board, Color::White),
        };

        assert_eq!(
            game.pass(Color::White),
            Ok(TurnOutcome::Continue { next: Color::Black })
        );
        assert_eq!(game.current_turn(), Color::Black);
        assert!(!game.is_over());
        assert!(game.state().history().is_empty());
    }

    #[test]
    fn test_pass_ends_game_when_both_stuck() {
        let board = Board::from_rows(2, &["b...", "....", "....", "...w"]).unwrap();
        let mut game = StackOthello {
            config: GameConfig::new(BoardSize::Four),
            state: GameState::from_board(board, Color::Black),
        };

        assert_eq!(
            game.pass(Color::Black),
            Ok(TurnOutcome::GameOver(GameResult::Draw))
        );
        assert!(game.is_over());
        assert_eq!(game.pass(Color::White), Err(PassError::GameOver));
    }

    #[test]
    fn test_difficulty_from_config() {
        assert_eq!(engine().difficulty(), Difficulty::Medium);

        let config = GameConfig::default().with_difficulty(Difficulty::Hard);
        assert_eq!(StackOthello::new(config).unwrap().difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_from_position_size_mismatch() {
        let board = Board::opening(BoardSize::Six, 2);
        let err = StackOthello::from_position(GameConfig::default(), board, Color::Black);
        assert_eq!(
            err.unwrap_err(),
            ConfigError::BoardSizeMismatch {
                expected: 8,
                actual: 6
            }
        );
    }

    #[test]
    fn test_from_position_checks_stack_limit() {
        let board = Board::from_rows(2, &["B...", ".wb.", ".bw.", "...."]).unwrap();
        let config = GameConfig::new(BoardSize::Four).with_max_stack_height(1);
        let err = StackOthello::from_position(config, board, Color::Black).unwrap_err();
        assert!(matches!(err, ConfigError::Layout(_)));
    }
}
