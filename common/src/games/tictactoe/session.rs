use crate::games::SessionRng;
use crate::{log, log_debug};
use super::bot_controller::{BotInput, MoveStrategy, calculate_move};
use super::game_state::TicTacToeGameState;
use super::types::{Difficulty, GameMode, GameStatus, Mark};

/// The computer always answers as O; humans open as X.
pub const BOT_MARK: Mark = Mark::O;

pub struct TicTacToeSession {
    state: TicTacToeGameState,
    mode: GameMode,
    difficulty: Difficulty,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(mode: GameMode, difficulty: Difficulty, rng: SessionRng) -> Self {
        log!(
            "New {} session (difficulty {}, seed {})",
            mode,
            difficulty,
            rng.seed()
        );
        Self {
            state: TicTacToeGameState::new(),
            mode,
            difficulty,
            rng,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && self.state.current_mark() == BOT_MARK
            && !self.state.status().is_over()
    }

    pub fn make_human_move(&mut self, index: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }
        let mark = self.state.current_mark();
        self.state.place_mark(index)?;
        log_debug!("{} played cell {}", mark, index + 1);
        self.log_if_finished();
        Ok(())
    }

    /// Plays the bot's reply and returns the chosen cell index.
    pub fn make_bot_move(&mut self) -> Result<usize, String> {
        if !self.is_bot_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let input = BotInput::from_game_state(&self.state);
        let bot_move =
            calculate_move(self.difficulty, &input, &mut self.rng).map_err(|e| e.to_string())?;

        let strategy = match bot_move.strategy {
            MoveStrategy::Minimax => "minimax",
            MoveStrategy::Random => "random",
        };
        log_debug!("Bot chose cell {} ({} move)", bot_move.index + 1, strategy);

        self.state.place_mark(bot_move.index)?;
        self.log_if_finished();
        Ok(bot_move.index)
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        log_debug!("Difficulty changed from {} to {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
    }

    /// Switching mode starts a fresh game.
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.state.reset();
        log!("Switched to {}", mode);
    }

    pub fn restart(&mut self) {
        self.state.reset();
        log_debug!("Game restarted");
    }

    pub fn jump_to(&mut self, move_number: usize) -> Result<(), String> {
        self.state.jump_to(move_number)
    }

    fn log_if_finished(&self) {
        if self.state.status().is_over() {
            log!(
                "Game over after {} moves: {}",
                self.state.current_move(),
                self.state.status_text()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pvc_session(difficulty: u8) -> TicTacToeSession {
        TicTacToeSession::new(
            GameMode::PlayerVsComputer,
            Difficulty::new(difficulty).unwrap(),
            SessionRng::new(42),
        )
    }

    #[test]
    fn test_human_opens_in_pvc() {
        let session = pvc_session(100);
        assert!(!session.is_bot_turn());
    }

    #[test]
    fn test_human_cannot_move_during_bot_turn() {
        let mut session = pvc_session(100);
        session.make_human_move(0).unwrap();
        assert!(session.is_bot_turn());
        assert!(session.make_human_move(1).is_err());
    }

    #[test]
    fn test_bot_cannot_move_on_human_turn() {
        let mut session = pvc_session(100);
        assert!(session.make_bot_move().is_err());
    }

    #[test]
    fn test_perfect_bot_takes_center_after_corner() {
        let mut session = pvc_session(100);
        session.make_human_move(0).unwrap();
        let index = session.make_bot_move().unwrap();
        assert_eq!(index, 4);
        assert_eq!(session.state().current_board().get(4), BOT_MARK);
        assert!(!session.is_bot_turn());
    }

    #[test]
    fn test_pvp_has_no_bot_turn() {
        let mut session = TicTacToeSession::new(
            GameMode::PlayerVsPlayer,
            Difficulty::default(),
            SessionRng::new(1),
        );
        session.make_human_move(0).unwrap();
        assert!(!session.is_bot_turn());
        session.make_human_move(4).unwrap();
        assert_eq!(session.state().current_board().get(4), Mark::O);
    }

    #[test]
    fn test_set_mode_restarts_game() {
        let mut session = pvc_session(50);
        session.make_human_move(0).unwrap();
        session.set_mode(GameMode::PlayerVsPlayer);
        assert_eq!(session.state().current_move(), 0);
        assert_eq!(session.mode(), GameMode::PlayerVsPlayer);
    }

    #[test]
    fn test_jump_back_to_bot_turn() {
        let mut session = pvc_session(100);
        session.make_human_move(0).unwrap();
        session.make_bot_move().unwrap();
        session.jump_to(1).unwrap();
        assert!(session.is_bot_turn());
        assert!(session.jump_to(5).is_err());
    }

    #[test]
    fn test_perfect_bot_never_loses_to_scripted_human() {
        let mut session = pvc_session(100);
        let preferred = [4, 0, 2, 6, 8, 1, 3, 5, 7];
        while session.status() == GameStatus::InProgress {
            if session.is_bot_turn() {
                session.make_bot_move().unwrap();
            } else {
                let board = session.state().current_board();
                let index = preferred
                    .iter()
                    .copied()
                    .find(|&i| board.is_empty_cell(i))
                    .unwrap();
                session.make_human_move(index).unwrap();
            }
        }
        assert_ne!(session.status(), GameStatus::XWon);
    }
}
