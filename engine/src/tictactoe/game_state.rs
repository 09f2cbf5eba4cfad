use crate::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::choose_bot_move;
use super::error::EngineError;
use super::types::{GameMode, GameStatus, Player};
use super::win_detector::is_winner;

/// One game from the empty board to a win or a draw.
///
/// All mutation goes through [`GameState::apply_move`]. In
/// [`GameMode::SinglePlayerVsBot`] the bot's reply is applied inside the same
/// call, so between calls it is always the human's turn or the game is over.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    turn_owner: Player,
    winner: Option<Player>,
    ended: bool,
    history: Vec<Board>,
    last_move: Option<usize>,
    mode: GameMode,
    bot_skill: f64,
    rng: SessionRng,
}

impl GameState {
    /// Starts a game with a random first player. If the bot wins the toss it
    /// has already moved when this returns.
    pub fn new(mode: GameMode, bot_skill: f64, mut rng: SessionRng) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&bot_skill) {
            return Err(EngineError::InvalidBotSkill(bot_skill));
        }

        let turn_owner = if rng.random_bool() { Player::X } else { Player::O };
        let board = Board::new();

        let mut state = Self {
            board,
            turn_owner,
            winner: None,
            ended: false,
            history: vec![board],
            last_move: None,
            mode,
            bot_skill,
            rng,
        };

        log!(
            "New {:?} game (seed {}), {} moves first",
            mode,
            state.rng.seed(),
            turn_owner
        );

        if state.is_bot_turn() {
            state.play_bot_turn()?;
        }

        Ok(state)
    }

    /// Public round entry point; `Ok(false)` means the game was already over.
    pub fn play_round(&mut self, cell: usize) -> Result<bool, EngineError> {
        self.apply_move(cell)
    }

    pub fn apply_move(&mut self, cell: usize) -> Result<bool, EngineError> {
        if self.ended {
            return Ok(false);
        }

        self.place(cell)?;

        if self.is_bot_turn() {
            self.play_bot_turn()?;
        }

        Ok(true)
    }

    fn is_bot_turn(&self) -> bool {
        !self.ended && self.mode.is_bot(self.turn_owner)
    }

    fn play_bot_turn(&mut self) -> Result<(), EngineError> {
        let cell = choose_bot_move(&self.board, self.turn_owner, self.bot_skill, &mut self.rng)?;
        self.place(cell)
    }

    fn place(&mut self, cell: usize) -> Result<(), EngineError> {
        let mover = self.turn_owner;
        self.board = self.board.place(cell, mover)?;
        self.history.push(self.board);
        self.last_move = Some(cell);

        if is_winner(&self.board, mover) {
            self.winner = Some(mover);
            self.ended = true;
            log!("{} wins after {} moves", mover, self.move_count());
            return Ok(());
        }

        if self.board.is_full() {
            self.winner = None;
            self.ended = true;
            log!("Game drawn");
            return Ok(());
        }

        self.turn_owner = mover.opponent();
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Board snapshots from the empty board through the latest move.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        match (self.ended, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Draw,
        }
    }

    /// The player whose turn it is. After the game ends this stays on the
    /// last mover.
    pub fn current_player(&self) -> Player {
        self.turn_owner
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn bot_skill(&self) -> f64 {
        self.bot_skill
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::evaluator::best_move;
    use crate::tictactoe::types::Cell;

    fn two_player(seed: u64) -> GameState {
        GameState::new(GameMode::TwoPlayer, 1.0, SessionRng::new(seed)).unwrap()
    }

    #[test]
    fn test_new_game_starts_empty() {
        let state = two_player(1);
        assert_eq!(*state.board(), Board::new());
        assert_eq!(state.history(), &[Board::new()]);
        assert!(!state.is_ended());
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.seed(), 1);
    }

    #[test]
    fn test_first_player_depends_on_seed_only() {
        for seed in 0..20 {
            assert_eq!(two_player(seed).current_player(), two_player(seed).current_player());
        }
        let firsts: std::collections::HashSet<Player> =
            (0..64).map(|seed| two_player(seed).current_player()).collect();
        assert_eq!(firsts.len(), 2);
    }

    #[test]
    fn test_turns_alternate() {
        let mut state = two_player(3);
        let first = state.current_player();
        assert_eq!(state.play_round(4), Ok(true));
        assert_eq!(state.board().get(4), Some(Cell::Owner(first)));
        assert_eq!(state.current_player(), first.opponent());
        assert_eq!(state.play_round(0), Ok(true));
        assert_eq!(state.board().get(0), Some(Cell::Owner(first.opponent())));
        assert_eq!(state.current_player(), first);
    }

    #[test]
    fn test_history_tracks_every_move() {
        let mut state = two_player(8);
        for (n, cell) in [4, 0, 8, 2, 1].into_iter().enumerate() {
            assert_eq!(state.play_round(cell), Ok(true));
            assert_eq!(state.history().len(), n + 2);
            assert_eq!(state.history().last(), Some(state.board()));
        }
    }

    #[test]
    fn test_row_completes_game() {
        let mut state = two_player(5);
        let first = state.current_player();
        for cell in [0, 3, 1, 4, 2] {
            assert_eq!(state.play_round(cell), Ok(true));
        }
        assert!(state.is_ended());
        assert_eq!(state.winner(), Some(first));
        assert_eq!(state.status(), GameStatus::Won(first));
        assert_eq!(state.last_move(), Some(2));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let mut state = two_player(21);
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            assert!(!state.is_ended());
            assert_eq!(state.play_round(cell), Ok(true));
        }
        assert!(state.is_ended());
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(state.history().len(), 10);
    }

    #[test]
    fn test_play_after_end_is_rejected_without_change() {
        let mut state = two_player(5);
        for cell in [0, 3, 1, 4, 2] {
            state.play_round(cell).unwrap();
        }
        let board_before = *state.board();
        let history_len = state.history().len();

        assert_eq!(state.play_round(8), Ok(false));
        assert_eq!(*state.board(), board_before);
        assert_eq!(state.history().len(), history_len);
    }

    #[test]
    fn test_invalid_moves_do_not_mutate() {
        let mut state = two_player(2);
        state.play_round(4).unwrap();
        let player = state.current_player();

        assert!(matches!(
            state.play_round(4),
            Err(EngineError::InvalidMove { cell: 4, .. })
        ));
        assert!(matches!(
            state.play_round(9),
            Err(EngineError::InvalidMove { cell: 9, .. })
        ));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.current_player(), player);
    }

    #[test]
    fn test_bot_skill_is_validated() {
        assert_eq!(
            GameState::new(GameMode::SinglePlayerVsBot, 1.2, SessionRng::new(0)).unwrap_err(),
            EngineError::InvalidBotSkill(1.2)
        );
        assert!(GameState::new(GameMode::SinglePlayerVsBot, f64::NAN, SessionRng::new(0)).is_err());

        let state = GameState::new(GameMode::SinglePlayerVsBot, 0.25, SessionRng::new(0)).unwrap();
        assert_eq!(state.bot_skill(), 0.25);
        assert_eq!(state.mode(), GameMode::SinglePlayerVsBot);
    }

    #[test]
    fn test_bot_opening_move_is_applied_on_construction() {
        let mut bot_openings = 0;
        for seed in 0..64 {
            let state =
                GameState::new(GameMode::SinglePlayerVsBot, 1.0, SessionRng::new(seed)).unwrap();
            assert_eq!(state.current_player(), GameMode::HUMAN);
            if state.history().len() == 1 {
                assert_eq!(*state.board(), Board::new());
                continue;
            }
            bot_openings += 1;
            let expected = best_move(&Board::new(), GameMode::BOT).unwrap();
            assert_eq!(state.board().available_moves().len(), 8);
            assert_eq!(state.board().get(expected), Some(Cell::Owner(GameMode::BOT)));
            assert_eq!(state.history().len(), 2);
        }
        assert!(bot_openings > 0);
    }

    #[test]
    fn test_bot_replies_within_the_same_round() {
        let mut state =
            GameState::new(GameMode::SinglePlayerVsBot, 1.0, SessionRng::new(4)).unwrap();
        while !state.is_ended() {
            let cell = state.board().available_moves()[0];
            let before = state.history().len();
            assert_eq!(state.play_round(cell), Ok(true));
            let added = state.history().len() - before;
            assert!(added == 2 || (added == 1 && state.is_ended()));
            if !state.is_ended() {
                assert_eq!(state.current_player(), GameMode::HUMAN);
            }
        }
    }

    #[test]
    fn test_bot_blocks_immediate_threat() {
        for seed in 0..64 {
            let mut state =
                GameState::new(GameMode::SinglePlayerVsBot, 1.0, SessionRng::new(seed)).unwrap();
            if state.history().len() != 1 {
                continue;
            }
            // Every reply to the centre scores the same, so the bot takes 0.
            state.play_round(4).unwrap();
            assert_eq!(state.board().get(0), Some(Cell::Owner(GameMode::BOT)));
            state.play_round(1).unwrap();
            assert_eq!(state.board().get(7), Some(Cell::Owner(GameMode::BOT)));
        }
    }

    #[test]
    fn test_bot_never_moves_after_game_ends() {
        for seed in 0..200 {
            let mut state =
                GameState::new(GameMode::SinglePlayerVsBot, 0.0, SessionRng::new(seed)).unwrap();
            while !state.is_ended() {
                let cell = state.board().available_moves()[0];
                state.play_round(cell).unwrap();
            }
            let marks = 9 - state.board().available_moves().len();
            assert_eq!(state.history().len(), marks + 1);
            if let Some(winner) = state.winner() {
                let last = state.last_move().unwrap();
                assert_eq!(state.board().get(last), Some(Cell::Owner(winner)));
                assert_eq!(state.current_player(), winner);
            }
        }
    }
}
