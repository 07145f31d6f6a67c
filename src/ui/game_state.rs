//! Game state management for the Octi GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::{AIEngine, Direction, Match, MatchConfig, Move, MoveResult, Player, Pos, SearchError};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::First }
    }
}

/// Settings shared by every match started from the GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiSettings {
    pub ai_depth: u8,
    pub ai_time_limit_ms: u64,
    pub match_config: MatchConfig,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            ai_depth: 4,
            ai_time_limit_ms: 1000,
            match_config: MatchConfig::default(),
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, SearchError>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub game: Match,
    pub mode: GameMode,
    pub settings: GuiSettings,
    /// Pod picked by the human, waiting for a target
    pub selected: Option<Pos>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(mode: GameMode, settings: GuiSettings) -> Self {
        Self {
            game: Match::new(settings.match_config),
            mode,
            settings,
            selected: None,
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        self.game = Match::new(self.settings.match_config);
        self.selected = None;
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Player to move
    #[inline]
    pub fn current_turn(&self) -> Player {
        self.game.current_player()
    }

    /// Most recent move, if any
    pub fn last_move(&self) -> Option<&Move> {
        self.game.move_log().last().map(|(_, mv)| mv)
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP { .. } => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() != human,
            GameMode::PvP { .. } => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Legal moves of the selected pod
    pub fn selected_moves(&self) -> Vec<Move> {
        match self.selected {
            Some(pos) => self
                .game
                .legal_moves()
                .into_iter()
                .filter(|mv| mv.origin() == pos)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Cells the selected pod can move to
    pub fn selected_targets(&self) -> Vec<Pos> {
        let mut targets: Vec<Pos> = self
            .selected_moves()
            .iter()
            .filter(|mv| mv.is_relocation())
            .map(Move::target)
            .collect();
        targets.sort_unstable();
        targets.dedup();
        targets
    }

    /// Handle a click on a board cell.
    ///
    /// Clicking an own pod selects it; clicking a reachable cell while a pod
    /// is selected plays the move there.
    pub fn click_cell(&mut self, pos: Pos) -> Result<(), String> {
        self.check_human_can_move()?;

        let player = self.current_turn();
        if self.game.board().owner_at(pos) == Some(player) {
            self.selected = if self.selected == Some(pos) { None } else { Some(pos) };
            return Ok(());
        }

        let Some(from) = self.selected else {
            return Err(format!("Select a {} pod first", super::theme::player_name(player)));
        };

        // Several jump chains can end on the same cell; take the first one generated
        let chosen = self
            .selected_moves()
            .into_iter()
            .find(|mv| mv.is_relocation() && mv.target() == pos);

        match chosen {
            Some(mv) => self.execute_move(mv),
            None => Err(format!("{} cannot reach {}", from, pos)),
        }
    }

    /// Attach a prong to the selected pod
    pub fn try_add_prong(&mut self, direction: Direction) -> Result<(), String> {
        self.check_human_can_move()?;

        let Some(at) = self.selected else {
            return Err("Select a pod first".to_string());
        };
        self.execute_move(Move::ProngAdd { at, direction })
    }

    /// Whether the selected pod may take a prong in the given direction
    pub fn can_add_prong(&self, direction: Direction) -> bool {
        self.selected_moves()
            .iter()
            .any(|mv| matches!(mv, Move::ProngAdd { direction: d, .. } if *d == direction))
    }

    fn check_human_can_move(&self) -> Result<(), String> {
        if self.game.is_over() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), String> {
        self.game.submit_move(mv).map_err(|e| e.to_string())?;

        self.selected = None;
        self.suggested_move = None;
        self.message = None;

        self.move_timer.stop();
        if !self.game.is_over() {
            self.move_timer.start();
        }
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game.is_over() {
            return;
        }

        let board = self.game.board().clone();
        let player = self.current_turn();
        let settings = self.settings;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(settings.ai_depth, settings.ai_time_limit_ms)
                .with_capture_rule(settings.match_config.capture_rule);
            let result = engine.get_move_with_stats(&board, player);
            let _ = tx.send(result);
        });

        debug!(%player, "AI thinking");
        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((search, elapsed)) = result else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        match search {
            Ok(move_result) => {
                let best = move_result.best_move.clone();
                self.last_ai_result = Some(move_result);
                match best {
                    Some(mv) => {
                        if let Err(e) = self.execute_move(mv) {
                            warn!(error = %e, "AI produced a rejected move");
                            self.message = Some(e);
                        }
                    }
                    None => self.message = Some("AI could not find a move".to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "AI search failed");
                self.message = Some(format!("AI could not move: {}", e));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode
    pub fn request_suggestion(&mut self) {
        if self.game.is_over() || self.is_ai_thinking() {
            return;
        }

        // Quick, shallow search
        let mut engine = AIEngine::with_config(self.settings.ai_depth.min(3), 200)
            .with_capture_rule(self.settings.match_config.capture_rule);
        match engine.get_move_with_stats(self.game.board(), self.current_turn()) {
            Ok(result) => {
                self.suggested_move = result.best_move.clone();
                self.last_ai_result = Some(result);
            }
            Err(e) => self.message = Some(format!("No suggestion: {}", e)),
        }
    }

    /// Take back the last move (the last two against the AI).
    ///
    /// The match record is append-only, so the game is replayed from the
    /// start without the undone moves.
    pub fn undo(&mut self) {
        if self.game.move_log().is_empty() || self.is_ai_thinking() {
            return;
        }

        let log_len = self.game.move_log().len();
        let undo_count = match self.mode {
            GameMode::PvE { human } => {
                // Back to the human's turn
                let last_mover = self.game.move_log()[log_len - 1].0;
                if last_mover == human || log_len < 2 {
                    1
                } else {
                    2
                }
            }
            GameMode::PvP { .. } => 1,
        };

        let keep = log_len.saturating_sub(undo_count);
        let moves: Vec<Move> = self.game.move_log()[..keep].iter().map(|(_, mv)| mv.clone()).collect();

        let mut replay = Match::new(self.settings.match_config);
        for mv in moves {
            if let Err(e) = replay.submit_move(mv) {
                warn!(error = %e, "replay failed during undo");
                self.message = Some("Undo failed".to_string());
                return;
            }
        }

        self.game = replay;
        self.selected = None;
        self.suggested_move = None;
        self.message = None;
        self.move_timer.start();
    }
}
