//! Game State Machine
//!
//! Transition table for Menu → Playing → Result → Menu.

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FsmState {
    #[default]
    Menu,
    Playing,
    Result,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    SelectSinglePlayer,
    SelectTwoPlayer,
    Cancel,
    Win,
    ReturnToMenu,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_state: FsmState,
    to_state: FsmState,
    action: GameAction,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> FsmState {
        self.from_state
    }

    pub fn to_state(&self) -> FsmState {
        self.to_state
    }

    pub fn action(&self) -> GameAction {
        self.action
    }
}

/// Game Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: GameAction) -> bool {
        self.get_next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;

        if let Some(next_state) = self.get_next_state(action) {
            self.state = next_state;
            TransitionResult {
                success: true,
                from_state,
                to_state: next_state,
                action,
            }
        } else {
            self.reject(action)
        }
    }

    /// Failed result for `action` without touching the state
    pub fn reject(&self, action: GameAction) -> TransitionResult {
        TransitionResult {
            success: false,
            from_state: self.state,
            to_state: self.state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn get_next_state(&self, action: GameAction) -> Option<FsmState> {
        match (self.state, action) {
            (FsmState::Menu, GameAction::SelectSinglePlayer) => Some(FsmState::Playing),
            (FsmState::Menu, GameAction::SelectTwoPlayer) => Some(FsmState::Playing),

            (FsmState::Playing, GameAction::Cancel) => Some(FsmState::Menu),
            (FsmState::Playing, GameAction::Win) => Some(FsmState::Result),

            (FsmState::Result, GameAction::ReturnToMenu) => Some(FsmState::Menu),

            _ => None,
        }
    }

    /// Check if currently in the playing state
    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }
}
