//! Held-key tracking and key-to-action bindings

use std::collections::HashMap;

use crate::{FsmState, GameAction};

/// Which keys are currently held down
///
/// Keys are opaque tokens (DOM `KeyboardEvent.key` values in the browser).
/// A key never seen reads as released.
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    keys: HashMap<String, bool>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pressed(&mut self, key: &str, pressed: bool) {
        self.keys.insert(key.to_string(), pressed);
    }

    pub fn is_pressed(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    /// Release every key, e.g. when the page loses focus mid-press
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Key tokens for each control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub single_player: String,
    pub two_player: String,
    pub cancel: String,
    pub return_to_menu: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "w".to_string(),
            left_down: "s".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
            single_player: "1".to_string(),
            two_player: "2".to_string(),
            cancel: "Escape".to_string(),
            return_to_menu: vec!["Escape".to_string(), "Enter".to_string()],
        }
    }
}

impl KeyBindings {
    /// State machine action a key press triggers in `state`, if any
    pub fn action_for(&self, state: FsmState, key: &str) -> Option<GameAction> {
        match state {
            FsmState::Menu if key == self.single_player => Some(GameAction::SelectSinglePlayer),
            FsmState::Menu if key == self.two_player => Some(GameAction::SelectTwoPlayer),
            FsmState::Playing if key == self.cancel => Some(GameAction::Cancel),
            FsmState::Result if self.return_to_menu.iter().any(|k| k == key) => {
                Some(GameAction::ReturnToMenu)
            }
            _ => None,
        }
    }

    /// Whether the game uses this key at all
    pub fn is_bound(&self, key: &str) -> bool {
        [
            &self.left_up,
            &self.left_down,
            &self.right_up,
            &self.right_down,
            &self.single_player,
            &self.two_player,
            &self.cancel,
        ]
        .into_iter()
        .any(|k| k == key)
            || self.return_to_menu.iter().any(|k| k == key)
    }
}
