use std::collections::HashSet;

use winit::{event::ElementState, keyboard::KeyCode};

/// Snapshot of the keys currently held down.
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
}

impl InputState {
    pub fn process_key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.keys_down.insert(key);
            }
            ElementState::Released => {
                self.keys_down.remove(&key);
            }
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Drops all held keys, used when the window loses focus.
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }
}
