//! Frame-coherent keyboard state.
//!
//! Movement keys are polled every frame (held state), while toggles such as the
//! wireframe switch react to the press edge. Physical key codes are used so WASD
//! sits in the same place on every layout.

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal, platform-independent description of a key event.
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    /// The physical key involved.
    pub key: PhysicalKey,
    /// Whether the key was pressed or released.
    pub state: ElementState,
    /// Whether this is an OS auto-repeat.
    pub repeat: bool,
}

impl From<&KeyEvent> for RawKeyEvent {
    fn from(event: &KeyEvent) -> Self {
        Self {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        }
    }
}

/// Held / just-pressed / just-released tracking per physical key.
///
/// Feed events with [`process_raw`](Self::process_raw), query during the
/// frame, then call [`clear_transients`](Self::clear_transients).
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<PhysicalKey>,
    pressed_edges: HashSet<PhysicalKey>,
    released_edges: HashSet<PhysicalKey>,
}

impl KeyboardState {
    /// No keys held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a winit [`KeyEvent`].
    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent::from(event));
    }

    /// Processes a [`RawKeyEvent`]. Auto-repeats are ignored.
    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                if self.held.insert(event.key) {
                    self.pressed_edges.insert(event.key);
                }
            }
            ElementState::Released => {
                if self.held.remove(&event.key) {
                    self.released_edges.insert(event.key);
                }
            }
        }
    }

    /// `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// `true` only during the frame the key went down.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.pressed_edges.contains(&key)
    }

    /// `true` only during the frame the key came up.
    #[must_use]
    pub fn just_released(&self, key: PhysicalKey) -> bool {
        self.released_edges.contains(&key)
    }

    /// Number of keys currently held.
    #[must_use]
    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    /// Releases every held key, e.g. when the window loses focus. Presses
    /// not yet seen by a frame are dropped.
    pub fn release_all(&mut self) {
        self.pressed_edges.clear();
        self.released_edges.extend(self.held.drain());
    }

    /// Clears the edge sets. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.pressed_edges.clear();
        self.released_edges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    fn raw(code: KeyCode, state: ElementState, repeat: bool) -> RawKeyEvent {
        RawKeyEvent {
            key: PhysicalKey::Code(code),
            state,
            repeat,
        }
    }

    #[test]
    fn test_initial_state_no_keys_pressed() {
        let kb = KeyboardState::new();
        for code in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            let key = PhysicalKey::Code(code);
            assert!(!kb.is_pressed(key));
            assert!(!kb.just_pressed(key));
            assert!(!kb.just_released(key));
        }
        assert_eq!(kb.held_count(), 0);
    }

    #[test]
    fn test_press_then_release() {
        let mut kb = KeyboardState::new();
        let w = PhysicalKey::Code(KeyCode::KeyW);
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        assert!(kb.is_pressed(w));
        assert!(kb.just_pressed(w));

        kb.clear_transients();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Released, false));
        assert!(!kb.is_pressed(w));
        assert!(kb.just_released(w));
        assert!(!kb.just_pressed(w));
    }

    #[test]
    fn test_held_key_survives_clear() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyD, ElementState::Pressed, false));
        kb.clear_transients();
        let d = PhysicalKey::Code(KeyCode::KeyD);
        assert!(kb.is_pressed(d));
        assert!(!kb.just_pressed(d));
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, false));
        kb.clear_transients();
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, true));
        assert!(!kb.just_pressed(PhysicalKey::Code(KeyCode::KeyA)));
    }

    #[test]
    fn test_release_without_press_is_not_an_edge() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::Escape, ElementState::Released, false));
        assert!(!kb.just_released(PhysicalKey::Code(KeyCode::Escape)));
    }

    #[test]
    fn test_release_all() {
        let mut kb = KeyboardState::new();
        kb.process_raw(raw(KeyCode::KeyW, ElementState::Pressed, false));
        kb.process_raw(raw(KeyCode::KeyA, ElementState::Pressed, false));
        kb.release_all();
        assert_eq!(kb.held_count(), 0);
        assert!(kb.just_released(PhysicalKey::Code(KeyCode::KeyW)));
        assert!(kb.just_released(PhysicalKey::Code(KeyCode::KeyA)));
        assert!(!kb.just_pressed(PhysicalKey::Code(KeyCode::KeyW)));
    }
}
