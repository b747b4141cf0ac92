//! Keybinding overrides, conflict detection, and RON persistence.

use crate::action_map::{Action, InputBinding, InputMap};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};
use winit::keyboard::KeyCode;

/// Errors raised while editing or persisting bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    /// The action name does not match any [`Action`] variant.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The key name is not in the supported key table.
    #[error("unknown key: {0}")]
    UnknownKey(String),

    /// Reading or writing the binding file failed.
    #[error("binding file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The binding file is not valid RON.
    #[error("failed to parse bindings: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The binding table could not be serialized.
    #[error("failed to serialize bindings: {0}")]
    Serialize(#[from] ron::Error),
}

/// Parse a key from its [`KeyCode`] variant name (e.g. `"KeyW"`, `"Digit1"`).
#[must_use]
pub fn key_from_name(name: &str) -> Option<KeyCode> {
    Some(match name {
        "KeyA" => KeyCode::KeyA,
        "KeyB" => KeyCode::KeyB,
        "KeyC" => KeyCode::KeyC,
        "KeyD" => KeyCode::KeyD,
        "KeyE" => KeyCode::KeyE,
        "KeyF" => KeyCode::KeyF,
        "KeyG" => KeyCode::KeyG,
        "KeyH" => KeyCode::KeyH,
        "KeyI" => KeyCode::KeyI,
        "KeyJ" => KeyCode::KeyJ,
        "KeyK" => KeyCode::KeyK,
        "KeyL" => KeyCode::KeyL,
        "KeyM" => KeyCode::KeyM,
        "KeyN" => KeyCode::KeyN,
        "KeyO" => KeyCode::KeyO,
        "KeyP" => KeyCode::KeyP,
        "KeyQ" => KeyCode::KeyQ,
        "KeyR" => KeyCode::KeyR,
        "KeyS" => KeyCode::KeyS,
        "KeyT" => KeyCode::KeyT,
        "KeyU" => KeyCode::KeyU,
        "KeyV" => KeyCode::KeyV,
        "KeyW" => KeyCode::KeyW,
        "KeyX" => KeyCode::KeyX,
        "KeyY" => KeyCode::KeyY,
        "KeyZ" => KeyCode::KeyZ,
        "Digit0" => KeyCode::Digit0,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        "Digit5" => KeyCode::Digit5,
        "Digit6" => KeyCode::Digit6,
        "Digit7" => KeyCode::Digit7,
        "Digit8" => KeyCode::Digit8,
        "Digit9" => KeyCode::Digit9,
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        "ControlRight" => KeyCode::ControlRight,
        "ArrowUp" => KeyCode::ArrowUp,
        "ArrowDown" => KeyCode::ArrowDown,
        "ArrowLeft" => KeyCode::ArrowLeft,
        "ArrowRight" => KeyCode::ArrowRight,
        _ => return None,
    })
}

/// The same binding used by more than one action.
#[derive(Debug, Clone)]
pub struct Conflict {
    /// The duplicated binding.
    pub binding: InputBinding,
    /// Actions sharing it.
    pub actions: Vec<Action>,
}

impl InputMap {
    /// Every binding claimed by two or more actions.
    #[must_use]
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let mut seen: HashMap<InputBinding, Vec<Action>> = HashMap::new();
        for (action, bindings) in &self.bindings {
            for binding in bindings {
                let actions = seen.entry(*binding).or_default();
                if !actions.contains(action) {
                    actions.push(*action);
                }
            }
        }

        seen.into_iter()
            .filter(|(_, actions)| actions.len() > 1)
            .map(|(binding, actions)| Conflict { binding, actions })
            .collect()
    }

    /// Rebind actions to single keys from an `action name -> key name` table,
    /// as stored in the config file.
    ///
    /// # Errors
    /// Returns the first unknown action or key name. Entries applied before
    /// the failure stay applied.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Result<(), BindingError> {
        for (action_name, key_name) in overrides {
            let action = Action::from_name(action_name)
                .ok_or_else(|| BindingError::UnknownAction(action_name.clone()))?;
            let key =
                key_from_name(key_name).ok_or_else(|| BindingError::UnknownKey(key_name.clone()))?;
            debug!(?action, ?key, "Keybinding override");
            self.set_bindings(action, vec![InputBinding::Key(key)]);
        }
        Ok(())
    }

    /// Save the binding table as RON at `path`.
    ///
    /// # Errors
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), BindingError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Load a binding table from `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, BindingError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(Self::from_ron(&contents)?)
    }

    /// Load a binding table, falling back to the defaults with a warning.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Keybindings at {} unusable ({e}); using defaults", path.display());
            Self::default()
        })
    }
}
