//! Action mapping: which physical inputs drive which sandbox actions.
//!
//! [`InputMap`] is the binding table, [`ActionState`] is the per-frame view of
//! it resolved against the current keyboard and mouse state.

use crate::bindings::key_from_name;
use crate::keyboard::KeyboardState;
use crate::mouse::MouseState;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Serde helper for [`KeyCode`], stored by its variant name (e.g. `"KeyW"`).
mod keycode_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use winit::keyboard::KeyCode;

    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        format!("{code:?}").serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        super::key_from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }
}

/// Sandbox actions.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Move the camera along its facing direction.
    MoveForward,
    /// Move the camera against its facing direction.
    MoveBackward,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Throw the cube from the camera.
    Launch,
    /// Switch to wireframe rendering.
    Wireframe,
    /// Switch to filled rendering.
    Fill,
    /// Close the session.
    Quit,
}

impl Action {
    /// Every action, in declaration order.
    pub const ALL: [Action; 8] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Launch,
        Action::Wireframe,
        Action::Fill,
        Action::Quit,
    ];

    /// Parse an action from its variant name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| format!("{action:?}") == name)
    }
}

/// Serde-friendly subset of [`MouseButton`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum MouseButtonBinding {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl MouseButtonBinding {
    /// Convert to the winit [`MouseButton`] type.
    #[must_use]
    pub fn to_winit(self) -> MouseButton {
        match self {
            Self::Left => MouseButton::Left,
            Self::Right => MouseButton::Right,
            Self::Middle => MouseButton::Middle,
        }
    }
}

/// A physical input that can trigger an action.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum InputBinding {
    /// A keyboard key (physical scan code).
    Key(#[serde(with = "keycode_serde")] KeyCode),
    /// A mouse button.
    MouseButton(MouseButtonBinding),
}

impl InputBinding {
    fn is_held(self, keyboard: &KeyboardState, mouse: &MouseState) -> bool {
        match self {
            Self::Key(code) => keyboard.is_pressed(PhysicalKey::Code(code)),
            Self::MouseButton(button) => mouse.is_button_pressed(button.to_winit()),
        }
    }

    fn went_down(self, keyboard: &KeyboardState, mouse: &MouseState) -> bool {
        match self {
            Self::Key(code) => keyboard.just_pressed(PhysicalKey::Code(code)),
            Self::MouseButton(button) => mouse.just_button_pressed(button.to_winit()),
        }
    }
}

/// Maps [`Action`]s to the bindings that trigger them (OR semantics).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputMap {
    /// The binding table.
    pub bindings: HashMap<Action, Vec<InputBinding>>,
}

impl Default for InputMap {
    fn default() -> Self {
        Self::default_sandbox()
    }
}

impl InputMap {
    /// An input map with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// WASD movement, left click to throw, 1/2 for wireframe/fill, Escape to quit.
    #[must_use]
    pub fn default_sandbox() -> Self {
        let bindings = HashMap::from([
            (Action::MoveForward, vec![InputBinding::Key(KeyCode::KeyW)]),
            (Action::MoveBackward, vec![InputBinding::Key(KeyCode::KeyS)]),
            (Action::MoveLeft, vec![InputBinding::Key(KeyCode::KeyA)]),
            (Action::MoveRight, vec![InputBinding::Key(KeyCode::KeyD)]),
            (
                Action::Launch,
                vec![InputBinding::MouseButton(MouseButtonBinding::Left)],
            ),
            (Action::Wireframe, vec![InputBinding::Key(KeyCode::Digit1)]),
            (Action::Fill, vec![InputBinding::Key(KeyCode::Digit2)]),
            (Action::Quit, vec![InputBinding::Key(KeyCode::Escape)]),
        ]);
        Self { bindings }
    }

    /// Replace the bindings for an action.
    pub fn set_bindings(&mut self, action: Action, bindings: Vec<InputBinding>) {
        self.bindings.insert(action, bindings);
    }

    /// The bindings for an action.
    #[must_use]
    pub fn get_bindings(&self, action: Action) -> &[InputBinding] {
        self.bindings.get(&action).map_or(&[], Vec::as_slice)
    }

    /// Serialize to a RON string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from a RON string.
    ///
    /// # Errors
    /// Returns an error if the RON string is malformed.
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}

/// Actions resolved for one frame.
#[derive(Debug, Clone, Default)]
pub struct ActionState {
    held: HashSet<Action>,
    triggered: HashSet<Action>,
}

impl ActionState {
    /// Resolve every bound action against the current input state.
    ///
    /// A press and release that both land between two frames still counts
    /// as held for that frame.
    #[must_use]
    pub fn resolve(map: &InputMap, keyboard: &KeyboardState, mouse: &MouseState) -> Self {
        let mut state = Self::default();
        for (action, bindings) in &map.bindings {
            for binding in bindings {
                let went_down = binding.went_down(keyboard, mouse);
                if went_down {
                    state.triggered.insert(*action);
                }
                if went_down || binding.is_held(keyboard, mouse) {
                    state.held.insert(*action);
                }
            }
        }
        state
    }

    /// Whether any binding of `action` is active this frame.
    #[must_use]
    pub fn pressed(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Whether a binding of `action` went down this frame.
    #[must_use]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.triggered.contains(&action)
    }
}
