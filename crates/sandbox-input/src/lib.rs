//! Input adaptation: keyboard and mouse state, pointer deltas, and action bindings.

pub mod action_map;
pub mod bindings;
pub mod keyboard;
pub mod mouse;

pub use action_map::{Action, ActionState, InputBinding, InputMap, MouseButtonBinding};
pub use bindings::{BindingError, Conflict};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::{LastPointer, MouseState, PointerTracker};
