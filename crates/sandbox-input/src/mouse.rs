//! Mouse state and pointer-delta computation.
//!
//! Look offsets are produced per cursor event from the previous raw sample.
//! The first sample only seeds [`PointerTracker`], so entering the window never
//! snaps the camera.

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pixels that count as one scroll line for touchpads reporting pixel deltas.
pub const PIXELS_PER_LINE: f64 = 40.0;

/// Previous raw pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LastPointer {
    /// No cursor event seen yet.
    #[default]
    Unseen,
    /// Position of the last cursor event, in screen pixels.
    At(Vec2),
}

/// Turns absolute cursor positions into look offsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    last: LastPointer,
}

impl PointerTracker {
    /// A tracker that has not seen a sample yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset from the previous sample to `(x, y)`.
    ///
    /// X grows to the right. Y is flipped so that moving the pointer up the
    /// screen yields a positive offset. Returns zero for the first sample.
    pub fn offset(&mut self, x: f32, y: f32) -> Vec2 {
        let current = Vec2::new(x, y);
        let previous = match self.last {
            LastPointer::Unseen => current,
            LastPointer::At(previous) => previous,
        };
        self.last = LastPointer::At(current);
        Vec2::new(current.x - previous.x, previous.y - current.y)
    }

    /// Forget the previous sample so the next one bootstraps again.
    pub fn reset(&mut self) {
        self.last = LastPointer::Unseen;
    }

    /// The stored previous sample.
    #[must_use]
    pub fn last(&self) -> LastPointer {
        self.last
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct ButtonFrame {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
}

fn button_index(button: MouseButton) -> Option<usize> {
    match button {
        MouseButton::Left => Some(0),
        MouseButton::Right => Some(1),
        MouseButton::Middle => Some(2),
        _ => None,
    }
}

/// Frame-coherent mouse state.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    position: Vec2,
    pointer: PointerTracker,
    buttons: [ButtonFrame; 3],
    scroll: f32,
    cursor_in_window: bool,
}

impl MouseState {
    /// Nothing pressed, no pointer sample.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cursor position and returns the look offset it implies.
    pub fn on_cursor_moved(&mut self, x: f64, y: f64) -> Vec2 {
        self.position = Vec2::new(x as f32, y as f32);
        self.pointer.offset(self.position.x, self.position.y)
    }

    /// Records a button transition. Buttons beyond left/right/middle are ignored.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        let Some(idx) = button_index(button) else {
            return;
        };
        let frame = &mut self.buttons[idx];
        match state {
            ElementState::Pressed => {
                frame.pressed = true;
                frame.just_pressed = true;
            }
            ElementState::Released => {
                frame.pressed = false;
                frame.just_released = true;
            }
        }
    }

    /// Records a wheel event and returns its vertical amount in lines.
    pub fn on_scroll(&mut self, delta: MouseScrollDelta) -> f32 {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_x, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
        };
        self.scroll += lines;
        lines
    }

    /// Cursor entered the window.
    pub fn on_cursor_entered(&mut self) {
        self.cursor_in_window = true;
    }

    /// Cursor left the window. The next sample bootstraps the tracker again.
    pub fn on_cursor_left(&mut self) {
        self.cursor_in_window = false;
        self.pointer.reset();
    }

    /// Clears scroll and button edges. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.scroll = 0.0;
        for b in &mut self.buttons {
            b.just_pressed = false;
            b.just_released = false;
        }
    }

    /// Last cursor position in screen pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a button is held.
    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons[i].pressed)
    }

    /// Whether a button went down this frame.
    #[must_use]
    pub fn just_button_pressed(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons[i].just_pressed)
    }

    /// Whether a button came up this frame.
    #[must_use]
    pub fn just_button_released(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|i| self.buttons[i].just_released)
    }

    /// Scroll accumulated this frame, in lines (positive = away from user).
    #[must_use]
    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Whether the cursor is inside the window.
    #[must_use]
    pub fn is_cursor_in_window(&self) -> bool {
        self.cursor_in_window
    }
}
