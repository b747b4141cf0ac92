//! Sandbox application layer: the session that owns the camera and the thrown
//! cube, frame timing, per-frame render data, and a scripted headless demo.

pub mod demo;
pub mod frame_timer;
pub mod platform;
pub mod scene;
pub mod session;

pub use demo::{DemoPlan, DemoReport, run_demo};
pub use frame_timer::FrameTimer;
pub use platform::{PlatformDirs, PlatformError};
pub use scene::{CameraUniform, FrameView, RenderMode};
pub use session::Session;
