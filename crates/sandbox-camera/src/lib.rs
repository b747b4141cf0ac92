//! Free-look camera: yaw/pitch orientation, keyboard/pointer/scroll control,
//! and view/projection matrices for an OpenGL-style renderer.

pub mod camera;
pub mod look_at;
pub mod projection;

pub use camera::{Camera, CameraMovement, CameraSettings, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};
pub use look_at::look_at;
pub use projection::Perspective;
