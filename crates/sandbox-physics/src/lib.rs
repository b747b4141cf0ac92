//! Projectile physics for the thrown cube: launch, constant-gravity
//! integration, and ground-plane termination.

pub mod ground;
pub mod projectile;

pub use ground::GroundPlane;
pub use projectile::{GRAVITY, LAUNCH_SPEED, Projectile};
