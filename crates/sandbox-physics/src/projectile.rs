//! A single thrown object falling under constant gravity.
//!
//! Lifecycle: inactive until [`Projectile::launch`], stepped every frame while
//! active, and deactivated the first time it drops below the ground plane.

use glam::Vec3;
use tracing::debug;

use crate::ground::GroundPlane;

/// Default downward acceleration, world units per second squared.
pub const GRAVITY: f32 = 4.4;

/// Default launch speed, world units per second.
pub const LAUNCH_SPEED: f32 = 10.0;

/// Kinematic state of the thrown cube.
#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec3,
    velocity: Vec3,
    active: bool,
    gravity: f32,
    ground: GroundPlane,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new(GRAVITY)
    }
}

impl Projectile {
    /// An inactive projectile with the given gravity and the ground at y = 0.
    #[must_use]
    pub fn new(gravity: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            active: false,
            gravity,
            ground: GroundPlane::default(),
        }
    }

    /// Replace the ground plane.
    #[must_use]
    pub fn with_ground(mut self, ground: GroundPlane) -> Self {
        self.ground = ground;
        self
    }

    /// Activate at `from` moving along `direction` at `speed`.
    ///
    /// `direction` should be unit length. Any trajectory in flight is
    /// overwritten; callers that allow one projectile at a time check
    /// [`is_active`](Self::is_active) first.
    pub fn launch(&mut self, from: Vec3, direction: Vec3, speed: f32) {
        self.active = true;
        self.position = from;
        self.velocity = direction * speed;
        debug!(position = %self.position, velocity = %self.velocity, "Projectile launched");
    }

    /// Advance by `dt` seconds. Does nothing while inactive.
    ///
    /// The vertical displacement uses the pre-step velocity plus the exact
    /// constant-acceleration drop `g·dt²/2`; the velocity is decremented after.
    pub fn step(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let dx = self.velocity.x * dt;
        let dy = self.velocity.y * dt - self.gravity * dt * dt / 2.0;
        let dz = self.velocity.z * dt;

        self.velocity.y -= self.gravity * dt;
        self.position += Vec3::new(dx, dy, dz);

        if self.ground.is_below(self.position) {
            self.active = false;
            debug!(position = %self.position, "Projectile hit the ground");
        }
    }

    /// Whether the projectile is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current position. Stale once inactive.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current velocity. Stale once inactive.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Downward acceleration.
    #[must_use]
    pub fn gravity(&self) -> f32 {
        self.gravity
    }
}
