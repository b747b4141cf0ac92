//! The ground: an infinite horizontal half-space boundary.

use glam::Vec3;

/// Horizontal plane at `height`, unbounded in X and Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    /// Y coordinate of the plane.
    pub height: f32,
}

impl Default for GroundPlane {
    /// The plane through the origin.
    fn default() -> Self {
        Self { height: 0.0 }
    }
}

impl GroundPlane {
    /// Plane at the given height.
    #[must_use]
    pub fn at(height: f32) -> Self {
        Self { height }
    }

    /// Whether `point` is strictly below the plane. Touching counts as above.
    #[must_use]
    pub fn is_below(&self, point: Vec3) -> bool {
        point.y < self.height
    }
}
