//! Free-look camera driven by Euler angles.
//!
//! Yaw and pitch are stored in degrees. The `front`, `right` and `up` vectors
//! are derived from them and recomputed on every orientation change; they are
//! never written directly.

use glam::{Mat4, Vec3};

use crate::look_at::look_at;

/// Pitch is clamped to this magnitude so the view never flips at the poles.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by scrolling, in degrees.
pub const MIN_ZOOM: f32 = 1.0;
/// Widest field of view reachable by scrolling, in degrees.
pub const MAX_ZOOM: f32 = 45.0;

/// Keyboard movement directions, independent of any windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMovement {
    /// Along `front`.
    Forward,
    /// Against `front`.
    Backward,
    /// Against `right`.
    Left,
    /// Along `right`.
    Right,
}

/// Tunable camera options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// World units per second.
    pub movement_speed: f32,
    /// Degrees of rotation per pointer unit.
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            mouse_sensitivity: 0.05,
            zoom: MAX_ZOOM,
        }
    }
}

/// First-person free-look camera.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0)
    }
}

impl Camera {
    /// Create a camera and derive its basis immediately.
    ///
    /// A yaw of -90° faces -Z in a right-handed, Y-up world.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let defaults = CameraSettings::default();
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: world_up,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: defaults.movement_speed,
            mouse_sensitivity: defaults.mouse_sensitivity,
            zoom: defaults.zoom,
        };
        camera.update_camera_vectors();
        camera
    }

    /// Camera at `position` with +Y up, facing -Z.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, -90.0, 0.0)
    }

    /// Replace speed, sensitivity and zoom. Zoom is clamped to [1, 45].
    #[must_use]
    pub fn with_settings(mut self, settings: CameraSettings) -> Self {
        self.movement_speed = settings.movement_speed;
        self.mouse_sensitivity = settings.mouse_sensitivity;
        self.zoom = settings.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self
    }

    /// Move along `front` or `right` by `movement_speed * delta_seconds`.
    pub fn process_keyboard_input(&mut self, direction: CameraMovement, delta_seconds: f32) {
        let distance = self.movement_speed * delta_seconds;
        // Re-normalized so accumulated drift never changes the walking speed.
        let front = self.front.normalize();
        let right = self.right.normalize();
        match direction {
            CameraMovement::Forward => self.position += front * distance,
            CameraMovement::Backward => self.position -= front * distance,
            CameraMovement::Left => self.position -= right * distance,
            CameraMovement::Right => self.position += right * distance,
        }
    }

    /// Rotate by a pointer offset. Positive `dx` turns right, positive `dy`
    /// looks up.
    pub fn process_pointer_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_camera_vectors();
    }

    /// Narrow (positive `dy`) or widen the field of view, clamped to [1, 45].
    pub fn process_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// World-to-camera matrix looking from `position` along `front`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        look_at(self.position, self.position + self.front, self.up)
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit facing direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera-up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// The fixed world up reference.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees, unbounded.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn zoom_degrees(&self) -> f32 {
        self.zoom
    }

    /// World units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Degrees per pointer unit.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    fn update_camera_vectors(&mut self) {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch).normalize();
        // Cross products of unit vectors still drift; normalize both.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec3, b: Vec3) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    fn assert_orthonormal(cam: &Camera) {
        let (f, r, u) = (cam.front(), cam.right(), cam.up());
        for v in [f, r, u] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v}");
        }
        assert!(f.dot(r).abs() < EPS);
        assert!(f.dot(u).abs() < EPS);
        assert!(r.dot(u).abs() < EPS);
        // Right-handed: right x up = -front (camera looks down its local -Z).
        assert_vec_close(r.cross(u), -f);
    }

    #[test]
    fn test_initial_state_faces_negative_z() {
        let cam = Camera::at(Vec3::new(0.0, 1.0, 3.0));
        assert_vec_close(cam.front(), Vec3::NEG_Z);
        assert_vec_close(cam.right(), Vec3::X);
        assert_vec_close(cam.up(), Vec3::Y);
        assert_eq!(cam.zoom_degrees(), 45.0);
        assert_eq!(cam.world_up(), Vec3::Y);
    }

    #[test]
    fn test_basis_orthonormal_across_angles() {
        for yaw_step in -8..=8 {
            for pitch in [-89.0, -60.0, -10.0, 0.0, 33.3, 75.0, 89.0] {
                let yaw = yaw_step as f32 * 97.5;
                let cam = Camera::new(Vec3::ZERO, Vec3::Y, yaw, pitch);
                assert_orthonormal(&cam);
            }
        }
    }

    #[test]
    fn test_basis_stays_orthonormal_after_many_updates() {
        let mut cam = Camera::default();
        for i in 0..10_000 {
            let dy = if i % 2 == 0 { 3.0 } else { -2.9 };
            cam.process_pointer_movement(7.3, dy, true);
        }
        assert_orthonormal(&cam);
    }

    #[test]
    fn test_pointer_x_turns_right() {
        let mut cam = Camera::default();
        // 90 degrees of yaw at the default sensitivity.
        cam.process_pointer_movement(1800.0, 0.0, true);
        assert!((cam.yaw() - 0.0).abs() < 1e-3);
        assert_vec_close(cam.front(), Vec3::X);
    }

    #[test]
    fn test_pointer_y_looks_up() {
        let mut cam = Camera::default();
        cam.process_pointer_movement(0.0, 100.0, true);
        assert!((cam.pitch() - 5.0).abs() < 1e-4);
        assert!(cam.front().y > 0.0);
    }

    #[test]
    fn test_pitch_clamps_at_upper_limit() {
        let mut cam = Camera::default();
        for _ in 0..50 {
            cam.process_pointer_movement(0.0, 1000.0, true);
            assert!(cam.pitch() <= PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), 89.0);
    }

    #[test]
    fn test_pitch_clamps_at_lower_limit() {
        let mut cam = Camera::default();
        for _ in 0..50 {
            cam.process_pointer_movement(0.0, -1000.0, true);
            assert!(cam.pitch() >= -PITCH_LIMIT);
        }
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn test_unconstrained_pitch_passes_limit() {
        let mut cam = Camera::default();
        cam.process_pointer_movement(0.0, 2000.0, false);
        assert!((cam.pitch() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_yaw_wraps_through_trigonometry() {
        let cam = Camera::new(Vec3::ZERO, Vec3::Y, -90.0 + 360.0 * 5.0, 0.0);
        assert!((cam.front() - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_zoom_clamps_low() {
        let mut cam = Camera::default();
        for _ in 0..100 {
            cam.process_scroll(1.0);
            assert!(cam.zoom_degrees() >= MIN_ZOOM);
        }
        assert_eq!(cam.zoom_degrees(), 1.0);
    }

    #[test]
    fn test_zoom_clamps_high() {
        let mut cam = Camera::default();
        cam.process_scroll(10.0);
        assert_eq!(cam.zoom_degrees(), 35.0);
        for _ in 0..100 {
            cam.process_scroll(-3.0);
        }
        assert_eq!(cam.zoom_degrees(), 45.0);
    }

    #[test]
    fn test_settings_zoom_is_clamped() {
        let cam = Camera::default().with_settings(CameraSettings {
            zoom: 90.0,
            ..Default::default()
        });
        assert_eq!(cam.zoom_degrees(), MAX_ZOOM);
    }

    #[test]
    fn test_keyboard_moves_along_front_and_right() {
        let mut cam = Camera::at(Vec3::new(0.0, 1.0, 3.0));
        cam.process_keyboard_input(CameraMovement::Forward, 0.2);
        assert_vec_close(cam.position(), Vec3::new(0.0, 1.0, 2.0));
        cam.process_keyboard_input(CameraMovement::Backward, 0.2);
        assert_vec_close(cam.position(), Vec3::new(0.0, 1.0, 3.0));
        cam.process_keyboard_input(CameraMovement::Right, 0.1);
        assert_vec_close(cam.position(), Vec3::new(0.5, 1.0, 3.0));
        cam.process_keyboard_input(CameraMovement::Left, 0.3);
        assert_vec_close(cam.position(), Vec3::new(-1.0, 1.0, 3.0));
    }

    #[test]
    fn test_forward_follows_pitch() {
        let mut cam = Camera::default().with_settings(CameraSettings {
            movement_speed: 1.0,
            ..Default::default()
        });
        cam.process_pointer_movement(0.0, 900.0, true);
        cam.process_keyboard_input(CameraMovement::Forward, 1.0);
        assert!((cam.position().length() - 1.0).abs() < EPS);
        assert!(cam.position().y > 0.7);
    }

    #[test]
    fn test_view_matrix_maps_eye_and_front() {
        let cam = Camera::at(Vec3::new(0.0, 1.0, 3.0));
        let view = cam.view_matrix();
        assert!(view.transform_point3(Vec3::new(0.0, 1.0, 3.0)).length() < EPS);
        let ahead = view.transform_point3(Vec3::new(0.0, 1.0, 2.0));
        assert!(ahead.x.abs() < EPS && ahead.y.abs() < EPS);
        assert!(ahead.z < 0.0);
    }

    #[test]
    fn test_view_matrix_matches_look_to() {
        let mut cam = Camera::at(Vec3::new(2.0, 3.0, -4.0));
        cam.process_pointer_movement(250.0, -180.0, true);
        let expected = Mat4::look_to_rh(cam.position(), cam.front(), cam.up());
        let view = cam.view_matrix();
        for col in 0..4 {
            assert!((view.col(col) - expected.col(col)).length() < 1e-4);
        }
    }
}
