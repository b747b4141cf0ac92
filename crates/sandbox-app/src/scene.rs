//! Per-frame data handed to the renderer.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Polygon rasterization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Filled triangles.
    #[default]
    Fill,
    /// Triangle edges only.
    Wireframe,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    /// World-to-camera matrix.
    pub view: Mat4,
    /// Camera-to-clip matrix built from the current zoom.
    pub projection: Mat4,
    /// Eye position, for lighting.
    pub camera_position: Vec3,
    /// Facing direction, for spot lights attached to the camera.
    pub camera_front: Vec3,
    /// Model matrix of the thrown cube, present only while it is in flight.
    pub projectile_model: Option<Mat4>,
    /// Model matrix of the ground quad.
    pub ground_model: Mat4,
    /// Rasterization mode.
    pub render_mode: RenderMode,
}

impl FrameView {
    /// Pack the camera matrices for a uniform buffer.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            camera_pos: self.camera_position.extend(1.0).to_array(),
        }
    }
}

/// Camera uniform block (std140-compatible, 144 bytes).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    /// Column-major view matrix.
    pub view: [[f32; 4]; 4],
    /// Column-major projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Eye position, w = 1.
    pub camera_pos: [f32; 4],
}

/// Translate to `position`, then scale uniformly.
#[must_use]
pub fn projectile_model(position: Vec3, scale: f32) -> Mat4 {
    Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(scale))
}
