//! Hand-built look-at view matrix.

use glam::{Mat4, Vec3, Vec4};

/// World-to-camera matrix for an eye at `eye` looking at `target`.
///
/// Builds the camera basis explicitly and composes `rotation * translation`,
/// where the rotation rows are the camera right, up and backward axes. Matches
/// a conventional right-handed look-at for any `up` not parallel to the view
/// direction. A parallel `up` collapses the basis and the result contains
/// NaN; callers must avoid it.
#[must_use]
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let direction = (eye - target).normalize();
    let right = up.normalize().cross(direction).normalize();
    let camera_up = direction.cross(right);

    let rotation = Mat4::from_cols(
        Vec4::new(right.x, camera_up.x, direction.x, 0.0),
        Vec4::new(right.y, camera_up.y, direction.y, 0.0),
        Vec4::new(right.z, camera_up.z, direction.z, 0.0),
        Vec4::W,
    );
    let translation = Mat4::from_translation(-eye);

    rotation * translation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_close(a: Mat4, b: Mat4) {
        for col in 0..4 {
            for row in 0..4 {
                assert!(
                    (a.col(col)[row] - b.col(col)[row]).abs() < 1e-5,
                    "mismatch at col={col}, row={row}: {a} vs {b}"
                );
            }
        }
    }

    #[test]
    fn test_eye_maps_to_origin() {
        let eye = Vec3::new(0.0, 1.0, 3.0);
        let view = look_at(eye, eye + Vec3::NEG_Z, Vec3::Y);
        let p = view.transform_point3(eye);
        assert!(p.length() < 1e-6, "eye mapped to {p}");
    }

    #[test]
    fn test_point_ahead_lands_on_negative_z() {
        let eye = Vec3::new(0.0, 1.0, 3.0);
        let view = look_at(eye, eye + Vec3::NEG_Z, Vec3::Y);
        let p = view.transform_point3(Vec3::new(0.0, 1.0, 2.0));
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);
        assert!((p.z + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_matches_glam_look_at_rh() {
        let cases = [
            (Vec3::new(0.0, 1.0, 3.0), Vec3::new(0.0, 1.0, 2.0), Vec3::Y),
            (Vec3::new(4.0, 2.0, -1.0), Vec3::new(-3.0, 0.5, 6.0), Vec3::Y),
            (Vec3::new(-2.0, 5.0, 5.0), Vec3::ZERO, Vec3::new(0.1, 1.0, 0.0)),
        ];
        for (eye, target, up) in cases {
            assert_mat_close(look_at(eye, target, up), Mat4::look_at_rh(eye, target, up));
        }
    }

    #[test]
    fn test_rotation_part_is_orthonormal() {
        let view = look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::new(-1.0, 0.0, 2.0), Vec3::Y);
        let r0 = view.row(0).truncate();
        let r1 = view.row(1).truncate();
        let r2 = view.row(2).truncate();
        for r in [r0, r1, r2] {
            assert!((r.length() - 1.0).abs() < 1e-5);
        }
        assert!(r0.dot(r1).abs() < 1e-5);
        assert!(r0.dot(r2).abs() < 1e-5);
        assert!(r1.dot(r2).abs() < 1e-5);
        assert_eq!(view.row(3), Vec4::W);
    }

    #[test]
    fn test_parallel_up_degenerates_to_nan() {
        let view = look_at(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0), Vec3::Y);
        assert!(view.is_nan());
    }
}
