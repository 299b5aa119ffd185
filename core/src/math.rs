//! Math type aliases and helper functions.
//!
//! All transforms are homogeneous `f32` matrices: [`Mat3`] for 2D scenes and
//! [`Mat4`] for 3D scenes. A point is transformed as `matrix * point`, so in a
//! product `a * b` the transform `b` is applied first.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 3x3 homogeneous matrix for 2D transforms (f32).
pub type Mat3 = nalgebra::Matrix3<f32>;

/// 4x4 homogeneous matrix for 3D transforms (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Quaternion (f32). Stored as `[x, y, z, w]` in memory.
/// Use [`quat_from_xyzw`] or `Quaternion::new(w, x, y, z)` to construct.
pub type Quat = nalgebra::Quaternion<f32>;

// ===== 2D =====

/// Build a translation-only 3x3 matrix.
pub fn mat3_from_translation(t: Vec2) -> Mat3 {
    Mat3::new_translation(&t)
}

/// Build a counter-clockwise rotation (radians) as a 3x3 matrix.
pub fn mat3_from_rotation(angle: f32) -> Mat3 {
    nalgebra::Rotation2::new(angle).to_homogeneous()
}

/// Build a non-uniform scaling 3x3 matrix.
pub fn mat3_from_scaling(s: Vec2) -> Mat3 {
    Mat3::new_nonuniform_scaling(&s)
}

/// Build a 3x3 TRS matrix. Scaling is applied first, translation last.
pub fn mat3_from_translation_rotation_scaling(translation: Vec2, angle: f32, scaling: Vec2) -> Mat3 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let result = Mat3::new(
        c * scaling.x, -s * scaling.y, translation.x,
        s * scaling.x,  c * scaling.y, translation.y,
        0.0,            0.0,           1.0,
    );
    result
}

// ===== 3D =====

/// Build a 4x4 TRS matrix from scale, rotation (quaternion), and translation.
pub fn mat4_from_scale_rotation_translation(
    scale: Vec3,
    rotation: Quat,
    translation: Vec3,
) -> Mat4 {
    let r = nalgebra::UnitQuaternion::new_unchecked(rotation);
    let m = r.to_rotation_matrix();
    let rm = m.matrix();
    #[rustfmt::skip]
    let result = Mat4::new(
        rm[(0, 0)] * scale.x, rm[(0, 1)] * scale.y, rm[(0, 2)] * scale.z, translation.x,
        rm[(1, 0)] * scale.x, rm[(1, 1)] * scale.y, rm[(1, 2)] * scale.z, translation.y,
        rm[(2, 0)] * scale.x, rm[(2, 1)] * scale.y, rm[(2, 2)] * scale.z, translation.z,
        0.0,                  0.0,                  0.0,                  1.0,
    );
    result
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}

/// Build a non-uniform scaling 4x4 matrix.
pub fn mat4_from_scaling(s: Vec3) -> Mat4 {
    Mat4::new_nonuniform_scaling(&s)
}

/// Create a quaternion from x, y, z, w components.
pub fn quat_from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Quat {
    nalgebra::Quaternion::new(w, x, y, z)
}

/// Create a quaternion from a `[x, y, z, w]` array.
pub fn quat_from_array(a: [f32; 4]) -> Quat {
    nalgebra::Quaternion::new(a[3], a[0], a[1], a[2])
}

/// Create a quaternion from rotation around the X axis.
pub fn quat_from_rotation_x(angle: f32) -> Quat {
    nalgebra::UnitQuaternion::from_axis_angle(&nalgebra::Vector3::x_axis(), angle).into_inner()
}

/// Create a quaternion from rotation around the Y axis.
pub fn quat_from_rotation_y(angle: f32) -> Quat {
    nalgebra::UnitQuaternion::from_axis_angle(&nalgebra::Vector3::y_axis(), angle).into_inner()
}

/// Create a quaternion from rotation around the Z axis.
pub fn quat_from_rotation_z(angle: f32) -> Quat {
    nalgebra::UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), angle).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_trs_matrix() {
        let m = mat4_from_scale_rotation_translation(
            Vec3::new(1.0, 1.0, 1.0),
            Quat::identity(),
            Vec3::zeros(),
        );
        assert!((m - Mat4::identity()).norm() < 1e-6);
    }

    #[test]
    fn translation_matrix() {
        let m = mat4_from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(1, 3)], 2.0);
        assert_eq!(m[(2, 3)], 3.0);
    }

    #[test]
    fn trs_2d_matches_product() {
        let t = Vec2::new(3.0, -1.0);
        let s = Vec2::new(2.0, 0.5);
        let combined = mat3_from_translation_rotation_scaling(t, 0.3, s);
        let product = mat3_from_translation(t) * mat3_from_rotation(0.3) * mat3_from_scaling(s);
        assert!((combined - product).norm() < 1e-6);
    }

    #[test]
    fn rotation_2d_quarter_turn() {
        let r = mat3_from_rotation(FRAC_PI_2);
        let p = r * nalgebra::Vector3::new(1.0, 0.0, 1.0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_z_matches_2d_rotation() {
        let q = quat_from_rotation_z(0.7);
        let m = mat4_from_scale_rotation_translation(Vec3::new(1.0, 1.0, 1.0), q, Vec3::zeros());
        let r = mat3_from_rotation(0.7);
        assert!((m[(0, 0)] - r[(0, 0)]).abs() < 1e-6);
        assert!((m[(0, 1)] - r[(0, 1)]).abs() < 1e-6);
        assert!((m[(1, 0)] - r[(1, 0)]).abs() < 1e-6);
    }

    #[test]
    fn quat_array_order() {
        let q = quat_from_array([0.1, 0.2, 0.3, 0.9]);
        assert_eq!(q, quat_from_xyzw(0.1, 0.2, 0.3, 0.9));
        assert_eq!(q.w, 0.9);
    }

    #[test]
    fn translation_then_scaling_is_not_commutative() {
        let t = mat4_from_translation(Vec3::new(1.0, 0.0, 0.0));
        let s = mat4_from_scaling(Vec3::new(2.0, 2.0, 2.0));
        assert_ne!(t * s, s * t);
        assert_eq!((t * s)[(0, 3)], 1.0);
        assert_eq!((s * t)[(0, 3)], 2.0);
    }
}
