//! Rigid transforms applied to object-space vertices.
//!
//! There is no matrix type: the combined Euler rotation is expanded inline,
//! and translation is a plain component-wise add.

use crate::math::vec3::Vec3;

/// Rotates `p` by Euler angles in radians.
///
/// `angles.x` is yaw (about Z), `angles.y` is pitch (about Y) and `angles.z`
/// is roll (about X). The result equals `Rz(yaw) * Ry(pitch) * Rx(roll) * p`,
/// so roll is applied first.
pub fn rotate(p: Vec3, angles: Vec3) -> Vec3 {
    let (sa, ca) = angles.x.sin_cos();
    let (sb, cb) = angles.y.sin_cos();
    let (sg, cg) = angles.z.sin_cos();

    Vec3::new(
        p.x * ca * cb + p.y * (ca * sb * sg - sa * cg) + p.z * (ca * sb * cg + sa * sg),
        p.x * sa * cb + p.y * (sa * sb * sg + ca * cg) + p.z * (sa * sb * cg - ca * sg),
        -p.x * sb + p.y * cb * sg + p.z * cb * cg,
    )
}

/// Offsets `p` by `offset`.
#[inline]
pub fn translate(p: Vec3, offset: Vec3) -> Vec3 {
    p + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn zero_rotation_is_identity() {
        for p in [
            Vec3::new(0.5, -0.5, 0.5),
            Vec3::new(-3.0, 7.25, 0.0),
            Vec3::new(1e4, -1e-4, 42.0),
        ] {
            assert_eq!(rotate(p, Vec3::ZERO), p);
        }
    }

    #[test]
    fn yaw_rotates_about_z() {
        let r = rotate(Vec3::new(1.0, 0.0, 0.0), Vec3::new(FRAC_PI_2, 0.0, 0.0));
        assert_relative_eq!(r, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn pitch_rotates_about_y() {
        let r = rotate(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, FRAC_PI_2, 0.0));
        assert_relative_eq!(r, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-6);

        // Half a turn of pitch flips the far face toward the viewer.
        let r = rotate(Vec3::new(0.0, 0.0, 0.5), Vec3::new(0.0, PI, 0.0));
        assert_relative_eq!(r, Vec3::new(0.0, 0.0, -0.5), epsilon = 1e-6);
    }

    #[test]
    fn roll_rotates_about_x() {
        let r = rotate(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, FRAC_PI_2));
        assert_relative_eq!(r, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(0.5, -0.5, 0.5);
        let r = rotate(p, Vec3::new(0.3, 1.1, -2.4));
        let length = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert_relative_eq!(length(r), length(p), epsilon = 1e-6);
    }

    #[test]
    fn translate_adds_componentwise() {
        let p = translate(Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 0.5, 2.0));
        assert_eq!(p, Vec3::new(0.0, 2.5, 5.0));
    }
}
