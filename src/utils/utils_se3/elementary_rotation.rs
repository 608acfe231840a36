use nalgebra::{Matrix3, Unit, Vector3};

/// Returns the direction cosine matrix for a rotation of `angle` radians about the unit `axis`.
///
/// The matrix follows the passive (frame rotation) convention:
///
/// ```text
/// C(e, a) = cos(a) I + (1 - cos(a)) e e^T - sin(a) [e]x
/// ```
///
/// so that `C(e, a) * v` expresses a fixed vector `v` in a frame that has been rotated by `a`
/// about `e`.  Its transpose is the active rotation of a vector by `a` about `e`.  Revolute joints
/// use the transpose (see `RobotKinematicsModule`).
///
/// ## Example
/// ```
/// use nalgebra::{Vector3, Matrix3};
/// use astrokin::utils::utils_se3::elementary_rotation::elementary_rotation;
///
/// let c = elementary_rotation(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
/// let x_in_rotated_frame = c * Vector3::x();
/// assert!((x_in_rotated_frame - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
/// ```
pub fn elementary_rotation(axis: &Unit<Vector3<f64>>, angle: f64) -> Matrix3<f64> {
    let e = axis.as_ref();
    let (s, c) = angle.sin_cos();

    Matrix3::identity() * c + (e * e.transpose()) * (1.0 - c) - skew_symmetric(e) * s
}

/// Cross product matrix `[v]x` such that `[v]x * u = v x u`.
pub fn skew_symmetric(v: &Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(0.0, -v[2], v[1],
                 v[2], 0.0, -v[0],
                 -v[1], v[0], 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Rotation3;
    use std::f64::consts::PI;

    #[test]
    fn z_axis_matches_direction_cosine_convention() {
        let theta: f64 = 0.3;
        let (s, c) = theta.sin_cos();
        let m = elementary_rotation(&Vector3::z_axis(), theta);

        assert_eq!(m[(0, 0)], c);
        assert_eq!(m[(0, 1)], s);
        assert_eq!(m[(1, 0)], -s);
        assert_eq!(m[(1, 1)], c);
        assert_eq!(m[(0, 2)], 0.0);
        assert_eq!(m[(2, 0)], 0.0);
        assert_relative_eq!(m[(2, 2)], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn transpose_is_the_active_rotation() {
        let axis = Unit::new_normalize(Vector3::new(0.3, -1.2, 0.7));
        for &angle in &[-2.5, -0.4, 0.0, 0.9, PI] {
            let active = Rotation3::from_axis_angle(&axis, angle);
            assert_relative_eq!(elementary_rotation(&axis, angle).transpose(), *active.matrix(), epsilon = 1e-12);
        }
    }

    #[test]
    fn is_proper_orthonormal() {
        let axis = Unit::new_normalize(Vector3::new(1.0, 2.0, -3.0));
        let m = elementary_rotation(&axis, 1.234);
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn angles_about_the_same_axis_compose() {
        let axis = Unit::new_normalize(Vector3::new(-0.2, 0.5, 0.1));
        let combined = elementary_rotation(&axis, 0.4) * elementary_rotation(&axis, 1.1);
        assert_relative_eq!(combined, elementary_rotation(&axis, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn axis_is_left_unchanged() {
        let axis = Unit::new_normalize(Vector3::new(2.0, -1.0, 0.5));
        let m = elementary_rotation(&axis, -0.8);
        assert_relative_eq!(m * axis.into_inner(), axis.into_inner(), epsilon = 1e-12);
    }

    #[test]
    fn skew_symmetric_is_cross_product() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let u = Vector3::new(0.5, 4.0, -1.0);
        assert_relative_eq!(skew_symmetric(&v) * u, v.cross(&u), epsilon = 1e-12);
    }
}
