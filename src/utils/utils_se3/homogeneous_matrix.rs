use nalgebra::{Matrix3, Matrix4, Rotation3, Vector3, Vector4};
use serde::{Serialize, Deserialize};

/// A representation for an SE(3) transform composed of a 4x4 homogeneous transformation matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousMatrix {
    matrix: Matrix4<f64>
}
impl HomogeneousMatrix {
    pub fn new(matrix: Matrix4<f64>) -> Self {
        Self {
            matrix
        }
    }
    pub fn new_identity() -> Self {
        Self::new(Matrix4::identity())
    }
    pub fn new_from_rotation_and_translation(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        let matrix = Self::rotation_and_translation_to_homogeneous_matrix(rotation, translation);
        return Self::new(matrix);
    }
    pub fn new_from_rotation(rotation: &Matrix3<f64>) -> Self {
        return Self::new_from_rotation_and_translation(rotation, &Vector3::zeros());
    }
    pub fn new_from_translation(translation: &Vector3<f64>) -> Self {
        return Self::new_from_rotation_and_translation(&Matrix3::identity(), translation);
    }
    /// Roll, pitch and yaw angles in nalgebra's `Rotation3::from_euler_angles` convention, followed
    /// by a translation.  Convenient for writing down fixed offset transforms.
    pub fn new_from_euler_angles(rx: f64, ry: f64, rz: f64, x: f64, y: f64, z: f64) -> Self {
        let rotation = Rotation3::from_euler_angles(rx, ry, rz);
        let translation = Vector3::new(x, y, z);
        return Self::new_from_rotation_and_translation(rotation.matrix(), &translation);
    }
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }
    /// Returns the rotation block of the homogeneous matrix, copied as is (no re-orthonormalization).
    pub fn rotation(&self) -> Matrix3<f64> {
        return self.matrix.fixed_slice::<3, 3>(0, 0).into_owned();
    }
    /// Returns the translation component of the homogeneous matrix.
    pub fn translation(&self) -> Vector3<f64> {
        return Vector3::new(self.matrix[(0,3)], self.matrix[(1,3)], self.matrix[(2,3)]);
    }
    /// multiplication
    pub fn multiply(&self, other: &HomogeneousMatrix) -> HomogeneousMatrix {
        let matrix = self.matrix * &other.matrix;
        return Self::new(matrix);
    }
    /// multiplication by a point
    pub fn multiply_by_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        let four_point = Vector4::new(point[0], point[1], point[2], 1.0);
        let result_point = self.matrix * &four_point;
        return Vector3::new(result_point[0], result_point[1], result_point[2]);
    }
    /// The inverse transform such that T * T^-1 = I.  Assumes the rotation block is orthonormal.
    pub fn inverse(&self) -> Self {
        let rot_mat_transpose = self.rotation().transpose();
        let new_translation = -(rot_mat_transpose * self.translation());
        return Self::new_from_rotation_and_translation(&rot_mat_transpose, &new_translation);
    }
    /// Convenience function for mapping rotation and translation components to a 4x4 matrix.
    pub fn rotation_and_translation_to_homogeneous_matrix(rotation: &Matrix3<f64>, translation: &Vector3<f64>) -> Matrix4<f64> {
        let mut out_mat = Matrix4::identity();
        out_mat.fixed_slice_mut::<3, 3>(0, 0).copy_from(rotation);
        out_mat.fixed_slice_mut::<3, 1>(0, 3).copy_from(translation);
        return out_mat;
    }
}
impl Default for HomogeneousMatrix {
    fn default() -> Self {
        Self::new_identity()
    }
}
