pub mod elementary_rotation;
pub mod homogeneous_matrix;
