use thiserror::Error;

/// A common error type returned by functions throughout the crate.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AstrokinError {
    /// The robot model breaks the topological ordering or holds a dangling reference.
    #[error("Malformed model: {0}")]
    MalformedModel(String),
    /// The joint variable vector is too short for a `q_idx` referenced by the model.
    #[error("Insufficient joint variables: model requires at least {required}, but {given} were given")]
    InsufficientJointVariables { required: usize, given: usize },
    #[error("Serialization error: {0}")]
    Serialization(String)
}
impl AstrokinError {
    pub fn new_malformed_model_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("{} -- File: {}, Line: {}", s, file, line);
        return Self::MalformedModel(s);
    }
    pub fn new_insufficient_joint_variables_error(required: usize, given: usize) -> Self {
        return Self::InsufficientJointVariables { required, given };
    }
    pub fn new_serialization_error(s: &str, file: &str, line: u32) -> Self {
        let s = format!("{} -- File: {}, Line: {}", s, file, line);
        return Self::Serialization(s);
    }
    /// Returns a `MalformedModel` error if `given_idx` is not a valid slot in a collection of
    /// length `length_of_array`.
    pub fn new_check_for_idx_out_of_bound_error(given_idx: usize, length_of_array: usize, file: &str, line: u32) -> Result<(), Self> {
        if given_idx >= length_of_array {
            let s = format!("Index {:?} is too large for the array of length {:?}", given_idx, length_of_array);
            return Err(Self::new_malformed_model_error(&s, file, line));
        }
        Ok(())
    }
}
