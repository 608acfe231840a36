use nalgebra::{Matrix3, Unit, Vector3};
use rayon::prelude::*;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::{RobotModelModule, AXIS_NORM_TOLERANCE};
use crate::utils::utils_console::{astrokin_print, PrintColor, PrintMode};
use crate::utils::utils_errors::AstrokinError;
use crate::utils::utils_robot::joint::{Joint, JointType, ParentLink};
use crate::utils::utils_se3::elementary_rotation::elementary_rotation;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;

/// The `RobotKinematicsModule` computes the forward kinematics of a free-floating multibody system.
/// Given the pose of the base body in the inertial frame and the joint variables, it returns the
/// rotation, position and motion axis of every joint and the rotation and position of every link,
/// all expressed in the inertial frame.
///
/// Joints are visited once, in increasing id order.  Each joint's frame is placed relative to its
/// parent link (or to the base link), then the joint motion and the link offset are applied to
/// place its child link.
///
/// # Example
/// ```
/// use nalgebra::{Matrix3, Vector3};
/// use astrokin::robot_modules::robot_model_module::RobotModelModule;
/// use astrokin::robot_modules::robot_kinematics_module::RobotKinematicsModule;
/// use astrokin::utils::utils_robot::joint::{Joint, ParentLink};
/// use astrokin::utils::utils_robot::link::{BaseLink, Link};
/// use astrokin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
///
/// let joints = vec![
///     Joint::new_revolute(0, ParentLink::Base, 0, Vector3::z(), HomogeneousMatrix::new_identity()),
///     Joint::new_revolute(1, ParentLink::Link(0), 1, Vector3::z(), HomogeneousMatrix::new_from_translation(&Vector3::new(0.5, 0.0, 0.0))),
/// ];
/// let links = vec![
///     Link::new(0, HomogeneousMatrix::new_from_translation(&Vector3::new(0.5, 0.0, 0.0))),
///     Link::new(1, HomogeneousMatrix::new_from_translation(&Vector3::new(0.5, 0.0, 0.0))),
/// ];
/// let model = RobotModelModule::new("planar_arm", BaseLink::new_identity(), joints, links).expect("error");
/// let robot_kinematics_module = RobotKinematicsModule::new(model);
///
/// let fk_res = robot_kinematics_module.compute_fk(&Matrix3::identity(), &Vector3::zeros(), &[0.0, 0.0]).expect("error");
/// assert!((fk_res.link_positions()[1] - Vector3::new(1.5, 0.0, 0.0)).norm() < 1e-12);
/// assert!((fk_res.link_geometry_vectors()[1] - Vector3::new(0.5, 0.0, 0.0)).norm() < 1e-12);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotKinematicsModule {
    robot_model_module: RobotModelModule,
    num_required_joint_variables: usize
}
impl RobotKinematicsModule {
    pub fn new(robot_model_module: RobotModelModule) -> Self {
        let num_required_joint_variables = robot_model_module.num_required_joint_variables();
        Self {
            robot_model_module,
            num_required_joint_variables
        }
    }
    /// Computes forward kinematics into a freshly allocated result.
    ///
    /// `base_rotation` must be a proper rotation matrix; it is not re-validated.
    /// `joint_values` must hold at least `num_required_joint_variables()` entries.
    pub fn compute_fk(&self, base_rotation: &Matrix3<f64>, base_position: &Vector3<f64>, joint_values: &[f64]) -> Result<RobotFKResult, AstrokinError> {
        let mut output = RobotFKResult::new_empty(self);
        self.compute_fk_in_place(base_rotation, base_position, joint_values, &mut output)?;
        return Ok(output);
    }
    /// Same as `compute_fk`, but writes into a caller-owned result so that repeated evaluations can
    /// reuse its buffers.  The result is resized if it does not match the model.  If an error is
    /// returned, `output` is left untouched.
    pub fn compute_fk_in_place(&self, base_rotation: &Matrix3<f64>, base_position: &Vector3<f64>, joint_values: &[f64], output: &mut RobotFKResult) -> Result<(), AstrokinError> {
        if joint_values.len() < self.num_required_joint_variables {
            return Err(AstrokinError::new_insufficient_joint_variables_error(self.num_required_joint_variables, joint_values.len()));
        }

        let (joint_transforms, link_transforms) = self.compute_transforms(base_rotation, base_position, joint_values)?;

        let joints = self.robot_model_module.joints();
        let links = self.robot_model_module.links();
        let n = joints.len();
        output.resize(n);
        // Every reference has been checked by `compute_transforms`; nothing below can fail.

        for i in 0..n {
            let joint_rotation = joint_transforms[i].rotation();
            output.joint_axes[i] = joint_rotation * joints[i].axis();
            output.joint_rotations[i] = joint_rotation;
            output.joint_positions[i] = joint_transforms[i].translation();

            output.link_rotations[i] = link_transforms[i].rotation();
            output.link_positions[i] = link_transforms[i].translation();
        }

        for (i, link) in links.iter().enumerate() {
            output.link_geometry_vectors[i] = output.link_positions[i] - output.joint_positions[link.parent_joint_idx()];
        }

        Ok(())
    }
    /// Evaluates several independent inputs in parallel against the same model.
    pub fn compute_fk_batch(&self, inputs: &[RobotFKInput]) -> Vec<Result<RobotFKResult, AstrokinError>> {
        inputs.par_iter()
            .map(|input| self.compute_fk(&input.base_rotation, &input.base_position, &input.joint_values))
            .collect()
    }
    pub fn robot_model_module(&self) -> &RobotModelModule {
        &self.robot_model_module
    }
    pub fn robot_name(&self) -> &str {
        return self.robot_model_module.robot_name()
    }
    pub fn num_required_joint_variables(&self) -> usize {
        self.num_required_joint_variables
    }
    /// Inertial-frame transforms of every joint and every link, indexed by id.
    fn compute_transforms(&self, base_rotation: &Matrix3<f64>, base_position: &Vector3<f64>, joint_values: &[f64]) -> Result<(Vec<HomogeneousMatrix>, Vec<HomogeneousMatrix>), AstrokinError> {
        let joints = self.robot_model_module.joints();
        let links = self.robot_model_module.links();
        let n = joints.len();
        if links.len() != n {
            return Err(AstrokinError::new_malformed_model_error(&format!("Model has {} joints but {} links", n, links.len()), file!(), line!()));
        }

        let base_transform = HomogeneousMatrix::new_from_rotation_and_translation(base_rotation, base_position)
            .multiply(self.robot_model_module.base_link().origin_offset());

        let mut joint_transforms: Vec<HomogeneousMatrix> = Vec::with_capacity(n);
        let mut link_transforms: Vec<Option<HomogeneousMatrix>> = vec![None; n];

        for (i, joint) in joints.iter().enumerate() {
            if joint.joint_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Joint in slot {} has joint_idx {}", i, joint.joint_idx()), file!(), line!()));
            }

            let parent_transform = match joint.parent_link() {
                ParentLink::Base => { &base_transform }
                ParentLink::Link(parent_link_idx) => {
                    match link_transforms.get(*parent_link_idx) {
                        Some(Some(t)) => { t }
                        _ => {
                            return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} references link {}, which has not been placed yet", i, parent_link_idx), file!(), line!()));
                        }
                    }
                }
            };
            let joint_transform = parent_transform.multiply(joint.origin_offset());

            let child_link_idx = joint.child_link_idx();
            let link = self.robot_model_module.get_link_by_idx(child_link_idx)?;
            if link_transforms[child_link_idx].is_some() {
                return Err(AstrokinError::new_malformed_model_error(&format!("Link {} is driven by more than one joint", child_link_idx), file!(), line!()));
            }

            let joint_variable_transform = Self::compute_joint_variable_transform(joint, joint_values, self.num_required_joint_variables)?;
            link_transforms[child_link_idx] = Some(joint_transform.multiply(&joint_variable_transform).multiply(link.origin_offset()));
            joint_transforms.push(joint_transform);
        }

        let mut out_link_transforms = Vec::with_capacity(n);
        for (i, t) in link_transforms.into_iter().enumerate() {
            match t {
                Some(t) => { out_link_transforms.push(t); }
                None => {
                    return Err(AstrokinError::new_malformed_model_error(&format!("Link {} is not driven by any joint", i), file!(), line!()));
                }
            }
        }

        for (i, link) in links.iter().enumerate() {
            let parent_joint_idx = link.parent_joint_idx();
            let parent_joint = self.get_joint(parent_joint_idx)?;
            if parent_joint.child_link_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Link {} names joint {} as its parent, but that joint drives link {}", i, parent_joint_idx, parent_joint.child_link_idx()), file!(), line!()));
            }
        }

        Ok((joint_transforms, out_link_transforms))
    }
    /// The transform contributed by the joint variable itself, between the joint frame and the
    /// link offset.  Revolute joints use the transpose of the elementary rotation.
    fn compute_joint_variable_transform(joint: &Joint, joint_values: &[f64], num_required_joint_variables: usize) -> Result<HomogeneousMatrix, AstrokinError> {
        let joint_value = |q_idx: usize| -> Result<f64, AstrokinError> {
            joint_values.get(q_idx).copied()
                .ok_or_else(|| AstrokinError::new_insufficient_joint_variables_error(num_required_joint_variables.max(q_idx.saturating_add(1)), joint_values.len()))
        };

        if !joint.joint_type().is_fixed() && (joint.axis().norm() - 1.0).abs() > AXIS_NORM_TOLERANCE {
            return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} has a non-unit axis {:?}", joint.joint_idx(), joint.axis()), file!(), line!()));
        }

        return match joint.joint_type() {
            JointType::Revolute { q_idx } => {
                let angle = joint_value(*q_idx)?;
                let axis = Unit::new_unchecked(*joint.axis());
                Ok(HomogeneousMatrix::new_from_rotation(&elementary_rotation(&axis, angle).transpose()))
            }
            JointType::Prismatic { q_idx } => {
                let displacement = joint_value(*q_idx)?;
                Ok(HomogeneousMatrix::new_from_translation(&(joint.axis() * displacement)))
            }
            JointType::Fixed => { Ok(HomogeneousMatrix::new_identity()) }
        }
    }
    fn get_joint(&self, joint_idx: usize) -> Result<&Joint, AstrokinError> {
        self.robot_model_module.get_joint_by_idx(joint_idx)
    }
}

/// One independent forward kinematics query, used by `RobotKinematicsModule::compute_fk_batch`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotFKInput {
    base_rotation: Matrix3<f64>,
    base_position: Vector3<f64>,
    joint_values: Vec<f64>
}
impl RobotFKInput {
    pub fn new(base_rotation: Matrix3<f64>, base_position: Vector3<f64>, joint_values: Vec<f64>) -> Self {
        Self {
            base_rotation,
            base_position,
            joint_values
        }
    }
    pub fn base_rotation(&self) -> &Matrix3<f64> {
        &self.base_rotation
    }
    pub fn base_position(&self) -> &Vector3<f64> {
        &self.base_position
    }
    pub fn joint_values(&self) -> &Vec<f64> {
        &self.joint_values
    }
}

/// The output of a forward kinematics computation: six collections indexed by joint/link id, all
/// expressed in the inertial frame.
///
/// - `joint_rotations[i]`, `joint_positions[i]`: frame of joint `i`, before its own motion.
/// - `joint_axes[i]`: the declared axis of joint `i` rotated into the inertial frame.
/// - `link_rotations[i]`, `link_positions[i]`: reference frame of link `i`.
/// - `link_geometry_vectors[i]`: `link_positions[i] - joint_positions[parent joint of link i]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotFKResult {
    joint_rotations: Vec<Matrix3<f64>>,
    link_rotations: Vec<Matrix3<f64>>,
    joint_positions: Vec<Vector3<f64>>,
    link_positions: Vec<Vector3<f64>>,
    joint_axes: Vec<Vector3<f64>>,
    link_geometry_vectors: Vec<Vector3<f64>>
}
impl RobotFKResult {
    /// Returns a result sized for the given module, to be filled by `compute_fk_in_place`.
    pub fn new_empty(robot_kinematics_module: &RobotKinematicsModule) -> Self {
        let mut out_self = Self {
            joint_rotations: vec![],
            link_rotations: vec![],
            joint_positions: vec![],
            link_positions: vec![],
            joint_axes: vec![],
            link_geometry_vectors: vec![]
        };
        out_self.resize(robot_kinematics_module.robot_model_module().num_joints());
        out_self
    }
    fn resize(&mut self, n: usize) {
        self.joint_rotations.resize(n, Matrix3::identity());
        self.link_rotations.resize(n, Matrix3::identity());
        self.joint_positions.resize(n, Vector3::zeros());
        self.link_positions.resize(n, Vector3::zeros());
        self.joint_axes.resize(n, Vector3::zeros());
        self.link_geometry_vectors.resize(n, Vector3::zeros());
    }
    pub fn num_entries(&self) -> usize {
        self.joint_rotations.len()
    }
    pub fn joint_rotations(&self) -> &Vec<Matrix3<f64>> {
        &self.joint_rotations
    }
    pub fn link_rotations(&self) -> &Vec<Matrix3<f64>> {
        &self.link_rotations
    }
    pub fn joint_positions(&self) -> &Vec<Vector3<f64>> {
        &self.joint_positions
    }
    pub fn link_positions(&self) -> &Vec<Vector3<f64>> {
        &self.link_positions
    }
    pub fn joint_axes(&self) -> &Vec<Vector3<f64>> {
        &self.joint_axes
    }
    pub fn link_geometry_vectors(&self) -> &Vec<Vector3<f64>> {
        &self.link_geometry_vectors
    }
    /// The inertial-frame pose of joint `idx` as a homogeneous matrix.
    pub fn joint_pose(&self, idx: usize) -> Option<HomogeneousMatrix> {
        let rotation = self.joint_rotations.get(idx)?;
        let position = self.joint_positions.get(idx)?;
        Some(HomogeneousMatrix::new_from_rotation_and_translation(rotation, position))
    }
    /// The inertial-frame pose of link `idx` as a homogeneous matrix.
    pub fn link_pose(&self, idx: usize) -> Option<HomogeneousMatrix> {
        let rotation = self.link_rotations.get(idx)?;
        let position = self.link_positions.get(idx)?;
        Some(HomogeneousMatrix::new_from_rotation_and_translation(rotation, position))
    }
    /// Prints a summary of the forward kinematics result.
    pub fn print_summary(&self) {
        for i in 0..self.num_entries() {
            astrokin_print(&format!("Joint {} ---> ", i), PrintMode::Println, PrintColor::Blue, true);
            astrokin_print(&format!("   > Position: {:?}", self.joint_positions[i].as_slice()), PrintMode::Println, PrintColor::None, false);
            astrokin_print(&format!("   > Axis: {:?}", self.joint_axes[i].as_slice()), PrintMode::Println, PrintColor::None, false);
            astrokin_print(&format!("Link {} ---> ", i), PrintMode::Println, PrintColor::Green, true);
            astrokin_print(&format!("   > Position: {:?}", self.link_positions[i].as_slice()), PrintMode::Println, PrintColor::None, false);
            astrokin_print(&format!("   > Geometry vector: {:?}", self.link_geometry_vectors[i].as_slice()), PrintMode::Println, PrintColor::None, false);
        }
    }
}
