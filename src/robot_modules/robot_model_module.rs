use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{astrokin_print, astrokin_print_new_line, PrintColor, PrintMode};
use crate::utils::utils_errors::AstrokinError;
use crate::utils::utils_robot::joint::{Joint, ParentLink};
use crate::utils::utils_robot::link::{BaseLink, Link};

pub const AXIS_NORM_TOLERANCE: f64 = 1e-9;

/// The static description of a free-floating multibody system: a base link attached to the base
/// body plus `n` joints and `n` links.  Joint `i` drives link `i`, and ids are a topological order
/// of the tree (a joint's parent link always has a smaller id than the joint).
///
/// The model is handed over fully built; this module only stores it and checks the ordering
/// invariant.  It is never mutated by kinematics computations.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use astrokin::robot_modules::robot_model_module::RobotModelModule;
/// use astrokin::utils::utils_robot::joint::{Joint, ParentLink};
/// use astrokin::utils::utils_robot::link::{BaseLink, Link};
/// use astrokin::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;
///
/// let joints = vec![
///     Joint::new_revolute(0, ParentLink::Base, 0, Vector3::z(), HomogeneousMatrix::new_identity()),
///     Joint::new_prismatic(1, ParentLink::Link(0), 1, Vector3::x(), HomogeneousMatrix::new_identity()),
/// ];
/// let links = vec![
///     Link::new(0, HomogeneousMatrix::new_from_translation(&Vector3::new(0.5, 0.0, 0.0))),
///     Link::new(1, HomogeneousMatrix::new_identity()),
/// ];
/// let model = RobotModelModule::new("two_dof_arm", BaseLink::new_identity(), joints, links).expect("error");
/// assert_eq!(model.num_joints(), 2);
/// assert_eq!(model.num_required_joint_variables(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotModelModule {
    robot_name: String,
    base_link: BaseLink,
    joints: Vec<Joint>,
    links: Vec<Link>
}
impl RobotModelModule {
    /// Stores the model after checking the ordering invariant and all joint/link references.
    pub fn new(robot_name: &str, base_link: BaseLink, joints: Vec<Joint>, links: Vec<Link>) -> Result<Self, AstrokinError> {
        let out_self = Self::new_unchecked(robot_name, base_link, joints, links);
        out_self.validate()?;
        Ok(out_self)
    }
    /// Stores the model as is.  A malformed model is then reported by the kinematics solver at the
    /// point where the broken reference is used.
    pub fn new_unchecked(robot_name: &str, base_link: BaseLink, joints: Vec<Joint>, links: Vec<Link>) -> Self {
        Self {
            robot_name: robot_name.to_string(),
            base_link,
            joints,
            links
        }
    }
    pub fn validate(&self) -> Result<(), AstrokinError> {
        if self.joints.len() != self.links.len() {
            return Err(AstrokinError::new_malformed_model_error(&format!("Model has {} joints but {} links", self.joints.len(), self.links.len()), file!(), line!()));
        }

        for (i, joint) in self.joints.iter().enumerate() {
            if joint.joint_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Joint in slot {} has joint_idx {}", i, joint.joint_idx()), file!(), line!()));
            }
            if joint.child_link_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} drives link {}, expected link {}", i, joint.child_link_idx(), i), file!(), line!()));
            }
            if let ParentLink::Link(parent_link_idx) = joint.parent_link() {
                if *parent_link_idx >= i {
                    return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} has parent link {}, which is not earlier in the topological order", i, parent_link_idx), file!(), line!()));
                }
            }
            if joint.q_idx() == Some(usize::MAX) {
                return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} has q_idx {}, which no joint variable vector can hold", i, usize::MAX), file!(), line!()));
            }
            if !joint.joint_type().is_fixed() && (joint.axis().norm() - 1.0).abs() > AXIS_NORM_TOLERANCE {
                return Err(AstrokinError::new_malformed_model_error(&format!("Joint {} has a non-unit axis {:?}", i, joint.axis()), file!(), line!()));
            }
        }

        for (i, link) in self.links.iter().enumerate() {
            if link.link_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Link in slot {} has link_idx {}", i, link.link_idx()), file!(), line!()));
            }
            if link.parent_joint_idx() != i {
                return Err(AstrokinError::new_malformed_model_error(&format!("Link {} names joint {} as its parent, expected joint {}", i, link.parent_joint_idx(), i), file!(), line!()));
            }
        }

        Ok(())
    }
    pub fn robot_name(&self) -> &str {
        &self.robot_name
    }
    pub fn base_link(&self) -> &BaseLink {
        &self.base_link
    }
    pub fn joints(&self) -> &Vec<Joint> {
        &self.joints
    }
    pub fn links(&self) -> &Vec<Link> {
        &self.links
    }
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }
    pub fn num_links(&self) -> usize {
        self.links.len()
    }
    /// Number of joints that are not fixed.
    pub fn num_dofs(&self) -> usize {
        self.joints.iter().filter(|j| !j.joint_type().is_fixed()).count()
    }
    /// Minimum length of a joint variable vector for this model: one past the largest `q_idx`,
    /// saturating at `usize::MAX`.
    pub fn num_required_joint_variables(&self) -> usize {
        self.joints.iter().filter_map(|j| j.q_idx()).map(|q_idx| q_idx.saturating_add(1)).max().unwrap_or(0)
    }
    pub fn get_joint_by_idx(&self, joint_idx: usize) -> Result<&Joint, AstrokinError> {
        AstrokinError::new_check_for_idx_out_of_bound_error(joint_idx, self.joints.len(), file!(), line!())?;
        return Ok(&self.joints[joint_idx]);
    }
    pub fn get_link_by_idx(&self, link_idx: usize) -> Result<&Link, AstrokinError> {
        AstrokinError::new_check_for_idx_out_of_bound_error(link_idx, self.links.len(), file!(), line!())?;
        return Ok(&self.links[link_idx]);
    }
    pub fn print_summary(&self) {
        astrokin_print(&format!("Robot {} ---> ", self.robot_name), PrintMode::Println, PrintColor::Blue, true);
        astrokin_print(&format!("   > {} joints, {} dofs", self.num_joints(), self.num_dofs()), PrintMode::Println, PrintColor::None, false);
        for joint in &self.joints {
            joint.print_summary();
        }
        for link in &self.links {
            link.print_summary();
        }
        astrokin_print_new_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use crate::utils::utils_robot::joint::JointType;
    use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;

    fn identity() -> HomogeneousMatrix {
        HomogeneousMatrix::new_identity()
    }

    fn branching_joints() -> Vec<Joint> {
        vec![
            Joint::new_revolute(0, ParentLink::Base, 0, Vector3::z(), identity()),
            Joint::new_revolute(1, ParentLink::Link(0), 1, Vector3::y(), identity()),
            Joint::new_fixed(2, ParentLink::Link(0), identity()),
            Joint::new_prismatic(3, ParentLink::Link(2), 3, Vector3::x(), identity()),
        ]
    }

    fn links(n: usize) -> Vec<Link> {
        (0..n).map(|i| Link::new(i, identity())).collect()
    }

    #[test]
    fn valid_branching_model() {
        let model = RobotModelModule::new("branching", BaseLink::default(), branching_joints(), links(4)).expect("error");
        assert_eq!(model.robot_name(), "branching");
        assert_eq!(model.num_joints(), 4);
        assert_eq!(model.num_links(), 4);
        assert_eq!(model.num_dofs(), 3);
        assert_eq!(model.num_required_joint_variables(), 4);
        assert!(model.get_joint_by_idx(3).is_ok());
        assert!(model.get_link_by_idx(4).is_err());
    }

    #[test]
    fn fixed_only_model_needs_no_joint_variables() {
        let joints = vec![
            Joint::new_fixed(0, ParentLink::Base, identity()),
            Joint::new_fixed(1, ParentLink::Link(0), identity()),
        ];
        let model = RobotModelModule::new("fixed", BaseLink::default(), joints, links(2)).expect("error");
        assert_eq!(model.num_dofs(), 0);
        assert_eq!(model.num_required_joint_variables(), 0);
    }

    #[test]
    fn empty_model_is_valid() {
        let model = RobotModelModule::new("base_only", BaseLink::default(), vec![], vec![]).expect("error");
        assert_eq!(model.num_joints(), 0);
    }

    #[test]
    fn rejects_count_mismatch() {
        let res = RobotModelModule::new("bad", BaseLink::default(), branching_joints(), links(3));
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));
    }

    #[test]
    fn rejects_forward_parent_reference() {
        let mut joints = branching_joints();
        joints[1] = Joint::new_revolute(1, ParentLink::Link(3), 1, Vector3::y(), identity());
        let res = RobotModelModule::new("bad", BaseLink::default(), joints, links(4));
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));
    }

    #[test]
    fn rejects_self_parent_reference() {
        let mut joints = branching_joints();
        joints[2] = Joint::new_fixed(2, ParentLink::Link(2), identity());
        let res = RobotModelModule::new("bad", BaseLink::default(), joints, links(4));
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));
    }

    #[test]
    fn rejects_misnumbered_joint_and_child() {
        let mut joints = branching_joints();
        joints[2] = Joint::new_fixed(5, ParentLink::Link(0), identity());
        assert!(RobotModelModule::new("bad", BaseLink::default(), joints, links(4)).is_err());

        let mut joints = branching_joints();
        joints[2] = Joint::new_with_child_link_idx(2, ParentLink::Link(0), 3, JointType::Fixed, Vector3::zeros(), identity());
        assert!(RobotModelModule::new("bad", BaseLink::default(), joints, links(4)).is_err());
    }

    #[test]
    fn rejects_dangling_link_parent() {
        let mut l = links(4);
        l[3] = Link::new_with_parent_joint_idx(3, 1, identity());
        let res = RobotModelModule::new("bad", BaseLink::default(), branching_joints(), l);
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));
    }

    #[test]
    fn rejects_non_unit_axis_on_moving_joint_only() {
        let mut joints = branching_joints();
        joints[1] = Joint::new_revolute(1, ParentLink::Link(0), 1, Vector3::new(0.0, 2.0, 0.0), identity());
        assert!(RobotModelModule::new("bad", BaseLink::default(), joints, links(4)).is_err());

        let mut joints = branching_joints();
        joints[2] = Joint::new(2, ParentLink::Link(0), JointType::Fixed, Vector3::new(3.0, 0.0, 0.0), identity());
        assert!(RobotModelModule::new("ok", BaseLink::default(), joints, links(4)).is_ok());
    }

    #[test]
    fn rejects_q_idx_at_usize_max() {
        let mut joints = branching_joints();
        joints[3] = Joint::new_prismatic(3, ParentLink::Link(2), usize::MAX, Vector3::x(), identity());
        let res = RobotModelModule::new("bad", BaseLink::default(), joints.clone(), links(4));
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));

        let model = RobotModelModule::new_unchecked("bad", BaseLink::default(), joints, links(4));
        assert_eq!(model.num_required_joint_variables(), usize::MAX);
    }

    #[test]
    fn unchecked_model_keeps_broken_references() {
        let mut joints = branching_joints();
        joints[1] = Joint::new_revolute(1, ParentLink::Link(3), 1, Vector3::y(), identity());
        let model = RobotModelModule::new_unchecked("bad", BaseLink::default(), joints, links(4));
        assert!(model.validate().is_err());
        assert_eq!(model.joints()[1].parent_link(), &ParentLink::Link(3));
    }
}
