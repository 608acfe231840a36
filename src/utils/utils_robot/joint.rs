use nalgebra::Vector3;
use serde::{Serialize, Deserialize};
use crate::utils::utils_traits::ToAndFromRonString;
use crate::utils::utils_console::{astrokin_print, PrintColor, PrintMode};
use crate::utils::utils_errors::AstrokinError;
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;

/// A Joint holds all necessary information about one joint of the articulated chain in order to do
/// kinematic computations on a robot model.  Joint `i` always drives link `i`; its parent is either
/// the base link or a link with a strictly smaller index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    joint_idx: usize,
    parent_link: ParentLink,
    child_link_idx: usize,
    joint_type: JointType,
    axis: Vector3<f64>,
    origin_offset: HomogeneousMatrix
}
impl Joint {
    pub fn new(joint_idx: usize, parent_link: ParentLink, joint_type: JointType, axis: Vector3<f64>, origin_offset: HomogeneousMatrix) -> Self {
        Self {
            joint_idx,
            parent_link,
            child_link_idx: joint_idx,
            joint_type,
            axis,
            origin_offset
        }
    }
    /// Returns a joint whose child link index is given explicitly.  Only useful when the model is
    /// assembled from an external description that may not follow the `child == joint` convention;
    /// `RobotModelModule::new` will reject such a joint.
    pub fn new_with_child_link_idx(joint_idx: usize, parent_link: ParentLink, child_link_idx: usize, joint_type: JointType, axis: Vector3<f64>, origin_offset: HomogeneousMatrix) -> Self {
        Self {
            joint_idx,
            parent_link,
            child_link_idx,
            joint_type,
            axis,
            origin_offset
        }
    }
    pub fn new_revolute(joint_idx: usize, parent_link: ParentLink, q_idx: usize, axis: Vector3<f64>, origin_offset: HomogeneousMatrix) -> Self {
        Self::new(joint_idx, parent_link, JointType::Revolute { q_idx }, axis, origin_offset)
    }
    pub fn new_prismatic(joint_idx: usize, parent_link: ParentLink, q_idx: usize, axis: Vector3<f64>, origin_offset: HomogeneousMatrix) -> Self {
        Self::new(joint_idx, parent_link, JointType::Prismatic { q_idx }, axis, origin_offset)
    }
    pub fn new_fixed(joint_idx: usize, parent_link: ParentLink, origin_offset: HomogeneousMatrix) -> Self {
        Self::new(joint_idx, parent_link, JointType::Fixed, Vector3::zeros(), origin_offset)
    }
    pub fn joint_idx(&self) -> usize {
        self.joint_idx
    }
    pub fn parent_link(&self) -> &ParentLink {
        &self.parent_link
    }
    pub fn child_link_idx(&self) -> usize {
        self.child_link_idx
    }
    pub fn joint_type(&self) -> &JointType {
        &self.joint_type
    }
    /// The declared motion axis in the joint frame.  Fixed joints keep whatever axis was declared;
    /// it has no kinematic effect.
    pub fn axis(&self) -> &Vector3<f64> {
        &self.axis
    }
    pub fn origin_offset(&self) -> &HomogeneousMatrix {
        &self.origin_offset
    }
    pub fn q_idx(&self) -> Option<usize> {
        self.joint_type.q_idx()
    }
    pub fn print_summary(&self) {
        astrokin_print(">> Joint index: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" {} ", self.joint_idx), PrintMode::Print, PrintColor::None, false);
        astrokin_print("  Parent: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" {} ", self.parent_link), PrintMode::Print, PrintColor::None, false);
        astrokin_print("  Type: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" {:?} ", self.joint_type), PrintMode::Print, PrintColor::None, false);
        astrokin_print("  Axis: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" [{}, {}, {}]", self.axis[0], self.axis[1], self.axis[2]), PrintMode::Println, PrintColor::None, false);
    }
}

/// Where a joint attaches.  `Base` replaces the "link 0" sentinel some model formats use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParentLink {
    Base,
    Link(usize)
}
impl std::fmt::Display for ParentLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParentLink::Base => { write!(f, "base link") }
            ParentLink::Link(idx) => { write!(f, "link {}", idx) }
        }
    }
}

/// The kinematic behavior of a joint.  `q_idx` is the joint's slot in the joint variable vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointType {
    Revolute { q_idx: usize },
    Prismatic { q_idx: usize },
    Fixed
}
impl JointType {
    pub fn q_idx(&self) -> Option<usize> {
        match self {
            JointType::Revolute { q_idx } => { Some(*q_idx) }
            JointType::Prismatic { q_idx } => { Some(*q_idx) }
            JointType::Fixed => { None }
        }
    }
    pub fn is_fixed(&self) -> bool {
        matches!(self, JointType::Fixed)
    }
    /// Parses a joint type from its RON form, e.g. `"Revolute(q_idx: 0)"` or `"Fixed"`.  Anything
    /// else is an unknown joint type and makes the model malformed.
    pub fn from_ron_description(s: &str) -> Result<Self, AstrokinError> {
        Self::from_ron_string(s).map_err(|_| AstrokinError::new_malformed_model_error(&format!("Unknown joint type {:?}", s), file!(), line!()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_joint_drives_link_with_same_idx() {
        let joint = Joint::new_revolute(3, ParentLink::Link(1), 2, Vector3::z(), HomogeneousMatrix::new_identity());
        assert_eq!(joint.joint_idx(), 3);
        assert_eq!(joint.child_link_idx(), 3);
        assert_eq!(joint.parent_link(), &ParentLink::Link(1));
        assert_eq!(joint.q_idx(), Some(2));
    }

    #[test]
    fn fixed_joint_has_no_joint_variable() {
        let joint = Joint::new_fixed(0, ParentLink::Base, HomogeneousMatrix::new_identity());
        assert!(joint.joint_type().is_fixed());
        assert_eq!(joint.q_idx(), None);
        assert_eq!(joint.axis(), &Vector3::zeros());
    }

    #[test]
    fn joint_type_from_ron_string() {
        let t = JointType::from_ron_string("Prismatic(q_idx: 4)").expect("error");
        assert_eq!(t, JointType::Prismatic { q_idx: 4 });
        assert_eq!(JointType::from_ron_string("Fixed").expect("error"), JointType::Fixed);

        let s = JointType::Revolute { q_idx: 1 }.convert_to_ron_string().expect("error");
        assert_eq!(JointType::from_ron_string(&s).expect("error"), JointType::Revolute { q_idx: 1 });
    }

    #[test]
    fn unknown_joint_type_is_rejected() {
        let res = JointType::from_ron_string("Spherical(q_idx: 0)");
        assert!(matches!(res, Err(AstrokinError::Serialization(_))));

        let res = JointType::from_ron_description("Spherical(q_idx: 0)");
        assert!(matches!(res, Err(AstrokinError::MalformedModel(_))));
        assert_eq!(JointType::from_ron_description("Revolute(q_idx: 2)").expect("error"), JointType::Revolute { q_idx: 2 });
    }

    #[test]
    fn parent_link_display() {
        assert_eq!(ParentLink::Base.to_string(), "base link");
        assert_eq!(ParentLink::Link(7).to_string(), "link 7");
    }
}
