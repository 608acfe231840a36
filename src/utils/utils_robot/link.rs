use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{astrokin_print, PrintColor, PrintMode};
use crate::utils::utils_se3::homogeneous_matrix::HomogeneousMatrix;

/// A Link is a rigid body of the articulated chain.  Its reference frame (usually the center of
/// mass frame) sits at `origin_offset` from the frame of the joint that drives it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    link_idx: usize,
    parent_joint_idx: usize,
    origin_offset: HomogeneousMatrix
}
impl Link {
    pub fn new(link_idx: usize, origin_offset: HomogeneousMatrix) -> Self {
        Self {
            link_idx,
            parent_joint_idx: link_idx,
            origin_offset
        }
    }
    pub fn new_with_parent_joint_idx(link_idx: usize, parent_joint_idx: usize, origin_offset: HomogeneousMatrix) -> Self {
        Self {
            link_idx,
            parent_joint_idx,
            origin_offset
        }
    }
    pub fn link_idx(&self) -> usize {
        self.link_idx
    }
    pub fn parent_joint_idx(&self) -> usize {
        self.parent_joint_idx
    }
    pub fn origin_offset(&self) -> &HomogeneousMatrix {
        &self.origin_offset
    }
    pub fn print_summary(&self) {
        astrokin_print(">> Link index: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" {} ", self.link_idx), PrintMode::Print, PrintColor::None, false);
        astrokin_print("  Parent joint: ", PrintMode::Print, PrintColor::Blue, true);
        astrokin_print(&format!(" {} ", self.parent_joint_idx), PrintMode::Println, PrintColor::None, false);
    }
}

/// The link rigidly attached to the base body.  `origin_offset` maps the base body's own reference
/// frame to the structural attachment point of the chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseLink {
    origin_offset: HomogeneousMatrix
}
impl BaseLink {
    pub fn new(origin_offset: HomogeneousMatrix) -> Self {
        Self {
            origin_offset
        }
    }
    pub fn new_identity() -> Self {
        Self::new(HomogeneousMatrix::new_identity())
    }
    pub fn origin_offset(&self) -> &HomogeneousMatrix {
        &self.origin_offset
    }
}
impl Default for BaseLink {
    fn default() -> Self {
        Self::new_identity()
    }
}
