// ferrokin_core/src/model/mod.rs

//! The kinematic tree: joints, their placements, and operational frames.

pub mod joint;
pub mod samples;

pub use joint::{JointKind, JointModel};

use tracing::debug;

use crate::data::Data;
use crate::error::KinematicsError;
use crate::frames::Frame;
use crate::types::{FrameIndex, JointIndex, Placement, UNIVERSE};

/// A tree of joints rooted at the fixed universe (joint 0).
///
/// Joints are stored in topological order: a joint's parent always has a
/// smaller index. Velocity columns are assigned in the same order, so the
/// columns of a joint always come after those of its ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub joints: Vec<JointModel>,
    /// `parents[i]` is the parent joint of joint `i`. The universe is its own parent.
    pub parents: Vec<JointIndex>,
    /// Placement of each joint frame relative to its parent's body frame.
    pub joint_placements: Vec<Placement>,
    pub frames: Vec<Frame>,
    /// Dimension of the configuration vector.
    pub nq: usize,
    /// Dimension of the velocity vector, and the column count of every derivative matrix.
    pub nv: usize,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    /// A model holding only the universe joint.
    pub fn new() -> Self {
        Self {
            joints: vec![JointModel {
                name: "universe".to_string(),
                kind: JointKind::Fixed,
                idx_q: 0,
                idx_v: 0,
            }],
            parents: vec![UNIVERSE],
            joint_placements: vec![Placement::identity()],
            frames: Vec::new(),
            nq: 0,
            nv: 0,
        }
    }

    pub fn njoints(&self) -> usize {
        self.joints.len()
    }

    pub fn nframes(&self) -> usize {
        self.frames.len()
    }

    /// Appends a joint below `parent` and returns its index.
    pub fn add_joint(
        &mut self,
        parent: JointIndex,
        name: impl Into<String>,
        kind: JointKind,
        placement: Placement,
    ) -> Result<JointIndex, KinematicsError> {
        let name = name.into();
        if parent >= self.njoints() {
            return Err(KinematicsError::InvalidParent {
                joint: name,
                parent,
            });
        }
        if self.joint_id(&name).is_ok() {
            return Err(KinematicsError::DuplicateName(name));
        }
        let kind = kind
            .normalized()
            .ok_or_else(|| KinematicsError::DegenerateAxis {
                joint: name.clone(),
            })?;

        let id = self.njoints();
        debug!(
            joint = %name,
            id,
            parent,
            nv = kind.nv(),
            "adding joint"
        );
        let joint = JointModel {
            name,
            kind,
            idx_q: self.nq,
            idx_v: self.nv,
        };
        self.nq += joint.nq();
        self.nv += joint.nv();
        self.joints.push(joint);
        self.parents.push(parent);
        self.joint_placements.push(placement);
        Ok(id)
    }

    /// Attaches a named frame to `joint` and returns its index.
    pub fn add_frame(
        &mut self,
        name: impl Into<String>,
        joint: JointIndex,
        placement: Placement,
    ) -> Result<FrameIndex, KinematicsError> {
        let name = name.into();
        if joint >= self.njoints() {
            return Err(KinematicsError::InvalidJoint(joint));
        }
        if self.frame_id(&name).is_ok() {
            return Err(KinematicsError::DuplicateName(name));
        }
        let id = self.nframes();
        debug!(frame = %name, id, joint, "adding frame");
        self.frames.push(Frame::new(name, joint, placement));
        Ok(id)
    }

    pub fn joint_id(&self, name: &str) -> Result<JointIndex, KinematicsError> {
        self.joints
            .iter()
            .position(|j| j.name == name)
            .ok_or_else(|| KinematicsError::UnknownName(name.to_string()))
    }

    pub fn frame_id(&self, name: &str) -> Result<FrameIndex, KinematicsError> {
        self.frames
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| KinematicsError::UnknownName(name.to_string()))
    }

    pub fn frame(&self, id: FrameIndex) -> Result<&Frame, KinematicsError> {
        self.frames.get(id).ok_or(KinematicsError::InvalidFrame(id))
    }

    /// Fails with `InvalidJoint` if `joint` is not part of the model.
    pub fn check_joint(&self, joint: JointIndex) -> Result<(), KinematicsError> {
        if joint < self.njoints() {
            Ok(())
        } else {
            Err(KinematicsError::InvalidJoint(joint))
        }
    }

    /// The last velocity column on the path from `joint` to the root.
    ///
    /// For a joint with degrees of freedom this is its own last column.
    /// Fixed joints borrow the column of their nearest moving ancestor.
    /// `None` means nothing between `joint` and the universe can move.
    pub fn last_column(&self, joint: JointIndex) -> Option<usize> {
        let mut j = joint;
        while j != UNIVERSE {
            let jm = &self.joints[j];
            if jm.nv() > 0 {
                return Some(jm.idx_v + jm.nv() - 1);
            }
            j = self.parents[j];
        }
        None
    }

    /// True if `ancestor` lies on the path from `joint` to the root (a joint
    /// is its own ancestor).
    pub fn is_ancestor(&self, ancestor: JointIndex, joint: JointIndex) -> bool {
        let mut j = joint;
        loop {
            if j == ancestor {
                return true;
            }
            if j == UNIVERSE {
                return false;
            }
            j = self.parents[j];
        }
    }

    /// Checks that `data` was allocated for this model.
    pub fn check(&self, data: &Data) -> bool {
        data.o_mi.len() == self.njoints()
            && data.ov.len() == self.njoints()
            && data.oa.len() == self.njoints()
            && data.j.ncols() == self.nv
            && data.ancestors.len() == self.nv
            && data.joint_of_column.len() == self.nv
    }
}
