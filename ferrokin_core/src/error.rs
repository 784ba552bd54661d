// ferrokin_core/src/error.rs

//! Error types for model construction and kinematic queries.

use thiserror::Error;

use crate::types::{FrameIndex, JointIndex};

/// Errors reported by the kinematics library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KinematicsError {
    /// A caller-supplied buffer or vector does not have the size the model requires.
    #[error("dimension mismatch for {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Which argument was wrongly sized.
        what: &'static str,
        /// The size implied by the model.
        expected: usize,
        /// The size that was supplied.
        found: usize,
    },

    /// A joint index outside of the model.
    #[error("invalid joint index: {0}")]
    InvalidJoint(JointIndex),

    /// A frame index outside of the model.
    #[error("invalid frame index: {0}")]
    InvalidFrame(FrameIndex),

    /// A joint was given a parent that does not exist yet.
    #[error("joint '{joint}' references parent {parent}, which does not exist")]
    InvalidParent {
        /// Name of the joint being added.
        joint: String,
        /// The offending parent index.
        parent: JointIndex,
    },

    /// A joint axis with (near) zero length.
    #[error("joint '{joint}' has a degenerate axis")]
    DegenerateAxis {
        /// Name of the joint being added.
        joint: String,
    },

    /// A joint or frame name that is already taken.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A lookup by name that found nothing.
    #[error("unknown name: {0}")]
    UnknownName(String),
}

/// Checks a size against the size the model expects.
pub(crate) fn check_size(
    what: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), KinematicsError> {
    if expected == found {
        Ok(())
    } else {
        Err(KinematicsError::DimensionMismatch {
            what,
            expected,
            found,
        })
    }
}
