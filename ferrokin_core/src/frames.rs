// ferrokin_core/src/frames.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{JointIndex, Placement};

/// The basis (and reference point) a spatial quantity is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceFrame {
    /// World orientation, linear part measured at the world origin.
    World,
    /// The frame's own basis, linear part measured at the frame origin.
    Local,
    /// World orientation, linear part measured at the frame origin.
    LocalWorldAligned,
}

impl ReferenceFrame {
    pub const ALL: [ReferenceFrame; 3] = [
        ReferenceFrame::World,
        ReferenceFrame::Local,
        ReferenceFrame::LocalWorldAligned,
    ];
}

impl fmt::Display for ReferenceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReferenceFrame::World => "world",
            ReferenceFrame::Local => "local",
            ReferenceFrame::LocalWorldAligned => "local_world_aligned",
        };
        f.write_str(name)
    }
}

/// An operational frame rigidly attached to a joint (a tool tip, a sensor mount, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// A unique name within the model.
    pub name: String,
    /// The joint supporting this frame.
    pub parent: JointIndex,
    /// The placement of the frame relative to its supporting joint.
    pub placement: Placement,
}

impl Frame {
    pub fn new(name: impl Into<String>, parent: JointIndex, placement: Placement) -> Self {
        Self {
            name: name.into(),
            parent,
            placement,
        }
    }
}
