// ferrokin_core/src/prelude.rs

// --- Core Abstractions (The main contracts of the library) ---
pub use crate::algorithms::joint_derivatives::{AnalyticJointDerivatives, JointDerivatives};
pub use crate::error::KinematicsError;
pub use crate::spatial::{Motion, MotionColumnMut, SpatialAction};

// --- Core Data Structures ---
pub use crate::ancestry::{AncestorColumns, AncestorIndex};
pub use crate::data::Data;
pub use crate::frames::{Frame, ReferenceFrame};
pub use crate::model::{JointKind, JointModel, Model};
pub use crate::types::{
    Acceleration, Configuration, FrameIndex, JointIndex, Matrix6x, Placement, Velocity, UNIVERSE,
};

// --- Algorithms ---
pub use crate::algorithms::frame_derivatives::{
    frame_acceleration_derivatives, frame_acceleration_derivatives_by_frame,
    frame_velocity_derivatives, frame_velocity_derivatives_by_frame, FrameDerivatives,
};
pub use crate::algorithms::kinematics::{
    forward_kinematics, frame_acceleration, frame_placement, frame_velocity,
};
pub use crate::algorithms::numerical::{central_difference, Perturbation};
pub use crate::algorithms::partials::{AccelerationPartials, VelocityPartials};
