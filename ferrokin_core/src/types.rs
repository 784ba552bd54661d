// ferrokin_core/src/types.rs

use nalgebra::{DVector, Isometry3, Matrix6xX};

// --- Core Type Aliases ---
pub type Configuration = DVector<f64>;
pub type Velocity = DVector<f64>;
pub type Acceleration = DVector<f64>;

/// A rigid placement (SE3). Rotation + translation, acting on points as `R x + p`.
pub type Placement = Isometry3<f64>;

/// A 6 x nv matrix where every column is a spatial motion `[linear; angular]`
/// associated with one generalized velocity coordinate.
pub type Matrix6x = Matrix6xX<f64>;

// --- Core Identifiers ---
/// Index of a joint in a `Model`. Joint 0 is always the fixed universe.
pub type JointIndex = usize;

/// Index of a frame in a `Model`.
pub type FrameIndex = usize;

/// The universe joint. It has no degrees of freedom and sits at the world origin.
pub const UNIVERSE: JointIndex = 0;
