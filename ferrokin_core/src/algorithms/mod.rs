// ferrokin_core/src/algorithms/mod.rs

pub mod frame_derivatives;
pub mod joint_derivatives;
pub mod kinematics;
pub mod numerical;
pub mod partials;
