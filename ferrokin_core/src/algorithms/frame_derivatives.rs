// ferrokin_core/src/algorithms/frame_derivatives.rs

//! Frame velocity and acceleration derivatives.
//!
//! Joint-level derivatives are computed by a [`JointDerivatives`]
//! implementation and then re-expressed for a frame rigidly attached to the
//! joint. Only the columns on the joint's ancestor chain can be nonzero, so
//! the correction walks that chain and leaves every other column untouched.

use nalgebra::Vector3;
use tracing::trace;

use super::joint_derivatives::{AnalyticJointDerivatives, JointDerivatives};
use super::partials::{AccelerationPartials, VelocityPartials};
use crate::ancestry::AncestorColumns;
use crate::data::Data;
use crate::error::KinematicsError;
use crate::frames::ReferenceFrame;
use crate::model::Model;
use crate::spatial::MotionColumnMut;
use crate::types::{FrameIndex, JointIndex, Matrix6x, Placement};

/// The per-column change that turns joint derivatives into frame derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameCorrection {
    Identity,
    /// Move the reference point by a world-frame offset.
    Translate(Vector3<f64>),
    /// Express in the frame's basis at the frame's origin.
    ActInv(Placement),
}

impl FrameCorrection {
    /// The correction for a frame at `placement` on a joint at world placement `o_mi`.
    pub fn new(rf: ReferenceFrame, o_mi: &Placement, placement: &Placement) -> Self {
        match rf {
            ReferenceFrame::World => FrameCorrection::Identity,
            ReferenceFrame::LocalWorldAligned => {
                FrameCorrection::Translate(o_mi.rotation * placement.translation.vector)
            }
            ReferenceFrame::Local => FrameCorrection::ActInv(*placement),
        }
    }

    fn apply(&self, column: &mut MotionColumnMut<'_>) {
        match self {
            FrameCorrection::Identity => {}
            FrameCorrection::Translate(offset) => column.translate(offset),
            FrameCorrection::ActInv(placement) => column.act_inv(placement),
        }
    }
}

/// Applies `correction` to the `chain` columns of every matrix in `matrices`.
pub fn apply_frame_correction(
    correction: &FrameCorrection,
    chain: AncestorColumns<'_>,
    matrices: &mut [&mut Matrix6x],
) {
    if *correction == FrameCorrection::Identity {
        return;
    }
    for col in chain {
        for matrix in matrices.iter_mut() {
            correction.apply(&mut MotionColumnMut::new(matrix, col));
        }
    }
}

/// Computes frame derivatives on top of a pluggable joint-derivative algorithm.
#[derive(Debug, Clone)]
pub struct FrameDerivatives {
    joint_derivatives: Box<dyn JointDerivatives>,
}

impl Default for FrameDerivatives {
    fn default() -> Self {
        Self::new(Box::new(AnalyticJointDerivatives))
    }
}

impl FrameDerivatives {
    pub fn new(joint_derivatives: Box<dyn JointDerivatives>) -> Self {
        Self { joint_derivatives }
    }

    /// Derivatives of the velocity of a frame at `placement` on `joint`,
    /// expressed in `rf`.
    ///
    /// `data` must be up to date (see `forward_kinematics`). Fails before
    /// writing anything if `joint` is unknown or a matrix does not have
    /// `model.nv` columns.
    pub fn velocity(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        placement: &Placement,
        rf: ReferenceFrame,
        mut partials: VelocityPartials<'_>,
    ) -> Result<(), KinematicsError> {
        model.check_joint(joint)?;
        partials.check_columns(model.nv)?;
        debug_assert!(model.check(data), "data was not allocated for this model");

        let chain = data.ancestors.chain(model.last_column(joint));
        trace!(joint, %rf, depth = chain.clone().count(), "frame velocity derivatives");

        self.joint_derivatives
            .velocity_derivatives(model, data, joint, rf, &mut partials)?;
        let correction = FrameCorrection::new(rf, &data.o_mi[joint], placement);
        apply_frame_correction(&correction, chain, &mut partials.matrices());
        Ok(())
    }

    /// Derivatives of the acceleration (and velocity) of a frame at
    /// `placement` on `joint`, expressed in `rf`.
    pub fn acceleration(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        placement: &Placement,
        rf: ReferenceFrame,
        mut partials: AccelerationPartials<'_>,
    ) -> Result<(), KinematicsError> {
        model.check_joint(joint)?;
        partials.check_columns(model.nv)?;
        debug_assert!(model.check(data), "data was not allocated for this model");

        let chain = data.ancestors.chain(model.last_column(joint));
        trace!(joint, %rf, depth = chain.clone().count(), "frame acceleration derivatives");

        self.joint_derivatives
            .acceleration_derivatives(model, data, joint, rf, &mut partials)?;
        let correction = FrameCorrection::new(rf, &data.o_mi[joint], placement);
        apply_frame_correction(&correction, chain, &mut partials.matrices());
        Ok(())
    }

    /// [`FrameDerivatives::velocity`] for a frame registered in the model.
    pub fn velocity_for_frame(
        &self,
        model: &Model,
        data: &Data,
        frame: FrameIndex,
        rf: ReferenceFrame,
        partials: VelocityPartials<'_>,
    ) -> Result<(), KinematicsError> {
        let frame = model.frame(frame)?;
        self.velocity(model, data, frame.parent, &frame.placement, rf, partials)
    }

    /// [`FrameDerivatives::acceleration`] for a frame registered in the model.
    pub fn acceleration_for_frame(
        &self,
        model: &Model,
        data: &Data,
        frame: FrameIndex,
        rf: ReferenceFrame,
        partials: AccelerationPartials<'_>,
    ) -> Result<(), KinematicsError> {
        let frame = model.frame(frame)?;
        self.acceleration(model, data, frame.parent, &frame.placement, rf, partials)
    }
}

/// Frame velocity derivatives using [`AnalyticJointDerivatives`].
pub fn frame_velocity_derivatives(
    model: &Model,
    data: &Data,
    joint: JointIndex,
    placement: &Placement,
    rf: ReferenceFrame,
    partials: VelocityPartials<'_>,
) -> Result<(), KinematicsError> {
    FrameDerivatives::default().velocity(model, data, joint, placement, rf, partials)
}

/// Frame acceleration derivatives using [`AnalyticJointDerivatives`].
pub fn frame_acceleration_derivatives(
    model: &Model,
    data: &Data,
    joint: JointIndex,
    placement: &Placement,
    rf: ReferenceFrame,
    partials: AccelerationPartials<'_>,
) -> Result<(), KinematicsError> {
    FrameDerivatives::default().acceleration(model, data, joint, placement, rf, partials)
}

pub fn frame_velocity_derivatives_by_frame(
    model: &Model,
    data: &Data,
    frame: FrameIndex,
    rf: ReferenceFrame,
    partials: VelocityPartials<'_>,
) -> Result<(), KinematicsError> {
    FrameDerivatives::default().velocity_for_frame(model, data, frame, rf, partials)
}

pub fn frame_acceleration_derivatives_by_frame(
    model: &Model,
    data: &Data,
    frame: FrameIndex,
    rf: ReferenceFrame,
    partials: AccelerationPartials<'_>,
) -> Result<(), KinematicsError> {
    FrameDerivatives::default().acceleration_for_frame(model, data, frame, rf, partials)
}
