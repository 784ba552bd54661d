// ferrokin_core/src/algorithms/joint_derivatives.rs

use dyn_clone::DynClone;
use std::fmt::Debug;

use super::partials::{AccelerationPartials, VelocityPartials};
use crate::data::Data;
use crate::error::KinematicsError;
use crate::frames::ReferenceFrame;
use crate::model::Model;
use crate::spatial::{Motion, MotionColumnMut, SpatialAction};
use crate::types::{JointIndex, Placement};

/// Computes derivatives of a joint's spatial velocity and acceleration with
/// respect to the joint state `(q, v, a)`.
///
/// Implementations read an up-to-date `data` (after `forward_kinematics`)
/// and must only write the columns on the joint's ancestor chain, leaving
/// every other column exactly as the caller supplied it.
pub trait JointDerivatives: DynClone + Debug + Send + Sync {
    /// Writes ∂v/∂q and ∂v/∂q̇ of joint `joint`, expressed in `rf`.
    fn velocity_derivatives(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        rf: ReferenceFrame,
        out: &mut VelocityPartials<'_>,
    ) -> Result<(), KinematicsError>;

    /// Writes ∂v/∂q, ∂a/∂q, ∂a/∂q̇ and ∂a/∂q̈ of joint `joint`, expressed in `rf`.
    fn acceleration_derivatives(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        rf: ReferenceFrame,
        out: &mut AccelerationPartials<'_>,
    ) -> Result<(), KinematicsError>;
}

dyn_clone::clone_trait_object!(JointDerivatives);

/// Closed-form joint derivatives built from the world motion subspace.
///
/// For a column with world motion subspace `S` whose joint hangs below a body
/// with velocity `vλ` and acceleration `aλ`, and a target joint with world
/// velocity `v` and acceleration `a`:
///
/// ```text
/// ∂v/∂q  = S × (v − vλ)
/// ∂v/∂q̇  = S
/// ∂a/∂q  = S × (a − aλ) − (S × vλ) × (v − vλ)
/// ∂a/∂q̇  = 2 (vλ × S) + S × v
/// ∂a/∂q̈  = S
/// ```
///
/// `LocalWorldAligned` measures the linear part at the joint origin, which is
/// held fixed while differentiating with respect to q.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticJointDerivatives;

/// Re-expresses a world-frame derivative column in `rf`.
///
/// `moved` is `S × x` for configuration columns, where `x` is the quantity
/// being differentiated. In the local frame the body basis itself turns with
/// q, which contributes `−S × x`.
fn express(
    rf: ReferenceFrame,
    o_mi: &Placement,
    world: Motion,
    moved: Option<Motion>,
) -> Motion {
    match rf {
        ReferenceFrame::World => world,
        ReferenceFrame::LocalWorldAligned => world.translated(&o_mi.translation.vector),
        ReferenceFrame::Local => match moved {
            Some(moved) => o_mi.act_inv_motion(&(world - moved)),
            None => o_mi.act_inv_motion(&world),
        },
    }
}

impl JointDerivatives for AnalyticJointDerivatives {
    fn velocity_derivatives(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        rf: ReferenceFrame,
        out: &mut VelocityPartials<'_>,
    ) -> Result<(), KinematicsError> {
        model.check_joint(joint)?;
        out.check_columns(model.nv)?;

        let o_mi = &data.o_mi[joint];
        let ov = data.ov[joint];
        for col in data.ancestors.chain(model.last_column(joint)) {
            let s = Motion::from_column(&data.j.column(col));
            let ov_parent = data.ov[model.parents[data.joint_of_column[col]]];

            let dq = express(rf, o_mi, s.cross(&(ov - ov_parent)), Some(s.cross(&ov)));
            let dv = express(rf, o_mi, s, None);
            MotionColumnMut::new(out.v_partial_dq, col).set(&dq);
            MotionColumnMut::new(out.v_partial_dv, col).set(&dv);
        }
        Ok(())
    }

    fn acceleration_derivatives(
        &self,
        model: &Model,
        data: &Data,
        joint: JointIndex,
        rf: ReferenceFrame,
        out: &mut AccelerationPartials<'_>,
    ) -> Result<(), KinematicsError> {
        model.check_joint(joint)?;
        out.check_columns(model.nv)?;

        let o_mi = &data.o_mi[joint];
        let ov = data.ov[joint];
        let oa = data.oa[joint];
        for col in data.ancestors.chain(model.last_column(joint)) {
            let s = Motion::from_column(&data.j.column(col));
            let parent = model.parents[data.joint_of_column[col]];
            let ov_parent = data.ov[parent];
            let oa_parent = data.oa[parent];
            let dv_rel = ov - ov_parent;

            let v_dq = s.cross(&dv_rel);
            let a_dq = s.cross(&(oa - oa_parent)) - s.cross(&ov_parent).cross(&dv_rel);
            let a_dv = ov_parent.cross(&s) * 2.0 + s.cross(&ov);

            let v_dq = express(rf, o_mi, v_dq, Some(s.cross(&ov)));
            let a_dq = express(rf, o_mi, a_dq, Some(s.cross(&oa)));
            let a_dv = express(rf, o_mi, a_dv, None);
            let a_da = express(rf, o_mi, s, None);
            MotionColumnMut::new(out.v_partial_dq, col).set(&v_dq);
            MotionColumnMut::new(out.a_partial_dq, col).set(&a_dq);
            MotionColumnMut::new(out.a_partial_dv, col).set(&a_dv);
            MotionColumnMut::new(out.a_partial_da, col).set(&a_da);
        }
        Ok(())
    }
}
