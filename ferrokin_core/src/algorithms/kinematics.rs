// ferrokin_core/src/algorithms/kinematics.rs

//! Forward kinematics and frame-level kinematic queries.

use crate::data::Data;
use crate::error::{check_size, KinematicsError};
use crate::frames::ReferenceFrame;
use crate::model::Model;
use crate::spatial::{Motion, MotionColumnMut, SpatialAction};
use crate::types::{Acceleration, Configuration, FrameIndex, JointIndex, Placement, Velocity};

/// Updates `data` with the world placements, velocities, accelerations and
/// motion subspace of every body for the joint state `(q, v, a)`.
pub fn forward_kinematics(
    model: &Model,
    data: &mut Data,
    q: &Configuration,
    v: &Velocity,
    a: &Acceleration,
) -> Result<(), KinematicsError> {
    check_size("q", model.nq, q.len())?;
    check_size("v", model.nv, v.len())?;
    check_size("a", model.nv, a.len())?;
    debug_assert!(model.check(data), "data was not allocated for this model");

    for i in 1..model.njoints() {
        let joint = &model.joints[i];
        let parent = model.parents[i];

        let qi = &q.as_slice()[joint.idx_q..joint.idx_q + joint.nq()];
        let li_mi = model.joint_placements[i] * joint.kind.transform(qi);
        let o_mi = data.o_mi[parent] * li_mi;

        let ov_parent = data.ov[parent];
        let mut ov = ov_parent;
        let mut oa = data.oa[parent];
        for (dof, col) in joint.columns().enumerate() {
            let s = o_mi.act_motion(&joint.kind.motion_subspace(dof));
            MotionColumnMut::new(&mut data.j, col).set(&s);
            ov += s * v[col];
            oa += s * a[col] + ov_parent.cross(&s) * v[col];
        }

        data.o_mi[i] = o_mi;
        data.ov[i] = ov;
        data.oa[i] = oa;
    }
    Ok(())
}

/// World placement of a model frame. Requires an up-to-date `data`.
pub fn frame_placement(
    model: &Model,
    data: &Data,
    frame: FrameIndex,
) -> Result<Placement, KinematicsError> {
    let frame = model.frame(frame)?;
    Ok(data.o_mi[frame.parent] * frame.placement)
}

/// Spatial velocity of a frame rigidly attached to `joint` at `placement`.
pub fn frame_velocity(
    model: &Model,
    data: &Data,
    joint: JointIndex,
    placement: &Placement,
    rf: ReferenceFrame,
) -> Result<Motion, KinematicsError> {
    model.check_joint(joint)?;
    Ok(express_at_frame(&data.o_mi[joint], placement, &data.ov[joint], rf))
}

/// Spatial acceleration of a frame rigidly attached to `joint` at `placement`.
pub fn frame_acceleration(
    model: &Model,
    data: &Data,
    joint: JointIndex,
    placement: &Placement,
    rf: ReferenceFrame,
) -> Result<Motion, KinematicsError> {
    model.check_joint(joint)?;
    Ok(express_at_frame(&data.o_mi[joint], placement, &data.oa[joint], rf))
}

fn express_at_frame(
    o_mi: &Placement,
    placement: &Placement,
    world: &Motion,
    rf: ReferenceFrame,
) -> Motion {
    let o_mf = o_mi * placement;
    match rf {
        ReferenceFrame::World => *world,
        ReferenceFrame::Local => o_mf.act_inv_motion(world),
        ReferenceFrame::LocalWorldAligned => world.translated(&o_mf.translation.vector),
    }
}
