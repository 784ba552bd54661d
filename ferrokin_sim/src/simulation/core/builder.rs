// ferrokin_sim/src/simulation/core/builder.rs

//! Turns a `[model]` section into a kinematic `Model`.

use ferrokin_core::prelude::{Model, UNIVERSE};
use tracing::debug;

use crate::error::SimError;
use crate::simulation::config::ModelConfig;

/// Joints are added in file order, so a parent must be declared before its children.
pub fn build_model(config: &ModelConfig) -> Result<Model, SimError> {
    let mut model = Model::new();
    for joint in &config.joints {
        let parent = if joint.parent == "universe" {
            UNIVERSE
        } else {
            model.joint_id(&joint.parent)?
        };
        model.add_joint(parent, &joint.name, joint.kind, joint.placement.to_placement())?;
    }
    for frame in &config.frames {
        let joint = model.joint_id(&frame.joint)?;
        model.add_frame(&frame.name, joint, frame.placement.to_placement())?;
    }
    debug!(
        joints = model.njoints(),
        frames = model.nframes(),
        nq = model.nq,
        nv = model.nv,
        "built model"
    );
    Ok(model)
}
