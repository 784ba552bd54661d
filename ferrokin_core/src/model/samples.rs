// ferrokin_core/src/model/samples.rs

//! Small ready-made models, used by tests and as scenario building blocks.

use nalgebra::{Translation3, UnitQuaternion, Vector3};

use super::{JointKind, Model};
use crate::types::{Placement, UNIVERSE};

fn pose(translation: [f64; 3], rpy: [f64; 3]) -> Placement {
    Placement::from_parts(
        Translation3::new(translation[0], translation[1], translation[2]),
        UnitQuaternion::from_euler_angles(rpy[0], rpy[1], rpy[2]),
    )
}

/// Two revolute z-joints in a row, plus a sibling branch.
///
/// - `A` at the world origin.
/// - `B` child of `A`, offset by (1, 0, 0).
/// - `C` child of `A`, offset by (0, 1, 0).
/// - Frame `F` on `B`, offset by (0, 0, 1).
pub fn planar_two_link() -> Model {
    let z = JointKind::Revolute { axis: Vector3::z() };
    let mut model = Model::new();
    let build = |model: &mut Model| -> Result<(), crate::error::KinematicsError> {
        let a = model.add_joint(UNIVERSE, "A", z, Placement::identity())?;
        let b = model.add_joint(a, "B", z, pose([1.0, 0.0, 0.0], [0.0; 3]))?;
        model.add_joint(a, "C", z, pose([0.0, 1.0, 0.0], [0.0; 3]))?;
        model.add_frame("F", b, pose([0.0, 0.0, 1.0], [0.0; 3]))?;
        Ok(())
    };
    if let Err(e) = build(&mut model) {
        unreachable!("sample model is well formed: {e}");
    }
    model
}

/// A spatial arm mixing every joint kind, with rotated placements and a side branch.
///
/// ```text
/// universe
/// └── base_yaw (revolute z)
///     ├── shoulder (revolute y)
///     │   └── slide (prismatic x)
///     │       └── wrist_mount (fixed)
///     │           └── wrist (cylindrical)   frames: tool
///     │                                     wrist_mount frames: camera
///     └── side (revolute x)                 frames: side_tip
/// ```
pub fn spatial_arm() -> Model {
    let mut model = Model::new();
    let build = |model: &mut Model| -> Result<(), crate::error::KinematicsError> {
        let base = model.add_joint(
            UNIVERSE,
            "base_yaw",
            JointKind::Revolute { axis: Vector3::z() },
            pose([0.0, 0.0, 0.3], [0.0; 3]),
        )?;
        let shoulder = model.add_joint(
            base,
            "shoulder",
            JointKind::Revolute { axis: Vector3::y() },
            pose([0.0, 0.05, 0.4], [0.1, 0.0, 0.2]),
        )?;
        let slide = model.add_joint(
            shoulder,
            "slide",
            JointKind::Prismatic { axis: Vector3::x() },
            pose([0.5, 0.0, 0.0], [0.0, -0.3, 0.0]),
        )?;
        let mount = model.add_joint(
            slide,
            "wrist_mount",
            JointKind::Fixed,
            pose([0.1, 0.05, 0.0], [0.0, 0.0, 0.7]),
        )?;
        let wrist = model.add_joint(
            mount,
            "wrist",
            JointKind::Cylindrical {
                axis: Vector3::new(1.0, 1.0, 0.0),
            },
            pose([0.0, 0.0, 0.1], [0.4, 0.2, -0.1]),
        )?;
        let side = model.add_joint(
            base,
            "side",
            JointKind::Revolute { axis: Vector3::x() },
            pose([0.0, 0.2, 0.0], [0.0; 3]),
        )?;
        model.add_frame("tool", wrist, pose([0.05, -0.02, 0.15], [0.3, -0.5, 0.9]))?;
        model.add_frame("camera", mount, pose([0.0, 0.1, 0.02], [1.2, 0.0, 0.0]))?;
        model.add_frame("side_tip", side, pose([0.0, 0.0, 0.25], [0.0; 3]))?;
        Ok(())
    };
    if let Err(e) = build(&mut model) {
        unreachable!("sample model is well formed: {e}");
    }
    model
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dimensions() {
        let planar = planar_two_link();
        assert_eq!((planar.njoints(), planar.nv, planar.nframes()), (4, 3, 1));

        let arm = spatial_arm();
        assert_eq!((arm.njoints(), arm.nq, arm.nv, arm.nframes()), (7, 6, 6, 3));
        assert_eq!(arm.frame_id("camera").map(|f| arm.frames[f].parent), arm.joint_id("wrist_mount"));
    }
}
