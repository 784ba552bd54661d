// ferrokin_core/src/data.rs

use crate::ancestry::AncestorIndex;
use crate::model::Model;
use crate::spatial::Motion;
use crate::types::{JointIndex, Matrix6x, Placement};

/// Per-configuration workspace for a `Model`.
///
/// Allocated once with [`Data::new`] and refreshed in place by
/// `forward_kinematics`. All motions are expressed in the world frame with
/// their linear part measured at the world origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Data {
    /// World placement of each joint's body frame (`oMi`).
    pub o_mi: Vec<Placement>,
    /// World spatial velocity of each body.
    pub ov: Vec<Motion>,
    /// World spatial acceleration of each body.
    pub oa: Vec<Motion>,
    /// World motion subspace, one column per velocity coordinate.
    pub j: Matrix6x,
    /// `parents_fromRow`: the ancestor column of every velocity column.
    pub ancestors: AncestorIndex,
    /// The joint owning each velocity column.
    pub joint_of_column: Vec<JointIndex>,
}

impl Data {
    pub fn new(model: &Model) -> Self {
        let n = model.njoints();
        let mut joint_of_column = vec![0; model.nv];
        for (id, joint) in model.joints.iter().enumerate() {
            for col in joint.columns() {
                joint_of_column[col] = id;
            }
        }
        Self {
            o_mi: vec![Placement::identity(); n],
            ov: vec![Motion::zero(); n],
            oa: vec![Motion::zero(); n],
            j: Matrix6x::zeros(model.nv),
            ancestors: AncestorIndex::from_model(model),
            joint_of_column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::samples;

    #[test]
    fn test_new_matches_model() {
        let model = samples::spatial_arm();
        let data = Data::new(&model);
        assert!(model.check(&data));

        let wrist = model.joint_id("wrist").unwrap();
        for col in model.joints[wrist].columns() {
            assert_eq!(data.joint_of_column[col], wrist);
        }
        assert!(!samples::planar_two_link().check(&data));
    }
}
