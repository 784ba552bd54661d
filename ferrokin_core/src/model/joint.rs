// ferrokin_core/src/model/joint.rs

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::spatial::Motion;
use crate::types::Placement;

/// The kinds of joints a `Model` can hold.
///
/// Axes are expressed in the joint frame. They are normalized when the joint
/// is added to a model, so config files may use any non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum JointKind {
    /// No relative motion. Joint 0 (the universe) is always of this kind.
    Fixed,
    /// Rotation about `axis`. q = angle (rad).
    Revolute { axis: Vector3<f64> },
    /// Translation along `axis`. q = displacement (m).
    Prismatic { axis: Vector3<f64> },
    /// Rotation about and translation along the same `axis`.
    /// q = [angle, displacement].
    Cylindrical { axis: Vector3<f64> },
}

impl JointKind {
    /// Dimension of the joint's configuration vector.
    pub fn nq(&self) -> usize {
        self.nv()
    }

    /// Number of degrees of freedom.
    pub fn nv(&self) -> usize {
        match self {
            JointKind::Fixed => 0,
            JointKind::Revolute { .. } | JointKind::Prismatic { .. } => 1,
            JointKind::Cylindrical { .. } => 2,
        }
    }

    pub fn axis(&self) -> Option<&Vector3<f64>> {
        match self {
            JointKind::Fixed => None,
            JointKind::Revolute { axis }
            | JointKind::Prismatic { axis }
            | JointKind::Cylindrical { axis } => Some(axis),
        }
    }

    /// Returns the same kind with a unit axis, or `None` if the axis is degenerate.
    pub(crate) fn normalized(&self) -> Option<JointKind> {
        let unit = |axis: &Vector3<f64>| axis.try_normalize(1e-9);
        match self {
            JointKind::Fixed => Some(JointKind::Fixed),
            JointKind::Revolute { axis } => unit(axis).map(|axis| JointKind::Revolute { axis }),
            JointKind::Prismatic { axis } => unit(axis).map(|axis| JointKind::Prismatic { axis }),
            JointKind::Cylindrical { axis } => {
                unit(axis).map(|axis| JointKind::Cylindrical { axis })
            }
        }
    }

    /// The joint transform `jXc(q)` from the joint frame to the child body frame.
    /// `q` must hold exactly `nq()` values.
    pub fn transform(&self, q: &[f64]) -> Placement {
        debug_assert_eq!(q.len(), self.nq());
        match self {
            JointKind::Fixed => Placement::identity(),
            JointKind::Revolute { axis } => Placement::new(Vector3::zeros(), axis * q[0]),
            JointKind::Prismatic { axis } => Placement::new(axis * q[0], Vector3::zeros()),
            // Rotation and translation share the axis, so the two motions commute.
            JointKind::Cylindrical { axis } => Placement::new(axis * q[1], axis * q[0]),
        }
    }

    /// Column `dof` of the motion subspace `S`, expressed in the child body frame.
    pub fn motion_subspace(&self, dof: usize) -> Motion {
        debug_assert!(dof < self.nv());
        match (self, dof) {
            (JointKind::Revolute { axis }, _) | (JointKind::Cylindrical { axis }, 0) => {
                Motion::new(Vector3::zeros(), *axis)
            }
            (JointKind::Prismatic { axis }, _) | (JointKind::Cylindrical { axis }, _) => {
                Motion::new(*axis, Vector3::zeros())
            }
            (JointKind::Fixed, _) => Motion::zero(),
        }
    }
}

/// A joint as stored in a `Model`: its kind plus where its coordinates live.
#[derive(Debug, Clone, PartialEq)]
pub struct JointModel {
    pub name: String,
    pub kind: JointKind,
    /// First index of this joint in the configuration vector `q`.
    pub idx_q: usize,
    /// First index of this joint in the velocity vector `v` (and first matrix column).
    pub idx_v: usize,
}

impl JointModel {
    pub fn nq(&self) -> usize {
        self.kind.nq()
    }

    pub fn nv(&self) -> usize {
        self.kind.nv()
    }

    /// The velocity-space columns owned by this joint.
    pub fn columns(&self) -> std::ops::Range<usize> {
        self.idx_v..self.idx_v + self.nv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Point3;

    #[test]
    fn test_revolute_transform_rotates_about_axis() {
        let joint = JointKind::Revolute { axis: Vector3::z() };
        let t = joint.transform(&[std::f64::consts::FRAC_PI_2]);
        let p = t * Point3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p.coords, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_cylindrical_transform_combines_rotation_and_translation() {
        let joint = JointKind::Cylindrical { axis: Vector3::z() };
        let t = joint.transform(&[std::f64::consts::PI, 0.5]);
        let p = t * Point3::new(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(p.coords, Vector3::new(-1.0, 0.0, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_motion_subspace_columns() {
        let axis = Vector3::y();
        let cyl = JointKind::Cylindrical { axis };
        assert_eq!(cyl.motion_subspace(0), Motion::new(Vector3::zeros(), axis));
        assert_eq!(cyl.motion_subspace(1), Motion::new(axis, Vector3::zeros()));
        let prismatic = JointKind::Prismatic { axis };
        assert_eq!(prismatic.motion_subspace(0), Motion::new(axis, Vector3::zeros()));
    }

    #[test]
    fn test_normalized_rejects_degenerate_axis() {
        assert!(JointKind::Revolute {
            axis: Vector3::zeros()
        }
        .normalized()
        .is_none());
        let kind = JointKind::Prismatic {
            axis: Vector3::new(0.0, 3.0, 4.0),
        }
        .normalized()
        .unwrap();
        assert_abs_diff_eq!(kind.axis().unwrap().norm(), 1.0, epsilon = 1e-12);
    }
}
