// ferrokin_core/src/spatial/mod.rs

//! Spatial motion algebra.
//!
//! A [`Motion`] bundles a linear and an angular 3D vector. When stored in a
//! 6-vector or a matrix column, the layout is always `[linear; angular]`.
//! The linear part is the velocity of the point that currently coincides with
//! the origin of the frame the motion is expressed in.

mod column;

pub use column::MotionColumnMut;

use nalgebra::storage::{RawStorage, RawStorageMut};
use nalgebra::{Isometry3, Matrix, Vector3, Vector6, U1, U6};
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A spatial velocity, acceleration, or any other element of se(3).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub linear: Vector3<f64>,
    pub angular: Vector3<f64>,
}

impl Motion {
    pub fn new(linear: Vector3<f64>, angular: Vector3<f64>) -> Self {
        Self { linear, angular }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Reads a motion out of any 6x1 column (owned vector or matrix view).
    pub fn from_column<S>(column: &Matrix<f64, U6, U1, S>) -> Self
    where
        S: RawStorage<f64, U6, U1>,
    {
        Self {
            linear: Vector3::new(column[0], column[1], column[2]),
            angular: Vector3::new(column[3], column[4], column[5]),
        }
    }

    /// Writes this motion into any mutable 6x1 column.
    pub fn write_to<S>(&self, column: &mut Matrix<f64, U6, U1, S>)
    where
        S: RawStorageMut<f64, U6, U1>,
    {
        for i in 0..3 {
            column[i] = self.linear[i];
            column[i + 3] = self.angular[i];
        }
    }

    pub fn to_vector(&self) -> Vector6<f64> {
        let mut v = Vector6::zeros();
        self.write_to(&mut v);
        v
    }

    /// The motion cross product `self × other`:
    /// `(ω1 × v2 + v1 × ω2, ω1 × ω2)`.
    pub fn cross(&self, other: &Motion) -> Motion {
        Motion {
            linear: self.angular.cross(&other.linear) + self.linear.cross(&other.angular),
            angular: self.angular.cross(&other.angular),
        }
    }

    /// Moves the reference point by `offset` without changing orientation.
    /// The result's linear part is the velocity of the point at `offset`.
    pub fn translated(&self, offset: &Vector3<f64>) -> Motion {
        Motion {
            linear: self.linear - offset.cross(&self.angular),
            angular: self.angular,
        }
    }

    /// Largest absolute component, used for error reporting.
    pub fn max_abs(&self) -> f64 {
        self.linear.amax().max(self.angular.amax())
    }
}

impl Add for Motion {
    type Output = Motion;
    fn add(self, rhs: Motion) -> Motion {
        Motion::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl Sub for Motion {
    type Output = Motion;
    fn sub(self, rhs: Motion) -> Motion {
        Motion::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl Neg for Motion {
    type Output = Motion;
    fn neg(self) -> Motion {
        Motion::new(-self.linear, -self.angular)
    }
}

impl Mul<f64> for Motion {
    type Output = Motion;
    fn mul(self, rhs: f64) -> Motion {
        Motion::new(self.linear * rhs, self.angular * rhs)
    }
}

impl AddAssign for Motion {
    fn add_assign(&mut self, rhs: Motion) {
        self.linear += rhs.linear;
        self.angular += rhs.angular;
    }
}

impl SubAssign for Motion {
    fn sub_assign(&mut self, rhs: Motion) {
        self.linear -= rhs.linear;
        self.angular -= rhs.angular;
    }
}

// --- Rigid transforms acting on motions ---
/// The adjoint action of a rigid placement on spatial motions.
///
/// For a placement `aMb` (frame `b` seen from frame `a`), `act_motion` maps a
/// motion expressed in `b` into `a`, and `act_inv_motion` maps from `a` to `b`.
pub trait SpatialAction {
    fn act_motion(&self, motion: &Motion) -> Motion;
    fn act_inv_motion(&self, motion: &Motion) -> Motion;
}

impl SpatialAction for Isometry3<f64> {
    fn act_motion(&self, motion: &Motion) -> Motion {
        let angular = self.rotation * motion.angular;
        let linear = self.rotation * motion.linear + self.translation.vector.cross(&angular);
        Motion { linear, angular }
    }

    fn act_inv_motion(&self, motion: &Motion) -> Motion {
        let p = &self.translation.vector;
        Motion {
            linear: self
                .rotation
                .inverse_transform_vector(&(motion.linear - p.cross(&motion.angular))),
            angular: self.rotation.inverse_transform_vector(&motion.angular),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Translation3, UnitQuaternion};

    const EPS: f64 = 1e-12;

    fn sample_motion() -> Motion {
        Motion::new(Vector3::new(0.3, -1.2, 2.0), Vector3::new(-0.7, 0.4, 1.1))
    }

    fn sample_placement() -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(0.5, -2.0, 1.5),
            UnitQuaternion::from_euler_angles(0.3, -0.8, 1.9),
        )
    }

    fn assert_motion_eq(a: &Motion, b: &Motion, epsilon: f64) {
        assert_abs_diff_eq!(a.linear, b.linear, epsilon = epsilon);
        assert_abs_diff_eq!(a.angular, b.angular, epsilon = epsilon);
    }

    #[test]
    fn test_cross_is_antisymmetric() {
        let a = sample_motion();
        let b = Motion::new(Vector3::new(1.0, 0.0, -0.5), Vector3::new(0.2, 0.9, 0.0));
        assert_motion_eq(&a.cross(&b), &(-b.cross(&a)), EPS);
        assert_motion_eq(&a.cross(&a), &Motion::zero(), EPS);
    }

    #[test]
    fn test_act_inv_undoes_act() {
        let m = sample_motion();
        let placement = sample_placement();
        let round_trip = placement.act_inv_motion(&placement.act_motion(&m));
        assert_motion_eq(&round_trip, &m, 1e-12);
    }

    #[test]
    fn test_act_matches_composed_placements() {
        // act(A * B, m) == act(A, act(B, m))
        let a = sample_placement();
        let b = Isometry3::from_parts(
            Translation3::new(-1.0, 0.25, 0.0),
            UnitQuaternion::from_euler_angles(-1.1, 0.2, 0.4),
        );
        let m = sample_motion();
        assert_motion_eq(&(a * b).act_motion(&m), &a.act_motion(&b.act_motion(&m)), 1e-12);
        assert_motion_eq(
            &(a * b).act_inv_motion(&m),
            &b.act_inv_motion(&a.act_inv_motion(&m)),
            1e-12,
        );
    }

    #[test]
    fn test_translated_matches_pure_translation_act_inv() {
        let m = sample_motion();
        let offset = Vector3::new(0.0, 0.0, 1.0);
        let shift = Isometry3::from_parts(Translation3::from(offset), UnitQuaternion::identity());
        assert_motion_eq(&m.translated(&offset), &shift.act_inv_motion(&m), EPS);
    }

    #[test]
    fn test_pure_rotation_velocity_at_offset_point() {
        // Spinning about z at the origin: the point (1, 0, 0) moves along +y.
        let spin = Motion::new(Vector3::zeros(), Vector3::z());
        let at_point = spin.translated(&Vector3::x());
        assert_abs_diff_eq!(at_point.linear, Vector3::y(), epsilon = EPS);
    }

    #[test]
    fn test_column_round_trip_layout() {
        let m = sample_motion();
        let v = m.to_vector();
        assert_abs_diff_eq!(v[0], 0.3, epsilon = EPS);
        assert_abs_diff_eq!(v[5], 1.1, epsilon = EPS);
        assert_eq!(Motion::from_column(&v), m);
    }
}
