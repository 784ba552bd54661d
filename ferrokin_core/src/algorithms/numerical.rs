// ferrokin_core/src/algorithms/numerical.rs

//! Central finite differences of frame quantities, used to validate the
//! analytic derivatives.

use super::kinematics::forward_kinematics;
use crate::data::Data;
use crate::error::{check_size, KinematicsError};
use crate::model::Model;
use crate::spatial::{Motion, MotionColumnMut};
use crate::types::{Acceleration, Configuration, Matrix6x, Velocity};

/// Which part of the joint state is perturbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perturbation {
    Configuration,
    Velocity,
    Acceleration,
}

/// Differentiates `eval` with respect to every velocity coordinate.
///
/// Column `k` holds `(eval(x + h e_k) − eval(x − h e_k)) / 2h`, where `x` is
/// the perturbed part of `(q, v, a)`. `eval` is called on a fresh `Data`
/// after forward kinematics at the perturbed state.
pub fn central_difference<F>(
    model: &Model,
    q: &Configuration,
    v: &Velocity,
    a: &Acceleration,
    perturbation: Perturbation,
    step: f64,
    mut eval: F,
) -> Result<Matrix6x, KinematicsError>
where
    F: FnMut(&Data) -> Result<Motion, KinematicsError>,
{
    check_size("q", model.nq, q.len())?;
    check_size("v", model.nv, v.len())?;
    check_size("a", model.nv, a.len())?;

    let mut data = Data::new(model);
    let mut sample = |offset: f64, col: usize| -> Result<Motion, KinematicsError> {
        let (mut q, mut v, mut a) = (q.clone(), v.clone(), a.clone());
        match perturbation {
            Perturbation::Configuration => {
                let joint = &model.joints[data.joint_of_column[col]];
                q[joint.idx_q + (col - joint.idx_v)] += offset;
            }
            Perturbation::Velocity => v[col] += offset,
            Perturbation::Acceleration => a[col] += offset,
        }
        forward_kinematics(model, &mut data, &q, &v, &a)?;
        eval(&data)
    };

    let mut result = Matrix6x::zeros(model.nv);
    for col in 0..model.nv {
        let plus = sample(step, col)?;
        let minus = sample(-step, col)?;
        MotionColumnMut::new(&mut result, col).set(&((plus - minus) * (0.5 / step)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::kinematics::frame_placement;
    use crate::model::samples;
    use approx::assert_abs_diff_eq;
    use nalgebra::{DVector, Vector3};

    #[test]
    fn test_central_difference_of_frame_position() {
        // The derivative of the frame origin w.r.t. q is the point velocity
        // column of the world Jacobian, here checked on a hand-worked case.
        let model = samples::planar_two_link();
        let f = model.frame_id("F").unwrap();
        let zeros = DVector::zeros(3);
        let d = central_difference(
            &model,
            &zeros,
            &zeros,
            &zeros,
            Perturbation::Configuration,
            1e-6,
            |data| {
                let p = frame_placement(&model, data, f)?.translation.vector;
                Ok(Motion::new(p, Vector3::zeros()))
            },
        )
        .unwrap();
        // F sits at (1, 0, 1): turning A about z moves it along +y. F lies on
        // B's axis, so B does not move it, and neither does the sibling C.
        assert_abs_diff_eq!(d.fixed_view::<3, 1>(0, 0).into_owned(), Vector3::y(), epsilon = 1e-8);
        assert_abs_diff_eq!(d.fixed_view::<3, 1>(0, 1).into_owned(), Vector3::zeros(), epsilon = 1e-8);
        assert_abs_diff_eq!(d.fixed_view::<3, 1>(0, 2).into_owned(), Vector3::zeros(), epsilon = 1e-8);
    }
}
