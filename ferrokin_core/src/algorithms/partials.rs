// ferrokin_core/src/algorithms/partials.rs

//! Caller-owned output buffers for derivative computations.

use crate::error::{check_size, KinematicsError};
use crate::types::Matrix6x;

/// Partial derivatives of a spatial velocity.
///
/// Both matrices are `6 x nv` and are written in place. Only the columns on
/// the target joint's ancestor chain are ever touched.
#[derive(Debug)]
pub struct VelocityPartials<'a> {
    /// ∂v/∂q
    pub v_partial_dq: &'a mut Matrix6x,
    /// ∂v/∂q̇
    pub v_partial_dv: &'a mut Matrix6x,
}

impl<'a> VelocityPartials<'a> {
    pub fn new(v_partial_dq: &'a mut Matrix6x, v_partial_dv: &'a mut Matrix6x) -> Self {
        Self {
            v_partial_dq,
            v_partial_dv,
        }
    }

    pub fn check_columns(&self, nv: usize) -> Result<(), KinematicsError> {
        check_size("v_partial_dq", nv, self.v_partial_dq.ncols())?;
        check_size("v_partial_dv", nv, self.v_partial_dv.ncols())
    }

    pub fn matrices(&mut self) -> [&mut Matrix6x; 2] {
        [&mut *self.v_partial_dq, &mut *self.v_partial_dv]
    }
}

/// Partial derivatives of a spatial acceleration, plus the velocity's ∂v/∂q.
#[derive(Debug)]
pub struct AccelerationPartials<'a> {
    pub v_partial_dq: &'a mut Matrix6x,
    pub a_partial_dq: &'a mut Matrix6x,
    pub a_partial_dv: &'a mut Matrix6x,
    pub a_partial_da: &'a mut Matrix6x,
}

impl<'a> AccelerationPartials<'a> {
    pub fn new(
        v_partial_dq: &'a mut Matrix6x,
        a_partial_dq: &'a mut Matrix6x,
        a_partial_dv: &'a mut Matrix6x,
        a_partial_da: &'a mut Matrix6x,
    ) -> Self {
        Self {
            v_partial_dq,
            a_partial_dq,
            a_partial_dv,
            a_partial_da,
        }
    }

    pub fn check_columns(&self, nv: usize) -> Result<(), KinematicsError> {
        check_size("v_partial_dq", nv, self.v_partial_dq.ncols())?;
        check_size("a_partial_dq", nv, self.a_partial_dq.ncols())?;
        check_size("a_partial_dv", nv, self.a_partial_dv.ncols())?;
        check_size("a_partial_da", nv, self.a_partial_da.ncols())
    }

    pub fn matrices(&mut self) -> [&mut Matrix6x; 4] {
        [
            &mut *self.v_partial_dq,
            &mut *self.a_partial_dq,
            &mut *self.a_partial_dv,
            &mut *self.a_partial_da,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_columns_names_the_offending_buffer() {
        let mut ok = Matrix6x::zeros(3);
        let mut bad = Matrix6x::zeros(2);
        let mut c = Matrix6x::zeros(3);
        let mut d = Matrix6x::zeros(3);
        let partials = AccelerationPartials::new(&mut ok, &mut c, &mut bad, &mut d);
        assert_eq!(
            partials.check_columns(3),
            Err(KinematicsError::DimensionMismatch {
                what: "a_partial_dv",
                expected: 3,
                found: 2
            })
        );
    }
}
