// ferrokin_core/src/spatial/column.rs

use nalgebra::{MatrixViewMut, Vector3, U1, U6};

use super::{Motion, SpatialAction};
use crate::types::{Matrix6x, Placement};

/// A mutable view over one column of a `6 x nv` derivative matrix, read and
/// written as a spatial motion.
///
/// Every transform rewrites the column's existing storage. Nothing is
/// reallocated and no other column of the matrix is touched.
pub struct MotionColumnMut<'a> {
    column: MatrixViewMut<'a, f64, U6, U1, U1, U6>,
}

impl<'a> MotionColumnMut<'a> {
    /// Borrows column `col` of `matrix`. Panics if `col` is out of range.
    pub fn new(matrix: &'a mut Matrix6x, col: usize) -> Self {
        Self {
            column: matrix.column_mut(col),
        }
    }

    pub fn linear(&self) -> Vector3<f64> {
        Vector3::new(self.column[0], self.column[1], self.column[2])
    }

    pub fn angular(&self) -> Vector3<f64> {
        Vector3::new(self.column[3], self.column[4], self.column[5])
    }

    pub fn motion(&self) -> Motion {
        Motion::from_column(&self.column)
    }

    pub fn set(&mut self, motion: &Motion) {
        motion.write_to(&mut self.column);
    }

    /// `linear -= offset × angular`. The angular rows are left as they are.
    pub fn translate(&mut self, offset: &Vector3<f64>) {
        let correction = offset.cross(&self.angular());
        for i in 0..3 {
            self.column[i] -= correction[i];
        }
    }

    /// Replaces the column with `placement.act_inv(column)`.
    pub fn act_inv(&mut self, placement: &Placement) {
        let expressed = placement.act_inv_motion(&self.motion());
        self.set(&expressed);
    }
}
