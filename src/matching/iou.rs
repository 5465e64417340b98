//! Pairwise intersection-over-union.

use crate::bbox::{BoxView, COORD_FIELDS, X_MAX, X_MIN, Y_MAX, Y_MIN};
use crate::ops::area::area_of;
use crate::util::math::{divide_no_nan, overlap_1d};
use crate::util::BoxResult;

/// Dense `[rows, cols]` table of IoU scores.
#[derive(Clone, Debug, PartialEq)]
pub struct IouMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl IouMatrix {
    /// Returns the number of rows (boxes on the left-hand side).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns (boxes on the right-hand side).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the IoU between row box `r` and column box `c`.
    pub fn get(&self, r: usize, c: usize) -> Option<f32> {
        if r >= self.rows || c >= self.cols {
            return None;
        }
        self.data.get(r * self.cols + c).copied()
    }

    /// Returns the scores of row `r`.
    pub fn row(&self, r: usize) -> Option<&[f32]> {
        if r >= self.rows {
            return None;
        }
        self.data.get(r * self.cols..(r + 1) * self.cols)
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

/// Computes IoU between every box of `lhs` and every box of `rhs`.
///
/// Boxes are read in `[y_min, x_min, y_max, x_max]` order. Pairs whose union
/// is not positive score zero.
pub fn compute_ious(lhs: BoxView<'_>, rhs: BoxView<'_>) -> BoxResult<IouMatrix> {
    lhs.require_fields(COORD_FIELDS)?;
    rhs.require_fields(COORD_FIELDS)?;

    let rhs_areas: Vec<f32> = rhs.iter().map(area_of).collect();
    let mut data = Vec::with_capacity(lhs.len() * rhs.len());
    for a in lhs.iter() {
        let area_a = area_of(a);
        for (b, &area_b) in rhs.iter().zip(rhs_areas.iter()) {
            let inter = overlap_1d(a[Y_MIN], a[Y_MAX], b[Y_MIN], b[Y_MAX])
                * overlap_1d(a[X_MIN], a[X_MAX], b[X_MIN], b[X_MAX]);
            data.push(divide_no_nan(inter, area_a + area_b - inter));
        }
    }

    Ok(IouMatrix {
        data,
        rows: lhs.len(),
        cols: rhs.len(),
    })
}
