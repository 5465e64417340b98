//! Box area.

use crate::bbox::{BoxView, COORD_FIELDS, X_MAX, X_MIN, Y_MAX, Y_MIN};
use crate::util::BoxResult;

/// Computes `(y_max - y_min) * (x_max - x_min)` for every box.
pub fn bbox_area(boxes: BoxView<'_>) -> BoxResult<Vec<f32>> {
    boxes.require_fields(COORD_FIELDS)?;
    Ok(boxes.iter().map(area_of).collect())
}

pub(crate) fn area_of(row: &[f32]) -> f32 {
    (row[Y_MAX] - row[Y_MIN]) * (row[X_MAX] - row[X_MIN])
}
