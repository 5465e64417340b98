//! Category and sentinel filtering.

use crate::bbox::{is_sentinel, BoxSet, BoxView, CLASS};
use crate::util::BoxResult;

/// Keeps the boxes whose field at `axis` equals `value`.
pub fn filter_boxes(boxes: BoxView<'_>, value: f32, axis: usize) -> BoxResult<BoxSet> {
    boxes.check_axis(axis)?;
    Ok(retain(boxes, |row| row[axis] == value))
}

/// Drops the boxes whose field at `axis` equals `value`.
pub fn reject_boxes(boxes: BoxView<'_>, value: f32, axis: usize) -> BoxResult<BoxSet> {
    boxes.check_axis(axis)?;
    Ok(retain(boxes, |row| row[axis] != value))
}

/// Removes sentinel padding from one row of a padded batch.
pub fn filter_out_sentinels(boxes: BoxView<'_>) -> BoxResult<BoxSet> {
    boxes.check_axis(CLASS)?;
    Ok(retain(boxes, |row| !is_sentinel(row)))
}

fn retain(boxes: BoxView<'_>, keep: impl Fn(&[f32]) -> bool) -> BoxSet {
    let mut out = BoxSet::with_capacity(boxes.fields(), boxes.len());
    for row in boxes.iter().filter(|&row| keep(row)) {
        out.push_row(row);
    }
    out
}
