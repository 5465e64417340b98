//! Confidence ordering.

use std::cmp::Ordering;

use crate::bbox::batch::BoxBatch;
use crate::bbox::{BoxSet, BoxView, CONFIDENCE};
use crate::trace::{trace_event, trace_span};
use crate::util::BoxResult;

/// Orders rows by descending `axis`, keeping equal rows in input order.
///
/// `total_cmp` gives NaN a fixed place (positive NaN first, negative NaN last).
pub(crate) fn row_cmp_desc(a: &[f32], b: &[f32], axis: usize) -> Ordering {
    b[axis].total_cmp(&a[axis])
}

/// Sorts one set of boxes by descending field `axis`.
///
/// An empty set is returned as is.
pub fn sort_boxes(boxes: BoxView<'_>, axis: usize) -> BoxResult<BoxSet> {
    if boxes.is_empty() {
        return Ok(boxes.to_box_set());
    }
    boxes.check_axis(axis)?;
    let mut rows: Vec<&[f32]> = boxes.iter().collect();
    rows.sort_by(|a, b| row_cmp_desc(a, b, axis));

    let mut out = BoxSet::with_capacity(boxes.fields(), boxes.len());
    for row in rows {
        out.push_row(row);
    }
    Ok(out)
}

/// Sorts every set of a batch by descending field `axis`.
///
/// The sort is stable within each set. An empty batch is returned as is.
pub fn sort_bboxes(batch: &BoxBatch, axis: usize) -> BoxResult<BoxBatch> {
    let _span = trace_span!("sort_bboxes", batch = batch.batch(), axis = axis).entered();

    if batch.is_empty() {
        return Ok(batch.clone());
    }
    let mut data = Vec::with_capacity(batch.as_slice().len());
    for set in batch.sets() {
        data.extend(sort_boxes(set, axis)?.into_vec());
    }

    trace_event!("sorted_batch", batch = batch.batch(), max_boxes = batch.max_boxes());
    BoxBatch::new(data, batch.batch(), batch.max_boxes(), batch.fields())
}

/// Sorts every set of a batch by descending confidence.
pub fn sort_by_confidence(batch: &BoxBatch) -> BoxResult<BoxBatch> {
    sort_bboxes(batch, CONFIDENCE)
}
