//! Rayon-parallel batch operations (feature-gated).
//!
//! Batch rows are independent, so these helpers split the work per row and
//! produce results identical to their sequential counterparts.

use crate::bbox::batch::BoxBatch;
use crate::bbox::{BoxSet, BoxView};
use crate::ops::{filter_out_sentinels, sort_boxes};
use crate::trace::trace_span;
use crate::util::BoxResult;
use rayon::prelude::*;

/// Row-parallel version of [`sort_bboxes`](crate::ops::sort_bboxes).
pub fn sort_bboxes_par(batch: &BoxBatch, axis: usize) -> BoxResult<BoxBatch> {
    let _span = trace_span!("sort_bboxes_par", batch = batch.batch(), axis = axis).entered();

    if batch.is_empty() {
        return Ok(batch.clone());
    }
    let rows: Vec<BoxSet> = (0..batch.batch())
        .into_par_iter()
        .filter_map(|b| batch.set(b))
        .map(|set| sort_boxes(set, axis))
        .collect::<BoxResult<_>>()?;

    let mut data = Vec::with_capacity(batch.as_slice().len());
    for row in rows {
        data.extend(row.into_vec());
    }
    BoxBatch::new(data, batch.batch(), batch.max_boxes(), batch.fields())
}

/// Row-parallel version of [`BoxBatch::unpad`].
pub fn unpad_par(batch: &BoxBatch) -> BoxResult<Vec<BoxSet>> {
    let _span = trace_span!("unpad_par", batch = batch.batch()).entered();

    (0..batch.batch())
        .into_par_iter()
        .filter_map(|b| batch.set(b))
        .map(filter_out_sentinels)
        .collect()
}

/// Applies [`filter_out_sentinels`] to independent sets in parallel.
///
/// Sets are not combined, so they may differ in field count.
pub fn filter_out_sentinels_par(sets: &[BoxView<'_>]) -> BoxResult<Vec<BoxSet>> {
    let _span = trace_span!("filter_out_sentinels_par", sets = sets.len()).entered();

    sets.par_iter().map(|set| filter_out_sentinels(*set)).collect()
}
