//! Sentinel padding of ragged box sets.

use crate::bbox::batch::BoxBatch;
use crate::bbox::{BoxView, BOX_FIELDS, CLASS};
use crate::trace::{trace_event, trace_span};
use crate::util::{BoxError, BoxResult};

/// Stacks box sets of differing lengths into one sentinel-padded batch.
///
/// Each set is copied into its own batch row and the trailing slots are left
/// as sentinel boxes. All sets must share a field count and carry a category
/// field, so that [`filter_out_sentinels`](crate::ops::filter_out_sentinels)
/// can undo the padding. An empty input yields an empty batch of
/// [`BOX_FIELDS`] width.
pub fn to_sentinel_padded_bbox_tensor(sets: &[BoxView<'_>]) -> BoxResult<BoxBatch> {
    let _span = trace_span!("to_sentinel_padded_bbox_tensor", sets = sets.len()).entered();

    let Some(first) = sets.first() else {
        return BoxBatch::empty(BOX_FIELDS);
    };
    let fields = first.fields();
    if let Some(other) = sets.iter().find(|set| set.fields() != fields) {
        return Err(BoxError::FieldMismatch {
            expected: fields,
            got: other.fields(),
        });
    }
    first.require_fields(CLASS + 1)?;

    let max_boxes = sets.iter().map(BoxView::len).max().unwrap_or(0);
    let mut batch = BoxBatch::filled_with_sentinels(sets.len(), max_boxes, fields);
    for (b, set) in sets.iter().enumerate() {
        let values = set.as_slice();
        batch.row_mut(b)[..values.len()].copy_from_slice(values);
    }

    trace_event!(
        "padded_batch",
        batch = sets.len(),
        max_boxes = max_boxes,
        fields = fields
    );
    Ok(batch)
}
