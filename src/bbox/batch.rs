//! Fixed-shape batches of box sets.

use crate::bbox::{BoxSet, BoxView, SENTINEL};
use crate::util::{BoxError, BoxResult};

/// Rectangular `[batch, max_boxes, fields]` tensor of boxes.
///
/// Sets shorter than `max_boxes` are padded at the end with sentinel boxes
/// whose fields all hold [`SENTINEL`].
#[derive(Clone, Debug, PartialEq)]
pub struct BoxBatch {
    data: Vec<f32>,
    batch: usize,
    max_boxes: usize,
    fields: usize,
}

impl BoxBatch {
    /// Creates a batch from a row-major buffer.
    pub fn new(data: Vec<f32>, batch: usize, max_boxes: usize, fields: usize) -> BoxResult<Self> {
        if fields == 0 {
            return Err(BoxError::InvalidFieldCount { fields });
        }
        let needed = batch
            .checked_mul(max_boxes)
            .and_then(|v| v.checked_mul(fields));
        if needed != Some(data.len()) {
            return Err(BoxError::InvalidBatchShape {
                batch,
                max_boxes,
                fields,
                needed: needed.unwrap_or(usize::MAX),
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            batch,
            max_boxes,
            fields,
        })
    }

    /// Creates a batch holding no sets.
    pub fn empty(fields: usize) -> BoxResult<Self> {
        Self::new(Vec::new(), 0, 0, fields)
    }

    /// Creates a batch of `batch` rows, each filled with sentinel boxes.
    pub(crate) fn filled_with_sentinels(batch: usize, max_boxes: usize, fields: usize) -> Self {
        Self {
            data: vec![SENTINEL; batch * max_boxes * fields],
            batch,
            max_boxes,
            fields,
        }
    }

    pub(crate) fn row_mut(&mut self, b: usize) -> &mut [f32] {
        let stride = self.row_stride();
        &mut self.data[b * stride..(b + 1) * stride]
    }

    /// Returns the number of sets in the batch.
    pub fn batch(&self) -> usize {
        self.batch
    }

    /// Returns the padded number of boxes per set.
    pub fn max_boxes(&self) -> usize {
        self.max_boxes
    }

    /// Returns the number of fields per box.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Returns true when the batch holds no values.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Returns the padded set at batch index `b`.
    pub fn set(&self, b: usize) -> Option<BoxView<'_>> {
        if b >= self.batch {
            return None;
        }
        let stride = self.row_stride();
        let start = b * stride;
        Some(BoxView::from_parts(
            &self.data[start..start + stride],
            self.fields,
        ))
    }

    /// Returns box `idx` of set `b`.
    pub fn get(&self, b: usize, idx: usize) -> Option<&[f32]> {
        self.set(b)?.get(idx)
    }

    /// Iterates over the padded sets in batch order.
    pub fn sets(&self) -> impl Iterator<Item = BoxView<'_>> + '_ {
        (0..self.batch).filter_map(move |b| self.set(b))
    }

    /// Removes the sentinel padding from every set.
    pub fn unpad(&self) -> BoxResult<Vec<BoxSet>> {
        self.sets().map(crate::ops::filter_out_sentinels).collect()
    }

    fn row_stride(&self) -> usize {
        self.max_boxes * self.fields
    }
}
