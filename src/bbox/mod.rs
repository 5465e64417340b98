//! Bounding-box containers and field layout.
//!
//! A box is a row of `f32` fields laid out as
//! `[y_min, x_min, y_max, x_max, category, confidence]`. `BoxView` is a
//! borrowed set of boxes over a row-major buffer; `BoxSet` owns its buffer.
//! Sets with fewer fields (for example bare `[y_min, x_min, y_max, x_max]`
//! coordinates) are accepted by operations that only read the coordinates.

use crate::util::{BoxError, BoxResult};

pub mod batch;

/// Field index of the top edge.
pub const Y_MIN: usize = 0;
/// Field index of the left edge.
pub const X_MIN: usize = 1;
/// Field index of the bottom edge.
pub const Y_MAX: usize = 2;
/// Field index of the right edge.
pub const X_MAX: usize = 3;
/// Field index of the category label.
pub const CLASS: usize = 4;
/// Field index of the detection confidence.
pub const CONFIDENCE: usize = 5;
/// Number of fields in a full detection box.
pub const BOX_FIELDS: usize = 6;
/// Number of coordinate fields at the start of every box.
pub const COORD_FIELDS: usize = 4;

/// Value stored in every field of a padding box.
pub const SENTINEL: f32 = -1.0;

/// Returns true when `row` is a padding box.
///
/// Real detections carry a non-negative category, so a box whose category
/// field holds [`SENTINEL`] marks an absent entry. Rows too short to carry a
/// category are never sentinels.
pub fn is_sentinel(row: &[f32]) -> bool {
    row.get(CLASS).is_some_and(|&category| category == SENTINEL)
}

/// Borrowed set of boxes over a row-major buffer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxView<'a> {
    data: &'a [f32],
    fields: usize,
}

impl<'a> BoxView<'a> {
    /// Creates a view over `data` with `fields` values per box.
    pub fn new(data: &'a [f32], fields: usize) -> BoxResult<Self> {
        check_layout(data.len(), fields)?;
        Ok(Self { data, fields })
    }

    pub(crate) fn from_parts(data: &'a [f32], fields: usize) -> Self {
        debug_assert!(fields > 0 && data.len() % fields == 0);
        Self { data, fields }
    }

    /// Returns the number of boxes.
    pub fn len(&self) -> usize {
        self.data.len() / self.fields
    }

    /// Returns true when the set holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of fields per box.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Returns the backing row-major buffer.
    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Returns box `idx` if it exists.
    pub fn get(&self, idx: usize) -> Option<&'a [f32]> {
        let start = idx.checked_mul(self.fields)?;
        let end = start.checked_add(self.fields)?;
        self.data.get(start..end)
    }

    /// Iterates over the boxes in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'a, f32> {
        self.data.chunks_exact(self.fields)
    }

    /// Collects the field at `axis` for every box.
    pub fn column(&self, axis: usize) -> BoxResult<Vec<f32>> {
        self.check_axis(axis)?;
        Ok(self.iter().map(|row| row[axis]).collect())
    }

    /// Copies the view into an owned set.
    pub fn to_box_set(&self) -> BoxSet {
        BoxSet {
            data: self.data.to_vec(),
            fields: self.fields,
        }
    }

    pub(crate) fn check_axis(&self, axis: usize) -> BoxResult<()> {
        if axis >= self.fields {
            return Err(BoxError::AxisOutOfRange {
                axis,
                fields: self.fields,
            });
        }
        Ok(())
    }

    pub(crate) fn require_fields(&self, needed: usize) -> BoxResult<()> {
        if self.fields < needed {
            return Err(BoxError::TooFewFields {
                needed,
                fields: self.fields,
            });
        }
        Ok(())
    }
}

/// Owned set of boxes, the detections for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSet {
    data: Vec<f32>,
    fields: usize,
}

impl BoxSet {
    /// Creates a set from a row-major buffer with `fields` values per box.
    pub fn new(data: Vec<f32>, fields: usize) -> BoxResult<Self> {
        check_layout(data.len(), fields)?;
        Ok(Self { data, fields })
    }

    /// Creates an empty set of boxes with `fields` values each.
    pub fn empty(fields: usize) -> BoxResult<Self> {
        Self::new(Vec::new(), fields)
    }

    /// Creates a set from fixed-width rows.
    pub fn from_boxes<const N: usize>(boxes: &[[f32; N]]) -> BoxResult<Self> {
        Self::new(boxes.iter().flatten().copied().collect(), N)
    }

    pub(crate) fn with_capacity(fields: usize, boxes: usize) -> Self {
        debug_assert!(fields > 0);
        Self {
            data: Vec::with_capacity(fields * boxes),
            fields,
        }
    }

    pub(crate) fn push_row(&mut self, row: &[f32]) {
        debug_assert_eq!(row.len(), self.fields);
        self.data.extend_from_slice(row);
    }

    /// Returns a borrowed view of the set.
    pub fn view(&self) -> BoxView<'_> {
        BoxView::from_parts(&self.data, self.fields)
    }

    /// Returns the number of boxes.
    pub fn len(&self) -> usize {
        self.data.len() / self.fields
    }

    /// Returns true when the set holds no boxes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of fields per box.
    pub fn fields(&self) -> usize {
        self.fields
    }

    /// Returns box `idx` if it exists.
    pub fn get(&self, idx: usize) -> Option<&[f32]> {
        self.view().get(idx)
    }

    /// Iterates over the boxes in order.
    pub fn iter(&self) -> std::slice::ChunksExact<'_, f32> {
        self.data.chunks_exact(self.fields)
    }

    /// Returns the backing row-major buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Consumes the set and returns its buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

fn check_layout(len: usize, fields: usize) -> BoxResult<()> {
    if fields == 0 {
        return Err(BoxError::InvalidFieldCount { fields });
    }
    if len % fields != 0 {
        return Err(BoxError::RaggedBuffer { len, fields });
    }
    Ok(())
}
