//! Error types for bboxmetrics.

use thiserror::Error;

/// Result alias for bboxmetrics operations.
pub type BoxResult<T> = std::result::Result<T, BoxError>;

/// Shape errors reported by box containers and operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BoxError {
    /// A box must carry at least one field.
    #[error("invalid field count: {fields}")]
    InvalidFieldCount { fields: usize },
    /// The buffer length is not a whole number of boxes.
    #[error("buffer of length {len} is not divisible into boxes of {fields} fields")]
    RaggedBuffer { len: usize, fields: usize },
    /// The requested field index does not exist in the boxes.
    #[error("axis {axis} is out of range for boxes with {fields} fields")]
    AxisOutOfRange { axis: usize, fields: usize },
    /// Box sets combined into one tensor disagree on field count.
    #[error("field count mismatch: expected {expected}, got {got}")]
    FieldMismatch { expected: usize, got: usize },
    /// The operation needs more fields than the boxes carry.
    #[error("operation needs at least {needed} fields, boxes have {fields}")]
    TooFewFields { needed: usize, fields: usize },
    /// Batch dimensions do not match the buffer length.
    #[error("batch shape [{batch}, {max_boxes}, {fields}] needs {needed} values, got {got}")]
    InvalidBatchShape {
        batch: usize,
        max_boxes: usize,
        fields: usize,
        needed: usize,
        got: usize,
    },
}
