//! Box-set operations used by detection metrics.
//!
//! Every operation is pure: inputs are borrowed and results are new owned
//! sets or batches. Shape problems surface as [`BoxError`](crate::BoxError).

pub(crate) mod area;
pub(crate) mod filter;
pub(crate) mod pad;
pub(crate) mod sort;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use area::bbox_area;
pub use filter::{filter_boxes, filter_out_sentinels, reject_boxes};
pub use pad::to_sentinel_padded_bbox_tensor;
pub use sort::{sort_bboxes, sort_boxes, sort_by_confidence};
