//! bboxmetrics provides bounding-box helpers for object-detection metrics.
//!
//! Boxes are rows of `[y_min, x_min, y_max, x_max, category, confidence]`
//! stored in flat `f32` buffers. The crate computes areas, filters by
//! category, pads ragged per-image sets into a sentinel-padded batch and
//! strips the padding again, sorts by confidence, and scores pairwise IoU
//! for matching predictions to ground truth. Row-parallel batch helpers are
//! available via the `rayon` feature.

pub mod bbox;
pub mod matching;
pub mod ops;
mod trace;
pub mod util;

pub use bbox::batch::BoxBatch;
pub use bbox::{
    is_sentinel, BoxSet, BoxView, BOX_FIELDS, CLASS, CONFIDENCE, COORD_FIELDS, SENTINEL, X_MAX,
    X_MIN, Y_MAX, Y_MIN,
};
pub use matching::{compute_ious, match_boxes, IouMatrix};
pub use ops::{
    bbox_area, filter_boxes, filter_out_sentinels, reject_boxes, sort_bboxes, sort_boxes,
    sort_by_confidence, to_sentinel_padded_bbox_tensor,
};
pub use util::{BoxError, BoxResult};
