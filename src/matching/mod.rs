//! Overlap scoring and box assignment for evaluation.
//!
//! Includes the pairwise IoU table and threshold-based matching against it.

pub(crate) mod assign;
pub(crate) mod iou;

pub use assign::match_boxes;
pub use iou::{compute_ious, IouMatrix};
