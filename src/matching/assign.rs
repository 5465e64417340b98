//! Threshold matching over an IoU table.

use crate::matching::iou::IouMatrix;

/// Matches each row box to its best-overlapping column box.
///
/// Returns, per row, the column with the highest IoU when that IoU reaches
/// `threshold`, else `None`. Ties resolve to the lowest column index.
pub fn match_boxes(ious: &IouMatrix, threshold: f32) -> Vec<Option<usize>> {
    (0..ious.rows())
        .map(|r| {
            let row = ious.row(r).unwrap_or_default();
            let mut best: Option<(usize, f32)> = None;
            for (c, &score) in row.iter().enumerate() {
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((c, score));
                }
            }
            best.filter(|&(_, score)| score >= threshold).map(|(c, _)| c)
        })
        .collect()
}
