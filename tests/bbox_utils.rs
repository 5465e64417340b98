use bboxmetrics::{
    bbox_area, filter_boxes, filter_out_sentinels, reject_boxes, sort_bboxes, sort_by_confidence,
    to_sentinel_padded_bbox_tensor, BoxBatch, BoxSet, CLASS, CONFIDENCE,
};

/// All-zero box except for the category and confidence fields.
fn dummy_bbox(confidence: f32, category: f32) -> [f32; 6] {
    [0.0, 0.0, 0.0, 0.0, category, confidence]
}

fn assert_all_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() < 1e-6, "{actual:?} != {expected:?}");
    }
}

#[test]
fn filter_bboxes_empty() {
    let y_pred = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0)]).unwrap();
    let result = filter_boxes(y_pred.view(), 2.0, CLASS).unwrap();
    assert_eq!(result.len(), 0);
}

#[test]
fn bbox_area_of_square() {
    let boxes = BoxSet::from_boxes(&[[0.0, 0.0, 100.0, 100.0]]).unwrap();
    let areas = bbox_area(boxes.view()).unwrap();
    assert_all_close(&areas, &[10000.0]);
}

#[test]
fn filter_bboxes_keeps_matching_category() {
    let y_pred = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0), dummy_bbox(0.0, 2.0)]).unwrap();
    let result = filter_boxes(y_pred.view(), 2.0, CLASS).unwrap();
    let want = BoxSet::from_boxes(&[dummy_bbox(0.0, 2.0)]).unwrap();
    assert_eq!(result, want);
}

#[test]
fn filter_bboxes_keeps_input_order_of_matches() {
    let y_pred = BoxSet::from_boxes(&[
        dummy_bbox(0.3, 2.0),
        dummy_bbox(0.6, 1.0),
        dummy_bbox(0.9, 2.0),
    ])
    .unwrap();
    let result = filter_boxes(y_pred.view(), 2.0, CLASS).unwrap();
    let want = BoxSet::from_boxes(&[dummy_bbox(0.3, 2.0), dummy_bbox(0.9, 2.0)]).unwrap();
    assert_eq!(result, want);
}

#[test]
fn reject_bboxes_excludes_matching_category() {
    let y_pred = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0), dummy_bbox(0.0, 2.0)]).unwrap();
    let result = reject_boxes(y_pred.view(), 2.0, CLASS).unwrap();
    let want = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0)]).unwrap();
    assert_eq!(result, want);
}

#[test]
fn to_sentinel_padded_bbox_tensor_pads_short_sets() {
    let box_set1 = BoxSet::from_boxes(&[dummy_bbox(0.0, 0.0), dummy_bbox(0.0, 0.0)]).unwrap();
    let box_set2 = BoxSet::from_boxes(&[dummy_bbox(0.0, 0.0)]).unwrap();
    let bbox_tensor = to_sentinel_padded_bbox_tensor(&[box_set1.view(), box_set2.view()]).unwrap();

    assert_eq!(bbox_tensor.batch(), 2);
    assert_eq!(bbox_tensor.max_boxes(), 2);
    assert_eq!(bbox_tensor.fields(), 6);
    assert_all_close(bbox_tensor.get(1, 1).unwrap(), &[-1.0; 6]);
}

#[test]
fn filter_out_sentinels_drops_padding() {
    let y_pred = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0), dummy_bbox(0.0, -1.0)]).unwrap();
    let result = filter_out_sentinels(y_pred.view()).unwrap();
    let want = BoxSet::from_boxes(&[dummy_bbox(0.0, 1.0)]).unwrap();
    assert_eq!(result, want);
}

#[test]
fn end_to_end_sentinel_filtering() {
    let box_set1 = BoxSet::from_boxes(&[dummy_bbox(0.0, 0.0), dummy_bbox(0.0, 0.0)]).unwrap();
    let box_set2 = BoxSet::from_boxes(&[dummy_bbox(0.0, 0.0)]).unwrap();
    let bbox_tensor = to_sentinel_padded_bbox_tensor(&[box_set1.view(), box_set2.view()]).unwrap();

    assert_eq!(filter_out_sentinels(bbox_tensor.set(0).unwrap()).unwrap(), box_set1);
    assert_eq!(filter_out_sentinels(bbox_tensor.set(1).unwrap()).unwrap(), box_set2);
}

#[test]
fn sort_bboxes_unsorted_list() {
    let y_pred = BoxSet::from_boxes(&[
        dummy_bbox(0.1, 0.0),
        dummy_bbox(0.9, 0.0),
        dummy_bbox(0.4, 0.0),
        dummy_bbox(0.2, 0.0),
    ])
    .unwrap();
    let want = BoxSet::from_boxes(&[
        dummy_bbox(0.9, 0.0),
        dummy_bbox(0.4, 0.0),
        dummy_bbox(0.2, 0.0),
        dummy_bbox(0.1, 0.0),
    ])
    .unwrap();
    let batch = to_sentinel_padded_bbox_tensor(&[y_pred.view()]).unwrap();

    let y_sorted = sort_bboxes(&batch, CONFIDENCE).unwrap();
    assert_all_close(y_sorted.as_slice(), want.data());
}

#[test]
fn sort_bboxes_empty_list() {
    let y_pred = BoxBatch::empty(6).unwrap();
    let y_sorted = sort_by_confidence(&y_pred).unwrap();
    assert_eq!(y_sorted, y_pred);
}

#[test]
fn sort_keeps_padding_after_real_boxes() {
    let short = BoxSet::from_boxes(&[dummy_bbox(0.3, 1.0)]).unwrap();
    let long = BoxSet::from_boxes(&[
        dummy_bbox(0.2, 1.0),
        dummy_bbox(0.7, 2.0),
        dummy_bbox(0.5, 3.0),
    ])
    .unwrap();
    let batch = to_sentinel_padded_bbox_tensor(&[short.view(), long.view()]).unwrap();
    let sorted = sort_by_confidence(&batch).unwrap();

    let row0: Vec<f32> = sorted.set(0).unwrap().column(CONFIDENCE).unwrap();
    let row1: Vec<f32> = sorted.set(1).unwrap().column(CONFIDENCE).unwrap();
    assert_all_close(&row0, &[0.3, -1.0, -1.0]);
    assert_all_close(&row1, &[0.7, 0.5, 0.2]);
}
