use bboxmetrics::{compute_ious, match_boxes, BoxError, BoxSet};

#[test]
fn identical_boxes_have_unit_iou() {
    let boxes = BoxSet::from_boxes(&[[0.0, 0.0, 10.0, 10.0], [5.0, 5.0, 25.0, 15.0]]).unwrap();
    let ious = compute_ious(boxes.view(), boxes.view()).unwrap();
    assert_eq!(ious.rows(), 2);
    assert_eq!(ious.cols(), 2);
    assert!((ious.get(0, 0).unwrap() - 1.0).abs() < 1e-6);
    assert!((ious.get(1, 1).unwrap() - 1.0).abs() < 1e-6);
}

#[test]
fn partial_overlap_matches_hand_computation() {
    let lhs = BoxSet::from_boxes(&[[0.0, 0.0, 10.0, 10.0]]).unwrap();
    let rhs = BoxSet::from_boxes(&[[5.0, 5.0, 15.0, 15.0], [20.0, 20.0, 30.0, 30.0]]).unwrap();
    let ious = compute_ious(lhs.view(), rhs.view()).unwrap();

    // intersection 25, union 175
    assert!((ious.get(0, 0).unwrap() - 25.0 / 175.0).abs() < 1e-6);
    assert_eq!(ious.get(0, 1), Some(0.0));
    assert!(ious.get(1, 0).is_none());
}

#[test]
fn degenerate_boxes_score_zero() {
    let point = BoxSet::from_boxes(&[[3.0, 3.0, 3.0, 3.0]]).unwrap();
    let ious = compute_ious(point.view(), point.view()).unwrap();
    assert_eq!(ious.as_slice(), &[0.0f32]);
}

#[test]
fn iou_reads_coordinates_of_full_detections() {
    let truth = BoxSet::from_boxes(&[
        [0.0, 0.0, 10.0, 10.0, 1.0, 1.0],
        [40.0, 40.0, 50.0, 50.0, 2.0, 1.0],
    ])
    .unwrap();
    let preds = BoxSet::from_boxes(&[
        [41.0, 40.0, 50.0, 50.0, 2.0, 0.8],
        [0.0, 0.0, 10.0, 9.0, 1.0, 0.6],
        [70.0, 70.0, 80.0, 80.0, 3.0, 0.4],
    ])
    .unwrap();
    let ious = compute_ious(truth.view(), preds.view()).unwrap();
    assert_eq!(match_boxes(&ious, 0.5), vec![Some(1), Some(0)]);

    let reverse = compute_ious(preds.view(), truth.view()).unwrap();
    assert_eq!(match_boxes(&reverse, 0.5), vec![Some(1), Some(0), None]);
}

#[test]
fn iou_rejects_boxes_without_coordinates() {
    let short = BoxSet::from_boxes(&[[0.0, 0.0]]).unwrap();
    let full = BoxSet::from_boxes(&[[0.0, 0.0, 1.0, 1.0]]).unwrap();
    let err = compute_ious(full.view(), short.view()).err().unwrap();
    assert_eq!(err, BoxError::TooFewFields { needed: 4, fields: 2 });
}
