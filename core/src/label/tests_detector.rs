use crate::geometry::{point_xy, Point3};
use crate::label::detector::{detect_overlaps, OverlapDetector, OverlapPair};
use crate::label::types::{Label, LabelError, LabelId, LabelKind, LabelRecord};

/// Axis-aligned quadrilateral in bottom-left, bottom-right, top-right,
/// top-left order.
fn quad(x0: f64, y0: f64, x1: f64, y1: f64) -> [Point3; 4] {
    [
        point_xy(x0, y0),
        point_xy(x1, y0),
        point_xy(x1, y1),
        point_xy(x0, y1),
    ]
}

fn label(id: &str, kind: LabelKind, x0: f64, y0: f64, x1: f64, y1: f64) -> Label {
    Label {
        id: LabelId::from(id),
        kind,
        corners: quad(x0, y0, x1, y1),
        insertion_point: point_xy(x0, y0),
    }
}

fn record(id: &str, kind: &str, corners: Vec<Point3>) -> LabelRecord {
    LabelRecord {
        id: id.to_string(),
        kind: kind.to_string(),
        corners,
        insertion_point: point_xy(0.0, 0.0),
    }
}

#[test]
fn test_add_and_get() {
    let mut detector = OverlapDetector::new();
    assert!(detector.is_empty());

    detector
        .add_label(label("P1", LabelKind::Pipe, 0.0, 0.0, 4.0, 1.0))
        .unwrap();
    detector
        .add_label(label("S1", LabelKind::Structure, 10.0, 0.0, 14.0, 1.0))
        .unwrap();

    assert_eq!(detector.len(), 2);
    let found = detector.get(&LabelId::from("S1")).unwrap();
    assert_eq!(found.kind, LabelKind::Structure);
    assert!(detector.get(&LabelId::from("missing")).is_none());
}

#[test]
fn test_duplicate_id_rejected() {
    let mut detector = OverlapDetector::new();
    detector
        .add_label(label("P1", LabelKind::Pipe, 0.0, 0.0, 4.0, 1.0))
        .unwrap();

    let err = detector
        .add_label(label("P1", LabelKind::Pipe, 50.0, 50.0, 54.0, 51.0))
        .unwrap_err();
    assert!(matches!(err, LabelError::DuplicateId(_)));

    // The original registration survives the rejected insert.
    assert_eq!(detector.len(), 1);
    let kept = detector.get(&LabelId::from("P1")).unwrap();
    assert_eq!(kept.corners, quad(0.0, 0.0, 4.0, 1.0));
}

#[test]
fn test_record_with_wrong_corner_count_rejected() {
    let mut detector = OverlapDetector::new();
    let bad = record(
        "P1",
        "PIPE",
        vec![point_xy(0.0, 0.0), point_xy(1.0, 0.0), point_xy(1.0, 1.0)],
    );

    let err = detector.add_record(bad).unwrap_err();
    match err {
        LabelError::CornerCount { id, count } => {
            assert_eq!(id, "P1");
            assert_eq!(count, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(detector.is_empty());
}

#[test]
fn test_record_conversion_maps_kind_tags() {
    let corners = vec![
        point_xy(0.0, 0.0),
        point_xy(2.0, 0.0),
        point_xy(2.0, 1.0),
        point_xy(0.0, 1.0),
    ];

    let pipe = Label::try_from(record("a", "PIPE", corners.clone())).unwrap();
    assert_eq!(pipe.kind, LabelKind::Pipe);

    let structure = Label::try_from(record("b", "STRUCTURE", corners.clone())).unwrap();
    assert_eq!(structure.kind, LabelKind::Structure);

    let foreign = Label::try_from(record("c", "ELECTRICAL", corners)).unwrap();
    assert_eq!(foreign.kind, LabelKind::Unknown);
}

#[test]
fn test_pairing_excludes_nonoverlapping() {
    let mut detector = OverlapDetector::new();
    // A and B share area; C sits far away from both.
    detector
        .add_label(label("A", LabelKind::Pipe, 0.0, 0.0, 4.0, 2.0))
        .unwrap();
    detector
        .add_label(label("B", LabelKind::Structure, 3.0, 1.0, 7.0, 3.0))
        .unwrap();
    detector
        .add_label(label("C", LabelKind::Pipe, 100.0, 100.0, 104.0, 102.0))
        .unwrap();

    let pairs = detector.find_overlapping_labels();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0.id, LabelId::from("A"));
    assert_eq!(pairs[0].1.id, LabelId::from("B"));
}

#[test]
fn test_detection_is_idempotent() {
    let mut detector = OverlapDetector::new();
    detector
        .add_label(label("A", LabelKind::Pipe, 0.0, 0.0, 4.0, 2.0))
        .unwrap();
    detector
        .add_label(label("B", LabelKind::Pipe, 1.0, 0.5, 5.0, 2.5))
        .unwrap();
    detector
        .add_label(label("C", LabelKind::Structure, 3.5, 0.0, 8.0, 2.0))
        .unwrap();

    let first: Vec<OverlapPair> = detector
        .find_overlapping_labels()
        .into_iter()
        .map(OverlapPair::from)
        .collect();
    let second: Vec<OverlapPair> = detector
        .find_overlapping_labels()
        .into_iter()
        .map(OverlapPair::from)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_detect_overlaps_reports_in_slice_order() {
    let labels = vec![
        label("A", LabelKind::Pipe, 0.0, 0.0, 4.0, 2.0),
        label("B", LabelKind::Pipe, 1.0, 0.5, 5.0, 2.5),
        label("C", LabelKind::Structure, 3.5, 0.0, 8.0, 2.0),
    ];

    let pairs = detect_overlaps(&labels);
    // A-B, A-C (corner region around x in [3.5, 4.0]), B-C.
    assert_eq!(pairs.len(), 3);
    assert_eq!(pairs[0], OverlapPair {
        first: LabelId::from("A"),
        second: LabelId::from("B"),
    });
    assert_eq!(pairs[1], OverlapPair {
        first: LabelId::from("A"),
        second: LabelId::from("C"),
    });
    assert_eq!(pairs[2], OverlapPair {
        first: LabelId::from("B"),
        second: LabelId::from("C"),
    });
    assert!(pairs[0].involves(&LabelId::from("A")));
    assert!(!pairs[0].involves(&LabelId::from("C")));
}

#[test]
fn test_touching_edges_do_not_pair() {
    // B starts exactly where A ends; shared boundary only.
    let labels = vec![
        label("A", LabelKind::Pipe, 0.0, 0.0, 4.0, 2.0),
        label("B", LabelKind::Pipe, 4.0, 0.0, 8.0, 2.0),
    ];
    assert!(detect_overlaps(&labels).is_empty());
}
