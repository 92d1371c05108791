//! Integrationstests für die Editier-Operationen und das Austauschformat:
//! - Segment- und Kontrollpunkt-Verwaltung über die Pfad-API
//! - Pick → Move → Abtasten als Drag-Zyklus
//! - JSON-Austauschformat inkl. Validierung beim Einlesen

use glam::Vec2;
use robot_path_engine::{
    advance_progress, pick_path_point, sample_path, trajectory_polyline, Path, PathError,
    PathPoint, PointRef, Segment,
};

#[test]
fn default_field_path_matches_the_editor_start_layout() {
    let path = Path::default_field_path();

    assert_eq!(path.segment_count(), 4);
    assert_eq!(path.start().position, Vec2::new(83.976, 7.257));
    assert_eq!(path.start().heading, -90.0);

    let control_counts: Vec<usize> = path
        .segments()
        .iter()
        .map(|segment| segment.kind.control_point_count())
        .collect();
    assert_eq!(control_counts, vec![0, 2, 0, 1]);
}

#[test]
fn segments_can_be_added_and_removed_but_never_all() {
    let mut path = Path::default_field_path();

    let index = path.add_segment(Vec2::new(72.0, 100.0));
    assert_eq!(path.segment_count(), 5);
    assert_eq!(path.segments()[index].end.position, Vec2::new(72.0, 100.0));

    assert_eq!(
        path.remove_segment(7),
        Err(PathError::UnknownSegment { index: 7 })
    );

    while path.segment_count() > 1 {
        path.remove_segment(0).unwrap();
    }
    assert_eq!(path.remove_segment(0), Err(PathError::LastSegment));
}

#[test]
fn control_points_are_capped_at_two_per_segment() {
    let mut path = Path::default_field_path();

    // Segment 0 ist eine Gerade: zwei Kontrollpunkte passen noch rein
    let segment = path.segment_mut(0).unwrap();
    segment.add_control_point(Vec2::new(80.0, 20.0)).unwrap();
    segment.add_control_point(Vec2::new(85.0, 30.0)).unwrap();
    assert_eq!(
        segment.add_control_point(Vec2::ZERO),
        Err(PathError::MalformedSegment { control_points: 3 })
    );
}

#[test]
fn drag_cycle_pick_move_sample() {
    let mut path = Path::default_field_path();
    let cursor = path.start().position + Vec2::new(0.3, -0.2);

    let picked = pick_path_point(&path, cursor, 1.0).unwrap();
    assert_eq!(picked, PointRef::Start);

    assert!(path.move_point(picked, Vec2::new(60.0, 12.0)));

    let sample = sample_path(&path, 0.0).unwrap();
    assert_eq!(sample.position, Vec2::new(60.0, 12.0));
}

#[test]
fn progress_wraps_for_the_external_tick_driver() {
    assert_eq!(advance_progress(0.0, 1.5), 1.5);
    assert_eq!(advance_progress(999.5, 1.5), 1001.0);
    // erst beim Überschreiten des Maximums springt der Wert zurück
    assert_eq!(advance_progress(1001.0, 1.5), 0.0);
    assert_eq!(advance_progress(1000.0, 1.5), 0.0);
}

#[test]
fn trajectory_polyline_starts_and_ends_on_the_anchors() {
    let path = Path::default_field_path();
    let polyline = trajectory_polyline(&path, 16).unwrap();

    assert_eq!(polyline.len(), 4 * 16 + 1);
    assert_eq!(polyline[0], path.start().position);
    assert_eq!(*polyline.last().unwrap(), Vec2::new(123.7, 42.791));
    // Nahtpunkt zwischen Segment 0 und 1 erscheint genau einmal
    assert_eq!(polyline[16], path.segments()[0].end.position);
    assert_ne!(polyline[15], polyline[16]);
}

#[test]
fn json_roundtrip_preserves_the_whole_path() {
    let path = Path::default_field_path();

    let json = serde_json::to_string_pretty(&path).unwrap();
    let back: Path = serde_json::from_str(&json).unwrap();

    assert_eq!(back, path);
}

#[test]
fn json_with_an_empty_segment_list_is_rejected() {
    let json = r#"{
        "start": { "position": [0.0, 0.0], "heading": 0.0 },
        "segments": []
    }"#;

    let result = serde_json::from_str::<Path>(json);
    assert!(result.is_err());
}

#[test]
fn json_segment_with_three_control_points_is_rejected() {
    let json = r##"{
        "start": { "position": [0.0, 0.0], "heading": 0.0 },
        "segments": [{
            "end": { "position": [10.0, 0.0], "heading": 90.0 },
            "control_points": [[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]],
            "color": "#8C9BD4"
        }]
    }"##;

    let result = serde_json::from_str::<Path>(json);
    assert!(result.is_err());
}

#[test]
fn removing_a_control_point_downgrades_the_curve() {
    let mut path = Path::default_field_path();

    // Segment 1 ist kubisch; Slot 0 entfernen macht es quadratisch
    let segment = path.segment_mut(1).unwrap();
    let kept = segment.kind.control_points()[1];
    assert!(segment.remove_control_point(0));
    assert_eq!(segment.kind.control_points(), vec![kept]);

    // Ein Pfad bleibt auch mit geänderten Formen abspielbar
    assert!(sample_path(&path, 375.0).is_ok());
}

#[test]
fn empty_path_cannot_be_constructed() {
    assert_eq!(
        Path::new(PathPoint::new(0.0, 0.0, 0.0), Vec::new()).unwrap_err(),
        PathError::EmptyPath
    );
}
