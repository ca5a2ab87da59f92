use std::fs;

use gridcut_core::geometry::Line;
use gridcut_core::grid::GridDimensions;
use gridcut_engine::sketch::Sketch;
use gridcut_io::{IoError, JsonFacade, LineSet, LineSetLoader, LineSetSaver};

const FOUR_QUADRANTS: &str = r#"{
    "dimensions": { "width": 100, "height": 100 },
    "lines": [
        { "start": [0, 50], "end": [100, 50] },
        { "start": [50, 0], "end": [50, 100] }
    ]
}"#;

#[test]
fn loads_line_set_from_json() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("quadrants.json");
    fs::write(&path, FOUR_QUADRANTS).expect("write fixture");

    let line_set = JsonFacade::new().load(&path).expect("load line set");
    assert_eq!(line_set.dimensions, GridDimensions::new(100.0, 100.0));
    assert_eq!(
        line_set.lines,
        vec![
            Line::horizontal(50.0, 0.0, 100.0),
            Line::vertical(50.0, 0.0, 100.0),
        ]
    );

    let layout = line_set.into_sketch().layout().expect("layout");
    assert_eq!(layout.rectangles().len(), 4);
}

#[test]
fn missing_lines_default_to_empty() {
    let facade = JsonFacade::new();
    let line_set = facade
        .parse(r#"{ "dimensions": { "width": 40, "height": 30 } }"#, "inline.json".as_ref())
        .expect("parse");
    assert!(line_set.lines.is_empty());
}

#[test]
fn saved_line_set_loads_back() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("demo.json");

    let mut sketch = Sketch::default();
    sketch.populate_demo();
    let facade = JsonFacade::new();
    facade
        .save(&LineSet::from_sketch(&sketch), &path)
        .expect("save line set");

    let loaded = facade.load(&path).expect("load line set");
    assert_eq!(loaded.lines, sketch.lines());
    assert_eq!(loaded.dimensions, sketch.dimensions());
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = JsonFacade::new()
        .load(&dir.path().join("absent.json"))
        .unwrap_err();
    assert!(matches!(err, IoError::ReadError { .. }));
}

#[test]
fn reports_malformed_json() {
    let err = JsonFacade::new()
        .parse(r#"{ "dimensions": [1, 2, 3] }"#, "broken.json".as_ref())
        .unwrap_err();
    match err {
        IoError::ParseError { path, .. } => assert_eq!(path.to_string_lossy(), "broken.json"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rejects_degenerate_dimensions() {
    let err = JsonFacade::new()
        .parse(
            r#"{ "dimensions": { "width": 0, "height": 100 }, "lines": [] }"#,
            "flat.json".as_ref(),
        )
        .unwrap_err();
    assert!(matches!(err, IoError::InvalidDocument(_)));
}
