//! ensure serde is working as expected

use super::*;

#[test]
fn path_round_trip() {
    let mut path = testing::mixed_path();
    path.set_fill(None);
    path.set_stroke(Some(Color::new("#336699")));
    path.set_stroke_width(1.5);
    let dumped = serde_json::to_string(&path).unwrap();
    let loaded: Path = serde_json::from_str(&dumped).unwrap();
    pretty_assertions::assert_eq!(path, loaded);
}

#[test]
fn settings_and_metrics_round_trip() {
    let settings = RenderSettings::new(10.0, 80.0, 64.0);
    let dumped = serde_json::to_string(&settings).unwrap();
    let loaded: RenderSettings = serde_json::from_str(&dumped).unwrap();
    assert_eq!(settings, loaded);

    let metrics = compute_metrics(testing::square_path().commands(), 12.0).unwrap();
    let dumped = serde_json::to_string(&metrics).unwrap();
    let loaded: Metrics = serde_json::from_str(&dumped).unwrap();
    assert_eq!(metrics, loaded);
}
