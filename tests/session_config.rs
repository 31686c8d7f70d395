use sculpt::{
    BrushSet, BrushVariant, ContourAlgorithm, ContourSettings, EditSession, SessionConfig,
    ValueMode,
};

#[test]
fn shipped_session_file_matches_defaults() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/session.toml");
    let cfg = SessionConfig::from_path(path).unwrap();
    assert_eq!(cfg.brushes.to_brush_set().unwrap(), BrushSet::default());
    assert_eq!(cfg.contour.to_settings(), ContourSettings::default());
    assert_eq!(cfg.noise.to_params(), sculpt_field::NoiseParams::default());
    assert!(cfg.field.to_options().is_none());
}

#[test]
fn session_from_small_config() {
    let cfg = SessionConfig::from_toml_str(
        r#"
        [grid]
        width = 40
        height = 30
        block_size = 4

        [noise]
        seed = 3
        zoom = 6.0

        [field]
        mode = "cheap"
        "#,
    )
    .unwrap();
    let mut s = EditSession::from_config(&cfg).unwrap();
    assert_eq!((s.grid().width(), s.grid().height()), (40, 30));
    assert_eq!(s.mapping().block_size(), 4);
    assert!(matches!(s.value_mode(), ValueMode::Aggregated(_)));

    let before = s.grid().solid_count();
    s.apply_brush(BrushVariant::Deleting, 20, 15);
    assert!(s.grid().solid_count() <= before);
    assert!(!s.get_voxel(20, 15).solid);

    s.extract_contour(ContourAlgorithm::Blocky, 0.0, false);
    for seg in s.segments() {
        // unit edges only
        assert_eq!(seg.length(), 4.0);
    }
}

#[test]
fn invalid_grid_in_config_is_an_error() {
    let cfg = SessionConfig::from_toml_str("[grid]\nwidth = 0").unwrap();
    assert!(EditSession::from_config(&cfg).is_err());
}

#[test]
fn strokes_replay_in_order() {
    let mut s = EditSession::new(30, 30, 10).unwrap();
    for stroke in ["placing:10,10", "additive:10,10", "erase:20,20"] {
        let stroke: sculpt::Stroke = stroke.parse().unwrap();
        s.apply_brush(stroke.variant, stroke.x, stroke.y);
    }
    assert!((s.get_voxel(10, 10).value - 0.62).abs() < 1e-9);
    assert!(!s.get_voxel(20, 20).solid);
    assert_eq!(s.active_brush(), BrushVariant::Deleting);
}
