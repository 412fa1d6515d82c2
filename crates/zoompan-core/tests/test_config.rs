use zoompan_core::config::{AppConfig, SliderConfig, ViewConfig, ViewportConfig};
use zoompan_core::event::{EventScript, ViewEvent};
use zoompan_core::geometry::Point;

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.view.zoom_factor, 1.2);
    assert_eq!((config.view.min_zoom, config.view.max_zoom), (-10, 10));
    assert_eq!(config.slider.max, 200);
    assert_eq!((config.viewport.width, config.viewport.height), (320, 240));
}

#[test]
fn test_partial_toml_fills_defaults() {
    let config: AppConfig = toml::from_str(
        r#"
        [view]
        max_zoom = 4

        [viewport]
        width = 640
        "#,
    )
    .unwrap();
    assert_eq!(config.view.max_zoom, 4);
    assert_eq!(config.view.min_zoom, -10);
    assert_eq!(config.viewport.width, 640);
    assert_eq!(config.viewport.height, 240);
    assert_eq!(config.slider, SliderConfig::default());
}

#[test]
fn test_config_toml_round_trip() {
    let config = AppConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let back: AppConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_view_config_validation() {
    let bad = [
        ViewConfig { zoom_factor: 1.0, ..ViewConfig::default() },
        ViewConfig { zoom_factor: f64::NAN, ..ViewConfig::default() },
        ViewConfig { min_zoom: 1, ..ViewConfig::default() },
        ViewConfig { max_zoom: -1, ..ViewConfig::default() },
        ViewConfig { zoom_step: 0, ..ViewConfig::default() },
    ];
    for config in bad {
        assert!(config.validate().is_err(), "{config:?} should be rejected");
    }
}

#[test]
fn test_empty_viewport_is_rejected() {
    let config = ViewportConfig { width: 0, height: 240 };
    assert!(config.validate().is_err());
}

#[test]
fn test_viewport_bounds_center() {
    let center = ViewportConfig::default().bounds().center();
    assert_eq!(center, Point::new(160.0, 120.0));
}

#[test]
fn test_event_script_parses_tagged_events() {
    let script: EventScript = toml::from_str(
        r#"
        [viewport]
        width = 320
        height = 240

        [[events]]
        kind = "drag_start"
        x = 10.0
        y = 20.0

        [[events]]
        kind = "drag_move"
        x = 30.0
        y = 20.0

        [[events]]
        kind = "drag_end"

        [[events]]
        kind = "wheel"
        rotation = -1
        "#,
    )
    .unwrap();
    assert_eq!(
        script.events,
        vec![
            ViewEvent::DragStart { x: 10.0, y: 20.0 },
            ViewEvent::DragMove { x: 30.0, y: 20.0 },
            ViewEvent::DragEnd,
            ViewEvent::Wheel { rotation: -1 },
        ]
    );
    assert_eq!(script.events[0].position(), Some(Point::new(10.0, 20.0)));
    assert_eq!(script.events[3].to_string(), "wheel -1");
}
