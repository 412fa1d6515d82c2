use approx::assert_abs_diff_eq;
use zoompan_core::config::ViewConfig;
use zoompan_core::consts::{MAX_ZOOM, MIN_ZOOM};
use zoompan_core::controller::ViewController;
use zoompan_core::event::ViewEvent;
use zoompan_core::geometry::{Bounds, Point};
use zoompan_core::transform::AffineTransform;

const ZOOM_IN: i32 = -1;
const ZOOM_OUT: i32 = 1;

fn viewport() -> Bounds {
    Bounds::from_size(320.0, 240.0)
}

fn assert_point_eq(a: Point, b: Point) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Initial state
// ---------------------------------------------------------------------------

#[test]
fn test_new_controller_is_identity_at_zero_zoom() {
    let c = ViewController::new();
    assert!(c.snapshot().is_identity());
    assert_eq!(c.zoom_level(), 0);
    assert_eq!(c.zoom_bounds(), (MIN_ZOOM, MAX_ZOOM));
    assert!(!c.is_dragging());
}

// ---------------------------------------------------------------------------
// Drag
// ---------------------------------------------------------------------------

#[test]
fn test_drag_start_does_not_touch_transform() {
    let mut c = ViewController::new();
    c.on_drag_start(Point::new(10.0, 10.0));
    assert!(c.snapshot().is_identity());
    assert_eq!(c.drag_anchor(), Some(Point::new(10.0, 10.0)));
}

#[test]
fn test_drag_pans_by_pointer_delta_at_unit_scale() {
    let mut c = ViewController::new();
    c.on_drag_start(Point::new(10.0, 10.0));
    assert!(c.on_drag_move(Point::new(25.0, 4.0)));
    assert_eq!(c.snapshot().to_array(), [1.0, 0.0, 0.0, 1.0, 15.0, -6.0]);
    assert_eq!(c.drag_anchor(), Some(Point::new(25.0, 4.0)));
}

#[test]
fn test_drag_keeps_grabbed_point_under_cursor_when_zoomed() {
    let mut c = ViewController::new();
    for _ in 0..3 {
        c.on_wheel(ZOOM_IN, viewport());
    }
    c.on_wheel(ZOOM_OUT, viewport());

    let p0 = Point::new(50.0, 70.0);
    let p1 = Point::new(210.0, 33.0);
    let grabbed = c.inverse_transform(p0);

    c.on_drag_start(p0);
    c.on_drag_move(p1);

    assert_point_eq(c.forward_transform(grabbed), p1);
}

#[test]
fn test_drag_in_several_moves_tracks_cursor() {
    let mut c = ViewController::new();
    c.on_wheel(ZOOM_OUT, viewport());
    let p0 = Point::new(100.0, 100.0);
    let grabbed = c.inverse_transform(p0);

    c.on_drag_start(p0);
    for (x, y) in [(110.0, 95.0), (140.0, 80.0), (90.0, 160.0)] {
        c.on_drag_move(Point::new(x, y));
        assert_point_eq(c.forward_transform(grabbed), Point::new(x, y));
    }
}

#[test]
fn test_zero_length_drag_is_idempotent() {
    let mut c = ViewController::new();
    c.on_wheel(ZOOM_IN, viewport());
    let before = c.snapshot();
    c.on_drag_start(Point::new(30.0, 30.0));
    for _ in 0..5 {
        assert!(!c.on_drag_move(Point::new(30.0, 30.0)));
    }
    assert_eq!(c.snapshot(), before);
}

#[test]
fn test_drag_move_without_start_only_records_anchor() {
    let mut c = ViewController::new();
    assert!(!c.on_drag_move(Point::new(40.0, 40.0)));
    assert!(c.snapshot().is_identity());
    assert!(c.on_drag_move(Point::new(45.0, 40.0)));
    assert_eq!(c.snapshot().to_array()[4], 5.0);
}

#[test]
fn test_drag_end_clears_anchor() {
    let mut c = ViewController::new();
    c.on_drag_start(Point::new(1.0, 2.0));
    c.on_drag_end();
    assert!(!c.is_dragging());
}

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

#[test]
fn test_wheel_in_scales_by_zoom_factor_around_center() {
    let mut c = ViewController::new();
    assert!(c.on_wheel(ZOOM_IN, viewport()));
    assert_eq!(c.zoom_level(), 1);
    let t = c.snapshot();
    assert_abs_diff_eq!(t.m00, 1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(t.m11, 1.2, epsilon = 1e-12);
    assert_abs_diff_eq!(t.m02, -32.0, epsilon = 1e-9);
    assert_abs_diff_eq!(t.m12, -24.0, epsilon = 1e-9);
}

#[test]
fn test_zero_rotation_zooms_in() {
    let mut c = ViewController::new();
    assert!(c.on_wheel(0, viewport()));
    assert_eq!(c.zoom_level(), 1);
}

#[test]
fn test_wheel_preserves_center_in_image_space() {
    let mut c = ViewController::new();
    c.on_drag_start(Point::new(0.0, 0.0));
    c.on_drag_move(Point::new(37.0, -12.0));

    let center = viewport().center();
    for rotation in [ZOOM_IN, ZOOM_IN, ZOOM_OUT, ZOOM_IN, ZOOM_OUT, ZOOM_OUT, ZOOM_OUT] {
        let before = c.inverse_transform(center);
        c.on_wheel(rotation, viewport());
        assert_point_eq(c.inverse_transform(center), before);
    }
}

#[test]
fn test_wheel_uses_bounds_center_with_offset_origin() {
    let mut c = ViewController::new();
    let bounds = Bounds::new(100.0, 50.0, 200.0, 100.0);
    c.on_wheel(ZOOM_IN, bounds);
    assert_point_eq(c.forward_transform(Point::new(200.0, 100.0)), Point::new(200.0, 100.0));
}

#[test]
fn test_zoom_in_then_out_returns_to_identity() {
    let mut c = ViewController::new();
    assert!(c.on_wheel(ZOOM_IN, viewport()));
    assert!(c.on_wheel(ZOOM_OUT, viewport()));
    assert_eq!(c.zoom_level(), 0);
    assert!(c.snapshot().approx_eq(&AffineTransform::identity(), 1e-9));
}

#[test]
fn test_zoom_out_then_in_restores_panned_transform() {
    let mut c = ViewController::new();
    c.on_drag_start(Point::new(10.0, 10.0));
    c.on_drag_move(Point::new(60.0, 90.0));
    c.on_wheel(ZOOM_IN, viewport());
    let before = c.snapshot();

    c.on_wheel(ZOOM_OUT, viewport());
    c.on_wheel(ZOOM_IN, viewport());
    assert!(c.snapshot().approx_eq(&before, 1e-9));
}

#[test]
fn test_zoom_level_is_clamped_and_extra_ticks_are_no_ops() {
    let mut c = ViewController::new();
    for _ in 0..MAX_ZOOM {
        assert!(c.on_wheel(ZOOM_IN, viewport()));
    }
    assert_eq!(c.zoom_level(), MAX_ZOOM);

    let at_max = c.snapshot();
    for _ in 0..5 {
        assert!(!c.on_wheel(ZOOM_IN, viewport()));
    }
    assert_eq!(c.zoom_level(), MAX_ZOOM);
    assert_eq!(c.snapshot().to_array(), at_max.to_array());
}

#[test]
fn test_zoom_level_lower_bound() {
    let mut c = ViewController::new();
    let mut redraws = 0;
    for _ in 0..25 {
        if c.on_wheel(ZOOM_OUT, viewport()) {
            redraws += 1;
        }
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&c.zoom_level()));
    }
    assert_eq!(redraws, MIN_ZOOM.abs());
    assert_eq!(c.zoom_level(), MIN_ZOOM);
    assert_abs_diff_eq!(c.scale(), 1.2f64.powi(MIN_ZOOM), epsilon = 1e-9);
}

#[test]
fn test_scale_follows_zoom_level() {
    let mut c = ViewController::new();
    for _ in 0..4 {
        c.on_wheel(ZOOM_IN, viewport());
    }
    assert_abs_diff_eq!(c.scale(), 1.2f64.powi(4), epsilon = 1e-9);
}

// ---------------------------------------------------------------------------
// Config, events, reset
// ---------------------------------------------------------------------------

#[test]
fn test_from_config_uses_custom_bounds_and_factor() {
    let config = ViewConfig {
        zoom_factor: 2.0,
        min_zoom: -2,
        max_zoom: 4,
        zoom_step: 2,
    };
    let mut c = ViewController::from_config(&config).unwrap();
    assert_eq!(c.zoom_bounds(), (-2, 4));

    assert!(c.on_wheel(ZOOM_IN, viewport()));
    assert!(c.on_wheel(ZOOM_IN, viewport()));
    assert!(!c.on_wheel(ZOOM_IN, viewport()));
    assert_eq!(c.zoom_level(), 4);
    assert_abs_diff_eq!(c.scale(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_from_config_rejects_invalid_factor() {
    let config = ViewConfig {
        zoom_factor: 0.5,
        ..ViewConfig::default()
    };
    assert!(ViewController::from_config(&config).is_err());
}

#[test]
fn test_from_config_rejects_overflowing_zoom_range() {
    let config = ViewConfig {
        max_zoom: i32::MAX,
        ..ViewConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(ViewController::from_config(&config).is_err());
}

#[test]
fn test_scale_is_one_factor_per_tick_with_wide_step() {
    let config = ViewConfig {
        zoom_factor: 2.0,
        min_zoom: -10,
        max_zoom: 10,
        zoom_step: 3,
    };
    let mut c = ViewController::from_config(&config).unwrap();
    for _ in 0..4 {
        assert!(c.on_wheel(ZOOM_IN, viewport()));
    }
    // levels 3, 6, 9, 10: the clamped last tick still applies a full factor
    assert_eq!(c.zoom_level(), 10);
    assert_abs_diff_eq!(c.scale(), 16.0, epsilon = 1e-9);
    assert!(!c.on_wheel(ZOOM_IN, viewport()));
}

#[test]
fn test_handle_dispatches_events() {
    let mut c = ViewController::new();
    let events = [
        ViewEvent::DragStart { x: 0.0, y: 0.0 },
        ViewEvent::DragMove { x: 8.0, y: 6.0 },
        ViewEvent::DragEnd,
        ViewEvent::Wheel { rotation: -1 },
    ];
    let redraws: Vec<bool> = events.iter().map(|e| c.handle(e, viewport())).collect();
    assert_eq!(redraws, vec![false, true, false, true]);
    assert!(!c.is_dragging());
    assert_eq!(c.zoom_level(), 1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut c = ViewController::new();
    c.on_wheel(ZOOM_IN, viewport());
    c.on_drag_start(Point::new(3.0, 3.0));
    c.on_drag_move(Point::new(9.0, 1.0));
    c.reset();
    assert!(c.snapshot().is_identity());
    assert_eq!(c.zoom_level(), 0);
    assert!(!c.is_dragging());
}
