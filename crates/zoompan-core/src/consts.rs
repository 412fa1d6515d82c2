/// Scale applied per wheel tick when zooming in (its reciprocal when zooming out).
pub const ZOOM_FACTOR: f64 = 1.2;

/// Lowest reachable zoom level.
pub const MIN_ZOOM: i32 = -10;

/// Highest reachable zoom level.
pub const MAX_ZOOM: i32 = 10;

/// Zoom levels moved per wheel tick.
pub const ZOOM_EXTENT: i32 = 1;

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 320;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 240;

/// Initial value shared by the scrollbar and spinner.
pub const SLIDER_VALUE: i32 = 50;

/// Lower bound of the linked value.
pub const SLIDER_MIN: i32 = 0;

/// Visible extent of the scrollbar thumb.
pub const SLIDER_EXTENT: i32 = 20;

/// Upper bound of the linked value (ten thumb extents).
pub const SLIDER_MAX: i32 = SLIDER_EXTENT * 10;

/// Spinner step and scrollbar unit increment.
pub const SLIDER_STEP: i32 = 5;
