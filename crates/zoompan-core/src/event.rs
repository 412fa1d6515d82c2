use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Pointer input understood by [`ViewController::handle`](crate::controller::ViewController::handle).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewEvent {
    DragStart { x: f64, y: f64 },
    DragMove { x: f64, y: f64 },
    DragEnd,
    /// Signed wheel ticks; positive rotates toward the user (zoom out).
    Wheel { rotation: i32 },
}

impl ViewEvent {
    pub fn position(&self) -> Option<Point> {
        match *self {
            ViewEvent::DragStart { x, y } | ViewEvent::DragMove { x, y } => Some(Point::new(x, y)),
            ViewEvent::DragEnd | ViewEvent::Wheel { .. } => None,
        }
    }
}

impl std::fmt::Display for ViewEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewEvent::DragStart { x, y } => write!(f, "drag start ({x}, {y})"),
            ViewEvent::DragMove { x, y } => write!(f, "drag move ({x}, {y})"),
            ViewEvent::DragEnd => write!(f, "drag end"),
            ViewEvent::Wheel { rotation } => write!(f, "wheel {rotation:+}"),
        }
    }
}

/// Zoom direction derived from a wheel rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// Positive rotation zooms out; zero and negative zoom in.
    pub fn from_rotation(rotation: i32) -> Self {
        if rotation > 0 {
            WheelDirection::Out
        } else {
            WheelDirection::In
        }
    }
}

/// A recorded interaction: viewport size plus an ordered list of events.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventScript {
    #[serde(default)]
    pub viewport: Option<crate::config::ViewportConfig>,
    #[serde(default)]
    pub events: Vec<ViewEvent>,
}
