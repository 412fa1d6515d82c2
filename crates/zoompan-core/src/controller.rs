//! Pan/zoom controller for a viewport onto a fixed-size image.
//!
//! Dragging pans the image so the point grabbed at drag start stays under
//! the cursor. Wheel ticks zoom by a fixed factor around the viewport
//! center and are bounded to an integer zoom range; ticks past a bound are
//! ignored entirely.

use tracing::{debug, info, warn};

use crate::config::ViewConfig;
use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_EXTENT, ZOOM_FACTOR};
use crate::error::{Result, ZoompanError};
use crate::event::{ViewEvent, WheelDirection};
use crate::geometry::{Bounds, Point};
use crate::range::BoundedRange;
use crate::transform::AffineTransform;

#[derive(Clone, Debug)]
pub struct ViewController {
    transform: AffineTransform,
    zoom: BoundedRange,
    zoom_factor: f64,
    drag_anchor: Option<Point>,
}

impl Default for ViewController {
    fn default() -> Self {
        Self {
            transform: AffineTransform::identity(),
            zoom: default_zoom_range(),
            zoom_factor: ZOOM_FACTOR,
            drag_anchor: None,
        }
    }
}

fn default_zoom_range() -> BoundedRange {
    BoundedRange::from_parts(0, ZOOM_EXTENT, MIN_ZOOM, MAX_ZOOM + ZOOM_EXTENT)
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ViewConfig) -> Result<Self> {
        config.validate()?;
        let upper = config
            .max_zoom
            .checked_add(config.zoom_step)
            .ok_or_else(|| ZoompanError::InvalidConfig("zoom range overflows".into()))?;
        let zoom = BoundedRange::new(0, config.zoom_step, config.min_zoom, upper)?;
        info!(
            factor = config.zoom_factor,
            min = config.min_zoom,
            max = config.max_zoom,
            "View controller configured"
        );
        Ok(Self {
            transform: AffineTransform::identity(),
            zoom,
            zoom_factor: config.zoom_factor,
            drag_anchor: None,
        })
    }

    /// Current transform, image space to viewport space.
    pub fn snapshot(&self) -> AffineTransform {
        self.transform
    }

    pub fn zoom_level(&self) -> i32 {
        self.zoom.value()
    }

    pub fn zoom_bounds(&self) -> (i32, i32) {
        (self.zoom.min(), self.zoom.upper_value())
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Effective uniform scale of the current transform: one zoom factor
    /// per wheel tick that changed the level.
    pub fn scale(&self) -> f64 {
        self.transform.determinant().abs().sqrt()
    }

    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag_anchor
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Back to identity transform and zero zoom.
    pub fn reset(&mut self) {
        self.transform = AffineTransform::identity();
        self.zoom.set_value(0);
        self.drag_anchor = None;
        info!("View reset");
    }

    pub fn on_drag_start(&mut self, point: Point) {
        self.drag_anchor = Some(point);
    }

    /// Pan so the image point under the anchor moves to `point`.
    /// Returns `true` when the transform changed.
    pub fn on_drag_move(&mut self, point: Point) -> bool {
        let Some(anchor) = self.drag_anchor.replace(point) else {
            return false;
        };
        let delta = self.inverse_transform(point) - self.inverse_transform(anchor);
        if delta == Point::ORIGIN {
            return false;
        }
        self.transform.translate(delta.x, delta.y);
        true
    }

    pub fn on_drag_end(&mut self) {
        self.drag_anchor = None;
    }

    /// Zoom one step around the center of `bounds`.
    /// Returns `false` (no redraw) when the zoom level is already at its bound.
    pub fn on_wheel(&mut self, rotation: i32, bounds: Bounds) -> bool {
        let direction = WheelDirection::from_rotation(rotation);
        let step = match direction {
            WheelDirection::In => self.zoom.extent(),
            WheelDirection::Out => -self.zoom.extent(),
        };
        let before = self.zoom.value();
        if !self.zoom.step_by(step) {
            debug!(level = before, ?direction, "Zoom at bound, ignoring wheel");
            return false;
        }

        let anchor = bounds.center();
        let p1 = self.inverse_transform(anchor);
        let factor = match direction {
            WheelDirection::In => self.zoom_factor,
            WheelDirection::Out => 1.0 / self.zoom_factor,
        };
        self.transform.scale(factor, factor);
        let p2 = self.inverse_transform(anchor);
        self.transform.translate(p2.x - p1.x, p2.y - p1.y);

        debug!(from = before, to = self.zoom.value(), factor, "Zoom changed");
        true
    }

    /// Dispatch one event. Returns whether a redraw is needed.
    pub fn handle(&mut self, event: &ViewEvent, bounds: Bounds) -> bool {
        match *event {
            ViewEvent::DragStart { x, y } => {
                self.on_drag_start(Point::new(x, y));
                false
            }
            ViewEvent::DragMove { x, y } => self.on_drag_move(Point::new(x, y)),
            ViewEvent::DragEnd => {
                self.on_drag_end();
                false
            }
            ViewEvent::Wheel { rotation } => self.on_wheel(rotation, bounds),
        }
    }

    /// Image-space coordinates of a viewport point.
    ///
    /// A singular transform cannot arise from translate/scale composition;
    /// if it ever does, the forward transform is applied instead.
    pub fn inverse_transform(&self, point: Point) -> Point {
        match self.transform.inverse() {
            Some(inverse) => inverse.apply(point),
            None => {
                warn!(det = self.transform.determinant(), "Transform not invertible");
                self.transform.apply(point)
            }
        }
    }

    /// Viewport coordinates of an image point.
    pub fn forward_transform(&self, point: Point) -> Point {
        self.transform.apply(point)
    }
}
