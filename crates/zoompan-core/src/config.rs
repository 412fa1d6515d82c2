use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH, MAX_ZOOM, MIN_ZOOM, SLIDER_EXTENT,
    SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, SLIDER_VALUE, ZOOM_EXTENT, ZOOM_FACTOR,
};
use crate::error::{Result, ZoompanError};
use crate::geometry::Bounds;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub slider: SliderConfig,
    #[serde(default)]
    pub viewport: ViewportConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.view.validate()?;
        self.slider.validate()?;
        self.viewport.validate()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Scale per wheel tick; must be greater than 1.
    pub zoom_factor: f64,
    pub min_zoom: i32,
    pub max_zoom: i32,
    /// Zoom levels per wheel tick.
    pub zoom_step: i32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_factor: ZOOM_FACTOR,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_EXTENT,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 1.0 {
            return Err(ZoompanError::InvalidConfig(format!(
                "zoom_factor must be a finite number greater than 1, got {}",
                self.zoom_factor
            )));
        }
        if self.min_zoom > 0 || self.max_zoom < 0 {
            return Err(ZoompanError::InvalidConfig(format!(
                "zoom range {}..={} must contain 0",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_step < 1 {
            return Err(ZoompanError::InvalidConfig(format!(
                "zoom_step must be at least 1, got {}",
                self.zoom_step
            )));
        }
        if self.max_zoom.checked_add(self.zoom_step).is_none() {
            return Err(ZoompanError::InvalidConfig(format!(
                "max_zoom {} plus zoom_step {} overflows",
                self.max_zoom, self.zoom_step
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    /// Spinner step and scrollbar unit increment.
    pub step: i32,
    /// Scrollbar thumb extent and block increment.
    pub extent: i32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: SLIDER_VALUE,
            min: SLIDER_MIN,
            max: SLIDER_MAX,
            step: SLIDER_STEP,
            extent: SLIDER_EXTENT,
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(ZoompanError::InvalidConfig(format!(
                "slider min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if !(self.min..=self.max).contains(&self.value) {
            return Err(ZoompanError::InvalidConfig(format!(
                "slider value {} outside {}..={}",
                self.value, self.min, self.max
            )));
        }
        if self.step < 1 {
            return Err(ZoompanError::InvalidConfig(format!(
                "slider step must be at least 1, got {}",
                self.step
            )));
        }
        if self.extent < 0 {
            return Err(ZoompanError::InvalidConfig(format!(
                "slider extent must not be negative, got {}",
                self.extent
            )));
        }
        if self.max.checked_add(self.extent).is_none() {
            return Err(ZoompanError::InvalidConfig(format!(
                "slider max {} plus extent {} overflows",
                self.max, self.extent
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ZoompanError::InvalidConfig(format!(
                "viewport must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(f64::from(self.width), f64::from(self.height))
    }
}
