//! One integer mirrored by a scrollbar and a spinner.
//!
//! Each widget model clamps in its own way: the scrollbar saturates at its
//! bounds while the spinner refuses a step that would leave them. Every
//! write goes through [`LinkedValue`], which copies the settled value into
//! the other model, so the two never disagree and no change can echo back.

use tracing::debug;

use crate::config::SliderConfig;
use crate::consts::{SLIDER_EXTENT, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP, SLIDER_VALUE};
use crate::error::{Result, ZoompanError};
use crate::range::BoundedRange;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollBarModel {
    range: BoundedRange,
    unit_increment: i32,
    block_increment: i32,
}

impl ScrollBarModel {
    pub fn new(range: BoundedRange, unit_increment: i32) -> Self {
        let block_increment = if range.extent() == 0 { 1 } else { range.extent() };
        Self {
            range,
            unit_increment,
            block_increment,
        }
    }

    pub fn value(&self) -> i32 {
        self.range.value()
    }

    pub fn range(&self) -> &BoundedRange {
        &self.range
    }

    pub fn unit_increment(&self) -> i32 {
        self.unit_increment
    }

    pub fn block_increment(&self) -> i32 {
        self.block_increment
    }

    fn set_value(&mut self, value: i32) -> bool {
        self.range.set_value(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinnerModel {
    value: i32,
    min: i32,
    max: i32,
    step: i32,
}

impl SpinnerModel {
    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    /// Value one step up, if still within bounds.
    pub fn next_value(&self) -> Option<i32> {
        self.value
            .checked_add(self.step)
            .filter(|v| *v <= self.max)
    }

    /// Value one step down, if still within bounds.
    pub fn previous_value(&self) -> Option<i32> {
        self.value
            .checked_sub(self.step)
            .filter(|v| *v >= self.min)
    }

    fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }
}

/// Which widget a change came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    ScrollBar,
    Spinner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkedValue {
    scrollbar: ScrollBarModel,
    spinner: SpinnerModel,
}

impl Default for LinkedValue {
    fn default() -> Self {
        Self {
            scrollbar: ScrollBarModel::new(
                BoundedRange::from_parts(
                    SLIDER_VALUE,
                    SLIDER_EXTENT,
                    SLIDER_MIN,
                    SLIDER_MAX + SLIDER_EXTENT,
                ),
                SLIDER_STEP,
            ),
            spinner: SpinnerModel {
                value: SLIDER_VALUE,
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
            },
        }
    }
}

impl LinkedValue {
    pub fn from_config(config: &SliderConfig) -> Result<Self> {
        config.validate()?;
        let upper = config
            .max
            .checked_add(config.extent)
            .ok_or_else(|| ZoompanError::InvalidConfig("slider range overflows".into()))?;
        let range = BoundedRange::new(config.value, config.extent, config.min, upper)?;
        Ok(Self {
            scrollbar: ScrollBarModel::new(range, config.step),
            spinner: SpinnerModel {
                value: config.value,
                min: config.min,
                max: config.max,
                step: config.step,
            },
        })
    }

    pub fn value(&self) -> i32 {
        self.spinner.value
    }

    pub fn scrollbar(&self) -> &ScrollBarModel {
        &self.scrollbar
    }

    pub fn spinner(&self) -> &SpinnerModel {
        &self.spinner
    }

    /// Both widgets show the same value.
    pub fn is_consistent(&self) -> bool {
        self.scrollbar.value() == self.spinner.value()
    }

    pub fn set_from_scrollbar(&mut self, value: i32) -> bool {
        let changed = self.scrollbar.set_value(value);
        self.spinner.set_value(self.scrollbar.value());
        self.log_change(Source::ScrollBar, changed);
        changed
    }

    pub fn set_from_spinner(&mut self, value: i32) -> bool {
        let changed = self.spinner.set_value(value);
        self.scrollbar.set_value(self.spinner.value());
        self.log_change(Source::Spinner, changed);
        changed
    }

    pub fn set(&mut self, source: Source, value: i32) -> bool {
        match source {
            Source::ScrollBar => self.set_from_scrollbar(value),
            Source::Spinner => self.set_from_spinner(value),
        }
    }

    /// Scrollbar arrow: move by the unit increment in the sign of `direction`.
    pub fn scroll_unit(&mut self, direction: i32) -> bool {
        let delta = direction.signum() * self.scrollbar.unit_increment();
        self.set_from_scrollbar(self.scrollbar.value().saturating_add(delta))
    }

    /// Scrollbar track click: move by the block increment in the sign of `direction`.
    pub fn scroll_block(&mut self, direction: i32) -> bool {
        let delta = direction.signum() * self.scrollbar.block_increment();
        self.set_from_scrollbar(self.scrollbar.value().saturating_add(delta))
    }

    pub fn spin_next(&mut self) -> bool {
        match self.spinner.next_value() {
            Some(v) => self.set_from_spinner(v),
            None => false,
        }
    }

    pub fn spin_previous(&mut self) -> bool {
        match self.spinner.previous_value() {
            Some(v) => self.set_from_spinner(v),
            None => false,
        }
    }

    fn log_change(&self, source: Source, changed: bool) {
        if changed {
            debug!(?source, value = self.value(), "Linked value changed");
        }
    }
}
