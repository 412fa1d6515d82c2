use crate::error::{Result, ZoompanError};

/// An integer value with a visible extent inside `[min, max]`.
///
/// Invariant: `min <= value <= value + extent <= max`. The largest settable
/// value is therefore `max - extent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedRange {
    value: i32,
    extent: i32,
    min: i32,
    max: i32,
}

impl BoundedRange {
    pub fn new(value: i32, extent: i32, min: i32, max: i32) -> Result<Self> {
        let valid = extent >= 0
            && min <= value
            && value
                .checked_add(extent)
                .is_some_and(|upper| upper <= max);
        if !valid {
            return Err(ZoompanError::InvalidRange {
                value,
                extent,
                min,
                max,
            });
        }
        Ok(Self {
            value,
            extent,
            min,
            max,
        })
    }

    /// Caller guarantees the invariant.
    pub(crate) const fn from_parts(value: i32, extent: i32, min: i32, max: i32) -> Self {
        Self {
            value,
            extent,
            min,
            max,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn extent(&self) -> i32 {
        self.extent
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Largest value the range accepts.
    pub fn upper_value(&self) -> i32 {
        self.max - self.extent
    }

    /// Clamp `value` to the settable interval and store it.
    /// Returns `true` if the stored value changed.
    pub fn set_value(&mut self, value: i32) -> bool {
        let clamped = value.clamp(self.min, self.upper_value());
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Move by `delta`, saturating at the bounds.
    pub fn step_by(&mut self, delta: i32) -> bool {
        self.set_value(self.value.saturating_add(delta))
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.upper_value()).contains(&value)
    }
}
