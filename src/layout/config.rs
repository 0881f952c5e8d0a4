//! Configuration for the layout engine

use std::ops::RangeInclusive;

use super::error::LayoutError;

/// Range accepted for node separations by the command line
pub const SEPARATION_RANGE: RangeInclusive<f64> = 1.0..=300.0;

/// Configuration options for layout computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Minimum horizontal distance between adjacent nodes on a row
    pub h_sep: f64,

    /// Vertical distance between consecutive depth rows
    pub v_sep: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            h_sep: 25.0,
            v_sep: 25.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal node separation
    pub fn with_h_sep(mut self, h_sep: f64) -> Self {
        self.h_sep = h_sep;
        self
    }

    /// Set the vertical node separation
    pub fn with_v_sep(mut self, v_sep: f64) -> Self {
        self.v_sep = v_sep;
        self
    }

    /// Both separations must be finite and positive
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (name, value) in [("h_sep", self.h_sep), ("v_sep", self.v_sep)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(LayoutError::invalid_config(
                    name,
                    format!("must be a finite positive number, got {}", value),
                ));
            }
        }
        Ok(())
    }
}
