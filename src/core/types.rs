use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pixel size of the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Horizontal flow of the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartDirection {
    #[default]
    Ltr,
    Rtl,
}

impl ChartDirection {
    #[must_use]
    pub fn is_rtl(self) -> bool {
        self == Self::Rtl
    }

    /// Mirrors a left-to-right x coordinate when the direction is `Rtl`.
    #[must_use]
    pub fn place_x(self, x_ltr: f64, width: f64) -> f64 {
        match self {
            Self::Ltr => x_ltr,
            Self::Rtl => width - x_ltr,
        }
    }

    /// X coordinate of the value axis and of the polyline origin anchor.
    #[must_use]
    pub fn origin_x(self, width: f64) -> f64 {
        self.place_x(0.0, width)
    }
}

/// One datum placed in chart space (y grows up from the baseline).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub index: usize,
    pub raw_value: f64,
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(index: usize, raw_value: f64, x: f64, y: f64) -> Self {
        Self {
            index,
            raw_value,
            x,
            y,
        }
    }
}
