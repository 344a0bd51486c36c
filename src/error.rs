use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid {axis}-axis config: {reason}")]
    InvalidAxisConfig { axis: &'static str, reason: String },

    /// A draw was requested with zero values. Axes and readings still render.
    #[error("data set is empty")]
    EmptyDataSet,

    /// The surface cannot report layout metrics yet (for example it is not
    /// attached to a live layout).
    #[error("surface measurement is unavailable")]
    MeasurementUnavailable,

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ChartError {
    /// Returns `true` for errors that must never abort an in-progress draw.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyDataSet | Self::MeasurementUnavailable)
    }
}
