use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{ChartDirection, RenderedSeries, Viewport};
use crate::render::Renderer;

use super::{ChartEngine, ResponsiveState};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub direction: ChartDirection,
    pub y_ceiling: f64,
    pub y_readings: Vec<f64>,
    pub series: Vec<RenderedSeries>,
    pub responsive: ResponsiveState,
    pub series_metadata: IndexMap<String, String>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let config = &self.core.config;
        let series = self.core.retained.series().to_vec();

        let mut series_metadata = IndexMap::new();
        series_metadata.insert("x_axis_label".to_owned(), config.x_axis.label.clone());
        series_metadata.insert("y_axis_label".to_owned(), config.y_axis.label.clone());
        series_metadata.insert("series_count".to_owned(), series.len().to_string());
        series_metadata.insert(
            "primitive_count".to_owned(),
            self.core.retained.primitive_count().to_string(),
        );

        EngineSnapshot {
            viewport: config.viewport,
            direction: config.direction,
            y_ceiling: config.y_axis.ceiling,
            y_readings: self.core.retained.y_readings().to_vec(),
            series,
            responsive: self.core.responsive,
            series_metadata,
        }
    }
}
