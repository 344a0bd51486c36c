use tracing::debug;

use crate::core::RetainedGeometry;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartConfig, ChartEngine, ResponsiveState, engine_core::EngineCore};

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine after validating the config.
    ///
    /// Axis problems surface here as `InvalidAxisConfig`; nothing is
    /// re-validated at draw time.
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            y_ceiling = config.y_axis.ceiling,
            "chart engine created"
        );

        let retained = RetainedGeometry::for_axis(&config.y_axis);
        let responsive = ResponsiveState::for_config(&config);
        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                retained,
                responsive,
            },
        })
    }
}
