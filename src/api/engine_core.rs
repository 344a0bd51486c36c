use crate::core::RetainedGeometry;

use super::{ChartConfig, ResponsiveState};

/// Mutable chart state owned by the engine facade.
pub(super) struct EngineCore {
    pub(super) config: ChartConfig,
    pub(super) retained: RetainedGeometry,
    pub(super) responsive: ResponsiveState,
}
