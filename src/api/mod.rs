mod data_controller;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod json_contract;
mod render_frame_builder;
mod responsive;

pub use data_controller::DrawOutcome;
pub use engine::ChartEngine;
pub use engine_config::ChartConfig;
pub use engine_snapshot::EngineSnapshot;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use responsive::{ResponsiveState, x_readings_crowded};
