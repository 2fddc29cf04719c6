mod loader;
mod models;
mod snapshot_error;

pub use loader::{SnapshotClient, DEFAULT_DATA_URL};
pub use models::{
    AnomalySummary, CityCount, DataQuality, GlobalStats, HeatmapPoint, Snapshots, TimelinePoint,
};
pub use snapshot_error::SnapshotError;

#[cfg(test)]
pub(crate) use loader::{extract_assigned_literal, parse_assigned};
