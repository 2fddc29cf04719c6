use crate::domain::grouping::CityStats;
use crate::domain::listing::Listing;
use crate::domain::metrics::AnomalyFlag;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// The `const STATS = {...}` payload of `stats.js`.
///
/// The schema is additive across snapshot versions: everything is
/// defaulted so files written by older generators still parse, and the
/// optional blocks only exist in newer ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub avg_price: i64,
    #[serde(default)]
    pub min_price: i64,
    #[serde(default)]
    pub max_price: i64,
    #[serde(default)]
    pub avg_surface: i64,
    #[serde(default)]
    pub cities: u64,
    #[serde(default)]
    pub sites: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_city: Vec<CityCount>,
    #[serde(default)]
    pub by_price_range: HashMap<String, u64>,
    #[serde(default)]
    pub data_quality: Option<DataQuality>,
    #[serde(default)]
    pub anomalies: Option<AnomalySummary>,
    #[serde(default)]
    pub price_heatmap: Option<Vec<HeatmapPoint>>,
    #[serde(default)]
    pub timeline: Option<Vec<TimelinePoint>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
    #[serde(default)]
    pub avg_price: i64,
}

/// Completeness counters over the source collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataQuality {
    #[serde(default)]
    pub completeness: i64,
    #[serde(default)]
    pub with_gps: u64,
    #[serde(default)]
    pub with_price: u64,
    #[serde(default)]
    pub with_surface: u64,
    #[serde(default)]
    pub total: u64,
}

/// IQR outlier summary precomputed by the generator. `extreme_prices`
/// entries are loosely shaped tuples; only the count is rendered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnomalySummary {
    #[serde(default)]
    pub extreme_prices: Vec<serde_json::Value>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub missing_data: u64,
}

/// One city dot of the price/m² heatmap.
#[derive(Debug, Clone, Deserialize)]
pub struct HeatmapPoint {
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    pub avg_price_m2: f64,
    pub count: u64,
}

/// Listings published per day.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelinePoint {
    pub date: String,
    pub count: u64,
}

/// The four snapshot slices of one load. Each load fully replaces the
/// previous state; there is no merging.
#[derive(Debug, Default)]
pub struct Snapshots {
    pub listings: Vec<Listing>,
    pub stats: GlobalStats,
    pub anomalies: HashMap<String, AnomalyFlag>,
    pub market_stats: BTreeMap<String, CityStats>,
}
