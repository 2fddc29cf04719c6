use crate::domain::grouping::CityStats;
use crate::domain::listing::Listing;
use crate::domain::metrics::AnomalyFlag;
use crate::snapshot::models::{GlobalStats, Snapshots};
use crate::snapshot::SnapshotError;
use log::{info, warn};
use regex::Regex;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, HashMap};
use std::thread;
use std::time::Duration;
use url::Url;

/// Where the generator publishes the snapshot files.
/// `DATA_BASE_URL` overrides this at startup.
pub const DEFAULT_DATA_URL: &str = "https://immo-bot-luxembourg.github.io/dashboards/data/";

const USER_AGENT: &str = "immo-dashboard/0.1";

// A hung snapshot host must not hang the load forever.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SnapshotClient {
    client: Client,
    base_url: Url,
}

impl SnapshotClient {
    pub fn new(base_url: &str) -> Result<Self, SnapshotError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SnapshotError::Config(format!("bad base URL '{base_url}': {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| SnapshotError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Fetch the four snapshot slices concurrently and join them.
    ///
    /// The required/optional decision lives here, not in the individual
    /// loaders: a failed `listings.json` fails the load, while the three
    /// aggregate slices degrade to their empty defaults with a warning so
    /// one malformed file costs one dashboard panel, not the page.
    pub fn load_all(&self) -> Result<Snapshots, SnapshotError> {
        let (listings, stats, anomalies, market_stats) = thread::scope(|s| {
            let listings = s.spawn(|| self.load_listings());
            let stats = s.spawn(|| self.load_stats());
            let anomalies = s.spawn(|| self.load_anomalies());
            let market_stats = s.spawn(|| self.load_market_stats());
            (
                listings.join().expect("listings fetch panicked"),
                stats.join().expect("stats fetch panicked"),
                anomalies.join().expect("anomalies fetch panicked"),
                market_stats.join().expect("market-stats fetch panicked"),
            )
        });

        let listings = listings?;
        info!("loaded {} listings from {}", listings.len(), self.base_url);

        Ok(Snapshots {
            listings,
            stats: stats.unwrap_or_else(|e| {
                warn!("stats.js degraded to empty: {e}");
                GlobalStats::default()
            }),
            anomalies: anomalies.unwrap_or_else(|e| {
                warn!("anomalies.js degraded to empty: {e}");
                HashMap::new()
            }),
            market_stats: market_stats.unwrap_or_else(|e| {
                warn!("market-stats.js degraded to empty: {e}");
                BTreeMap::new()
            }),
        })
    }

    /// `listings.json`: strict JSON array of listings.
    pub fn load_listings(&self) -> Result<Vec<Listing>, SnapshotError> {
        let text = self.fetch_text("listings.json")?;
        serde_json::from_str(&text)
            .map_err(|e| SnapshotError::JsonParse(format!("listings.json: {e}")))
    }

    /// `stats.js`: `const STATS = {...};`
    pub fn load_stats(&self) -> Result<GlobalStats, SnapshotError> {
        self.load_assigned("stats.js", "STATS")
    }

    /// `anomalies.js`: `const ANOMALIES = {...};`, listing_id to flag.
    pub fn load_anomalies(&self) -> Result<HashMap<String, AnomalyFlag>, SnapshotError> {
        self.load_assigned("anomalies.js", "ANOMALIES")
    }

    /// `market-stats.js`: `const MARKET_STATS = {...};`, city to aggregate.
    pub fn load_market_stats(&self) -> Result<BTreeMap<String, CityStats>, SnapshotError> {
        self.load_assigned("market-stats.js", "MARKET_STATS")
    }

    fn load_assigned<T: DeserializeOwned>(
        &self,
        filename: &str,
        name: &'static str,
    ) -> Result<T, SnapshotError> {
        let text = self.fetch_text(filename)?;
        parse_assigned(&text, filename, name)
    }

    fn fetch_text(&self, filename: &str) -> Result<String, SnapshotError> {
        let url = self
            .base_url
            .join(filename)
            .map_err(|e| SnapshotError::Config(format!("bad path '{filename}': {e}")))?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SnapshotError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SnapshotError::HttpStatus(status.as_u16(), filename.to_string()));
        }

        resp.text().map_err(|e| SnapshotError::Network(e.to_string()))
    }
}

/// Parse one wrapped snapshot body. A body that is already strict JSON is
/// taken as-is, so a generator that stops wrapping its payloads in
/// `const NAME = ...;` needs no change here; the textual extraction only
/// runs for the wrapped form.
pub(crate) fn parse_assigned<T: DeserializeOwned>(
    text: &str,
    filename: &str,
    name: &'static str,
) -> Result<T, SnapshotError> {
    if let Ok(parsed) = serde_json::from_str(text) {
        return Ok(parsed);
    }
    let literal = extract_assigned_literal(text, name)?;
    serde_json::from_str(literal)
        .map_err(|e| SnapshotError::JsonParse(format!("{filename}: {e}")))
}

/// Pull the literal out of `const NAME = {...};` or `const NAME = [...];`.
///
/// The captured span has to be valid JSON, not general JS: no trailing
/// commas, no unquoted keys. That is the textual contract with the
/// generator; the lazy match stops at the first `};` / `];`, which also
/// skips any further `const` assignments in the same file.
pub(crate) fn extract_assigned_literal<'t>(
    source: &'t str,
    name: &'static str,
) -> Result<&'t str, SnapshotError> {
    let pattern = format!(r"(?s)const\s+{name}\s*=\s*(\{{.*?\}}|\[.*?\]);");
    let re = Regex::new(&pattern).map_err(|e| SnapshotError::Pattern(e.to_string()))?;

    re.captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or(SnapshotError::MissingAssignment(name))
}
