use crate::domain::filters::FilterState;
use crate::domain::grouping::CityStats;
use crate::domain::listing::Listing;
use crate::domain::metrics::AnomalyFlag;
use crate::snapshot::{GlobalStats, Snapshots};
use std::collections::{BTreeMap, HashMap};

/// Everything the dashboard serves, assembled once at startup from the
/// four snapshot slices and shared read-only across workers. Derived
/// numbers are recomputed on demand; nothing here mutates after `new`.
pub struct DashboardState {
    listings: Vec<Listing>,
    stats: GlobalStats,
    anomalies: HashMap<String, AnomalyFlag>,
    market_stats: BTreeMap<String, CityStats>,
}

impl DashboardState {
    pub fn new(snapshots: Snapshots) -> Self {
        Self {
            listings: snapshots.listings,
            stats: snapshots.stats,
            anomalies: snapshots.anomalies,
            market_stats: snapshots.market_stats,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn stats(&self) -> &GlobalStats {
        &self.stats
    }

    pub fn market_stats(&self) -> &BTreeMap<String, CityStats> {
        &self.market_stats
    }

    /// The precomputed aggregate for a city, as shipped in the snapshot.
    pub fn city_aggregate(&self, city: &str) -> Option<&CityStats> {
        self.market_stats.get(city)
    }

    pub fn anomaly_for(&self, listing_id: &str) -> Option<AnomalyFlag> {
        self.anomalies.get(listing_id).copied()
    }

    pub fn high_anomaly_count(&self) -> usize {
        self.anomalies
            .values()
            .filter(|f| **f == AnomalyFlag::High)
            .count()
    }

    pub fn good_deal_count(&self) -> usize {
        self.anomalies
            .values()
            .filter(|f| **f == AnomalyFlag::GoodDeal)
            .count()
    }

    /// Cities with the most listings, per the market-stats snapshot.
    pub fn top_cities(&self, n: usize) -> Vec<(&str, &CityStats)> {
        let mut cities: Vec<(&str, &CityStats)> = self
            .market_stats
            .iter()
            .map(|(city, stats)| (city.as_str(), stats))
            .collect();
        cities.sort_by(|a, b| b.1.count.cmp(&a.1.count));
        cities.truncate(n);
        cities
    }

    /// A fresh filter container seeded with the full collection, one per
    /// request.
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.listings.clone())
    }
}
