use crate::domain::listing::Listing;
use chrono::{NaiveDate, NaiveTime};

pub const PRICE_MIN_DEFAULT: i64 = 0;
pub const PRICE_MAX_DEFAULT: i64 = 10_000;

/// Inclusive price bounds selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for PriceBounds {
    fn default() -> Self {
        PriceBounds { min: PRICE_MIN_DEFAULT, max: PRICE_MAX_DEFAULT }
    }
}

/// Optional bounds on the publication date. Both bounds compare against
/// midnight of the given day, so a listing published later on the `to`
/// day is excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_set(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// The listing collection plus the user-selected filter criteria.
///
/// Criteria live for one session, start at their defaults and go back to
/// them on `reset_filters`. The filtered view is recomputed on every call;
/// at snapshot scale that is cheaper than cache bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    all_listings: Vec<Listing>,
    selected_city: Option<String>,
    price_bounds: PriceBounds,
    selected_sites: Vec<String>,
    surface_min: f64,
    date_range: DateRange,
}

impl FilterState {
    pub fn new(listings: Vec<Listing>) -> Self {
        let mut state = FilterState::default();
        state.load_listings(listings);
        state
    }

    /// Fully replaces the collection. Filter criteria are untouched.
    pub fn load_listings(&mut self, listings: Vec<Listing>) {
        self.all_listings = listings;
    }

    pub fn all_listings(&self) -> &[Listing] {
        &self.all_listings
    }

    pub fn selected_city(&self) -> Option<&str> {
        self.selected_city.as_deref()
    }

    pub fn price_bounds(&self) -> PriceBounds {
        self.price_bounds
    }

    pub fn selected_sites(&self) -> &[String] {
        &self.selected_sites
    }

    pub fn surface_min(&self) -> f64 {
        self.surface_min
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn set_selected_city(&mut self, city: Option<String>) {
        self.selected_city = city;
    }

    pub fn set_price_range(&mut self, min: i64, max: i64) {
        self.price_bounds = PriceBounds { min, max };
    }

    /// Adds the site if absent, removes it if present.
    pub fn toggle_site(&mut self, site: &str) {
        match self.selected_sites.iter().position(|s| s == site) {
            Some(i) => {
                self.selected_sites.remove(i);
            }
            None => self.selected_sites.push(site.to_string()),
        }
    }

    pub fn set_sites(&mut self, sites: &[String]) {
        self.selected_sites = sites.to_vec();
    }

    pub fn set_surface_min(&mut self, surface: f64) {
        self.surface_min = surface;
    }

    pub fn set_date_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.date_range = DateRange { from, to };
    }

    pub fn reset_filters(&mut self) {
        self.selected_city = None;
        self.price_bounds = PriceBounds::default();
        self.selected_sites.clear();
        self.surface_min = 0.0;
        self.date_range = DateRange::default();
    }

    /// Distinct cities in the collection, sorted.
    pub fn unique_cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for listing in &self.all_listings {
            if !cities.contains(&listing.city) {
                cities.push(listing.city.clone());
            }
        }
        cities.sort();
        cities
    }

    /// Distinct sites, in first-occurrence order.
    pub fn unique_sites(&self) -> Vec<String> {
        let mut sites: Vec<String> = Vec::new();
        for listing in &self.all_listings {
            if !sites.contains(&listing.site) {
                sites.push(listing.site.clone());
            }
        }
        sites
    }

    /// Number of criteria that deviate from their defaults.
    pub fn filter_count(&self) -> usize {
        let mut count = 0;
        if self.selected_city.is_some() {
            count += 1;
        }
        if self.price_bounds != PriceBounds::default() {
            count += 1;
        }
        if !self.selected_sites.is_empty() {
            count += 1;
        }
        if self.surface_min > 0.0 {
            count += 1;
        }
        if self.date_range.is_set() {
            count += 1;
        }
        count
    }

    pub fn get_listing(&self, listing_id: &str) -> Option<&Listing> {
        self.all_listings.iter().find(|l| l.listing_id == listing_id)
    }

    /// The derived filtered view: a listing passes only if it satisfies
    /// every active criterion.
    pub fn applied_filters(&self) -> Vec<&Listing> {
        self.all_listings.iter().filter(|l| self.matches(l)).collect()
    }

    fn matches(&self, listing: &Listing) -> bool {
        if let Some(city) = &self.selected_city {
            if listing.city != *city {
                return false;
            }
        }

        if listing.price < self.price_bounds.min || listing.price > self.price_bounds.max {
            return false;
        }

        if !self.selected_sites.is_empty() && !self.selected_sites.contains(&listing.site) {
            return false;
        }

        // A listing without a surface passes; only a known-small surface
        // is excluded.
        if let Some(surface) = listing.surface {
            if surface < self.surface_min {
                return false;
            }
        }

        if self.date_range.is_set() {
            if let Some(published) = listing.published_at {
                if let Some(from) = self.date_range.from {
                    if published < from.and_time(NaiveTime::MIN) {
                        return false;
                    }
                }
                if let Some(to) = self.date_range.to {
                    if published > to.and_time(NaiveTime::MIN) {
                        return false;
                    }
                }
            }
            // No publication date: both bounds pass.
        }

        true
    }
}
