use crate::domain::listing::Listing;
use crate::domain::metrics::{average, median};
use serde::Deserialize;
use std::collections::HashMap;

/// One of the four fixed histogram buckets. Intervals are half-open
/// `[min, max)`; `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub label: &'static str,
    pub min: i64,
    pub max: Option<i64>,
    pub color: &'static str,
}

impl PriceRange {
    pub fn contains(&self, price: i64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

/// The fixed price brackets, ascending. Together they cover every
/// non-negative price exactly once.
pub const PRICE_RANGES: [PriceRange; 4] = [
    PriceRange { label: "< 1500€", min: 0, max: Some(1500), color: "#10B981" },
    PriceRange { label: "1500€ - 2000€", min: 1500, max: Some(2000), color: "#3B82F6" },
    PriceRange { label: "2000€ - 2500€", min: 2000, max: Some(2500), color: "#F59E0B" },
    PriceRange { label: "> 2500€", min: 2500, max: None, color: "#EF4444" },
];

pub fn price_range_label(price: i64) -> &'static str {
    if price < 1500 {
        PRICE_RANGES[0].label
    } else if price < 2000 {
        PRICE_RANGES[1].label
    } else if price < 2500 {
        PRICE_RANGES[2].label
    } else {
        PRICE_RANGES[3].label
    }
}

pub fn price_range_color(price: i64) -> &'static str {
    if price < 1500 {
        PRICE_RANGES[0].color
    } else if price < 2000 {
        PRICE_RANGES[1].color
    } else if price < 2500 {
        PRICE_RANGES[2].color
    } else {
        PRICE_RANGES[3].color
    }
}

#[derive(Debug)]
pub struct PriceBucket<'a> {
    pub range: PriceRange,
    pub listings: Vec<&'a Listing>,
}

/// Partition into the four fixed buckets: each listing lands in the first
/// bucket (ascending) whose interval contains its price.
pub fn group_by_price_range(listings: &[Listing]) -> Vec<PriceBucket<'_>> {
    let mut buckets: Vec<PriceBucket> = PRICE_RANGES
        .iter()
        .map(|range| PriceBucket { range: *range, listings: Vec::new() })
        .collect();

    for listing in listings {
        if let Some(bucket) = buckets.iter_mut().find(|b| b.range.contains(listing.price)) {
            bucket.listings.push(listing);
        }
    }

    buckets
}

/// Partition by city, preserving first-occurrence order. Keys are the raw
/// city strings: the snapshots carry the same city under several spellings
/// ("Luxembourg-Gare" vs "Luxembourg Gare"), and those stay distinct here.
pub fn group_by_city(listings: &[Listing]) -> Vec<(String, Vec<&Listing>)> {
    group_by(listings, |l| l.city.as_str())
}

/// Partition by originating site, preserving first-occurrence order.
pub fn group_by_site(listings: &[Listing]) -> Vec<(String, Vec<&Listing>)> {
    group_by(listings, |l| l.site.as_str())
}

fn group_by<'a, F>(listings: &'a [Listing], key: F) -> Vec<(String, Vec<&'a Listing>)>
where
    F: Fn(&'a Listing) -> &'a str,
{
    let mut groups: Vec<(String, Vec<&Listing>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for listing in listings {
        let k = key(listing);
        match index.get(k) {
            Some(&i) => groups[i].1.push(listing),
            None => {
                index.insert(k, groups.len());
                groups.push((k.to_string(), vec![listing]));
            }
        }
    }

    groups
}

/// Summary statistics for one city. The same shape is stored per city in
/// `market-stats.js`, where `avg_surface` may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CityStats {
    pub count: usize,
    pub avg_price: i64,
    pub median_price: i64,
    pub min_price: i64,
    pub max_price: i64,
    #[serde(default)]
    pub avg_surface: i64,
    pub avg_price_m2: i64,
}

/// Aggregate over the listings of one city. `None` when the city has no
/// listings. `avg_price_m2` averages each listing's own price/surface over
/// listings with a positive surface; rounding happens after averaging.
pub fn city_stats(listings: &[Listing], city: &str) -> Option<CityStats> {
    let city_listings: Vec<&Listing> = listings.iter().filter(|l| l.city == city).collect();
    if city_listings.is_empty() {
        return None;
    }

    let prices: Vec<f64> = city_listings.iter().map(|l| l.price as f64).collect();
    let surfaces: Vec<f64> = city_listings
        .iter()
        .filter_map(|l| l.surface)
        .filter(|s| *s > 0.0)
        .collect();
    let prices_m2: Vec<f64> = city_listings.iter().filter_map(|l| l.price_per_m2()).collect();

    Some(CityStats {
        count: city_listings.len(),
        avg_price: average(&prices).round() as i64,
        median_price: median(&prices).round() as i64,
        min_price: city_listings.iter().map(|l| l.price).min().unwrap_or(0),
        max_price: city_listings.iter().map(|l| l.price).max().unwrap_or(0),
        avg_surface: if surfaces.is_empty() {
            0
        } else {
            average(&surfaces).round() as i64
        },
        avg_price_m2: if prices_m2.is_empty() {
            0
        } else {
            average(&prices_m2).round() as i64
        },
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Surface,
    City,
    PublishedAt,
}

impl SortField {
    pub fn from_param(param: &str) -> Option<SortField> {
        match param {
            "price" => Some(SortField::Price),
            "surface" => Some(SortField::Surface),
            "city" => Some(SortField::City),
            "published_at" => Some(SortField::PublishedAt),
            _ => None,
        }
    }
}

/// Stable sort of a filtered view. String fields compare case-insensitively.
pub fn sort_listings(listings: &mut [&Listing], field: SortField, ascending: bool) {
    listings.sort_by(|a, b| {
        let ord = match field {
            SortField::Price => a.price.cmp(&b.price),
            SortField::Surface => a
                .surface
                .unwrap_or(0.0)
                .total_cmp(&b.surface.unwrap_or(0.0)),
            SortField::City => a.city.to_lowercase().cmp(&b.city.to_lowercase()),
            SortField::PublishedAt => a.published_at.cmp(&b.published_at),
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}
