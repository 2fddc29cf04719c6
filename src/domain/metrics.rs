use crate::domain::listing::Listing;
use serde::Deserialize;

/// A price is flagged HIGH above `median * 2.5`.
pub const HIGH_FACTOR: f64 = 2.5;
/// A price is flagged GOOD_DEAL below `median * 0.7`.
pub const GOOD_DEAL_FACTOR: f64 = 0.7;

/// Maximum Euclidean distance, in raw lat/lng degrees, for the location
/// term of [`similarity`]. Not a geodesic distance.
const GEO_DISTANCE_MAX: f64 = 2.0;

/// Heuristic price-outlier classification relative to a median.
/// The serde names match the values written into `anomalies.js`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum AnomalyFlag {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "GOOD_DEAL")]
    GoodDeal,
}

impl AnomalyFlag {
    pub fn as_str(self) -> &'static str {
        match self {
            AnomalyFlag::High => "HIGH",
            AnomalyFlag::GoodDeal => "GOOD_DEAL",
        }
    }
}

/// Median of `values`. Returns 0 for empty input; for an even count, the
/// mean of the two central elements.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 != 0 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Arithmetic mean. Returns 0 for empty input.
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Classify a price against a reference median. No flag when either value
/// is zero or negative.
pub fn anomaly_flag(price: i64, median: f64) -> Option<AnomalyFlag> {
    if price <= 0 || median <= 0.0 {
        return None;
    }
    let price = price as f64;
    if price > median * HIGH_FACTOR {
        Some(AnomalyFlag::High)
    } else if price < median * GOOD_DEAL_FACTOR {
        Some(AnomalyFlag::GoodDeal)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Percentiles {
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
}

/// Nearest-rank percentiles (no interpolation) of a projected field,
/// usually over a filtered view. Zeros for empty input.
pub fn percentiles<F>(listings: &[&Listing], field: F) -> Percentiles
where
    F: Fn(&Listing) -> f64,
{
    if listings.is_empty() {
        return Percentiles::default();
    }
    let mut values: Vec<f64> = listings.iter().map(|l| field(l)).collect();
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    Percentiles {
        p25: values[n / 4],
        p50: values[n / 2],
        p75: values[n * 3 / 4],
    }
}

/// Resemblance score in `[0, 1]` between two listings, the sum of four
/// independent contributions: same city (+0.3), price within 5% of
/// `a.price` (+0.3), surface within 10 m² (+0.2), location within
/// [`GEO_DISTANCE_MAX`] degrees (+0.2). A term whose data is missing on
/// either side contributes nothing. Heuristic, not a calibrated metric.
pub fn similarity(a: &Listing, b: &Listing) -> f64 {
    let mut score: f64 = 0.0;

    if a.city == b.city {
        score += 0.3;
    }

    if a.price > 0 {
        let price_diff = (a.price - b.price).abs() as f64 / a.price as f64;
        if price_diff < 0.05 {
            score += 0.3;
        }
    }

    if let (Some(sa), Some(sb)) = (a.surface, b.surface) {
        if (sa - sb).abs() <= 10.0 {
            score += 0.2;
        }
    }

    if let (Some(lat_a), Some(lng_a), Some(lat_b), Some(lng_b)) =
        (a.latitude, a.longitude, b.latitude, b.longitude)
    {
        let distance = ((lat_a - lat_b).powi(2) + (lng_a - lng_b).powi(2)).sqrt();
        if distance <= GEO_DISTANCE_MAX {
            score += 0.2;
        }
    }

    score.min(1.0)
}
