use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer};

/// One rental listing as exported into `listings.json` by the scraper
/// pipeline. Everything except the identifier, site, city and price has
/// gone missing in real snapshots at some point, so those fields are
/// optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct Listing {
    pub listing_id: String,
    pub site: String,
    #[serde(default)]
    pub title: Option<String>,
    pub city: String,
    pub price: i64,
    #[serde(default)]
    pub rooms: Option<i64>,
    #[serde(default)]
    pub surface: Option<f64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "de_published_at")]
    pub published_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub price_m2: Option<f64>,
}

impl Listing {
    /// Price per square meter, recomputed from this listing's own fields.
    /// A surface of 0 or absent yields `None`, never a division by zero.
    pub fn price_per_m2(&self) -> Option<f64> {
        match self.surface {
            Some(surface) if surface > 0.0 => Some(self.price as f64 / surface),
            _ => None,
        }
    }
}

fn de_published_at<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_published_at))
}

/// The exporter has written three different timestamp layouts over time.
/// Anything unparseable is treated as absent.
pub fn parse_published_at(raw: &str) -> Option<NaiveDateTime> {
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}
