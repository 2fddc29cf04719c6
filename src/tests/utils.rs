use crate::domain::grouping::city_stats;
use crate::domain::listing::Listing;
use crate::domain::metrics::AnomalyFlag;
use crate::snapshot::{GlobalStats, Snapshots};
use crate::state::DashboardState;
use astra::Body;
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;

pub fn ts(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").expect("fixture timestamp")
}

/// A fully populated listing; tests overwrite fields as needed.
pub fn listing(id: &str, city: &str, price: i64, surface: Option<f64>, site: &str) -> Listing {
    Listing {
        listing_id: id.to_string(),
        site: site.to_string(),
        title: Some(format!("Annonce {id}")),
        city: city.to_string(),
        price,
        rooms: Some(2),
        surface,
        url: Some(format!("https://example.lu/{id}")),
        latitude: Some(49.61),
        longitude: Some(6.13),
        published_at: Some(ts("2026-02-10 09:30:00")),
        price_m2: None,
    }
}

pub fn sample_listings() -> Vec<Listing> {
    let mut lux_2 = listing("lux-2", "Luxembourg", 2400, Some(95.0), "VIVI.lu");
    lux_2.published_at = Some(ts("2026-02-12 14:00:00"));

    let mut esch_1 = listing("esch-1", "Esch-sur-Alzette", 1450, Some(60.0), "Immotop.lu");
    esch_1.latitude = Some(49.49);
    esch_1.longitude = Some(5.98);
    esch_1.published_at = Some(ts("2026-02-08 08:00:00"));

    let mut bert_1 = listing("bert-1", "Bertrange", 2600, None, "Athome.lu");
    bert_1.latitude = None;
    bert_1.longitude = None;
    bert_1.published_at = Some(ts("2026-02-01 10:00:00"));

    let mut lux_3 = listing("lux-3", "Luxembourg", 2950, Some(120.0), "Athome.lu");
    lux_3.published_at = None;

    vec![
        listing("lux-1", "Luxembourg", 1800, Some(75.0), "Athome.lu"),
        lux_2,
        esch_1,
        bert_1,
        lux_3,
    ]
}

pub fn test_state() -> DashboardState {
    let listings = sample_listings();

    let mut anomalies = HashMap::new();
    anomalies.insert("lux-3".to_string(), AnomalyFlag::High);
    anomalies.insert("esch-1".to_string(), AnomalyFlag::GoodDeal);

    let mut market_stats = BTreeMap::new();
    for city in ["Luxembourg", "Esch-sur-Alzette", "Bertrange"] {
        if let Some(agg) = city_stats(&listings, city) {
            market_stats.insert(city.to_string(), agg);
        }
    }

    let stats = GlobalStats {
        total: listings.len() as u64,
        avg_price: 2240,
        min_price: 1450,
        max_price: 2950,
        avg_surface: 88,
        cities: 3,
        ..GlobalStats::default()
    };

    DashboardState::new(Snapshots { listings, stats, anomalies, market_stats })
}

pub fn get(path_and_query: &str) -> astra::Request {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(path_and_query)
        .body(Body::empty())
        .expect("test request")
}

pub fn body_string(resp: &mut astra::Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("read response body");
    String::from_utf8(bytes).expect("utf-8 body")
}
