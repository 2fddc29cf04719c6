use crate::domain::grouping::CityStats;
use crate::domain::listing::{parse_published_at, Listing};
use crate::domain::metrics::AnomalyFlag;
use crate::snapshot::{extract_assigned_literal, parse_assigned, GlobalStats, SnapshotError};
use std::collections::{BTreeMap, HashMap};

const STATS_JS: &str = r##"// Genere le 16/02/2026 19:25
const STATS = {
  "total": 19,
  "avg_price": 2099,
  "min_price": 1500,
  "max_price": 2800,
  "avg_surface": 75,
  "cities": 14,
  "sites": {
    "Immotop.lu": 4,
    "VIVI.lu": 5
  },
  "by_city": [
    { "city": "Reuler", "count": 2, "avg_price": 1850 },
    { "city": "Luxembourg", "count": 2, "avg_price": 1604 }
  ],
  "by_price_range": {
    "< 1500": 0,
    "1500 - 2000": 7,
    "2000 - 2500": 9,
    "> 2500": 3
  }
};
const SITE_COLORS = {
  "Immotop.lu": "#FF6384"
};
"##;

#[test]
fn extracts_an_object_literal_and_ignores_later_assignments() {
    let literal = extract_assigned_literal(STATS_JS, "STATS").unwrap();
    assert!(literal.starts_with('{'));
    assert!(literal.ends_with('}'));
    assert!(!literal.contains("SITE_COLORS"));
}

#[test]
fn extracts_an_array_literal() {
    let source = r#"const TIMELINE = [{"date": "2026-02-16", "count": 3}];"#;
    let literal = extract_assigned_literal(source, "TIMELINE").unwrap();
    assert!(literal.starts_with('['));
}

#[test]
fn missing_assignment_is_an_error() {
    let err = extract_assigned_literal("const OTHER = {};", "STATS").unwrap_err();
    assert!(matches!(err, SnapshotError::MissingAssignment("STATS")));
}

#[test]
fn stats_snapshot_parses_with_older_schema() {
    let literal = extract_assigned_literal(STATS_JS, "STATS").unwrap();
    let stats: GlobalStats = serde_json::from_str(literal).unwrap();
    assert_eq!(stats.total, 19);
    assert_eq!(stats.avg_price, 2099);
    assert_eq!(stats.sites["VIVI.lu"], 5);
    assert_eq!(stats.by_city[0].city, "Reuler");
    assert_eq!(stats.by_price_range["2000 - 2500"], 9);
    // Fields added by later generators are simply absent.
    assert!(stats.data_quality.is_none());
    assert!(stats.timeline.is_none());
}

#[test]
fn stats_snapshot_parses_optional_blocks_when_present() {
    let literal = r#"{
      "total": 3,
      "data_quality": { "completeness": 88, "with_gps": 2, "with_price": 3, "with_surface": 2, "total": 3 },
      "anomalies": { "extreme_prices": [["Penthouse", 9500, "Luxembourg"]], "count": 1 },
      "price_heatmap": [{ "city": "Bridel", "lat": 49.66, "lng": 6.07, "avg_price_m2": 25.0, "count": 4 }],
      "timeline": [{ "date": "2026-02-16", "count": 3 }]
    }"#;
    let stats: GlobalStats = serde_json::from_str(literal).unwrap();
    assert_eq!(stats.data_quality.unwrap().completeness, 88);
    assert_eq!(stats.anomalies.unwrap().count, 1);
    assert_eq!(stats.price_heatmap.unwrap()[0].city, "Bridel");
    assert_eq!(stats.timeline.unwrap()[0].count, 3);
}

#[test]
fn wrapped_and_strict_json_bodies_both_parse() {
    let wrapped: GlobalStats = parse_assigned(STATS_JS, "stats.js", "STATS").unwrap();
    assert_eq!(wrapped.total, 19);

    let strict: GlobalStats =
        parse_assigned(r#"{ "total": 7 }"#, "stats.js", "STATS").unwrap();
    assert_eq!(strict.total, 7);

    let err =
        parse_assigned::<GlobalStats>("window.foo = 1;", "stats.js", "STATS").unwrap_err();
    assert!(matches!(err, SnapshotError::MissingAssignment("STATS")));
}

#[test]
fn market_stats_parse_without_avg_surface() {
    let literal = r#"{
      "Bridel": {
        "count": 4,
        "avg_price": 2187,
        "median_price": 2400,
        "min_price": 1850,
        "max_price": 2400,
        "avg_price_m2": 25
      }
    }"#;
    let parsed: BTreeMap<String, CityStats> = serde_json::from_str(literal).unwrap();
    let bridel = &parsed["Bridel"];
    assert_eq!(bridel.count, 4);
    assert_eq!(bridel.avg_surface, 0);
    assert_eq!(bridel.avg_price_m2, 25);
}

#[test]
fn anomalies_parse_into_flags() {
    let literal = r#"{ "athome:123": "HIGH", "vivi:9": "GOOD_DEAL" }"#;
    let parsed: HashMap<String, AnomalyFlag> = serde_json::from_str(literal).unwrap();
    assert_eq!(parsed["athome:123"], AnomalyFlag::High);
    assert_eq!(parsed["vivi:9"], AnomalyFlag::GoodDeal);
}

#[test]
fn listings_parse_with_missing_fields() {
    let json = r#"[
      {
        "listing_id": "athome:123",
        "site": "Athome.lu",
        "title": "Bel appartement",
        "city": "Luxembourg",
        "price": 1800,
        "rooms": 2,
        "surface": 75,
        "url": "https://www.athome.lu/123",
        "latitude": 49.61,
        "longitude": 6.13,
        "published_at": "2026-02-10 09:30:00",
        "price_m2": 24.0
      },
      {
        "listing_id": "vivi:9",
        "site": "VIVI.lu",
        "title": null,
        "city": "Bertrange",
        "price": 2600,
        "surface": null,
        "published_at": null
      }
    ]"#;
    let listings: Vec<Listing> = serde_json::from_str(json).unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].surface, Some(75.0));
    assert!(listings[0].published_at.is_some());
    assert_eq!(listings[1].surface, None);
    assert_eq!(listings[1].rooms, None);
    assert!(listings[1].published_at.is_none());
    assert_eq!(listings[1].price_per_m2(), None);
}

#[test]
fn all_three_timestamp_layouts_parse() {
    assert!(parse_published_at("2026-02-10 09:30:00").is_some());
    assert!(parse_published_at("2026-02-10T09:30:00").is_some());
    let midnight = parse_published_at("2026-02-10").unwrap();
    assert_eq!(midnight.format("%H:%M:%S").to_string(), "00:00:00");
    assert!(parse_published_at("pas une date").is_none());
}
