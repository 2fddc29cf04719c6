use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn city_page_renders_live_and_snapshot_aggregates() {
    let state = test_state();
    let mut resp = handle(get("/city?name=Luxembourg"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Prix médian"));
    assert!(body.contains("Percentiles de prix"));
    assert!(body.contains("market-stats"));
    assert!(body.contains("Annonce lux-1"));
    assert!(!body.contains("Annonce esch-1"));
}

#[test]
fn city_page_requires_a_name() {
    let state = test_state();
    let err = handle(get("/city"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let err = handle(get("/city?name="), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_city_is_not_found() {
    let state = test_state();
    let err = handle(get("/city?name=Dudelange"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn listing_page_shows_details_and_similar_listings() {
    let state = test_state();
    let mut resp = handle(get("/listing?id=lux-1"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Annonce lux-1"));
    assert!(body.contains("1\u{a0}800\u{a0}€"));
    // 1800 € against a city median of 2400 €: inside the normal band.
    assert!(body.contains("Dans la norme"));
    // Same city, close coordinates: the other Luxembourg listings score.
    assert!(body.contains("Annonces similaires"));
}

#[test]
fn listing_page_requires_an_id() {
    let state = test_state();
    let err = handle(get("/listing"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_listing_is_not_found() {
    let state = test_state();
    let err = handle(get("/listing?id=zzz"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn anomaly_badges_come_from_the_anomalies_slice() {
    let state = test_state();
    let mut resp = handle(get("/listing?id=lux-3"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Prix élevé"));

    let mut resp = handle(get("/listing?id=esch-1"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Bonne affaire"));
}
