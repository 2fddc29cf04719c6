use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn overview_page_renders_the_snapshot_numbers() {
    let state = test_state();
    let mut resp = handle(get("/"), &state).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);

    assert!(body.contains("Tableau de bord"));
    // Snapshot tiles.
    assert!(body.contains("2\u{a0}240\u{a0}€"), "avg price tile missing");
    // Live-computed histogram and city table.
    assert!(body.contains("1500€ - 2000€"));
    assert!(body.contains("Luxembourg"));
    // Anomaly counters from the anomalies slice.
    assert!(body.contains("Bonnes affaires"));
}

#[test]
fn unknown_paths_are_not_found() {
    let state = test_state();
    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}

#[test]
fn unknown_methods_are_not_found() {
    let state = test_state();
    let req = http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .body(astra::Body::empty())
        .unwrap();
    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}
