use crate::domain::filters::{FilterState, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
use crate::tests::utils::{listing, sample_listings};
use chrono::NaiveDate;

fn state() -> FilterState {
    FilterState::new(sample_listings())
}

#[test]
fn defaults_pass_every_listing() {
    let filters = state();
    assert_eq!(filters.applied_filters().len(), filters.all_listings().len());
    assert_eq!(filters.filter_count(), 0);
}

#[test]
fn reset_restores_the_unfiltered_view() {
    let mut filters = state();
    filters.set_selected_city(Some("Luxembourg".into()));
    filters.set_price_range(1500, 2500);
    filters.toggle_site("Athome.lu");
    filters.set_surface_min(70.0);
    filters.set_date_range(NaiveDate::from_ymd_opt(2026, 2, 9), None);
    assert!(filters.applied_filters().len() < filters.all_listings().len());
    assert_eq!(filters.filter_count(), 5);

    filters.reset_filters();
    assert_eq!(filters.applied_filters().len(), filters.all_listings().len());
    assert_eq!(filters.filter_count(), 0);
    assert_eq!(filters.price_bounds().min, PRICE_MIN_DEFAULT);
    assert_eq!(filters.price_bounds().max, PRICE_MAX_DEFAULT);
}

#[test]
fn city_filter_matches_exactly() {
    let mut filters = state();
    filters.set_selected_city(Some("Luxembourg".into()));
    let rows = filters.applied_filters();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|l| l.city == "Luxembourg"));
}

#[test]
fn price_bounds_are_inclusive_on_both_ends() {
    let mut filters = state();
    filters.set_price_range(1450, 2600);
    let ids: Vec<&str> = filters
        .applied_filters()
        .iter()
        .map(|l| l.listing_id.as_str())
        .collect();
    assert!(ids.contains(&"esch-1")); // price == min
    assert!(ids.contains(&"bert-1")); // price == max
    assert!(!ids.contains(&"lux-3")); // 2950 > max
}

#[test]
fn toggle_site_twice_is_a_no_op() {
    let mut filters = state();
    filters.toggle_site("VIVI.lu");
    assert_eq!(filters.applied_filters().len(), 1);
    filters.toggle_site("VIVI.lu");
    assert_eq!(filters.applied_filters().len(), filters.all_listings().len());
}

#[test]
fn empty_site_selection_means_no_restriction() {
    let mut filters = state();
    filters.set_sites(&[]);
    assert_eq!(filters.applied_filters().len(), filters.all_listings().len());
}

#[test]
fn several_selected_sites_union() {
    let mut filters = state();
    filters.toggle_site("VIVI.lu");
    filters.toggle_site("Immotop.lu");
    assert_eq!(filters.applied_filters().len(), 2);
}

#[test]
fn surface_min_excludes_small_but_not_missing_surfaces() {
    let mut filters = state();
    filters.set_surface_min(70.0);
    let ids: Vec<&str> = filters
        .applied_filters()
        .iter()
        .map(|l| l.listing_id.as_str())
        .collect();
    assert!(!ids.contains(&"esch-1")); // 60 m² < 70
    assert!(ids.contains(&"bert-1")); // surface unknown passes
    assert!(ids.contains(&"lux-1"));
}

#[test]
fn date_range_bounds_compare_against_midnight() {
    let mut filters = state();
    filters.set_date_range(
        NaiveDate::from_ymd_opt(2026, 2, 8),
        NaiveDate::from_ymd_opt(2026, 2, 10),
    );
    let ids: Vec<&str> = filters
        .applied_filters()
        .iter()
        .map(|l| l.listing_id.as_str())
        .collect();
    // esch-1 (08/02 08:00) is inside; lux-1 (10/02 09:30) is past the
    // midnight `to` bound; bert-1 (01/02) is before `from`.
    assert!(ids.contains(&"esch-1"));
    assert!(!ids.contains(&"lux-1"));
    assert!(!ids.contains(&"bert-1"));
    // No publication date passes both bounds.
    assert!(ids.contains(&"lux-3"));
}

#[test]
fn unique_cities_are_sorted() {
    let filters = state();
    assert_eq!(
        filters.unique_cities(),
        ["Bertrange", "Esch-sur-Alzette", "Luxembourg"]
    );
}

#[test]
fn unique_sites_keep_first_occurrence_order() {
    let filters = state();
    assert_eq!(filters.unique_sites(), ["Athome.lu", "VIVI.lu", "Immotop.lu"]);
}

#[test]
fn get_listing_by_id() {
    let filters = state();
    assert_eq!(filters.get_listing("esch-1").unwrap().price, 1450);
    assert!(filters.get_listing("missing").is_none());
}

#[test]
fn load_listings_fully_replaces_the_collection() {
    let mut filters = state();
    filters.load_listings(vec![listing("only", "Mamer", 1200, None, "Athome.lu")]);
    assert_eq!(filters.all_listings().len(), 1);
    assert_eq!(filters.applied_filters().len(), 1);
}
