use crate::domain::filters::{FilterState, PRICE_MAX_DEFAULT, PRICE_MIN_DEFAULT};
use crate::domain::grouping::{city_stats, sort_listings, SortField};
use crate::domain::listing::Listing;
use crate::domain::metrics::{anomaly_flag, median, percentiles, similarity};
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::spreadsheets::export_filtered_xlsx;
use crate::state::DashboardState;
use crate::templates::pages;
use astra::Request;
use chrono::NaiveDate;

pub fn handle(req: Request, state: &DashboardState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("").to_string();

    match (method, path) {
        ("GET", "/") => html_response(pages::dashboard_page(state)),

        ("GET", "/listings") => {
            let params = parse_query(&query);
            let filters = filters_from_params(state, &params);
            let rows = filtered_rows(&filters, &params);
            html_response(pages::listings_page(state, &filters, &rows, &query))
        }

        ("GET", "/city") => {
            let params = parse_query(&query);
            let name = param(&params, "name")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ServerError::BadRequest("paramètre 'name' manquant".into()))?;

            let live = city_stats(state.listings(), name);
            let snapshot = state.city_aggregate(name);
            if live.is_none() && snapshot.is_none() {
                return Err(ServerError::NotFound);
            }

            let rows: Vec<&Listing> =
                state.listings().iter().filter(|l| l.city == name).collect();
            let price_percentiles = percentiles(&rows, |l| l.price as f64);

            html_response(pages::city_page(
                name,
                live.as_ref(),
                snapshot,
                &price_percentiles,
                state,
                &rows,
            ))
        }

        ("GET", "/listing") => {
            let params = parse_query(&query);
            let id = param(&params, "id")
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ServerError::BadRequest("paramètre 'id' manquant".into()))?;

            let listing = state
                .listings()
                .iter()
                .find(|l| l.listing_id == id)
                .ok_or(ServerError::NotFound)?;

            // Recomputed against the current listings, independently of
            // whatever anomalies.js shipped.
            let city_prices: Vec<f64> = state
                .listings()
                .iter()
                .filter(|l| l.city == listing.city)
                .map(|l| l.price as f64)
                .collect();
            let live_flag = anomaly_flag(listing.price, median(&city_prices));

            let similar = most_similar(state.listings(), listing, 3);
            html_response(pages::listing_page(state, listing, live_flag, &similar))
        }

        ("GET", "/export") => {
            let params = parse_query(&query);
            let filters = filters_from_params(state, &params);
            let rows = filtered_rows(&filters, &params);
            export_filtered_xlsx(state, &rows)
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Build a per-request filter container from the query parameters.
/// Unparseable values fall back to the defaults rather than erroring.
fn filters_from_params(state: &DashboardState, params: &[(String, String)]) -> FilterState {
    let mut filters = state.filter_state();

    if let Some(city) = param(params, "city") {
        if !city.is_empty() {
            filters.set_selected_city(Some(city.to_string()));
        }
    }

    let min = param(params, "min_price")
        .and_then(|v| v.parse().ok())
        .unwrap_or(PRICE_MIN_DEFAULT);
    let max = param(params, "max_price")
        .and_then(|v| v.parse().ok())
        .unwrap_or(PRICE_MAX_DEFAULT);
    filters.set_price_range(min, max);

    // Checkbox group: the key repeats once per checked site.
    for (key, value) in params {
        if key == "sites" && !value.is_empty() {
            filters.toggle_site(value);
        }
    }

    if let Some(surface) = param(params, "surface_min").and_then(|v| v.parse::<f64>().ok()) {
        filters.set_surface_min(surface);
    }

    let from = param(params, "from").and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok());
    let to = param(params, "to").and_then(|v| NaiveDate::parse_from_str(v, "%Y-%m-%d").ok());
    if from.is_some() || to.is_some() {
        filters.set_date_range(from, to);
    }

    filters
}

fn filtered_rows<'a>(filters: &'a FilterState, params: &[(String, String)]) -> Vec<&'a Listing> {
    let mut rows = filters.applied_filters();
    if let Some(field) = param(params, "sort").and_then(SortField::from_param) {
        let ascending = param(params, "order") != Some("desc");
        sort_listings(&mut rows, field, ascending);
    }
    rows
}

/// The `n` listings most similar to `listing`, best first. Zero-score
/// listings are left out.
fn most_similar<'a>(
    listings: &'a [Listing],
    listing: &Listing,
    n: usize,
) -> Vec<(&'a Listing, f64)> {
    let mut scored: Vec<(&Listing, f64)> = listings
        .iter()
        .filter(|other| other.listing_id != listing.listing_id)
        .map(|other| (other, similarity(listing, other)))
        .filter(|(_, score)| *score > 0.0)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(n);
    scored
}
