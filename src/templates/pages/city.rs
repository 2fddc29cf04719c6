use crate::domain::format::format_currency;
use crate::domain::grouping::CityStats;
use crate::domain::listing::Listing;
use crate::domain::metrics::Percentiles;
use crate::state::DashboardState;
use crate::templates::components::{card, listing_table, stat_tile};
use crate::templates::desktop_layout;
use chrono::Local;
use maud::{html, Markup};

/// City detail: the aggregate recomputed from the loaded listings next to
/// the one shipped in market-stats.js (either may be missing), price
/// percentiles, and the city's listings.
pub fn city_page(
    city: &str,
    live: Option<&CityStats>,
    snapshot: Option<&CityStats>,
    percentiles: &Percentiles,
    state: &DashboardState,
    rows: &[&Listing],
) -> Markup {
    let now = Local::now().naive_local();

    desktop_layout(
        city,
        html! {
            main {
                h1 { (city) }

                @if let Some(agg) = live {
                    div class="tiles" {
                        (stat_tile("Annonces", &agg.count.to_string()))
                        (stat_tile("Prix moyen", &format_currency(agg.avg_price)))
                        (stat_tile("Prix médian", &format_currency(agg.median_price)))
                        (stat_tile("Prix min", &format_currency(agg.min_price)))
                        (stat_tile("Prix max", &format_currency(agg.max_price)))
                        (stat_tile("Prix/m² moyen", &format_currency(agg.avg_price_m2)))
                    }

                    (card("Percentiles de prix", html! {
                        p {
                            "P25 : " strong { (format_currency(percentiles.p25.round() as i64)) }
                            " — P50 : " strong { (format_currency(percentiles.p50.round() as i64)) }
                            " — P75 : " strong { (format_currency(percentiles.p75.round() as i64)) }
                        }
                    }))
                }

                @if let Some(agg) = snapshot {
                    (card("Agrégat du snapshot market-stats", html! {
                        p {
                            (agg.count) " annonce(s), prix moyen "
                            (format_currency(agg.avg_price))
                            ", médian " (format_currency(agg.median_price))
                            ", prix/m² " (format_currency(agg.avg_price_m2))
                        }
                    }))
                }

                @if !rows.is_empty() {
                    (card("Annonces", listing_table(state, rows, now)))
                }
            }
        },
    )
}
