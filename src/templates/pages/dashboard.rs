use crate::domain::format::{format_currency, format_surface, site_color};
use crate::domain::grouping::{group_by_price_range, group_by_site};
use crate::state::DashboardState;
use crate::templates::components::{bar_row, card, stat_tile, urlencode};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The overview page. The tiles come from the stats snapshot; both
/// histograms are recomputed live from the listings so a stale stats.js
/// is visible at a glance.
pub fn dashboard_page(state: &DashboardState) -> Markup {
    let stats = state.stats();
    let listings = state.listings();

    let buckets = group_by_price_range(listings);
    let bucket_max = buckets.iter().map(|b| b.listings.len()).max().unwrap_or(0);

    let sites = group_by_site(listings);
    let site_max = sites.iter().map(|(_, l)| l.len()).max().unwrap_or(0);

    desktop_layout(
        "Tableau de bord",
        html! {
            main {
                div class="tiles" {
                    (stat_tile("Annonces", &stats.total.to_string()))
                    (stat_tile("Prix moyen", &format_currency(stats.avg_price)))
                    (stat_tile("Prix min", &format_currency(stats.min_price)))
                    (stat_tile("Prix max", &format_currency(stats.max_price)))
                    (stat_tile("Surface moyenne", &format_surface(Some(stats.avg_surface as f64))))
                    (stat_tile("Villes", &stats.cities.to_string()))
                    (stat_tile("Prix élevés", &state.high_anomaly_count().to_string()))
                    (stat_tile("Bonnes affaires", &state.good_deal_count().to_string()))
                }

                (card("Annonces par tranche de prix", html! {
                    @for bucket in &buckets {
                        (bar_row(bucket.range.label, bucket.listings.len(), bucket_max, bucket.range.color))
                    }
                }))

                (card("Annonces par site", html! {
                    @for (site, site_listings) in &sites {
                        (bar_row(site, site_listings.len(), site_max, site_color(site)))
                    }
                }))

                @let top_cities = state.top_cities(10);
                @if !top_cities.is_empty() {
                    (card("Villes les plus actives", html! {
                        p { (state.market_stats().len()) " villes suivies par market-stats" }
                        table {
                            thead {
                                tr {
                                    th { "Ville" }
                                    th { "Annonces" }
                                    th { "Prix moyen" }
                                    th { "Prix médian" }
                                    th { "Prix/m² moyen" }
                                }
                            }
                            tbody {
                                @for (city, agg) in &top_cities {
                                    tr {
                                        td { a href=(format!("/city?name={}", urlencode(city))) { (city) } }
                                        td { (agg.count) }
                                        td { (format_currency(agg.avg_price)) }
                                        td { (format_currency(agg.median_price)) }
                                        td { (format_currency(agg.avg_price_m2)) " /m²" }
                                    }
                                }
                            }
                        }
                    }))
                } @else if !stats.by_city.is_empty() {
                    // market-stats.js degraded; the coarser per-city block
                    // of stats.js still gives counts and averages.
                    (card("Villes les plus actives", html! {
                        table {
                            thead {
                                tr { th { "Ville" } th { "Annonces" } th { "Prix moyen" } }
                            }
                            tbody {
                                @for entry in stats.by_city.iter().take(10) {
                                    tr {
                                        td { a href=(format!("/city?name={}", urlencode(&entry.city))) { (entry.city) } }
                                        td { (entry.count) }
                                        td { (format_currency(entry.avg_price)) }
                                    }
                                }
                            }
                        }
                    }))
                }

                @if let Some(quality) = &stats.data_quality {
                    (card("Qualité des données", html! {
                        p {
                            "Complétude " strong { (quality.completeness) "%" }
                            " — GPS : " (quality.with_gps)
                            ", prix : " (quality.with_price)
                            ", surface : " (quality.with_surface)
                            " sur " (quality.total) " annonces"
                        }
                        @if let Some(anomalies) = &stats.anomalies {
                            p {
                                (anomalies.extreme_prices.len().max(anomalies.count as usize))
                                " prix extrêmes (méthode IQR) signalés par le générateur"
                            }
                        }
                    }))
                }

                @if let Some(heatmap) = &stats.price_heatmap {
                    (card("Prix au m² par ville", html! {
                        table {
                            thead {
                                tr { th { "Ville" } th { "Prix/m²" } th { "Annonces" } th { "GPS" } }
                            }
                            tbody {
                                @for point in heatmap {
                                    tr {
                                        td { (point.city) }
                                        td { (format_currency(point.avg_price_m2.round() as i64)) " /m²" }
                                        td { (point.count) }
                                        td { (format!("{:.2}, {:.2}", point.lat, point.lng)) }
                                    }
                                }
                            }
                        }
                    }))
                }

                @if let Some(timeline) = &stats.timeline {
                    (card("Nouvelles annonces par jour", html! {
                        @let max = timeline.iter().map(|p| p.count).max().unwrap_or(0);
                        @for point in timeline.iter().rev().take(14).rev() {
                            (bar_row(&point.date, point.count as usize, max as usize, "#3B82F6"))
                        }
                    }))
                }
            }
        },
    )
}
