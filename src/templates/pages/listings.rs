use crate::domain::filters::FilterState;
use crate::domain::listing::Listing;
use crate::state::DashboardState;
use crate::templates::components::listing_table;
use crate::templates::desktop_layout;
use chrono::Local;
use maud::{html, Markup};

/// Filter form plus the filtered table. `rows` is the already filtered
/// and sorted view; `query` is the raw query string, reused for the
/// export link so the XLSX matches what is on screen.
pub fn listings_page(
    state: &DashboardState,
    filters: &FilterState,
    rows: &[&Listing],
    query: &str,
) -> Markup {
    let now = Local::now().naive_local();
    let bounds = filters.price_bounds();

    desktop_layout(
        "Annonces",
        html! {
            main {
                div class="card" {
                    form class="filters" method="get" action="/listings" {
                        label {
                            "Ville"
                            select name="city" {
                                option value="" { "Toutes" }
                                @for city in filters.unique_cities() {
                                    option value=(city)
                                        selected[filters.selected_city() == Some(city.as_str())] {
                                        (city)
                                    }
                                }
                            }
                        }
                        label {
                            "Prix min"
                            input type="number" name="min_price" value=(bounds.min);
                        }
                        label {
                            "Prix max"
                            input type="number" name="max_price" value=(bounds.max);
                        }
                        label {
                            "Surface min (m²)"
                            input type="number" name="surface_min" value=(filters.surface_min());
                        }
                        label {
                            "Publiée du"
                            input type="date" name="from"
                                value=[filters.date_range().from.map(|d| d.to_string())];
                        }
                        label {
                            "au"
                            input type="date" name="to"
                                value=[filters.date_range().to.map(|d| d.to_string())];
                        }
                        @for site in filters.unique_sites() {
                            label {
                                (site)
                                input type="checkbox" name="sites" value=(site)
                                    checked[filters.selected_sites().contains(&site)];
                            }
                        }
                        label {
                            "Tri"
                            select name="sort" {
                                option value="" { "Par défaut" }
                                option value="price" { "Prix" }
                                option value="surface" { "Surface" }
                                option value="city" { "Ville" }
                                option value="published_at" { "Date" }
                            }
                        }
                        button type="submit" { "Filtrer" }
                        a href="/listings" { "Réinitialiser" }
                    }
                    p {
                        (rows.len()) " annonce(s) sur " (filters.all_listings().len())
                        @if filters.filter_count() > 0 {
                            " — " (filters.filter_count()) " filtre(s) actif(s)"
                        }
                        " — "
                        a href=(format!("/export?{query}")) { "Exporter en XLSX" }
                    }
                }

                (listing_table(state, rows, now))
            }
        },
    )
}
