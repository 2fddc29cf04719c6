use crate::domain::format::{
    format_currency, format_date_time, format_price_per_m2, format_rooms, format_surface,
    time_ago, truncate,
};
use crate::domain::listing::Listing;
use crate::domain::metrics::AnomalyFlag;
use crate::state::DashboardState;
use crate::templates::components::{anomaly_badge, card, site_badge, urlencode};
use crate::templates::desktop_layout;
use chrono::Local;
use maud::{html, Markup};

/// One listing with its snapshot anomaly flag, the flag recomputed from
/// the current city median, and the most similar other listings.
pub fn listing_page(
    state: &DashboardState,
    listing: &Listing,
    live_flag: Option<AnomalyFlag>,
    similar: &[(&Listing, f64)],
) -> Markup {
    let now = Local::now().naive_local();
    let title = listing.title.as_deref().unwrap_or("(sans titre)");

    desktop_layout(
        title,
        html! {
            main {
                h1 {
                    (title) " "
                    (anomaly_badge(state.anomaly_for(&listing.listing_id)))
                }

                (card("Détails", html! {
                    table {
                        tr { th { "Ville" }
                             td { a href=(format!("/city?name={}", urlencode(&listing.city))) { (listing.city) } } }
                        tr { th { "Prix" } td { (format_currency(listing.price)) } }
                        tr { th { "Surface" } td { (format_surface(listing.surface)) } }
                        tr { th { "Pièces" } td { (format_rooms(listing.rooms)) } }
                        tr { th { "Prix/m²" } td { (format_price_per_m2(listing.price, listing.surface)) } }
                        tr { th { "Site" } td { (site_badge(&listing.site)) } }
                        tr { th { "Publiée" }
                             td { (format_date_time(listing.published_at))
                                  " (" (time_ago(listing.published_at, now)) ")" } }
                        tr { th { "Position marché" }
                             td {
                                 @if live_flag.is_some() {
                                     (anomaly_badge(live_flag))
                                 } @else {
                                     "Dans la norme de la ville"
                                 }
                             } }
                        @if let Some(url) = &listing.url {
                            tr { th { "Annonce" } td { a href=(url) { "Voir sur " (listing.site) } } }
                        }
                    }
                }))

                @if !similar.is_empty() {
                    (card("Annonces similaires", html! {
                        table {
                            thead {
                                tr { th { "Annonce" } th { "Ville" } th { "Prix" } th { "Score" } }
                            }
                            tbody {
                                @for (other, score) in similar {
                                    tr {
                                        td {
                                            a href=(format!("/listing?id={}", other.listing_id)) {
                                                (truncate(other.title.as_deref().unwrap_or("(sans titre)"), 50))
                                            }
                                        }
                                        td { (other.city) }
                                        td { (format_currency(other.price)) }
                                        td { (format!("{:.0} %", score * 100.0)) }
                                    }
                                }
                            }
                        }
                    }))
                }
            }
        },
    )
}
