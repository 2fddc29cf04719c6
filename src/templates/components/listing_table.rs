use crate::domain::format::{
    format_currency, format_price_per_m2, format_rooms, format_surface, time_ago, truncate,
};
use crate::domain::grouping::price_range_color;
use crate::domain::listing::Listing;
use crate::state::DashboardState;
use crate::templates::components::{anomaly_badge, site_badge};
use chrono::NaiveDateTime;
use maud::{html, Markup};

/// The shared listings table. `now` comes from the caller so the whole
/// page renders against one clock.
pub fn listing_table(state: &DashboardState, listings: &[&Listing], now: NaiveDateTime) -> Markup {
    html! {
        table {
            thead {
                tr {
                    th { "Annonce" }
                    th { "Ville" }
                    th { "Prix" }
                    th { "Surface" }
                    th { "Pièces" }
                    th { "Prix/m²" }
                    th { "Site" }
                    th { "Publiée" }
                    th {}
                }
            }
            tbody {
                @for listing in listings {
                    tr {
                        td {
                            a href=(format!("/listing?id={}", listing.listing_id)) {
                                (truncate(listing.title.as_deref().unwrap_or("(sans titre)"), 50))
                            }
                        }
                        td {
                            a href=(format!("/city?name={}", urlencode(&listing.city))) {
                                (listing.city)
                            }
                        }
                        td {
                            span style=(format!("color: {};", price_range_color(listing.price))) {
                                (format_currency(listing.price))
                            }
                        }
                        td { (format_surface(listing.surface)) }
                        td { (format_rooms(listing.rooms)) }
                        td { (format_price_per_m2(listing.price, listing.surface)) }
                        td { (site_badge(&listing.site)) }
                        td { (time_ago(listing.published_at, now)) }
                        td { (anomaly_badge(state.anomaly_for(&listing.listing_id))) }
                    }
                }
            }
        }
        @if listings.is_empty() {
            p { "Aucune annonce ne correspond aux filtres." }
        }
    }
}

pub fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
