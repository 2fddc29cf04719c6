use crate::domain::format::site_color;
use crate::domain::metrics::AnomalyFlag;
use maud::{html, Markup};

pub fn site_badge(site: &str) -> Markup {
    html! {
        span {
            span class="dot" style=(format!("background: {};", site_color(site))) {}
            (site)
        }
    }
}

/// Nothing for an unflagged listing.
pub fn anomaly_badge(flag: Option<AnomalyFlag>) -> Markup {
    match flag {
        Some(AnomalyFlag::High) => html! {
            span class="badge" style="background: #EF4444;" { "Prix élevé" }
        },
        Some(AnomalyFlag::GoodDeal) => html! {
            span class="badge" style="background: #10B981;" { "Bonne affaire" }
        },
        None => html! {},
    }
}
