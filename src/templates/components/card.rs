use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat_tile(label: &str, value: &str) -> Markup {
    html! {
        div class="tile" {
            div class="value" { (value) }
            div class="label" { (label) }
        }
    }
}
