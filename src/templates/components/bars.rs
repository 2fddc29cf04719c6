use maud::{html, Markup};

/// One horizontal histogram bar, scaled against the largest count of the
/// group.
pub fn bar_row(label: &str, count: usize, max_count: usize, color: &str) -> Markup {
    let percent = count * 100 / max_count.max(1);
    html! {
        div class="bar-row" {
            span class="bar-label" { (label) }
            div class="bar-track" {
                div class="bar-fill"
                    style=(format!("width: {}%; background: {};", percent.max(1), color)) {}
            }
            span { (count) }
        }
    }
}
