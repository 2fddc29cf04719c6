use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="fr" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Immo Dashboard" }
                style { (STYLE) }
            }
            body {
                header {
                    h3 { "Immo Dashboard Luxembourg" }
                    nav {
                        ul {
                            li { a href="/" { "Tableau de bord" } }
                            li { a href="/listings" { "Annonces" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; }
header { display: flex; align-items: center; justify-content: space-between;
         padding: 0.5rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 1100px; margin: 1rem auto; padding: 0 1rem; }
a { color: #2563eb; text-decoration: none; }
a:hover { text-decoration: underline; }
.card { border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
.card h2 { margin-top: 0; font-size: 1.1rem; }
.tiles { display: flex; flex-wrap: wrap; gap: 1rem; margin-bottom: 1rem; }
.tile { flex: 1 1 8rem; border: 1px solid #e5e7eb; border-radius: 8px;
        padding: 0.75rem; text-align: center; }
.tile .value { font-size: 1.4rem; font-weight: 600; }
.tile .label { font-size: 0.8rem; color: #6b7280; }
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 0.35rem 0.6rem; border-bottom: 1px solid #e5e7eb; }
.bar-row { display: flex; align-items: center; gap: 0.5rem; margin: 0.25rem 0; }
.bar-label { flex: 0 0 10rem; font-size: 0.85rem; }
.bar-track { flex: 1; }
.bar-fill { height: 0.9rem; border-radius: 3px; }
.badge { display: inline-block; border-radius: 4px; padding: 0.1rem 0.4rem;
         font-size: 0.75rem; color: #fff; }
.dot { display: inline-block; width: 0.6rem; height: 0.6rem; border-radius: 50%;
       margin-right: 0.3rem; }
form.filters { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: flex-end; }
form.filters label { display: flex; flex-direction: column; font-size: 0.8rem; gap: 0.2rem; }
"#;
