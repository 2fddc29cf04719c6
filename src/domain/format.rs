use chrono::NaiveDateTime;

/// Placeholder for missing display values.
pub const MISSING: &str = "\u{2014}";

// fr-LU digit grouping uses a non-breaking space.
const NBSP: char = '\u{a0}';

/// Whole euros in fr-LU style: `2099` renders as `"2 099 €"` with
/// non-breaking spaces.
pub fn format_currency(value: i64) -> String {
    format!("{}{}€", format_grouped(value), NBSP)
}

/// fr-LU number rendering: grouped integer part, comma decimal separator.
pub fn format_number(value: f64, decimals: usize) -> String {
    let rounded = {
        let scale = 10f64.powi(decimals as i32);
        (value * scale).round() / scale
    };
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as i64;
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&format_grouped(int_part));
    if decimals > 0 {
        let frac = ((abs - abs.trunc()) * 10f64.powi(decimals as i32)).round() as u64;
        out.push(',');
        out.push_str(&format!("{:0width$}", frac, width = decimals));
    }
    out
}

fn format_grouped(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(NBSP);
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `"24 €/m²"` from a price and surface, or the dash when the surface is
/// missing or zero.
pub fn format_price_per_m2(price: i64, surface: Option<f64>) -> String {
    match surface {
        Some(s) if s > 0.0 && price > 0 => {
            format!("{}/m²", format_currency((price as f64 / s).round() as i64))
        }
        _ => MISSING.to_string(),
    }
}

pub fn format_date(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => MISSING.to_string(),
    }
}

pub fn format_date_time(date: Option<NaiveDateTime>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y %H:%M").to_string(),
        None => MISSING.to_string(),
    }
}

pub fn format_surface(surface: Option<f64>) -> String {
    match surface {
        Some(s) if s > 0.0 => format!("{} m²", format_number(s, 0)),
        _ => MISSING.to_string(),
    }
}

pub fn format_rooms(rooms: Option<i64>) -> String {
    match rooms {
        Some(n) if n > 0 => {
            if n > 1 {
                format!("{n} pièces")
            } else {
                "1 pièce".to_string()
            }
        }
        _ => MISSING.to_string(),
    }
}

/// Truncate to `length` characters (not bytes) with an ellipsis.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let cut: String = text.chars().take(length).collect();
    format!("{cut}...")
}

/// Relative age of a publication date: "À l'instant", minutes, hours,
/// days, then the full date past a week. `now` is passed in so callers
/// and tests share a clock.
pub fn time_ago(date: Option<NaiveDateTime>, now: NaiveDateTime) -> String {
    let Some(date) = date else {
        return MISSING.to_string();
    };
    let seconds = (now - date).num_seconds();

    if seconds < 60 {
        "À l'instant".to_string()
    } else if seconds < 3600 {
        format!("{} min", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h", seconds / 3600)
    } else if seconds < 604_800 {
        format!("{}j", seconds / 86_400)
    } else {
        format_date(Some(date))
    }
}

/// Chart color for a site; unknown sites get the neutral grey.
pub fn site_color(site: &str) -> &'static str {
    match site {
        "Athome.lu" => "#9966FF",
        "Nextimmo.lu" => "#FF9F40",
        "VIVI.lu" => "#FFCE56",
        "SothebysRealty.lu" => "#FF6384",
        "Newimmo.lu" => "#36A2EB",
        "Immotop.lu" => "#4BC0C0",
        "Floor.lu" => "#2ECC71",
        _ => "#6B7280",
    }
}
