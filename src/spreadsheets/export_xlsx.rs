use crate::domain::format::format_date;
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::{xlsx_response, ResultResp};
use crate::state::DashboardState;
use rust_xlsxwriter::Workbook;

/// Write the filtered listings into a workbook and wrap it as a download.
/// The anomaly column carries the raw flag values so the export stays
/// greppable against anomalies.js.
pub fn export_filtered_xlsx(state: &DashboardState, listings: &[&Listing]) -> ResultResp {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let headers = [
        "Annonce",
        "Ville",
        "Prix (€)",
        "Surface (m²)",
        "Pièces",
        "Prix/m²",
        "Site",
        "Publiée le",
        "URL",
        "Anomalie",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        let title = listing.title.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 0, title)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write title: {}", e)))?;

        worksheet
            .write_string(r, 1, &listing.city)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write city: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.price as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;

        // Blank cell when the surface is unknown; 0 would skew pivots.
        if let Some(surface) = listing.surface {
            worksheet
                .write_number(r, 3, surface)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write surface: {}", e)))?;
        }

        if let Some(rooms) = listing.rooms {
            worksheet
                .write_number(r, 4, rooms as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write rooms: {}", e)))?;
        }

        if let Some(price_m2) = listing.price_per_m2() {
            worksheet
                .write_number(r, 5, price_m2.round())
                .map_err(|e| ServerError::XlsxError(format!("Failed to write price/m²: {}", e)))?;
        }

        worksheet
            .write_string(r, 6, &listing.site)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write site: {}", e)))?;

        worksheet
            .write_string(r, 7, &format_date(listing.published_at))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write date: {}", e)))?;

        let url = listing.url.as_deref().unwrap_or("");
        worksheet
            .write_string(r, 8, url)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write url: {}", e)))?;

        let flag = state
            .anomaly_for(&listing.listing_id)
            .map(|f| f.as_str())
            .unwrap_or("");
        worksheet
            .write_string(r, 9, flag)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write anomaly: {}", e)))?;
    }

    let buffer = workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))?;

    xlsx_response(buffer, "annonces.xlsx")
}
