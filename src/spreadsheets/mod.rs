mod export_xlsx;

pub use export_xlsx::export_filtered_xlsx;
