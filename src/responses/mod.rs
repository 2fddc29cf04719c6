pub mod errors;
pub mod html;
pub mod xlsx;

pub use errors::{html_error_response, ResultResp};
pub use html::html_response;
pub use xlsx::xlsx_response;
