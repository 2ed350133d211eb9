pub mod errors;
pub mod html;

pub use errors::{error_to_response, ResultResp};

// Normal HTML responses
pub use html::{html_response, html_response_with_status, redirect};
