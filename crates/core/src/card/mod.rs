//! Card transactions
//!
//! Operations on an already connected card: attribute retrieval and the
//! GET RESPONSE and SELECT FILE exchanges. Every operation blocks until the
//! underlying primitive returns.

mod attribute;
mod get_response;
mod select_file;

pub use attribute::get_attribute;
pub use get_response::{MAX_RESPONSE_LENGTH, get_response};
pub use select_file::{SelectedFile, select_file, select_file_and_fetch};
