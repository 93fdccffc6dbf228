//! Endpoint sources

mod url_file;

pub use url_file::{UrlFileError, UrlFileReader};
