//! Helper functions shared by the renderers
//!
//! Date parsing and formatting, HTML escaping, and query string handling.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
