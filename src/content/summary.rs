//! Post summaries listed in the blog index

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::helpers::parse_datetime;

/// One entry of `blog-index.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Lookup key and `slug` query parameter of the reader page
    pub slug: String,
    pub title: String,
    /// ISO-style date string as written in the index; absent or `null` is allowed
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl PostSummary {
    /// Publication time, `None` when the date is missing or unparsable
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_datetime)
    }

    /// The date exactly as the index gives it
    pub fn raw_date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }
}
