//! Content module - documents, summaries, and markdown conversion

mod frontmatter;
mod markdown;
mod summary;

pub use frontmatter::ParsedDocument;
pub use markdown::{MarkdownRenderer, MarkupConverter};
pub use summary::PostSummary;
