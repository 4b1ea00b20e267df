//! Configuration module

mod site;

pub use site::MarkdownConfig;
pub use site::SiteConfig;
pub use site::TypingConfig;
