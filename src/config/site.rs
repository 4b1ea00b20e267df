//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    /// Appended to post titles in the document title
    pub author: String,

    // Storage
    pub blog_dir: String,
    pub index_file: String,

    // Pages
    pub index_page: String,
    pub reader_page: String,

    // Containers
    pub article_container: String,
    pub index_container: String,

    #[serde(default)]
    pub markdown: MarkdownConfig,

    #[serde(default)]
    pub typing: TypingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: "Sakshi Sharma".to_string(),

            blog_dir: "blogs".to_string(),
            index_file: "blog-index.json".to_string(),

            index_page: "blogs.html".to_string(),
            reader_page: "blog.html".to_string(),

            article_container: "article-content".to_string(),
            index_container: "blogs-container".to_string(),

            markdown: MarkdownConfig::default(),
            typing: TypingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Storage path of a post document
    pub fn post_path(&self, slug: &str) -> String {
        format!("{}/{}.md", self.blog_dir.trim_end_matches('/'), slug)
    }

    /// Storage path of the post index
    pub fn index_path(&self) -> String {
        format!(
            "{}/{}",
            self.blog_dir.trim_end_matches('/'),
            self.index_file
        )
    }
}

/// Markdown converter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownConfig {
    pub highlight: bool,
    pub theme: String,
    pub line_numbers: bool,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            theme: "base16-ocean.dark".to_string(),
            line_numbers: false,
        }
    }
}

/// Typing animation configuration, all intervals in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub quotes: Vec<String>,
    pub typing_speed: u64,
    pub deleting_speed: u64,
    pub pause_after_typing: u64,
    pub pause_after_deleting: u64,
    pub start_delay: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            quotes: vec![
                "Building resilient systems in an insecure world.".to_string(),
                "Cybersecurity beyond compliance.".to_string(),
                "Designing trust in digital systems.".to_string(),
                "Security as an enabler, not a blocker.".to_string(),
                "Working at the intersection of risk and resilience.".to_string(),
            ],
            typing_speed: 80,
            deleting_speed: 50,
            pause_after_typing: 2000,
            pause_after_deleting: 500,
            start_delay: 500,
        }
    }
}

impl TypingConfig {
    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_speed)
    }

    pub fn deleting_interval(&self) -> Duration {
        Duration::from_millis(self.deleting_speed)
    }

    pub fn typing_dwell(&self) -> Duration {
        Duration::from_millis(self.pause_after_typing)
    }

    pub fn deleting_dwell(&self) -> Duration {
        Duration::from_millis(self.pause_after_deleting)
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay)
    }
}
