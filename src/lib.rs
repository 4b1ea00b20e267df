//! folio-rs: rendering for a personal site's blog and home page
//!
//! This crate renders the blog reader and blog index pages from a site
//! directory holding `blogs/*.md` posts and `blogs/blog-index.json`, and
//! drives the home page's typing animation.

pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod storage;
pub mod typing;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::MarkdownRenderer;
use render::{BlogIndexRenderer, BlogPostRenderer, PageBuffer, RenderStatus};
use storage::FsStorage;

/// A site on disk
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Site root; storage paths are relative to it
    pub base_dir: PathBuf,
}

impl Folio {
    /// Open a site directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Storage rooted at the site directory
    pub fn storage(&self) -> FsStorage {
        FsStorage::new(&self.base_dir)
    }

    /// Render the reader page for `slug`
    pub async fn render_post(&self, slug: Option<&str>) -> (RenderStatus, PageBuffer) {
        let mut renderer = BlogPostRenderer::new(
            self.storage(),
            MarkdownRenderer::with_config(&self.config.markdown),
            PageBuffer::new(self.config.article_container.as_str()),
            self.config.clone(),
        );
        let status = renderer.render(slug).await;
        (status, renderer.into_container())
    }

    /// Render the blog index page
    pub async fn render_index(&self) -> (RenderStatus, PageBuffer) {
        let mut renderer = BlogIndexRenderer::new(
            self.storage(),
            PageBuffer::new(self.config.index_container.as_str()),
            self.config.clone(),
        );
        let status = renderer.render().await;
        (status, renderer.into_container())
    }

    /// Typing animator over the configured quotes
    pub fn typing_animator(&self) -> Result<typing::TypingAnimator> {
        Ok(typing::TypingAnimator::new(self.config.typing.clone())?)
    }
}
