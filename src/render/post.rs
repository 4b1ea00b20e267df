//! Blog post reader

use anyhow::Result;

use super::{Container, DocumentTitle, RenderStatus};
use crate::config::SiteConfig;
use crate::content::{MarkupConverter, ParsedDocument};
use crate::helpers::{button_link, html_escape, long_date, parse_date};
use crate::storage::Storage;

/// A post ready to be written into the page
struct Article {
    title: Option<String>,
    date: Option<String>,
    tags: Option<String>,
    body: String,
}

/// Renders one post, looked up by slug, into the article container
pub struct BlogPostRenderer<S, M, C> {
    storage: S,
    converter: M,
    container: C,
    config: SiteConfig,
}

impl<S, M, C> BlogPostRenderer<S, M, C>
where
    S: Storage,
    M: MarkupConverter,
    C: Container + DocumentTitle,
{
    pub fn new(storage: S, converter: M, container: C, config: SiteConfig) -> Self {
        Self {
            storage,
            converter,
            container,
            config,
        }
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn into_container(self) -> C {
        self.container
    }

    /// Render the post named by `slug`.
    ///
    /// Failures never escape: they are logged and shown in the container.
    pub async fn render(&mut self, slug: Option<&str>) -> RenderStatus {
        let Some(slug) = slug.filter(|s| !s.is_empty()) else {
            tracing::debug!("No slug given, skipping fetch");
            let markup = self.missing_slug_markup();
            self.container.replace(markup);
            return RenderStatus::MissingInput;
        };

        match self.load(slug).await {
            Ok(article) => {
                tracing::debug!("Rendering post {} into #{}", slug, self.container.id());
                self.container.replace(article_markup(&article));
                if let Some(title) = &article.title {
                    self.container
                        .set_title(format!("{} | {}", title, self.config.author));
                }
                RenderStatus::Rendered
            }
            Err(e) => {
                tracing::error!("Error loading blog post {}: {:#}", slug, e);
                let markup = self.failure_markup();
                self.container.replace(markup);
                RenderStatus::Failed
            }
        }
    }

    /// Fetch, parse and convert a post
    async fn load(&self, slug: &str) -> Result<Article> {
        let raw = self.storage.fetch_text(&self.config.post_path(slug)).await?;
        let doc = ParsedDocument::parse(&raw);
        let body = self.converter.convert(&doc.body)?;

        let field = |key: &str| doc.get(key).filter(|v| !v.is_empty()).map(str::to_string);

        let date = field("date").map(|raw| match parse_date(&raw) {
            Some(date) => long_date(&date),
            None => {
                tracing::warn!("Unparsable date {:?} in post {}", raw, slug);
                raw
            }
        });

        Ok(Article {
            title: field("title"),
            date,
            tags: field("tags"),
            body,
        })
    }

    fn missing_slug_markup(&self) -> String {
        format!(
            "<h1>No blog post specified</h1>\n\
             <p class=\"error\">Please select a blog post from the blog listing page.</p>\n\
             {}\n",
            button_link(&self.config.index_page, "View all blogs")
        )
    }

    fn failure_markup(&self) -> String {
        format!(
            "<h1>Error</h1>\n\
             <p class=\"error\">Failed to load blog post. It may not exist or there was a problem loading it.</p>\n\
             {}\n",
            button_link(&self.config.index_page, "Back to all blogs")
        )
    }
}

fn article_markup(article: &Article) -> String {
    let title = article.title.as_deref().unwrap_or("Untitled");

    let mut html = format!("<h1>{}</h1>\n<div class=\"article-meta\">\n", html_escape(title));
    if let Some(date) = &article.date {
        html.push_str(&format!("<p>{}</p>\n", html_escape(date)));
    }
    if let Some(tags) = &article.tags {
        html.push_str(&format!("<p>Tags: {}</p>\n", html_escape(tags)));
    }
    html.push_str("</div>\n<div class=\"article-body\">\n");
    html.push_str(&article.body);
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkdownConfig;
    use crate::content::MarkdownRenderer;
    use crate::render::PageBuffer;
    use crate::storage::{FetchError, FsStorage};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn site_with(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("blogs")).unwrap();
        for (name, content) in files {
            fs::write(dir.path().join("blogs").join(name), content).unwrap();
        }
        dir
    }

    fn renderer(
        dir: &tempfile::TempDir,
    ) -> BlogPostRenderer<FsStorage, MarkdownRenderer, PageBuffer> {
        let converter = MarkdownRenderer::with_config(&MarkdownConfig {
            highlight: false,
            ..Default::default()
        });
        BlogPostRenderer::new(
            FsStorage::new(dir.path()),
            converter,
            PageBuffer::new("article-content"),
            SiteConfig::default(),
        )
    }

    /// Counts fetches and always fails them
    #[derive(Default)]
    struct CountingStorage {
        fetches: AtomicUsize,
    }

    impl Storage for CountingStorage {
        async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::NotFound(path.to_string()))
        }
    }

    struct BrokenConverter;

    impl MarkupConverter for BrokenConverter {
        fn convert(&self, _body: &str) -> Result<String> {
            anyhow::bail!("converter unavailable")
        }
    }

    #[tokio::test]
    async fn test_render_sample_post() {
        let dir = site_with(&[(
            "sample.md",
            "---\ntitle: Hello\ndate: 2024-01-05\n---\nBody text",
        )]);
        let mut renderer = renderer(&dir);

        let status = renderer.render(Some("sample")).await;
        assert_eq!(status, RenderStatus::Rendered);

        let page = renderer.container();
        assert!(page.markup().contains("<h1>Hello</h1>"));
        assert!(page.markup().contains("<p>January 5, 2024</p>"));
        assert!(page.markup().contains("<p>Body text</p>"));
        assert!(!page.markup().contains("Tags:"));
        assert_eq!(page.title(), Some("Hello | Sakshi Sharma"));
    }

    #[tokio::test]
    async fn test_render_tags_line() {
        let dir = site_with(&[("tagged.md", "---\ntitle: T\ntags: rust, security\n---\nx")]);
        let mut renderer = renderer(&dir);

        renderer.render(Some("tagged")).await;
        assert!(renderer
            .container()
            .markup()
            .contains("<p>Tags: rust, security</p>"));
    }

    #[tokio::test]
    async fn test_untitled_post_keeps_document_title() {
        let dir = site_with(&[("plain.md", "# Only a heading\n")]);
        let mut renderer = renderer(&dir);

        let status = renderer.render(Some("plain")).await;
        assert_eq!(status, RenderStatus::Rendered);

        let page = renderer.into_container();
        assert!(page.markup().starts_with("<h1>Untitled</h1>"));
        assert!(page.markup().contains("<h1>Only a heading</h1>"));
        assert_eq!(page.title(), None);
    }

    #[tokio::test]
    async fn test_unparsable_date_shown_as_written() {
        let dir = site_with(&[("odd.md", "---\ntitle: Odd\ndate: someday\n---\nx")]);
        let mut renderer = renderer(&dir);

        renderer.render(Some("odd")).await;
        assert!(renderer.container().markup().contains("<p>someday</p>"));
    }

    #[tokio::test]
    async fn test_metadata_is_escaped() {
        let dir = site_with(&[("xss.md", "---\ntitle: <script>alert(1)</script>\n---\nx")]);
        let mut renderer = renderer(&dir);

        renderer.render(Some("xss")).await;
        let markup = renderer.container().markup();
        assert!(markup.contains("<h1>&lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
    }

    #[tokio::test]
    async fn test_missing_post_renders_error() {
        let dir = site_with(&[]);
        let mut renderer = renderer(&dir);

        let status = renderer.render(Some("ghost")).await;
        assert_eq!(status, RenderStatus::Failed);

        let page = renderer.container();
        assert!(page.markup().contains("<h1>Error</h1>"));
        assert!(page.markup().contains("Failed to load blog post."));
        assert!(page.markup().contains(r#"href="blogs.html""#));
        assert!(page.markup().contains("Back to all blogs"));
        assert_eq!(page.title(), None);
    }

    #[tokio::test]
    async fn test_converter_failure_renders_error() {
        let dir = site_with(&[("fine.md", "---\ntitle: Fine\n---\nx")]);
        let mut renderer = BlogPostRenderer::new(
            FsStorage::new(dir.path()),
            BrokenConverter,
            PageBuffer::new("article-content"),
            SiteConfig::default(),
        );

        let status = renderer.render(Some("fine")).await;
        assert_eq!(status, RenderStatus::Failed);
        assert_eq!(renderer.container().title(), None);
    }

    #[tokio::test]
    async fn test_missing_slug_skips_fetch() {
        for slug in [None, Some("")] {
            let mut renderer = BlogPostRenderer::new(
                CountingStorage::default(),
                MarkdownRenderer::new(),
                PageBuffer::new("article-content"),
                SiteConfig::default(),
            );

            let status = renderer.render(slug).await;
            assert_eq!(status, RenderStatus::MissingInput);
            assert_eq!(renderer.storage.fetches.load(Ordering::SeqCst), 0);

            let markup = renderer.container().markup();
            assert!(markup.contains("<h1>No blog post specified</h1>"));
            assert!(markup.contains("View all blogs"));
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_is_counted_once() {
        let mut renderer = BlogPostRenderer::new(
            CountingStorage::default(),
            MarkdownRenderer::new(),
            PageBuffer::new("article-content"),
            SiteConfig::default(),
        );

        let status = renderer.render(Some("anything")).await;
        assert_eq!(status, RenderStatus::Failed);
        assert_eq!(renderer.storage.fetches.load(Ordering::SeqCst), 1);
    }
}
