//! Page renderers
//!
//! Each renderer owns the container it writes into. A container stands in
//! for one page element whose markup is replaced wholesale on every render.

mod index;
mod post;

pub use index::{group_posts, Archive, BlogIndexRenderer, MonthGroup, YearGroup};
pub use post::BlogPostRenderer;

/// Page element whose content a renderer replaces
pub trait Container {
    /// Element id on the page
    fn id(&self) -> &str;

    /// Replace the element's markup
    fn replace(&mut self, markup: String);
}

/// Title of the document a container lives in
pub trait DocumentTitle {
    fn set_title(&mut self, title: String);
}

/// Outcome of one render; failures are already shown in the container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// Content was rendered
    Rendered,
    /// Nothing to list
    Empty,
    /// The page was opened without the input it needs
    MissingInput,
    /// Fetching or converting failed
    Failed,
}

/// In-memory page: one container plus the document title
#[derive(Debug, Clone, Default)]
pub struct PageBuffer {
    id: String,
    markup: String,
    title: Option<String>,
}

impl PageBuffer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Container for PageBuffer {
    fn id(&self) -> &str {
        &self.id
    }

    fn replace(&mut self, markup: String) {
        self.markup = markup;
    }
}

impl DocumentTitle for PageBuffer {
    fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }
}
