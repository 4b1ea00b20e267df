//! Blog index listing, grouped by year and month

use chrono::{Datelike, NaiveDateTime};
use std::collections::BTreeMap;

use super::{Container, RenderStatus};
use crate::config::SiteConfig;
use crate::content::PostSummary;
use crate::helpers::{html_escape, long_date, reader_url};
use crate::storage::{decode_json, Storage};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Posts of one calendar month, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGroup<'a> {
    /// 1-based month number
    pub month: u32,
    pub name: &'static str,
    pub posts: Vec<&'a PostSummary>,
}

/// Months of one year, December first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub months: Vec<MonthGroup<'a>>,
}

/// The whole index, newest year first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Archive<'a> {
    pub years: Vec<YearGroup<'a>>,
    /// Posts whose date could not be parsed, in index order
    pub undated: Vec<&'a PostSummary>,
}

/// Sort posts newest first and group them by year and month.
///
/// Posts are ordered by full timestamp. Sorting is stable, so posts sharing
/// a timestamp keep their index order. A missing or unparsable date counts
/// as the oldest possible date, which places the post in `undated` after
/// every year.
pub fn group_posts(posts: &[PostSummary]) -> Archive<'_> {
    let mut dated: Vec<(&PostSummary, Option<NaiveDateTime>)> =
        posts.iter().map(|p| (p, p.published())).collect();
    dated.sort_by(|a, b| b.1.cmp(&a.1));

    let mut by_year: BTreeMap<i32, BTreeMap<u32, Vec<(&PostSummary, NaiveDateTime)>>> =
        BTreeMap::new();
    let mut undated = Vec::new();

    for (post, date) in dated {
        match date {
            Some(date) => by_year
                .entry(date.year())
                .or_default()
                .entry(date.month())
                .or_default()
                .push((post, date)),
            None => undated.push(post),
        }
    }

    let years = by_year
        .into_iter()
        .rev()
        .map(|(year, months)| YearGroup {
            year,
            months: months
                .into_iter()
                .rev()
                .map(|(month, mut entries)| {
                    // Redundant with the global sort above
                    entries.sort_by(|a, b| b.1.cmp(&a.1));
                    MonthGroup {
                        month,
                        name: MONTH_NAMES[(month - 1) as usize],
                        posts: entries.into_iter().map(|(post, _)| post).collect(),
                    }
                })
                .collect(),
        })
        .collect();

    Archive { years, undated }
}

/// Renders the full post listing into the index container
pub struct BlogIndexRenderer<S, C> {
    storage: S,
    container: C,
    config: SiteConfig,
}

impl<S, C> BlogIndexRenderer<S, C>
where
    S: Storage,
    C: Container,
{
    pub fn new(storage: S, container: C, config: SiteConfig) -> Self {
        Self {
            storage,
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

    /// Fetch the index and render it. Failures are shown, not returned.
    pub async fn render(&mut self) -> RenderStatus {
        let path = self.config.index_path();

        let posts = match self.storage.fetch_text(&path).await {
            Ok(text) => decode_json::<Vec<PostSummary>>(&path, &text),
            Err(e) => Err(e),
        };

        let posts = match posts {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Error loading blogs: {}", e);
                self.container.replace(
                    "<p class=\"error\">Failed to load blog posts. Please try again later.</p>"
                        .to_string(),
                );
                return RenderStatus::Failed;
            }
        };

        if posts.is_empty() {
            self.container
                .replace("<p class=\"error\">No blog posts found.</p>".to_string());
            return RenderStatus::Empty;
        }

        let archive = group_posts(&posts);
        tracing::debug!(
            "Rendering {} posts in {} years into #{}",
            posts.len(),
            archive.years.len(),
            self.container.id()
        );

        let markup = self.archive_markup(&archive);
        self.container.replace(markup);
        RenderStatus::Rendered
    }

    fn archive_markup(&self, archive: &Archive<'_>) -> String {
        let mut html = String::new();

        for year in &archive.years {
            html.push_str("<div class=\"blog-year-group\">\n");
            html.push_str(&format!("<h2>{}</h2>\n", year.year));

            for month in &year.months {
                html.push_str("<div class=\"blog-month-group\">\n");
                html.push_str(&format!("<h3>{}</h3>\n", month.name));
                for post in &month.posts {
                    html.push_str(&self.item_markup(post));
                }
                html.push_str("</div>\n");
            }

            html.push_str("</div>\n");
        }

        if !archive.undated.is_empty() {
            html.push_str("<div class=\"blog-year-group\">\n<h2>Undated</h2>\n");
            html.push_str("<div class=\"blog-month-group\">\n");
            for post in &archive.undated {
                html.push_str(&self.item_markup(post));
            }
            html.push_str("</div>\n</div>\n");
        }

        html
    }

    fn item_markup(&self, post: &PostSummary) -> String {
        let date = post
            .published()
            .map(|dt| long_date(&dt.date()))
            .unwrap_or_else(|| post.raw_date().to_string());
        let href = reader_url(&self.config.reader_page, &post.slug);

        format!(
            "<div class=\"blog-item\" onclick=\"window.location.href='{}'\">\n\
             <h4>{}</h4>\n\
             <p class=\"blog-date\">{}</p>\n\
             <p class=\"blog-description\">{}</p>\n\
             </div>\n",
            html_escape(&href),
            html_escape(&post.title),
            html_escape(&date),
            html_escape(&post.description)
        )
    }
}
