//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::helpers::slug_from_query;
use folio_rs::render::{Container, PageBuffer, RenderStatus};
use folio_rs::typing::TextSink;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Render a personal site's blog pages and home page animation", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the blog reader page
    Post {
        /// Slug of the post to show
        #[arg(short, long, conflicts_with = "query")]
        slug: Option<String>,

        /// Page query string to read the slug from, e.g. "?slug=hello"
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Render the blog index page
    #[command(alias = "blogs")]
    Index,

    /// Play the home page typing animation in the terminal
    Typing {
        /// Stop after this many quotes (runs until interrupted otherwise)
        #[arg(long)]
        cycles: Option<usize>,
    },

    /// Display version information
    Version,
}

/// Rewrites the current terminal line on every frame
struct TerminalSink {
    out: std::io::Stdout,
}

impl TextSink for TerminalSink {
    fn show(&mut self, text: &str) {
        let mut out = self.out.lock();
        // A closed stdout only loses frames
        let _ = write!(out, "\r\x1b[2K{}", text);
        let _ = out.flush();
    }
}

fn print_page(status: RenderStatus, page: &PageBuffer) {
    tracing::debug!("Rendered #{} with status {:?}", page.id(), status);
    if let Some(title) = page.title() {
        println!("<title>{}</title>", title);
    }
    print!("{}", page.markup());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Post { slug, query } => {
            let site = folio_rs::Folio::new(&base_dir)?;
            let slug = slug.or_else(|| query.as_deref().and_then(slug_from_query));
            let (status, page) = site.render_post(slug.as_deref()).await;
            print_page(status, &page);
        }

        Commands::Index => {
            let site = folio_rs::Folio::new(&base_dir)?;
            let (status, page) = site.render_index().await;
            print_page(status, &page);
        }

        Commands::Typing { cycles } => {
            let site = folio_rs::Folio::new(&base_dir)?;
            let mut animator = site.typing_animator()?;
            let mut sink = TerminalSink {
                out: std::io::stdout(),
            };
            animator.run(&mut sink, cycles).await;
            println!();
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
