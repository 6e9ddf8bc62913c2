use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use pagecite_core::{AppConfig, PageSnapshot, Style, cite_with_config, extract};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "pagecite",
    about = "Cite the page you are looking at",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format (for scripts and editors).
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract metadata from a page and render a citation.
    Cite {
        /// Address of the page the markup was captured from.
        #[arg(long)]
        url: String,

        /// Read markup from this file instead of stdin.
        #[arg(long)]
        file: Option<PathBuf>,

        /// Tab title override; defaults to the markup's <title>.
        #[arg(long)]
        title: Option<String>,

        /// Citation style; defaults to the configured style.
        #[arg(long)]
        style: Option<String>,

        /// Rendering date as YYYY-MM-DD; defaults to today. Fixing it makes
        /// "accessed"/"last visited" output reproducible.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Extract the metadata record only.
    Extract {
        #[arg(long)]
        url: String,

        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List the supported citation styles.
    Styles,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Cite {
            url,
            file,
            title,
            style,
            date,
        } => {
            let doc = load_snapshot(&url, file.as_deref(), title.as_deref())?;
            let style = style.as_deref().map(Style::parse);
            let today = date.unwrap_or_else(|| Local::now().date_naive());

            let result = cite_with_config(&doc, style, &config, today)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.citation);
            }
        }

        Commands::Extract {
            url,
            file,
            title,
            date,
        } => {
            let doc = load_snapshot(&url, file.as_deref(), title.as_deref())?;
            let today = date.unwrap_or_else(|| Local::now().date_naive());

            let metadata = extract(&doc, today);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&metadata)?);
            } else {
                println!("kind:    {:?}", metadata.kind);
                println!("title:   {}", metadata.title);
                println!("authors: {}", metadata.authors);
                println!("date:    {}", metadata.date);
                println!("journal: {}", metadata.journal);
                if let Some(doi) = &metadata.doi {
                    println!("doi:     {doi}");
                }
                if let Some(code) = &metadata.statute_code {
                    println!("statute: {code}");
                }
                println!("url:     {}", metadata.url);
            }
        }

        Commands::Styles => {
            for style in Style::all() {
                println!("{}", style.name());
            }
        }
    }

    Ok(())
}

fn load_snapshot(url: &str, file: Option<&std::path::Path>, title: Option<&str>) -> Result<PageSnapshot> {
    let html = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading markup from stdin")?;
            buf
        }
    };

    let doc = match title {
        Some(title) => PageSnapshot::with_title(url, title, &html)?,
        None => PageSnapshot::new(url, &html)?,
    };
    Ok(doc)
}
