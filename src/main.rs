//! Command-line reports over a sample magazine catalog.
//!
//! # Usage
//!
//! ```bash
//! # Print every author and magazine report
//! cargo run -- demo
//!
//! # Report for one author, as JSON
//! cargo run -- author "Ada Lovelace" --json
//!
//! # Report for one magazine
//! cargo run -- magazine Vogue
//!
//! # Magazine with the most articles
//! cargo run -- top
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` (optional): log filter, default `info`
//! - `LOG_FORMAT` (optional): `text` or `json`, default `text`

use magazine_registry::config;
use magazine_registry::report::{self, AuthorReport, MagazineReport};
use magazine_registry::seed::sample_catalog;
use magazine_registry::telemetry;
use magazine_registry::{AppError, Catalog};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde::Serialize;
use serde_json::json;

/// Reports over a sample catalog of authors, magazines and articles.
#[derive(Parser)]
#[command(name = "magazine-registry")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print reports for every author and magazine
    Demo,

    /// Print the report for one author
    Author {
        /// Author name
        name: String,
    },

    /// Print the report for one magazine
    Magazine {
        /// Magazine name
        name: String,
    },

    /// Print the magazine with the most articles
    Top,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env().context("Failed to load configuration")?;
    telemetry::init(&config)?;
    config.print_summary();

    let cli = Cli::parse();
    let catalog = sample_catalog().context("Failed to seed sample catalog")?;
    tracing::info!("Sample catalog ready");

    let outcome = match cli.command {
        Commands::Demo => handle_demo(&catalog, cli.json),
        Commands::Author { name } => handle_author(&catalog, &name, cli.json),
        Commands::Magazine { name } => handle_magazine(&catalog, &name, cli.json),
        Commands::Top => handle_top(&catalog, cli.json),
    };

    if let Err(e) = outcome {
        if cli.json {
            print_json(&json!({ "error": e.to_info() }))?;
        } else {
            eprintln!("{} {}", "✗".red().bold(), e.to_string().red());
        }
        std::process::exit(1);
    }

    Ok(())
}

fn handle_demo(catalog: &Catalog, as_json: bool) -> Result<(), AppError> {
    let report = report::catalog_report(catalog)?;

    if as_json {
        return print_json(&report);
    }

    println!("{}", "Authors".bold().underline());
    for author in &report.authors {
        print_author(author);
    }

    println!("{}", "Magazines".bold().underline());
    for magazine in &report.magazines {
        print_magazine(magazine);
    }

    print_top(report.top_publisher.as_deref());
    Ok(())
}

fn handle_author(catalog: &Catalog, name: &str, as_json: bool) -> Result<(), AppError> {
    let author = catalog
        .authors
        .find_author(name)?
        .ok_or_else(|| AppError::not_found("Author not found", json!({ "name": name })))?;
    let report = report::author_report(catalog, author.id)?;

    if as_json {
        return print_json(&report);
    }
    print_author(&report);
    Ok(())
}

fn handle_magazine(catalog: &Catalog, name: &str, as_json: bool) -> Result<(), AppError> {
    let magazine = catalog
        .magazines
        .find_magazine(name)?
        .ok_or_else(|| AppError::not_found("Magazine not found", json!({ "name": name })))?;
    let report = report::magazine_report(catalog, magazine.id)?;

    if as_json {
        return print_json(&report);
    }
    print_magazine(&report);
    Ok(())
}

fn handle_top(catalog: &Catalog, as_json: bool) -> Result<(), AppError> {
    let top = catalog.magazines.top_publisher()?;

    if as_json {
        return print_json(&json!({ "top_publisher": top }));
    }
    print_top(top.as_ref().map(|m| m.name()));
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|e| {
        AppError::internal("Failed to render JSON", json!({ "reason": e.to_string() }))
    })?;
    println!("{rendered}");
    Ok(())
}

fn print_author(report: &AuthorReport) {
    println!("\n  {} {}", "●".green(), report.name.bold());
    println!("    {} {}", "Articles:".dimmed(), report.articles.len());
    for title in &report.articles {
        println!("      - {title}");
    }
    println!("    {} {}", "Magazines:".dimmed(), list_or_none(&report.magazines));
    println!("    {} {}", "Topics:".dimmed(), list_or_none(&report.topic_areas));
    println!();
}

fn print_magazine(report: &MagazineReport) {
    println!(
        "\n  {} {} {}",
        "●".cyan(),
        report.name.bold(),
        format!("({})", report.category).dimmed()
    );
    match &report.article_titles {
        Some(titles) => {
            println!("    {} {}", "Articles:".dimmed(), titles.len());
            for title in titles {
                println!("      - {title}");
            }
        }
        None => println!("    {} {}", "Articles:".dimmed(), "none".yellow()),
    }
    println!(
        "    {} {}",
        "Contributors:".dimmed(),
        list_or_none(&report.contributors)
    );
    println!(
        "    {} {}",
        "Contributing authors:".dimmed(),
        list_or_none(&report.contributing_authors)
    );
    println!();
}

fn print_top(name: Option<&str>) {
    match name {
        Some(name) => println!("{} {}", "Top publisher:".bold(), name.green().bold()),
        None => println!("{} {}", "Top publisher:".bold(), "none".yellow()),
    }
}

fn list_or_none(items: &Option<Vec<String>>) -> ColoredString {
    match items {
        Some(items) => items.join(", ").normal(),
        None => "none".yellow(),
    }
}
