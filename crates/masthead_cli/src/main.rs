//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `masthead_core` linkage and logging bootstrap.
//! - Run a small deterministic scenario through the public catalog API.

use log::error;
use masthead_core::{Catalog, CatalogResult, LogConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match LogConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("invalid logging config: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = masthead_core::init_logging(&config) {
        eprintln!("logging init failed: {err}");
        return ExitCode::FAILURE;
    }

    println!("masthead_core ping={}", masthead_core::ping());
    println!("masthead_core version={}", masthead_core::core_version());

    match run_demo() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=demo_failed module=cli status=error error=\"{err}\"");
            eprintln!("demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_demo() -> CatalogResult<()> {
    let mut catalog = Catalog::new();
    let author = catalog.create_author("Carry Bradshaw")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    catalog.add_article(author, vogue, "How to wear a tuxedo")?;

    if let Err(err) = catalog.create_article(author, vogue, "hi") {
        println!("rejected title: {err}");
    }

    if let Some(view) = catalog.magazine_view(vogue) {
        println!("vogue titles={:?}", view.article_titles().unwrap_or_default());
    }
    if let Some(view) = catalog.author_view(author) {
        println!("topic areas={:?}", view.topic_areas().unwrap_or_default());
    }
    if let Some(top) = catalog.top_publisher() {
        println!("top publisher={}", top.name());
    }
    println!("articles={}", catalog.articles().len());
    Ok(())
}
