//! Core domain logic for Masthead.
//! This crate is the single source of truth for the author/magazine/article
//! relationship rules.

pub mod logging;
pub mod model;
pub mod query;
pub mod repo;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::article::Article;
pub use model::author::Author;
pub use model::id::{ArticleId, AuthorId, MagazineId};
pub use model::magazine::Magazine;
pub use model::validation::ValidationError;
pub use query::{AuthorView, MagazineView};
pub use repo::catalog::{Catalog, CatalogError, CatalogResult, CatalogSnapshot};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
