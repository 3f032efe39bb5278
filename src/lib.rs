//! # gazette-dl
//!
//! Scraper for a government gazette portal's daily editions.
//!
//! For a given date it lists the published editions, expands each edition's
//! nested table of contents into a flat list of publications annotated with
//! their section path, and fetches the plain-text body of every publication
//! with a bounded number of concurrent requests.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gazette_dl::{Config, GazetteClient};
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GazetteClient::new(Config::default())?;
//!     let date = NaiveDate::from_ymd_opt(2024, 5, 14).ok_or("bad date")?;
//!
//!     for edition in client.scrape(date).await? {
//!         for publication in &edition.publications {
//!             println!(
//!                 "{} > {}: {}",
//!                 publication.summary.summary_stack.join(" > "),
//!                 publication.summary.title,
//!                 publication.body.text().map_or(0, str::len),
//!             );
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Scrape orchestration
pub mod client;
/// Configuration types
pub mod config;
/// Editions listing decoding
pub mod editions;
/// Error types
pub mod error;
/// Fetch capability and bounded batch fetching
pub mod fetcher;
/// Outline tree, flattening and HTML adapter
pub mod outline;
/// Publication body resolution
pub mod resolver;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use client::GazetteClient;
pub use config::Config;
pub use error::{Error, Result};
pub use fetcher::{Fetcher, HttpFetcher};
pub use outline::{SectionNode, flatten};
pub use resolver::BodyResolver;
pub use types::{
    Body, Edition, EditionId, EditionPublications, PublicationRecord, PublicationSummary,
};
