//! Scrape orchestration
//!
//! Sequences the portal round trips for one date: list the editions, fetch and
//! flatten each edition's summary, then resolve every publication body in a
//! single bounded batch.

use crate::config::Config;
use crate::editions::parse_editions;
use crate::error::{Error, Result};
use crate::fetcher::{Fetcher, HttpFetcher};
use crate::outline::{flatten, parse_outline};
use crate::resolver::BodyResolver;
use crate::types::{Edition, EditionPublications, PublicationRecord, PublicationSummary};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for one gazette portal
///
/// # Example
///
/// ```no_run
/// use gazette_dl::{Config, GazetteClient};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GazetteClient::new(Config::default())?;
/// let date = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
///
/// for edition in client.scrape(date).await? {
///     println!("{} ({} publications)", edition.edition.number, edition.publications.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct GazetteClient {
    config: Config,
    fetcher: Arc<dyn Fetcher>,
    resolver: BodyResolver,
}

impl GazetteClient {
    /// Create a client fetching over HTTP
    ///
    /// # Errors
    /// Returns error if the configuration is invalid or the HTTP client cannot
    /// be created
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&config.http)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Create a client using a custom fetcher
    ///
    /// # Errors
    /// Returns error if the configuration is invalid
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetcher>) -> Result<Self> {
        config.validate()?;
        let resolver = BodyResolver::new(
            Arc::clone(&fetcher),
            config.endpoints.clone(),
            &config.fetch,
        );
        debug!(
            fetcher = fetcher.name(),
            max_concurrent = resolver.max_concurrent(),
            "Gazette client ready"
        );
        Ok(Self {
            config,
            fetcher,
            resolver,
        })
    }

    /// Editions published on `date`
    ///
    /// # Errors
    /// Returns [`Error::Unavailable`] if the listing could not be fetched, or a
    /// serialization error if it is not a valid listing
    pub async fn list_editions(&self, date: NaiveDate) -> Result<Vec<Edition>> {
        let url = self.config.endpoints.editions_url_for(date);
        let raw = self.fetch_required(&url).await?;
        let editions = parse_editions(&raw, date)?;
        info!(%date, editions = editions.len(), "Listed editions");
        Ok(editions)
    }

    /// Publications listed in `edition`'s table of contents
    ///
    /// # Errors
    /// Returns [`Error::Unavailable`] if the summary could not be fetched, or
    /// [`Error::MalformedTree`] if its outline is invalid
    pub async fn summary(&self, edition: &Edition) -> Result<Vec<PublicationSummary>> {
        let url = self.config.endpoints.summary_url_for(edition.id.as_str());
        let raw = self.fetch_required(&url).await?;
        let outline = parse_outline(&String::from_utf8_lossy(&raw))?;
        let summaries = flatten(&outline)?;
        info!(
            edition = %edition.id,
            number = %edition.number,
            publications = summaries.len(),
            "Flattened edition summary"
        );
        Ok(summaries)
    }

    /// Resolve the bodies of `summaries`, keeping their order
    ///
    /// # Errors
    /// Fails only if the fetcher raises instead of reporting absent content
    pub async fn publications(
        &self,
        summaries: Vec<PublicationSummary>,
    ) -> Result<Vec<PublicationRecord>> {
        self.resolver.resolve(summaries).await
    }

    /// Every edition of `date` with all of its publications and their bodies
    ///
    /// Bodies for all editions are resolved as one batch, so the concurrency
    /// cap applies across editions.
    ///
    /// # Errors
    /// Propagates any error from [`list_editions`](Self::list_editions),
    /// [`summary`](Self::summary) or [`publications`](Self::publications)
    pub async fn scrape(&self, date: NaiveDate) -> Result<Vec<EditionPublications>> {
        let editions = self.list_editions(date).await?;

        let mut per_edition = Vec::with_capacity(editions.len());
        let mut all_summaries = Vec::new();
        for edition in &editions {
            let summaries = self.summary(edition).await?;
            per_edition.push(summaries.len());
            all_summaries.extend(summaries);
        }

        let mut records = self.publications(all_summaries).await?.into_iter();
        let result: Vec<EditionPublications> = editions
            .into_iter()
            .zip(per_edition)
            .map(|(edition, count)| EditionPublications {
                edition,
                publications: records.by_ref().take(count).collect(),
            })
            .collect();

        info!(
            %date,
            editions = result.len(),
            publications = result.iter().map(|e| e.publications.len()).sum::<usize>(),
            "Scrape complete"
        );
        Ok(result)
    }

    async fn fetch_required(&self, url: &str) -> Result<Vec<u8>> {
        self.fetcher
            .fetch(url)
            .await?
            .ok_or_else(|| Error::Unavailable {
                url: url.to_string(),
            })
    }
}
