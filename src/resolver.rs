//! Publication body resolution
//!
//! Pairs each [`PublicationSummary`] with the text of its full document,
//! fetching the documents through a shared [`Fetcher`] with a fixed number of
//! concurrent requests.

use crate::config::{EndpointConfig, FetchConfig};
use crate::error::Result;
use crate::fetcher::{Fetcher, fetch_concurrent};
use crate::outline::extract_text;
use crate::types::{Body, PublicationRecord, PublicationSummary};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::info;

/// Resolves publication summaries into records carrying their bodies
///
/// The concurrency limiter is owned by the resolver, so concurrent calls to
/// [`resolve`](Self::resolve) on the same resolver share one cap.
pub struct BodyResolver {
    fetcher: Arc<dyn Fetcher>,
    endpoints: EndpointConfig,
    limiter: Semaphore,
    max_concurrent: usize,
    fetch_timeout: Duration,
}

impl BodyResolver {
    /// Create a resolver fetching through `fetcher`
    pub fn new(fetcher: Arc<dyn Fetcher>, endpoints: EndpointConfig, fetch: &FetchConfig) -> Self {
        Self {
            fetcher,
            endpoints,
            limiter: Semaphore::new(fetch.max_concurrent_fetches),
            max_concurrent: fetch.max_concurrent_fetches,
            fetch_timeout: fetch.fetch_timeout,
        }
    }

    /// Maximum number of fetches this resolver keeps in flight
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Slots not currently held by a fetch
    pub fn available_slots(&self) -> usize {
        self.limiter.available_permits()
    }

    /// Fetch and extract the body of every summary
    ///
    /// `output[i]` always belongs to `summaries[i]`. A document that cannot be
    /// retrieved yields [`Body::Unavailable`] for that record only.
    ///
    /// # Errors
    ///
    /// Fails only if the fetcher raises an error instead of reporting absent
    /// content. Every slot taken by the batch is released before returning.
    pub async fn resolve(
        &self,
        summaries: Vec<PublicationSummary>,
    ) -> Result<Vec<PublicationRecord>> {
        let urls: Vec<String> = summaries
            .iter()
            .map(|summary| self.endpoints.publication_url_for(&summary.content_id))
            .collect();

        let bodies = fetch_concurrent(
            self.fetcher.as_ref(),
            &urls,
            &self.limiter,
            self.fetch_timeout,
        )
        .await?;

        let records: Vec<PublicationRecord> = summaries
            .into_iter()
            .zip(bodies)
            .map(|(summary, raw)| PublicationRecord {
                summary,
                body: match raw {
                    Some(bytes) => Body::Text(extract_text(&String::from_utf8_lossy(&bytes))),
                    None => Body::Unavailable,
                },
            })
            .collect();

        info!(
            publications = records.len(),
            unavailable = records.iter().filter(|r| r.body.is_unavailable()).count(),
            "Resolved publication bodies"
        );
        Ok(records)
    }
}
