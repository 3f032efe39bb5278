//! Document fetching
//!
//! The [`Fetcher`] trait is the boundary between the scraper and the network.
//! [`HttpFetcher`] is the production implementation; tests substitute their
//! own. [`fetch_concurrent`] fans a list of URLs out over any fetcher while
//! holding at most a fixed number of requests in flight.
//!
//! ## Usage
//!
//! ```no_run
//! use gazette_dl::config::HttpConfig;
//! use gazette_dl::fetcher::{HttpFetcher, fetch_concurrent};
//! use std::time::Duration;
//! use tokio::sync::Semaphore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = HttpFetcher::new(&HttpConfig::default())?;
//!     let urls = vec![
//!         "https://example.com/a".to_string(),
//!         "https://example.com/b".to_string(),
//!     ];
//!     let limiter = Semaphore::new(20);
//!
//!     let bodies = fetch_concurrent(&fetcher, &urls, &limiter, Duration::from_secs(60)).await?;
//!     assert_eq!(bodies.len(), urls.len());
//!     Ok(())
//! }
//! ```

mod http;
mod traits;

pub use http::HttpFetcher;
pub use traits::Fetcher;

use crate::error::{Error, Result};
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

/// Fetch every URL, at most `limiter`'s permit count at a time
///
/// Each fetch holds one permit for its whole duration; the permit is dropped
/// on every exit path, including when the batch is abandoned. A fetch taking
/// longer than `fetch_timeout` resolves to `None`. The output is index-aligned
/// with `urls` whatever order the fetches complete in.
///
/// All fetches run cooperatively on the calling task.
///
/// # Errors
///
/// Returns the first error a fetch raises. Fetches still in flight are
/// dropped at that point.
pub async fn fetch_concurrent(
    fetcher: &dyn Fetcher,
    urls: &[String],
    limiter: &Semaphore,
    fetch_timeout: Duration,
) -> Result<Vec<Option<Vec<u8>>>> {
    let mut in_flight: FuturesUnordered<_> = urls
        .iter()
        .enumerate()
        .map(|(seq, url)| async move {
            let _permit = limiter
                .acquire()
                .await
                .map_err(|_| Error::Task("concurrency limiter closed".to_string()))?;

            let outcome = match tokio::time::timeout(fetch_timeout, fetcher.fetch(url)).await {
                Ok(Ok(body)) => body,
                Ok(Err(e)) => {
                    warn!(url = %url, fetcher = fetcher.name(), error = %e, "Fetch raised an error");
                    return Err(e);
                }
                Err(_) => {
                    warn!(
                        url = %url,
                        timeout_ms = fetch_timeout.as_millis(),
                        "Fetch timed out, treating as unavailable"
                    );
                    None
                }
            };
            Ok::<_, Error>((seq, outcome))
        })
        .collect();

    let mut slots: Vec<Option<Vec<u8>>> = vec![None; urls.len()];
    while let Some(result) = in_flight.next().await {
        let (seq, outcome) = result?;
        slots[seq] = outcome;
    }

    debug!(
        total = urls.len(),
        available = slots.iter().filter(|s| s.is_some()).count(),
        "Batch fetch complete"
    );
    Ok(slots)
}
