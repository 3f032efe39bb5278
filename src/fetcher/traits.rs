//! The fetch capability consumed by the scraper

use async_trait::async_trait;

/// Retrieves raw documents by URL
///
/// `Ok(None)` is the absence marker: non-2xx responses, timeouts and empty
/// bodies are ordinary outcomes and must be reported that way. `Err` is
/// reserved for failures the implementation could not classify; inside a
/// batch it aborts the whole batch.
///
/// # Examples
///
/// ```no_run
/// use gazette_dl::fetcher::{Fetcher, HttpFetcher};
/// use gazette_dl::config::HttpConfig;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let fetcher = HttpFetcher::new(&HttpConfig::default())?;
/// match fetcher.fetch("http://ioes.dio.es.gov.br/").await? {
///     Some(bytes) => println!("{} bytes", bytes.len()),
///     None => println!("nothing there"),
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch one URL
    ///
    /// # Errors
    ///
    /// Only for failures that are not a plain "no content" outcome.
    async fn fetch(&self, url: &str) -> crate::Result<Option<Vec<u8>>>;

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
