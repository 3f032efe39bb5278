//! Configuration types for gazette-dl

use crate::error::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::sync::Semaphore;

/// Placeholder substituted with the formatted date in [`EndpointConfig::editions_url`]
pub const DATE_PLACEHOLDER: &str = "{date}";
/// Placeholder substituted with the edition id in [`EndpointConfig::summary_url`]
pub const EDITION_PLACEHOLDER: &str = "{id}";
/// Placeholder substituted with the content identifier in [`EndpointConfig::publication_url`]
pub const CONTENT_PLACEHOLDER: &str = "{identificador}";

/// Remote endpoints of the gazette portal
///
/// Each URL is a template; the placeholder is replaced with a
/// percent-encoded token when a request is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Editions published on a date (must contain `{date}`)
    #[serde(default = "default_editions_url")]
    pub editions_url: String,

    /// Table-of-contents document of one edition (must contain `{id}`)
    #[serde(default = "default_summary_url")]
    pub summary_url: String,

    /// Full body of one publication (must contain `{identificador}`)
    #[serde(default = "default_publication_url")]
    pub publication_url: String,

    /// chrono format string used to render `{date}` (default: "%Y-%m-%d")
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            editions_url: default_editions_url(),
            summary_url: default_summary_url(),
            publication_url: default_publication_url(),
            date_format: default_date_format(),
        }
    }
}

impl EndpointConfig {
    /// URL listing the editions of `date`
    pub fn editions_url_for(&self, date: chrono::NaiveDate) -> String {
        let formatted = date.format(&self.date_format).to_string();
        expand(&self.editions_url, DATE_PLACEHOLDER, &formatted)
    }

    /// URL of the summary document of edition `id`
    pub fn summary_url_for(&self, id: &str) -> String {
        expand(&self.summary_url, EDITION_PLACEHOLDER, id)
    }

    /// URL of the publication body identified by `content_id`
    pub fn publication_url_for(&self, content_id: &str) -> String {
        expand(&self.publication_url, CONTENT_PLACEHOLDER, content_id)
    }
}

/// HTTP client settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout for the HTTP client (default: 30 seconds)
    #[serde(default = "default_http_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

/// Batch fetching behavior
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Maximum publication bodies in flight at once (default: 20)
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Hard limit for a single fetch inside a batch (default: 60 seconds)
    ///
    /// A fetch exceeding it resolves to an unavailable body rather than
    /// holding its slot forever.
    #[serde(default = "default_fetch_timeout", with = "duration_serde")]
    pub fetch_timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
            fetch_timeout: default_fetch_timeout(),
        }
    }
}

/// Main configuration for [`GazetteClient`](crate::GazetteClient)
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Portal endpoints
    #[serde(default)]
    pub endpoints: EndpointConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Concurrency and per-fetch limits
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Load a JSON configuration file, filling unspecified fields with defaults
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails [`Config::validate`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Check that every setting is usable
    ///
    /// # Errors
    /// Returns [`Error::Config`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        validate_template(
            "endpoints.editions_url",
            &self.endpoints.editions_url,
            DATE_PLACEHOLDER,
        )?;
        validate_template(
            "endpoints.summary_url",
            &self.endpoints.summary_url,
            EDITION_PLACEHOLDER,
        )?;
        validate_template(
            "endpoints.publication_url",
            &self.endpoints.publication_url,
            CONTENT_PLACEHOLDER,
        )?;

        let date_format = &self.endpoints.date_format;
        if date_format.trim().is_empty()
            || StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(Error::config(
                "endpoints.date_format",
                format!("invalid date format: {date_format:?}"),
            ));
        }
        if self.fetch.max_concurrent_fetches == 0 {
            return Err(Error::config(
                "fetch.max_concurrent_fetches",
                "at least one concurrent fetch is required",
            ));
        }
        if self.fetch.max_concurrent_fetches > Semaphore::MAX_PERMITS {
            return Err(Error::config(
                "fetch.max_concurrent_fetches",
                format!(
                    "at most {} concurrent fetches are supported",
                    Semaphore::MAX_PERMITS
                ),
            ));
        }
        if self.fetch.fetch_timeout.is_zero() {
            return Err(Error::config(
                "fetch.fetch_timeout",
                "fetch timeout must be greater than zero",
            ));
        }
        if self.http.timeout.is_zero() {
            return Err(Error::config(
                "http.timeout",
                "HTTP timeout must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn validate_template(key: &str, template: &str, placeholder: &str) -> Result<()> {
    if !template.contains(placeholder) {
        return Err(Error::config(
            key,
            format!("URL template must contain {placeholder}: {template}"),
        ));
    }
    let sample = expand(template, placeholder, "0");
    url::Url::parse(&sample)
        .map_err(|e| Error::config(key, format!("invalid URL template {template}: {e}")))?;
    Ok(())
}

fn expand(template: &str, placeholder: &str, value: &str) -> String {
    template.replace(placeholder, &urlencoding::encode(value))
}

fn default_editions_url() -> String {
    "http://ioes.dio.es.gov.br/apifront/portal/edicoes/edicoes_from_data/{date}".to_string()
}

fn default_summary_url() -> String {
    "http://ioes.dio.es.gov.br/portal/visualizacoes/view_html_diario/{id}".to_string()
}

fn default_publication_url() -> String {
    "http://ioes.dio.es.gov.br/apifront/portal/edicoes/publicacoes_ver_conteudo/{identificador}"
        .to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("gazette-dl/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_concurrent_fetches() -> usize {
    20
}

fn default_fetch_timeout() -> Duration {
    Duration::from_secs(60)
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
