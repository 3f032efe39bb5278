//! reqwest-backed fetcher

use super::traits::Fetcher;
use crate::config::HttpConfig;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, warn};

/// Fetcher performing plain HTTP GET requests
///
/// Every HTTP-level failure (connect error, timeout, non-2xx status, unreadable
/// or empty body) is normalized to `Ok(None)`, so batches built on this
/// fetcher never abort because of the network.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the HTTP settings
    ///
    /// # Errors
    /// Returns [`Error::Network`](crate::Error::Network) if the HTTP client
    /// cannot be created, e.g. for a user agent that is not a valid header value
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>> {
        debug!(url, "Fetching");

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url, error = %e, timeout = e.is_timeout(), "Request failed");
                return Ok(None);
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "Non-success HTTP status");
            return Ok(None);
        }

        match response.bytes().await {
            Ok(bytes) if bytes.is_empty() => {
                debug!(url, "Empty response body");
                Ok(None)
            }
            Ok(bytes) => Ok(Some(bytes.to_vec())),
            Err(e) => {
                warn!(url, error = %e, "Failed to read response body");
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_get(path_str: &str, template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(path_str))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn success_returns_body_bytes() {
        let server = mock_get("/doc", ResponseTemplate::new(200).set_body_string("hello")).await;

        let body = fetcher()
            .fetch(&format!("{}/doc", server.uri()))
            .await
            .unwrap();

        assert_eq!(body.as_deref(), Some(b"hello".as_slice()));
    }

    #[tokio::test]
    async fn non_success_status_is_absent() {
        let server = mock_get("/gone", ResponseTemplate::new(404).set_body_string("nope")).await;

        let body = fetcher()
            .fetch(&format!("{}/gone", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn server_error_is_absent() {
        let server = mock_get("/boom", ResponseTemplate::new(500)).await;

        let body = fetcher()
            .fetch(&format!("{}/boom", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn empty_body_is_absent() {
        let server = mock_get("/empty", ResponseTemplate::new(200)).await;

        let body = fetcher()
            .fetch(&format!("{}/empty", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn timeout_is_absent() {
        let server = mock_get(
            "/slow",
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(Duration::from_secs(5)),
        )
        .await;
        let config = HttpConfig {
            timeout: Duration::from_millis(100),
            ..Default::default()
        };

        let body = HttpFetcher::new(&config)
            .unwrap()
            .fetch(&format!("{}/slow", server.uri()))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn connection_refused_is_absent() {
        // Bind and drop to obtain a port with nothing listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let body = fetcher()
            .fetch(&format!("http://127.0.0.1:{port}/nothing"))
            .await
            .unwrap();

        assert_eq!(body, None);
    }

    #[tokio::test]
    async fn sends_configured_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ua"))
            .and(wiremock::matchers::header("user-agent", "test-agent/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;
        let config = HttpConfig {
            user_agent: "test-agent/1".to_string(),
            ..Default::default()
        };

        let body = HttpFetcher::new(&config)
            .unwrap()
            .fetch(&format!("{}/ua", server.uri()))
            .await
            .unwrap();

        assert_eq!(body.as_deref(), Some(b"ok".as_slice()));
    }

    #[test]
    fn invalid_user_agent_is_a_network_error() {
        let config = HttpConfig {
            user_agent: "gazette\nagent".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            HttpFetcher::new(&config),
            Err(crate::Error::Network(_))
        ));
    }
}
