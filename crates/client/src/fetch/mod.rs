//! HTTP page retrieval.
//!
//! ### Request Identity
//! - Every request carries one browser header profile picked at random from
//!   a [`HeaderRotation`]. No fixed user agent is set on the client.
//!
//! ### Limits
//! - Timeout: 5s (configurable)
//! - Max redirects: 10
//! - Max body bytes: 5MB (configurable)
//!
//! Any non-2xx status is a failure; there are no retries.

pub mod headers;
pub mod url;

use bytes::Bytes;
use reqwest::{Client, StatusCode, Url, header};
use std::time::{Duration, Instant};

pub use headers::{BROWSER_PROFILES, HeaderProfile, HeaderRotation};
pub use self::url::canonicalize;

use tagbot_core::{AppConfig, Error, NetworkErrorKind};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Whole-request timeout (default: 5s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self { max_bytes: config.max_bytes, timeout: config.timeout(), max_redirects: config.max_redirects }
    }
}

/// A successfully retrieved page.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL requested, after canonicalization
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    pub status: StatusCode,
    pub content_type: Option<String>,
    /// Raw body bytes, charset not yet decoded
    pub bytes: Bytes,
    /// Name of the header profile the request went out with
    pub profile: Option<&'static str>,
    pub fetch_ms: u64,
}

/// HTTP fetch client with rotating request headers.
pub struct FetchClient {
    http: Client,
    config: FetchConfig,
    rotation: HeaderRotation,
}

impl FetchClient {
    /// Create a client using the built-in browser header pool.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        Self::with_rotation(config, HeaderRotation::browsers())
    }

    pub fn with_rotation(config: FetchConfig, rotation: HeaderRotation) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::Network {
                kind: NetworkErrorKind::Request,
                message: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { http, config, rotation })
    }

    /// GET a page and return its raw bytes.
    ///
    /// # Errors
    ///
    /// Timeouts, transport failures, non-2xx statuses and oversized bodies
    /// all come back as [`Error`] values in the fetch-failed category.
    pub async fn fetch(&self, url_str: &str) -> Result<FetchResponse, Error> {
        let start = Instant::now();
        let url = canonicalize(url_str)?;

        let mut request = self.http.get(url.clone());
        let profile = self.rotation.pick();
        if let Some(profile) = profile {
            request = request.headers(profile.header_map());
        }
        let profile = profile.map(|p| p.name);

        let response = request.send().await.map_err(classify)?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "non-success status");
            return Err(Error::HttpStatus { code: status.as_u16() });
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await.map_err(classify)?;

        if bytes.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", bytes.len(), self.config.max_bytes)));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            url = %url,
            final_url = %final_url,
            profile = profile.unwrap_or("none"),
            bytes = bytes.len(),
            fetch_ms,
            "fetched page"
        );

        Ok(FetchResponse { url, final_url, status, content_type, bytes, profile, fetch_ms })
    }
}

fn classify(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        return Error::FetchTimeout(err.to_string());
    }
    let kind = if err.is_connect() {
        NetworkErrorKind::Connect
    } else if err.is_redirect() {
        NetworkErrorKind::Redirect
    } else if err.is_body() || err.is_decode() {
        NetworkErrorKind::Body
    } else {
        NetworkErrorKind::Request
    };
    Error::Network { kind, message: err.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header as header_is, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PAGE: &str = "<html><head><title>Hello</title></head><body>World</body></html>";

    fn fixed_profile() -> HeaderRotation {
        HeaderRotation::new(vec![HeaderProfile { name: "fixed", headers: &[("user-agent", "tagbot-test/1.0")] }])
    }

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.max_bytes, 5 * 1024 * 1024);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_fetch_config_from_app_config() {
        let app = AppConfig { timeout_ms: 1500, max_bytes: 2048, max_redirects: 3 };
        let config = FetchConfig::from(&app);
        assert_eq!(config.timeout, Duration::from_millis(1500));
        assert_eq!(config.max_bytes, 2048);
        assert_eq!(config.max_redirects, 3);
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(PAGE, "text/html"))
            .mount(&server)
            .await;

        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let response = client.fetch(&format!("{}/page", server.uri())).await.unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.bytes.as_ref(), PAGE.as_bytes());
        assert_eq!(response.content_type.as_deref(), Some("text/html"));
        assert!(response.profile.is_some());
    }

    #[tokio::test]
    async fn test_fetch_sends_a_pool_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200).set_body_string(PAGE)).mount(&server).await;

        let client = FetchClient::new(FetchConfig::default()).unwrap();
        for _ in 0..3 {
            client.fetch(&server.uri()).await.unwrap();
        }

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 3);
        for request in requests {
            let agent = request.headers.get("user-agent").unwrap().to_str().unwrap().to_string();
            assert!(BROWSER_PROFILES.iter().any(|p| p.user_agent() == Some(agent.as_str())), "unexpected agent {agent}");
        }
    }

    #[tokio::test]
    async fn test_fetch_applies_picked_profile() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_is("user-agent", "tagbot-test/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let client = FetchClient::with_rotation(FetchConfig::default(), fixed_profile()).unwrap();
        let response = client.fetch(&server.uri()).await.unwrap();
        assert_eq!(response.profile, Some("fixed"));
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(404)).mount(&server).await;

        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let err = client.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { code: 404 }));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(503)).mount(&server).await;

        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let err = client.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus { code: 503 }));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = FetchConfig { timeout: Duration::from_millis(200), ..FetchConfig::default() };
        let client = FetchClient::new(config).unwrap();
        let err = client.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::FetchTimeout(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_too_large() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x".repeat(256)))
            .mount(&server)
            .await;

        let config = FetchConfig { max_bytes: 64, ..FetchConfig::default() };
        let client = FetchClient::new(config).unwrap();
        let err = client.fetch(&server.uri()).await.unwrap_err();
        assert!(matches!(err, Error::FetchTooLarge(_)));
    }

    #[tokio::test]
    async fn test_fetch_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri()).as_str()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let response = client.fetch(&format!("{}/old", server.uri())).await.unwrap();
        assert_eq!(response.final_url.path(), "/new");
        assert_eq!(response.url.path(), "/old");
    }

    #[tokio::test]
    async fn test_fetch_redirect_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", format!("{}/loop", server.uri()).as_str()))
            .mount(&server)
            .await;

        let config = FetchConfig { max_redirects: 2, ..FetchConfig::default() };
        let client = FetchClient::new(config).unwrap();
        let err = client.fetch(&format!("{}/loop", server.uri())).await.unwrap_err();
        assert!(matches!(err, Error::Network { kind: NetworkErrorKind::Redirect, .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let client = FetchClient::new(FetchConfig::default()).unwrap();
        let err = client.fetch("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
