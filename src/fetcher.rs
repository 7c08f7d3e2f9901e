use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::error::ImportError;

/// Connection timeout applied when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; RecipeImportBot/1.0)";

/// A fetched document body together with the URL it came from. Lives only
/// for the duration of one extraction call.
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: Url,
    pub body: String,
}

/// Fetches recipe pages over HTTP with a bounded connection timeout.
///
/// Makes a single attempt per URL; retrying a failed import is the
/// caller's decision.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(connect_timeout: Option<Duration>, user_agent: Option<&str>) -> Self {
        let connect_timeout = connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT);
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Validate the URL and fetch its body as text.
    ///
    /// Only `http` and `https` URLs are fetched; any other scheme fails
    /// with [`ImportError::InvalidProtocol`] before a connection is opened.
    /// A network error, timeout, or non-2xx status fails with
    /// [`ImportError::FetchFailure`].
    pub async fn fetch(&self, url: &str) -> Result<RawPage, ImportError> {
        let parsed = Url::parse(url)?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ImportError::InvalidProtocol(other.to_string())),
        }

        debug!("Fetching {}", parsed);
        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        Ok(RawPage { url: parsed, body })
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new(None, None)
    }
}
