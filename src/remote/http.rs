//! Blocking HTTP implementation of [`RemoteHost`]

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use reqwest::header::ACCEPT;

use super::{FetchOutcome, RemoteEntry, RemoteHost};
use crate::config::InstallerConfig;
use crate::error::{self, Result};

/// GitHub rejects API requests without a user agent
const USER_AGENT: &str = concat!("honu-saas-cli/", env!("CARGO_PKG_VERSION"));

const GITHUB_JSON: &str = "application/vnd.github.v3+json";

/// Origins that always receive the token
const GITHUB_ORIGINS: &[&str] = &["https://api.github.com", "https://raw.githubusercontent.com"];

/// Remote host backed by a blocking reqwest client
///
/// No timeout is configured: a hung request blocks the run.
pub struct HttpRemote {
    client: Client,
    token: Option<String>,
    /// Serialized origins the token may be sent to
    token_origins: Vec<String>,
}

impl HttpRemote {
    pub fn new(config: &InstallerConfig) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let token_origins = GITHUB_ORIGINS
            .iter()
            .copied()
            .chain([config.raw_base_url.as_str(), config.api_base_url.as_str()])
            .filter_map(origin_of)
            .collect();

        Ok(Self {
            client,
            token: config.github_token.clone(),
            token_origins,
        })
    }

    /// Listings name arbitrary download URLs, so the token only goes to
    /// the configured repository hosts
    fn token_for(&self, url: &str) -> Option<&str> {
        let token = self.token.as_deref()?;
        let origin = origin_of(url)?;
        self.token_origins.contains(&origin).then_some(token)
    }

    fn get(&self, url: &str, accept: Option<&str>) -> reqwest::Result<Response> {
        let mut request = self.client.get(url);
        if let Some(accept) = accept {
            request = request.header(ACCEPT, accept);
        }
        if let Some(token) = self.token_for(url) {
            request = request.bearer_auth(token);
        }
        request.send()
    }
}

/// `scheme://host:port` of a URL, `None` when it does not parse
fn origin_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .map(|url| url.origin().ascii_serialization())
}

impl RemoteHost for HttpRemote {
    fn fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.get(url, None) {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failed(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return FetchOutcome::NotFound;
        }
        if !status.is_success() {
            return FetchOutcome::Failed(format!("HTTP {status}"));
        }

        match response.bytes() {
            Ok(bytes) => FetchOutcome::Fetched(bytes.to_vec()),
            Err(e) => FetchOutcome::Failed(e.to_string()),
        }
    }

    fn list_dir(&self, url: &str) -> Result<Vec<RemoteEntry>> {
        let response = self
            .get(url, Some(GITHUB_JSON))
            .map_err(|e| error::http::listing_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::http::listing_failed(url, format!("HTTP {status}")));
        }

        response
            .json::<Vec<RemoteEntry>>()
            .map_err(|e| error::http::listing_failed(url, e))
    }
}
