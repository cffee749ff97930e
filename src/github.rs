use crate::error::{FavoriteError, Result};
use crate::headers::Headers;
use crate::types::StarredRepo;
use reqwest::{Client, Method, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const API_BASE_URL: &str = "https://api.github.com";
const RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Builds a client against a non-default API host (tests, the
    /// `--api-url` flag).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("gh-random-favorite/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;
        let base_url = Url::parse(base_url)?;

        Ok(GitHubClient { client, base_url })
    }

    /// Sends one request and applies the rate-limit guard: only a 200
    /// response with remaining quota counts as success. Zero remaining
    /// quota reads as exhaustion; every other non-200 outcome collapses
    /// into the same error path. No retries.
    async fn request(&self, method: Method, url: Url) -> Result<Response> {
        debug!("{} {}", method, url);
        let response = self
            .client
            .request(method, url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let rate_limit_remaining = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        if rate_limit_remaining == Some(0) {
            return Err(FavoriteError::RateLimited);
        }
        match response.status() {
            StatusCode::OK => Ok(response),
            status => Err(FavoriteError::UnexpectedStatus(status)),
        }
    }

    /// HEAD request for the starred collection; settles once the headers
    /// arrive, no body is transferred.
    pub async fn head_starred(&self, user: &str) -> Result<Headers> {
        let url = self.starred_url(user, None)?;
        let response = self.request(Method::HEAD, url).await?;
        Ok(Headers::from_header_map(response.headers()))
    }

    /// Fetches one page of starred repositories.
    pub async fn fetch_starred_page(&self, user: &str, page: u32) -> Result<Vec<StarredRepo>> {
        let url = self.starred_url(user, Some(page))?;
        let response = self.request(Method::GET, url).await?;
        let body = response.text().await?;
        let repos: Vec<StarredRepo> = serde_json::from_str(&body)?;
        Ok(repos)
    }

    fn starred_url(&self, user: &str, page: Option<u32>) -> Result<Url> {
        let mut url = self.base_url.join(&format!("users/{}/starred", user))?;
        if let Some(page) = page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }
}
