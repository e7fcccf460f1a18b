use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::encyclopedia::{EncyclopediaSummary, LookupError, SummaryLookup};

pub const DEFAULT_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";

/// Wikimedia rejects anonymous clients without a descriptive User-Agent.
const USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (daily quote service)"
);

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default)]
    extract: String,
    originalimage: Option<PageImage>,
}

#[derive(Debug, Deserialize)]
struct PageImage {
    source: String,
}

#[derive(Debug, Deserialize)]
struct RestError {
    detail: Option<String>,
    title: Option<String>,
}

/// Wikipedia REST client: one `page/summary` call per lookup, no retries, no cache.
#[derive(Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: Url,
}

impl WikipediaClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid Wikipedia base URL '{base_url}'"))?;
        if base_url.cannot_be_a_base() {
            bail!("Wikipedia base URL '{base_url}' cannot carry a path");
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build Wikipedia HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `{base}/page/summary/{title}` with the title as one encoded path segment.
    fn summary_url(&self, term: &str) -> Url {
        let title = term.replace(' ', "_");
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["page", "summary", title.as_str()]);
        }
        url
    }
}

#[async_trait]
impl SummaryLookup for WikipediaClient {
    async fn lookup(&self, term: &str) -> Result<EncyclopediaSummary, LookupError> {
        let url = self.summary_url(term);
        debug!("Wikipedia summary lookup: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::PageNotFound(term.to_string()));
        }

        if !status.is_success() {
            warn!("Wikipedia API returned {}: {}", status, body);
            let message = serde_json::from_str::<RestError>(&body)
                .ok()
                .and_then(|e| e.detail.or(e.title))
                .unwrap_or(body);
            return Err(LookupError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let summary: PageSummary = serde_json::from_str(&body)?;

        if summary.page_type == "disambiguation" {
            return Err(LookupError::Disambiguation(term.to_string()));
        }

        let image = summary
            .originalimage
            .ok_or_else(|| LookupError::MissingImage(term.to_string()))?;

        Ok(EncyclopediaSummary {
            extract: summary.extract,
            image_url: image.source,
        })
    }
}
