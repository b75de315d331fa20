use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::HttpConfig;
use crate::error::{InspectorError, Result};

#[derive(Debug, Clone)]
pub(crate) struct FetchedPage {
    pub final_url: Url,
    pub body: String,
}

#[derive(Clone)]
pub(crate) struct PageFetcher {
    client: Client,
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher").finish_non_exhaustive()
    }
}

pub(crate) fn parse_target_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let parsed =
        Url::parse(trimmed).map_err(|err| InspectorError::InvalidUrl(format!("{trimmed}: {err}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(InspectorError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme {other}"
        ))),
    }
}

impl PageFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .redirect(Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self { client })
    }

    pub fn fetch_page(&self, url: &str) -> Result<FetchedPage> {
        let target = parse_target_url(url)?;
        let response = self.client.get(target).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(InspectorError::Fetch(format!("{url}: http status {status}")));
        }
        let final_url = response.url().clone();
        let body = response.text()?;
        Ok(FetchedPage { final_url, body })
    }

    pub fn fetch_stylesheet(&self, url: &Url) -> Result<String> {
        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(InspectorError::Fetch(format!("{url}: http status {status}")));
        }
        Ok(response.text()?)
    }
}
