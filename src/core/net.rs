// src/core/net.rs

// Blocking HTTP GET of one listing page.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::error::Result;

/// Anything that can hand back the raw HTML of a 1-based listing page.
pub trait PageSource {
    fn fetch_page(&self, page: u32) -> Result<String>;
}

pub struct Fetcher {
    client: Client,
    base_url: String,
    page_param: String,
}

impl Fetcher {
    /// Build the client once from `opts`. No timeout is set; the transport default applies.
    pub fn new(opts: &FetchOptions) -> Result<Self> {
        let client = Client::builder()
            .danger_accept_invalid_certs(opts.accept_invalid_certs)
            .user_agent(opts.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: opts.base_url.clone(),
            page_param: opts.page_param.clone(),
        })
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}?{}={}", self.base_url, self.page_param, page)
    }
}

impl PageSource for Fetcher {
    /// Non-2xx statuses become errors; nothing is retried.
    fn fetch_page(&self, page: u32) -> Result<String> {
        logd!("GET {}", self.page_url(page));
        let body = self
            .client
            .get(&self.base_url)
            .query(&[(self.page_param.as_str(), page)])
            .send()?
            .error_for_status()?
            .text()?;
        Ok(body)
    }
}
