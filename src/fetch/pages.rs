// src/fetch/pages.rs

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::schema::StatCategory;

const USER_AGENT: &str = concat!("nflscraper/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where season stat pages come from.
pub trait PageSource {
    fn fetch_page(&self, stat: StatCategory, year: u16) -> Result<String, Error>;
}

/// `{base}years/{year}/{stat}.htm`
pub fn page_url(base: &Url, stat: StatCategory, year: u16) -> Result<Url, Error> {
    Ok(base.join(&format!("years/{}/{}.htm", year, stat))?)
}

/// One blocking GET per page.
pub struct HttpFetcher {
    client: Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, base })
    }
}

impl PageSource for HttpFetcher {
    fn fetch_page(&self, stat: StatCategory, year: u16) -> Result<String, Error> {
        let url = page_url(&self.base, stat, year)?;
        debug!(%url, "fetching page");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| Error::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })
    }
}
