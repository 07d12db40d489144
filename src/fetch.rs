use anyhow::Result;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::http::Client;

/// The endpoint every run contacts.
pub const ENDPOINT: &str = "https://www.example.com/api/";

pub struct Fetcher {
    url: Url,
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        Self::with_url(Url::parse(ENDPOINT)?)
    }

    /// Build a fetcher against an arbitrary URL. `main` always uses
    /// [`ENDPOINT`]; tests point this at a local server.
    pub fn with_url(url: Url) -> Result<Self> {
        Ok(Self {
            url,
            client: Client::new()?,
        })
    }

    /// Send the GET request and return the decoded body.
    pub fn fetch(&self) -> Result<Value> {
        debug!("GET {}", self.url);
        let response = self.client.get(self.url.as_str())?;
        debug!("{} returned {}", self.url, response.status);
        Ok(response.data)
    }

    /// Fetch and print the decoded body to stdout.
    pub fn run(&self) -> Result<()> {
        let value = self.fetch()?;
        println!("{}", value);
        Ok(())
    }
}
