use async_trait::async_trait;
use reqwest::{Client, Request};

use super::{DatasetSource, FetchError};
use crate::config::BrowserConfig;
use crate::domain::Country;

/// Fetches every country from the REST Countries `all` endpoint.
#[derive(Clone)]
pub struct RestCountriesSource {
    client: Client,
    endpoint: String,
    fields: String,
}

impl RestCountriesSource {
    pub fn new(config: &BrowserConfig) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self {
            client,
            endpoint: config.all_endpoint(),
            fields: config.fields.join(","),
        })
    }

    /// The request `fetch` sends, without sending it.
    pub fn build_request(&self) -> Result<Request, FetchError> {
        let mut builder = self.client.get(&self.endpoint);
        if !self.fields.is_empty() {
            builder = builder.query(&[("fields", self.fields.as_str())]);
        }
        Ok(builder.build()?)
    }
}

#[async_trait]
impl DatasetSource<Country> for RestCountriesSource {
    async fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        let request = self.build_request()?;
        tracing::info!(url = %request.url(), "fetching countries");

        let response = self.client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "country fetch rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let countries: Vec<Country> = response.json().await?;
        tracing::info!(count = countries.len(), "countries loaded");
        Ok(countries)
    }
}
