pub mod rest_countries;
pub mod static_source;

use async_trait::async_trait;
use thiserror::Error;

pub use rest_countries::RestCountriesSource;
pub use static_source::{StaticSource, sample_countries};

/// The only failure the browser surfaces. Its display text is shown verbatim.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status: {status}")]
    Status { status: u16 },

    #[error("{0}")]
    Unavailable(String),
}

/// Supplies the full entity list once per session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatasetSource<T: Send + Sync + 'static>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<T>, FetchError>;
}
