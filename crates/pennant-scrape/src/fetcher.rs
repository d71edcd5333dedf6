//! HTTP page fetcher backed by `reqwest`.

use std::time::Duration;

use pennant_core::{error::FetchError, fetch::PageFetcher};
use reqwest::Client;

use crate::error::{Error, Result};

/// Production [`PageFetcher`] wrapping a shared HTTP client.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based. The
/// request timeout is the only timeout anywhere in the poll path; a hang
/// here stalls the current cycle until the next scheduled firing.
#[derive(Clone)]
pub struct HttpFetcher {
  client: Client,
}

impl HttpFetcher {
  pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(user_agent)
      .build()
      .map_err(|e| Error::Client(e.to_string()))?;
    Ok(Self { client })
  }
}

impl PageFetcher for HttpFetcher {
  async fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
    let response = self.client.get(url).send().await.map_err(|e| {
      FetchError::Network {
        url:     url.to_string(),
        message: e.to_string(),
      }
    })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        url:    url.to_string(),
        status: status.as_u16(),
      });
    }

    let body = response.text().await.map_err(|e| FetchError::Network {
      url:     url.to_string(),
      message: e.to_string(),
    })?;
    if body.is_empty() {
      return Err(FetchError::EmptyBody {
        url: url.to_string(),
      });
    }
    Ok(body)
  }
}
