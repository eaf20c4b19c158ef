//! Baserow REST client
//!
//! This module fetches pages of rows from
//! `GET {server}/api/database/rows/table/{table}/` using a database token.

use super::models::PageResponse;
use super::source::PageSource;
use crate::config::{AuthToken, DumpConfig};
use crate::domain::{DumpError, FetchError, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;

/// HTTP client for one Baserow table
///
/// # Example
///
/// ```no_run
/// use baserow_dump::adapters::baserow::{BaserowClient, PageSource};
/// use baserow_dump::config::load_config;
///
/// # async fn example() -> baserow_dump::domain::Result<()> {
/// let config = load_config("config.txt")?;
/// let client = BaserowClient::new(&config)?;
///
/// let response = client.fetch_page(1, config.page_size).await?;
/// println!("HTTP {}", response.status);
/// # Ok(())
/// # }
/// ```
pub struct BaserowClient {
    /// Fully built list-rows endpoint
    rows_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Database token
    token: AuthToken,
}

impl BaserowClient {
    /// Create a client from configuration
    ///
    /// No timeout is applied unless `request timeout seconds` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &DumpConfig) -> Result<Self> {
        let mut client_builder = ClientBuilder::new().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        if let Some(timeout) = config.request_timeout() {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder
            .build()
            .map_err(|e| DumpError::Other(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            rows_url: config.rows_url(),
            client,
            token: config.auth_token.clone(),
        })
    }

    /// Endpoint this client reads from
    pub fn rows_url(&self) -> &str {
        &self.rows_url
    }
}

#[async_trait]
impl PageSource for BaserowClient {
    async fn fetch_page(&self, page: u64, size: u64) -> Result<PageResponse> {
        tracing::debug!(url = %self.rows_url, page, size, "Requesting page");

        let response = self
            .client
            .get(&self.rows_url)
            .query(&[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("user_field_names", "true".to_string()),
            ])
            .header(AUTHORIZATION, self.token.header_value())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(page, status = status.as_u16(), "Page fetched");
        } else {
            tracing::warn!(page, status = status.as_u16(), "Server returned an error status");
        }

        let text = response.text().await.map_err(transport_error)?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            Err(_) if !status.is_success() => Value::String(text),
            Err(e) => {
                return Err(FetchError::InvalidResponse(format!(
                    "page {page} is not valid JSON: {e}"
                ))
                .into())
            }
        };

        Ok(PageResponse::new(page, status.as_u16(), body))
    }

    fn describe(&self) -> String {
        self.rows_url.clone()
    }
}

fn transport_error(err: reqwest::Error) -> DumpError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string()).into()
    } else {
        FetchError::ConnectionFailed(err.to_string()).into()
    }
}
