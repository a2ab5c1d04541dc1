use std::time::Duration;

use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        ACCEPT,
        USER_AGENT,
    },
    Client,
};

use crate::core::ExplorerError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client shared by all catalog requests. `timeout` bounds each request
/// from connect through reading the body.
pub fn http_client(timeout: Duration) -> Result<Client, ExplorerError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static("product-explorer/0.1 (+reqwest)"));

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
        .map_err(|e| ExplorerError::CatalogUnavailable(format!("HTTP client build failed: {e}")))
}
