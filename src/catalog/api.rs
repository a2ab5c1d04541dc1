use std::time::Duration;

use reqwest::{
    Client,
    StatusCode,
};
use serde_json::Value;
use tracing::{
    debug,
    error,
};

use crate::core::{
    http::http_client,
    ExplorerError,
    Product,
    ProductId,
};

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Read-only client for the remote product catalog. Every call goes to the
/// network; nothing is cached and nothing is retried.
#[derive(Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ExplorerError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, ExplorerError> {
        let url = format!("{}/products", self.base_url);

        let result = self.fetch(&url).await.and_then(|(status, body)| {
            if !status.is_success() {
                return Err(ExplorerError::CatalogUnavailable(format!(
                    "HTTP error {} from {}",
                    status, url
                )));
            }
            parse_product_list(&body)
        });

        match &result {
            Ok(products) => debug!("Fetched {} products from {}", products.len(), url),
            Err(e) => error!("Error fetching products: {}", e),
        }
        result
    }

    pub async fn get_product(&self, id: ProductId) -> Result<Product, ExplorerError> {
        let url = format!("{}/products/{}", self.base_url, id);

        let result = self.fetch(&url).await.and_then(|(status, body)| {
            if status == StatusCode::NOT_FOUND {
                return Err(ExplorerError::ProductNotFound(id));
            }
            if !status.is_success() {
                return Err(ExplorerError::CatalogUnavailable(format!(
                    "HTTP error {} from {}",
                    status, url
                )));
            }
            parse_product(id, &body)
        });

        if let Err(e) = &result {
            error!("Error fetching product {}: {}", id, e);
        }
        result
    }

    async fn fetch(&self, url: &str) -> Result<(StatusCode, String), ExplorerError> {
        let response =
            self.client.get(url).send().await.map_err(|e| self.transport_error(url, e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(url, e))?;
        Ok((status, body))
    }

    fn transport_error(&self, url: &str, e: reqwest::Error) -> ExplorerError {
        if e.is_timeout() {
            ExplorerError::CatalogTimeout(self.timeout)
        } else {
            ExplorerError::CatalogUnavailable(format!("Failed HTTP GET {}: {}", url, e))
        }
    }
}

fn parse_product_list(body: &str) -> Result<Vec<Product>, ExplorerError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ExplorerError::CatalogUnavailable(format!("Invalid JSON body: {e}")))?;

    if !value.is_array() {
        return Err(ExplorerError::CatalogUnavailable(
            "Expected a JSON array of products".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| ExplorerError::CatalogUnavailable(format!("Malformed product: {e}")))
}

// The public catalog answers unknown ids with 200 and an empty or `null` body.
fn parse_product(id: ProductId, body: &str) -> Result<Product, ExplorerError> {
    if body.trim().is_empty() {
        return Err(ExplorerError::ProductNotFound(id));
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| ExplorerError::CatalogUnavailable(format!("Invalid JSON body: {e}")))?;

    if value.is_null() {
        return Err(ExplorerError::ProductNotFound(id));
    }

    serde_json::from_value(value)
        .map_err(|e| ExplorerError::CatalogUnavailable(format!("Malformed product: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::test_server::{
            unreachable_base_url,
            Route,
            TestServer,
        },
        core::http::DEFAULT_TIMEOUT,
    };

    const PRODUCTS: &str = r#"[
        {"id":1,"title":"Red Shirt","price":19.99,"category":"clothing","description":"Cotton","image":"https://example.com/1.png","rating":{"rate":4.1,"count":259}},
        {"id":2,"title":"Blue Mug","price":7.5,"category":"kitchen","description":"Ceramic","image":"https://example.com/2.png"}
    ]"#;

    const PRODUCT_ONE: &str = r#"{"id":1,"title":"Red Shirt","price":19.99,"category":"clothing","description":"Cotton","image":"https://example.com/1.png","rating":{"rate":4.1,"count":259}}"#;

    fn client(server: &TestServer) -> CatalogClient {
        CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_list_products() {
        let server = TestServer::start(vec![("/products", Route::ok(PRODUCTS))]);

        let products = client(&server).list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, ProductId(1));
        assert_eq!(products[0].rating.as_ref().map(|r| r.count), Some(259));
        assert_eq!(products[1].title, "Blue Mug");
        assert!(products[1].rating.is_none());
    }

    #[tokio::test]
    async fn test_list_products_with_null_fields() {
        let body = r#"[
            {"id":1,"title":"Red Shirt","price":19.99,"category":"clothing"},
            {"id":2,"title":null,"price":null,"category":"kitchen","description":null,"image":null,"rating":null}
        ]"#;
        let server = TestServer::start(vec![("/products", Route::ok(body))]);

        let products = client(&server).list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].id, ProductId(2));
        assert!(products[1].title.is_empty());
        assert_eq!(products[1].price_label(), "$0.00");
        assert_eq!(products[1].category, "kitchen");
    }

    #[tokio::test]
    async fn test_list_products_empty_catalog() {
        let server = TestServer::start(vec![("/products", Route::ok("[]"))]);
        assert!(client(&server).list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_products_error_status() {
        let server =
            TestServer::start(vec![("/products", Route::status(503, "Service Unavailable"))]);

        let err = client(&server).list_products().await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(ref msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn test_list_products_invalid_json() {
        let server = TestServer::start(vec![("/products", Route::ok("<html>oops</html>"))]);
        let err = client(&server).list_products().await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_list_products_not_an_array() {
        let server = TestServer::start(vec![("/products", Route::ok(PRODUCT_ONE))]);
        let err = client(&server).list_products().await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(ref msg) if msg.contains("array")));
    }

    #[tokio::test]
    async fn test_list_products_timeout() {
        let server = TestServer::start(vec![(
            "/products",
            Route::ok(PRODUCTS).delayed(Duration::from_secs(3)),
        )]);
        let client = CatalogClient::new(&server.base_url(), Duration::from_millis(200)).unwrap();

        let err = client.list_products().await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogTimeout(d) if d == Duration::from_millis(200)));
    }

    #[tokio::test]
    async fn test_list_products_connection_refused() {
        let client = CatalogClient::new(&unreachable_base_url(), Duration::from_secs(2)).unwrap();
        let err = client.list_products().await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_get_product() {
        let server = TestServer::start(vec![("/products/1", Route::ok(PRODUCT_ONE))]);

        let product = client(&server).get_product(ProductId(1)).await.unwrap();
        assert_eq!(product.title, "Red Shirt");
        assert_eq!(product.price_label(), "$19.99");
    }

    #[tokio::test]
    async fn test_get_product_not_found() {
        // The fixture answers 404 for any unregistered path
        let server = TestServer::start(vec![("/products/1", Route::ok(PRODUCT_ONE))]);

        let err = client(&server).get_product(ProductId(999)).await.unwrap_err();
        assert!(matches!(err, ExplorerError::ProductNotFound(ProductId(999))));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_get_product_empty_or_null_body() {
        let server = TestServer::start(vec![
            ("/products/50", Route::ok("")),
            ("/products/51", Route::ok("null")),
        ]);
        let client = client(&server);

        assert!(matches!(
            client.get_product(ProductId(50)).await,
            Err(ExplorerError::ProductNotFound(ProductId(50)))
        ));
        assert!(matches!(
            client.get_product(ProductId(51)).await,
            Err(ExplorerError::ProductNotFound(ProductId(51)))
        ));
    }

    #[tokio::test]
    async fn test_get_product_server_error() {
        let server = TestServer::start(vec![("/products/3", Route::status(500, "boom"))]);
        let err = client(&server).get_product(ProductId(3)).await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_get_product_malformed() {
        let server = TestServer::start(vec![("/products/4", Route::ok(r#"{"title":"no id"}"#))]);
        let err = client(&server).get_product(ProductId(4)).await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogUnavailable(_)));
    }

    #[tokio::test]
    async fn test_get_product_timeout() {
        let server = TestServer::start(vec![(
            "/products/1",
            Route::ok(PRODUCT_ONE).delayed(Duration::from_secs(3)),
        )]);
        let client = CatalogClient::new(&server.base_url(), Duration::from_millis(200)).unwrap();

        let err = client.get_product(ProductId(1)).await.unwrap_err();
        assert!(matches!(err, ExplorerError::CatalogTimeout(_)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = CatalogClient::new("https://fakestoreapi.com/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }
}
