use std::time::Duration;

use thiserror::Error;

use super::models::ProductId;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Catalog did not respond within {}s", .0.as_secs_f32())]
    CatalogTimeout(Duration),

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExplorerError {
    /// Text shown by the page-level error boundary.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExplorerError::CatalogUnavailable(_) => {
                "Unable to load products. Please check your connection and try again."
            }
            ExplorerError::CatalogTimeout(_) => {
                "The catalog is taking too long to respond. Please try again."
            }
            ExplorerError::ProductNotFound(_) => "This product could not be found.",
            ExplorerError::StorageUnavailable(_)
            | ExplorerError::Io(_)
            | ExplorerError::Json(_) => "Your favorites could not be saved on this device.",
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, ExplorerError::CatalogUnavailable(_) | ExplorerError::CatalogTimeout(_))
    }

    /// Folds persistence-layer failures into the single storage variant.
    pub fn into_storage(self) -> Self {
        match self {
            ExplorerError::Io(e) => ExplorerError::StorageUnavailable(e.to_string()),
            ExplorerError::Json(e) => ExplorerError::StorageUnavailable(e.to_string()),
            other => other,
        }
    }
}

impl From<std::io::Error> for ExplorerError {
    fn from(error: std::io::Error) -> Self {
        ExplorerError::Io(Box::new(error))
    }
}
