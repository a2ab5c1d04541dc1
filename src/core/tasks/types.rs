use crate::core::{
    ExplorerError,
    Product,
    ProductId,
};

#[derive(Debug)]
pub enum TaskResult {
    ProductsLoaded { request: u64, result: Result<Vec<Product>, ExplorerError> },
    ProductLoaded { id: ProductId, result: Result<Product, ExplorerError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::ProductsLoaded { .. } => "products_loaded",
            TaskResult::ProductLoaded { .. } => "product_loaded",
        }
    }
}
