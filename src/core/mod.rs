pub mod debounce;
pub mod errors;
pub mod filter;
pub mod http;
pub mod models;
pub mod settings;
pub mod tasks;

pub use debounce::Debouncer;
pub use errors::ExplorerError;
pub use filter::{
    category_index,
    filter_indices,
    filter_products,
    FilterCriteria,
};
pub use models::{
    Product,
    ProductId,
    Rating,
};
pub use settings::Settings;
