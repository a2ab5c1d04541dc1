pub mod api;

#[cfg(test)]
pub(crate) mod test_server;

pub use api::{
    CatalogClient,
    DEFAULT_BASE_URL,
};
