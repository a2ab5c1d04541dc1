use crate::core::{
    ExplorerError,
    Product,
    ProductId,
};

const APP_TITLE: &str = "Product Explorer";

pub enum DetailStatus {
    Loading,
    Loaded(Product),
    Failed(ExplorerError),
}

/// Which page the central panel shows. The detail page owns the product it
/// fetched; leaving it drops the product.
pub enum Page {
    Listing,
    Detail { id: ProductId, status: DetailStatus },
}

impl Page {
    pub fn detail(id: ProductId) -> Self {
        Page::Detail { id, status: DetailStatus::Loading }
    }

    pub fn is_loading_detail(&self) -> bool {
        matches!(self, Page::Detail { status: DetailStatus::Loading, .. })
    }

    pub fn detail_id(&self) -> Option<ProductId> {
        match self {
            Page::Detail { id, .. } => Some(*id),
            Page::Listing => None,
        }
    }

    /// Stores a fetched product if it belongs to the page currently shown.
    /// Returns false for results that arrived after the user moved on.
    pub fn accept_product(
        &mut self,
        loaded_id: ProductId,
        result: Result<Product, ExplorerError>,
    ) -> bool {
        match self {
            Page::Detail { id, status } if *id == loaded_id => {
                *status = match result {
                    Ok(product) => DetailStatus::Loaded(product),
                    Err(e) => DetailStatus::Failed(e),
                };
                true
            }
            _ => false,
        }
    }

    pub fn window_title(&self) -> String {
        match self {
            Page::Listing => APP_TITLE.to_string(),
            Page::Detail { status: DetailStatus::Loaded(product), .. } => {
                format!("{} - {}", product.title, APP_TITLE)
            }
            Page::Detail { status: DetailStatus::Failed(ExplorerError::ProductNotFound(_)), .. } => {
                format!("Product Not Found - {}", APP_TITLE)
            }
            Page::Detail { .. } => APP_TITLE.to_string(),
        }
    }
}

/// Numbers list fetches so only the newest one's result is applied.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_latest(&self, request: u64) -> bool {
        request == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id: ProductId(id),
            title: title.to_string(),
            price: 9.5,
            category: "jewelery".to_string(),
            description: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    #[test]
    fn test_detail_result_for_current_page() {
        let mut page = Page::detail(ProductId(5));
        assert!(page.is_loading_detail());

        assert!(page.accept_product(ProductId(5), Ok(product(5, "Silver Ring"))));
        assert!(!page.is_loading_detail());
        assert_eq!(page.window_title(), "Silver Ring - Product Explorer");
    }

    #[test]
    fn test_stale_detail_result_is_discarded() {
        let mut page = Page::detail(ProductId(2));
        assert!(!page.accept_product(ProductId(1), Ok(product(1, "Backpack"))));
        assert!(page.is_loading_detail());

        let mut listing = Page::Listing;
        assert!(!listing.accept_product(ProductId(1), Ok(product(1, "Backpack"))));
        assert_eq!(listing.detail_id(), None);
    }

    #[test]
    fn test_not_found_title() {
        let mut page = Page::detail(ProductId(999));
        page.accept_product(ProductId(999), Err(ExplorerError::ProductNotFound(ProductId(999))));
        assert_eq!(page.window_title(), "Product Not Found - Product Explorer");
        assert_eq!(page.detail_id(), Some(ProductId(999)));
    }

    #[test]
    fn test_generic_title_while_loading_or_failed() {
        let mut page = Page::detail(ProductId(3));
        assert_eq!(page.window_title(), "Product Explorer");

        page.accept_product(ProductId(3), Err(ExplorerError::CatalogUnavailable("down".into())));
        assert_eq!(page.window_title(), "Product Explorer");
    }

    #[test]
    fn test_late_list_result_is_superseded() {
        let mut requests = FetchSequence::default();
        let first = requests.next();
        let second = requests.next();

        assert!(requests.is_latest(second));
        assert!(!requests.is_latest(first));

        let third = requests.next();
        assert!(!requests.is_latest(second));
        assert!(requests.is_latest(third));
    }
}
