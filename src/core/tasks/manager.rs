use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::{
    debug,
    info,
};

use super::TaskResult;
use crate::{
    catalog::CatalogClient,
    core::{
        ExplorerError,
        ProductId,
    },
};

/// Called after every result is queued so the UI can wake up and poll.
pub type RepaintNotifier = Arc<dyn Fn() + Send + Sync>;

/// Runs catalog requests off the UI thread and queues their results.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    notifier: Option<RepaintNotifier>,
}

impl TaskManager {
    pub fn new() -> Result<Self, ExplorerError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, receiver, sender, notifier: None })
    }

    pub fn with_notifier(mut self, notifier: impl Fn() + Send + Sync + 'static) -> Self {
        self.notifier = Some(Arc::new(notifier));
        self
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            debug!("Task finished: {}", result.task_type());
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>, Option<RepaintNotifier>) {
        (self.sender.clone(), self.runtime.clone(), self.notifier.clone())
    }

    /// `request` is echoed back in the result so the caller can drop
    /// responses that a newer fetch has superseded.
    pub fn load_products(&self, client: CatalogClient, request: u64) {
        let (sender, runtime, notifier) = self.task_context();
        info!("Loading products from {} (request {})", client.base_url(), request);

        thread::spawn(move || {
            let result = runtime.block_on(async { client.list_products().await });

            let _ = sender.send(TaskResult::ProductsLoaded { request, result });
            notify(notifier);
        });
    }

    pub fn load_product(&self, client: CatalogClient, id: ProductId) {
        let (sender, runtime, notifier) = self.task_context();
        info!("Loading product {}", id);

        thread::spawn(move || {
            let result = runtime.block_on(async { client.get_product(id).await });

            let _ = sender.send(TaskResult::ProductLoaded { id, result });
            notify(notifier);
        });
    }
}

fn notify(notifier: Option<RepaintNotifier>) {
    if let Some(notifier) = notifier {
        notifier();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{
            AtomicUsize,
            Ordering,
        },
        time::{
            Duration,
            Instant,
        },
    };

    use super::*;
    use crate::catalog::test_server::{
        Route,
        TestServer,
    };

    fn wait_for_results(manager: &mut TaskManager, expected: usize) -> Vec<TaskResult> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut results = Vec::new();
        while results.len() < expected && Instant::now() < deadline {
            results.extend(manager.poll_results());
            thread::sleep(Duration::from_millis(20));
        }
        results
    }

    #[test]
    fn test_load_products_in_background() {
        let server = TestServer::start(vec![(
            "/products",
            Route::ok(r#"[{"id":1,"title":"Red Shirt","category":"clothing"}]"#),
        )]);
        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();

        let wakeups = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&wakeups);
        let mut manager = TaskManager::new().unwrap().with_notifier(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.load_products(client, 7);
        let results = wait_for_results(&mut manager, 1);

        assert_eq!(results.len(), 1);
        match &results[0] {
            TaskResult::ProductsLoaded { request, result: Ok(products) } => {
                assert_eq!(*request, 7);
                assert_eq!(products.len(), 1);
                assert_eq!(products[0].title, "Red Shirt");
            }
            other => panic!("Expected ProductsLoaded with Ok, got {:?}", other),
        }

        // The notifier fires right after the send
        let deadline = Instant::now() + Duration::from_secs(2);
        while wakeups.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(wakeups.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_load_product_reports_id_and_error() {
        let server = TestServer::start(vec![]);
        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        let mut manager = TaskManager::new().unwrap();

        manager.load_product(client, ProductId(999));
        let results = wait_for_results(&mut manager, 1);

        match results.first() {
            Some(TaskResult::ProductLoaded { id, result }) => {
                assert_eq!(*id, ProductId(999));
                assert!(matches!(result, Err(ExplorerError::ProductNotFound(ProductId(999)))));
            }
            other => panic!("Expected ProductLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_overlapping_list_loads_keep_their_request() {
        let slow = TestServer::start(vec![(
            "/products",
            Route::status(503, "busy").delayed(Duration::from_millis(600)),
        )]);
        let fast = TestServer::start(vec![("/products", Route::ok(r#"[{"id":3}]"#))]);
        let slow_client = CatalogClient::new(&slow.base_url(), Duration::from_secs(5)).unwrap();
        let fast_client = CatalogClient::new(&fast.base_url(), Duration::from_secs(5)).unwrap();
        let mut manager = TaskManager::new().unwrap();

        manager.load_products(slow_client, 1);
        manager.load_products(fast_client, 2);
        let results = wait_for_results(&mut manager, 2);

        // The newer request finishes first; the stale failure still arrives tagged
        let tags: Vec<(u64, bool)> = results
            .iter()
            .map(|r| match r {
                TaskResult::ProductsLoaded { request, result } => (*request, result.is_ok()),
                other => panic!("Unexpected result {:?}", other),
            })
            .collect();
        assert_eq!(tags, vec![(2, true), (1, false)]);
    }

    #[test]
    fn test_poll_without_tasks_is_empty() {
        let mut manager = TaskManager::new().unwrap();
        assert!(manager.poll_results().is_empty());
        let result = TaskResult::ProductsLoaded { request: 1, result: Ok(Vec::new()) };
        assert_eq!(result.task_type(), "products_loaded");
    }
}
