//! Loopback catalog fixture for tests, served by axum on its own runtime.

use std::{
    net::SocketAddr,
    sync::mpsc,
    thread,
    time::Duration,
};

use axum::{
    http::{
        header,
        StatusCode,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

#[derive(Clone)]
pub struct Route {
    status: StatusCode,
    body: String,
    delay: Duration,
}

impl Route {
    pub fn ok(body: &str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn respond(self) -> impl IntoResponse {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        (self.status, [(header::CONTENT_TYPE, "application/json")], self.body)
    }
}

pub struct TestServer {
    addr: SocketAddr,
}

impl TestServer {
    /// Serves `routes` by exact path; anything else gets an empty 404.
    ///
    /// The server runs on a dedicated thread so both `#[test]` and
    /// `#[tokio::test]` callers can use it.
    pub fn start(routes: Vec<(&str, Route)>) -> Self {
        let mut router = Router::new();
        for (path, route) in routes {
            router = router.route(path, get(move || route.clone().respond()));
        }
        let router = router.fallback(|| async { StatusCode::NOT_FOUND });

        let (addr_tx, addr_rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("test server runtime");

            runtime.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
                addr_tx.send(listener.local_addr().expect("local addr")).expect("report addr");
                axum::serve(listener, router).await.expect("serve fixture");
            });
        });

        let addr = addr_rx.recv().expect("test server failed to start");
        Self { addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Address nothing is listening on: bind a port, then release it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let server = TestServer::start(vec![("/products", Route::ok("[]"))]);
        let client = reqwest::Client::new();

        let known = client.get(format!("{}/products", server.base_url())).send().await.unwrap();
        assert_eq!(known.status(), StatusCode::OK);
        assert_eq!(known.text().await.unwrap(), "[]");

        let missing =
            client.get(format!("{}/products/7", server.base_url())).send().await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
