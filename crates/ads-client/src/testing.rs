//! Test utilities for ads-client
//!
//! Runs a router on an ephemeral port so tests can go through real HTTP.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use crate::{AdsClient, Result};

/// A test server that automatically shuts down when dropped
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: AdsClient,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    /// Serve `router` on 127.0.0.1 with a client pointed at its root
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ads_client::testing::TestServer;
    /// use ads_api::{create_router, Gateway, GatewayOptions};
    ///
    /// let router = create_router(Gateway::new(device), &GatewayOptions::default());
    /// let server = TestServer::start(router).await?;
    /// let names = server.client.list_symbols().await?;
    /// ```
    pub async fn start(router: axum::Router) -> Result<Self> {
        Self::start_at(router, "").await
    }

    /// Like [`TestServer::start`], with the client pointed at `base_path`
    pub async fn start_at(router: axum::Router, base_path: &str) -> Result<Self> {
        // Bind to any available port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .ok();
        });

        let base_url = format!("http://{}{}", addr, base_path);
        let client =
            AdsClient::with_config(&base_url, Duration::from_secs(5), Duration::from_secs(2))?;

        Ok(Self {
            addr,
            client,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Get the base URL of the test server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shutdown the server gracefully
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
