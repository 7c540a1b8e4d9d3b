//! Raw TCP servers that break off an HTTP exchange.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Answers every connection with a fixed byte string, then closes it.
pub(crate) struct RawServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl RawServer {
    /// Read the request and close without sending a response.
    pub(crate) async fn dropping_connections() -> Self {
        Self::start(b"").await
    }

    /// Promise a 10000-byte body and close after a few bytes of it.
    pub(crate) async fn truncating_bodies() -> Self {
        Self::start(b"HTTP/1.1 200 OK\r\nContent-Length: 10000\r\n\r\npartial image bytes").await
    }

    async fn start(reply: &'static [u8]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 4096];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(reply).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { addr, hits }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Connections accepted so far.
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}
