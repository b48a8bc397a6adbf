//! Test utilities for the product catalog service

use crate::config::CatalogConfig;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;


/// Product listing in the shape served by the HTTP catalog
pub const SAMPLE_LISTING: &str = r#"{
    "products": [
        {"id": 101, "title": "Laptop", "category": "laptops", "brand": "Apple", "rating": 4.7},
        {"id": 102, "title": "Mouse", "category": "accessories", "brand": "Logi", "rating": 3.9},
        {"id": 103, "title": "Mystery", "category": "misc"}
    ],
    "total": 3,
    "skip": 0,
    "limit": 3
}"#;

/// Catalog config pointing at the given base URL
pub fn http_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        source: crate::config::CatalogSource::Http,
        base_url: base_url.to_string(),
        timeout_secs: 2,
        ..CatalogConfig::default()
    }
}

/// Serve a single HTTP response on a local port and return the base URL
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buffer = [0u8; 4096];
            let _ = socket.read(&mut buffer).await;

            let response = format!(
                "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", address)
}

/// Base URL of a local port nothing listens on
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", address)
}
