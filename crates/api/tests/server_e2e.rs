//! End-to-end test against a server bound to a real TCP port.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn request(addr: std::net::SocketAddr, path: &str) -> (u16, serde_json::Value) {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8(raw).unwrap();

    let (head, body) = text.split_once("\r\n\r\n").unwrap();
    let status = head
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse().ok())
        .unwrap();
    (status, serde_json::from_str(body).unwrap())
}

#[tokio::test]
async fn test_serves_all_routes() {
    let handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .build_recorder()
        .handle();
    let app = api::create_app(api::create_default_state(), handle);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let (status, json) = request(addr, "/").await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        serde_json::json!({
            "message": "Welcome to the Alafia API",
            "endpoints": ["/health", "/quote", "/quotes"]
        })
    );

    let (status, json) = request(addr, "/health").await;
    assert_eq!(status, 200);
    assert_eq!(json, serde_json::json!({ "status": "healthy" }));

    let (status, json) = request(addr, "/quote").await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        serde_json::json!({
            "quote": "The future belongs to those who believe in the beauty of their dreams."
        })
    );

    let (status, json) = request(addr, "/quotes").await;
    assert_eq!(status, 200);
    assert_eq!(
        json,
        serde_json::json!({
            "quotes": ["The future belongs to those who believe in the beauty of their dreams."]
        })
    );
}
