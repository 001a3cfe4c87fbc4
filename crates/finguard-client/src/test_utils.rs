//! Test utilities: a canned-response backend on a local TCP port.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A one-shot backend that answers a single request with a canned response.
pub struct StubBackend {
    pub origin: String,
    handle: JoinHandle<String>,
}

impl StubBackend {
    /// The raw request the stub received (headers and body, lossily decoded).
    pub async fn request(self) -> String {
        self.handle.await.expect("stub backend task")
    }
}

/// Start a stub that replies to one request with `status` and a JSON body.
pub async fn spawn_stub_backend(status: u16, body: impl Into<String>) -> StubBackend {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut stream).await;
        let reason = if status == 200 { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = stream.shutdown().await;
        String::from_utf8_lossy(&request).into_owned()
    });

    StubBackend {
        origin: format!("http://{addr}"),
        handle,
    }
}

/// Start a backend that accepts connections but never answers.
pub async fn spawn_silent_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind silent listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream);
        }
    });

    format!("http://{addr}")
}

/// An origin nothing is listening on.
pub async fn refused_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// A complete success envelope with a medium-risk assessment.
pub fn success_body() -> String {
    serde_json::json!({
        "success": true,
        "data": {
            "invoice_data": {
                "invoice_number": "INV-2025-001",
                "date": "2025-06-13",
                "vendor": "Acme Supplies",
                "total_amount": 18000.0,
                "line_items": [
                    { "name": "Consulting", "quantity": 2, "price": 5000.0 },
                    { "name": "Licence fee", "quantity": 1, "price": 8000.0 }
                ]
            },
            "risk_assessment": {
                "risk_level": "medium",
                "confidence_score": 0.82,
                "findings": [
                    "Round number total",
                    { "description": "Unusual licence fee", "details": "8000 is above the vendor average" }
                ],
                "unusual_items": [
                    { "item": "Licence fee", "price": 8000.0, "reason": "Above vendor average" }
                ]
            },
            "action_hash": "0x5f2c"
        }
    })
    .to_string()
}

async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
        if request_complete(&buf) {
            break;
        }
    }
    buf
}

fn request_complete(buf: &[u8]) -> bool {
    let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
    let body = &buf[header_end + 4..];

    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|value| value.trim().parse::<usize>().ok());

    match content_length {
        Some(len) => body.len() >= len,
        None if headers.contains("transfer-encoding: chunked") => body.ends_with(b"0\r\n\r\n"),
        None => true,
    }
}
