// src/checker/testing.rs
// =============================================================================
// Test helpers shared by the checker and validator tests.
//
// - FakeProber: a scripted Prober that records every request it receives
// - stub_server / silent_server: tiny loopback HTTP servers for exercising
//   the real reqwest-based HttpProber without internet access
// =============================================================================

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::http::{ProbeError, Prober};

/// How the fake answers one method for one URL
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Status(u16),
    Timeout,
}

// Answers from a script: url -> (HEAD reply, GET reply)
// Unknown URLs answer 404 to everything.
#[derive(Default)]
pub struct FakeProber {
    script: HashMap<String, (Reply, Reply)>,
    calls: Mutex<Vec<(Method, String)>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, head: Reply, get: Reply) -> Self {
        self.script.insert(url.to_string(), (head, get));
        self
    }

    pub fn calls(&self) -> Vec<(Method, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_for(&self, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, called)| called == url)
            .count()
    }
}

#[async_trait]
impl Prober for FakeProber {
    async fn status(&self, method: Method, url: &str) -> Result<StatusCode, ProbeError> {
        self.calls.lock().unwrap().push((method.clone(), url.to_string()));

        let (head, get) = self
            .script
            .get(url)
            .copied()
            .unwrap_or((Reply::Status(404), Reply::Status(404)));
        let reply = if method == Method::HEAD { head } else { get };

        match reply {
            Reply::Status(code) => Ok(StatusCode::from_u16(code).unwrap()),
            Reply::Timeout => Err(ProbeError::Timeout),
        }
    }
}

pub struct StubServer {
    /// http://127.0.0.1:<port>/page
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Raw request heads received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

// Serves `head_status` to HEAD requests and `get_status` to everything else,
// closing the connection after each response
pub async fn stub_server(head_status: u16, get_status: u16) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                let n = socket.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let head = String::from_utf8_lossy(&buf).into_owned();
            let status = if head.starts_with("HEAD ") {
                head_status
            } else {
                get_status
            };
            log.lock().unwrap().push(head);

            let response = format!(
                "HTTP/1.1 {} Stub\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
                status
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    StubServer {
        url: format!("http://{}/page", addr),
        requests,
    }
}

// Accepts connections and never answers
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    format!("http://{}/slow", addr)
}
