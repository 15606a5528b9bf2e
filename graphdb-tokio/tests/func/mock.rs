use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use graphdb_errors::{ClientConnectionError, Error, ErrorKind};
use graphdb_tokio::{Builder, Client, HttpRequest, HttpResponse, Transport};

/// Records requests and replays canned responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, Error>>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Arc<MockTransport> {
        Arc::new(MockTransport::default())
    }

    pub fn slow(delay: Duration) -> Arc<MockTransport> {
        Arc::new(MockTransport {
            delay: Some(delay),
            ..Default::default()
        })
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            body: Bytes::copy_from_slice(body.as_bytes()),
        }));
    }

    pub fn fail(&self, error: Error) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_body(&self) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        let body = requests
            .last()
            .and_then(|r| r.body.as_ref())
            .expect("no request with body");
        serde_json::from_slice(body).unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientConnectionError::with_message("no response queued")))
    }
}

pub fn client(transport: &Arc<MockTransport>) -> Client {
    let config = Builder::new()
        .address("http://graph.test:8080")
        .build()
        .unwrap();
    Client::with_transport(&config, transport.clone())
}
