//! In-memory transport for unit tests
//!
//! Replies are queued per URL and popped in order; any request without a
//! queued reply fails with a transport error.

use super::transport::{HttpRequest, RawResponse, Transport};
use crate::config::SdkConfig;
use crate::error::{Error, Result};
use crate::http::Sdk;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

enum Reply {
    Response(u16, String),
    Fail(String),
    Hang,
    Gated(Arc<Notify>, u16, String),
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, VecDeque<Reply>>,
    requests: Vec<String>,
}

#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(&self, url: &str, reply: Reply) {
        self.state
            .lock()
            .unwrap()
            .replies
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
    }

    /// Reply to `url` with `status` and `body`
    pub(crate) fn expect(&self, url: &str, status: u16, body: &str) {
        self.push(url, Reply::Response(status, body.to_string()));
    }

    /// Fail the request to `url` at the transport level
    pub(crate) fn expect_failure(&self, url: &str, message: &str) {
        self.push(url, Reply::Fail(message.to_string()));
    }

    /// Never answer the request to `url`
    pub(crate) fn expect_hang(&self, url: &str) {
        self.push(url, Reply::Hang);
    }

    /// Answer the request to `url` only after `gate` is notified
    pub(crate) fn expect_gated(&self, url: &str, gate: Arc<Notify>, status: u16, body: &str) {
        self.push(url, Reply::Gated(gate, status, body.to_string()));
    }

    /// URLs requested so far, in order
    pub(crate) fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Number of live clones of this transport, including the one inside any Sdk
    pub(crate) fn live_handles(&self) -> usize {
        Arc::strong_count(&self.state)
    }

    /// Sdk with default config backed by this transport
    pub(crate) fn sdk(&self) -> Sdk {
        self.sdk_with(SdkConfig::default())
    }

    pub(crate) fn sdk_with(&self, config: SdkConfig) -> Sdk {
        Sdk::with_transport(config, self.clone()).unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request.url.clone());
            state
                .replies
                .get_mut(&request.url)
                .and_then(VecDeque::pop_front)
        };

        match reply {
            Some(Reply::Response(status, body)) => Ok(RawResponse::new(status, body)),
            Some(Reply::Fail(message)) => Err(Error::transport(message)),
            Some(Reply::Hang) => std::future::pending().await,
            Some(Reply::Gated(gate, status, body)) => {
                gate.notified().await;
                Ok(RawResponse::new(status, body))
            }
            None => Err(Error::transport(format!(
                "unexpected request: {}",
                request.url
            ))),
        }
    }
}
