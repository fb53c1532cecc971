use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::client::SessionClient;
use crate::error::SessionError;
use crate::storage::MemoryStorage;
use crate::store::{Headers, TokenStore};
use crate::transport::{HttpResponse, Transport};

/// One request seen by [`MockTransport`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
    pub headers: Headers,
}

/// Transport that replays queued replies and records every request.
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<HttpResponse, SessionError>>>,
    pub requests: RefCell<Vec<Recorded>>,
}

impl MockTransport {
    pub fn new(replies: Vec<Result<HttpResponse, SessionError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), requests: RefCell::default() }
    }

    pub fn replying(status: u16, body: &str) -> Self {
        Self::new(vec![Ok(HttpResponse::new(status, body))])
    }

    pub fn failing(message: &str) -> Self {
        Self::new(vec![Err(SessionError::Transport(message.to_owned()))])
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.requests.borrow().last().cloned()
    }

    fn next_reply(&self) -> Result<HttpResponse, SessionError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SessionError::Transport("no reply queued".to_owned())))
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, path: &str, headers: &Headers) -> Result<HttpResponse, SessionError> {
        self.requests.borrow_mut().push(Recorded {
            method: "GET",
            path: path.to_owned(),
            body: None,
            headers: headers.clone(),
        });
        self.next_reply()
    }

    async fn post_json(&self, path: &str, body: &Value, headers: &Headers) -> Result<HttpResponse, SessionError> {
        self.requests.borrow_mut().push(Recorded {
            method: "POST",
            path: path.to_owned(),
            body: Some(body.clone()),
            headers: headers.clone(),
        });
        self.next_reply()
    }
}

pub fn client_with(transport: MockTransport) -> SessionClient<MockTransport, MemoryStorage> {
    SessionClient::new(transport, TokenStore::new(MemoryStorage::new()))
}
