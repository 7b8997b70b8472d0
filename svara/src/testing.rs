//! Testing utilities for Svara.
//!
//! In-memory doubles for the [`Request`] and [`Response`] seams, so
//! handlers and dispatch tables can be exercised without a hosting
//! framework.
//!
//! Dispatch consumes the response by value, so [`TestResponse`] is a cheap
//! clone over shared interior state: keep one clone in the test, hand the
//! other to the dispatcher, and inspect the [`ResponseRecord`] afterwards.

use svara_core::{Request, Response};
use std::sync::{Arc, Mutex};

/// A request double carrying only a method token.
#[derive(Debug, Clone, Default)]
pub struct TestRequest {
    method: Option<String>,
}

impl TestRequest {
    /// A request whose method token is `method`, casing preserved.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
        }
    }

    /// A request with no method token at all.
    #[must_use]
    pub fn without_method() -> Self {
        Self { method: None }
    }
}

impl Request for TestRequest {
    fn method_token(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

/// Everything a [`TestResponse`] observed, in one comparable value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseRecord {
    /// The last status set, if any.
    pub status: Option<u16>,
    /// Every `write` concatenated in order.
    pub body: String,
    /// Whether `end` was called.
    pub ended: bool,
}

/// A response double recording everything written to it.
#[derive(Debug, Clone, Default)]
pub struct TestResponse {
    inner: Arc<Mutex<ResponseRecord>>,
}

impl TestResponse {
    /// A fresh response with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    #[must_use]
    pub fn record(&self) -> ResponseRecord {
        self.inner.lock().unwrap().clone()
    }

    /// The last status set, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.record().status
    }

    /// The accumulated body.
    #[must_use]
    pub fn body(&self) -> String {
        self.record().body
    }

    /// Whether the response was terminated.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.record().ended
    }
}

impl Response for TestResponse {
    fn set_status(&mut self, status: u16) {
        self.inner.lock().unwrap().status = Some(status);
    }

    fn write(&mut self, body: &str) {
        self.inner.lock().unwrap().body.push_str(body);
    }

    fn end(&mut self) {
        self.inner.lock().unwrap().ended = true;
    }
}

#[cfg(test)]
mod tests {
    use super::{ResponseRecord, TestRequest, TestResponse};
    use svara_core::{Request, Response};

    #[test]
    fn test_request_double_exposes_token_verbatim() {
        assert_eq!(TestRequest::new("gEt").method_token(), Some("gEt"));
        assert_eq!(TestRequest::without_method().method_token(), None);
    }

    #[test]
    fn test_response_double_records_through_clones() {
        let res = TestResponse::new();
        let mut handle = res.clone();

        handle.set_status(204);
        handle.write("a");
        handle.write("b");
        handle.end();

        assert_eq!(
            res.record(),
            ResponseRecord {
                status: Some(204),
                body: "ab".to_string(),
                ended: true,
            }
        );
    }
}
