use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use svara::testing::{TestRequest, TestResponse};
use svara::{Handler, Request, Response};

// ============================================================================
// Test Handlers
// ============================================================================

pub struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
}

impl Handler<TestRequest, TestResponse> for CountingHandler {
    type Output = ();

    async fn call(&self, _req: TestRequest, _res: TestResponse) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct TaggingHandler {
    pub tag: &'static str,
    pub hits: Arc<Mutex<Vec<&'static str>>>,
}

impl Handler<TestRequest, TestResponse> for TaggingHandler {
    type Output = ();

    async fn call(&self, _req: TestRequest, mut res: TestResponse) {
        self.hits.lock().unwrap().push(self.tag);
        res.write(self.tag);
        res.end();
    }
}

pub struct TokenRecordingHandler {
    pub seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl Handler<TestRequest, TestResponse> for TokenRecordingHandler {
    type Output = ();

    async fn call(&self, req: TestRequest, _res: TestResponse) {
        self.seen
            .lock()
            .unwrap()
            .push(req.method_token().map(ToOwned::to_owned));
    }
}
