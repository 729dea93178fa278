use proso_session::{HttpBackend, MemoryCache, SessionOptions, SessionStore};

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Store wired to a mock server with an in-memory cache
pub fn store_with(
    server: &MockServer,
    cache: Arc<MemoryCache>,
    options: SessionOptions,
) -> SessionStore {
    let backend = HttpBackend::new(&server.uri(), Duration::from_secs(5)).unwrap();
    SessionStore::new(Arc::new(backend), cache, options)
}

pub fn store(server: &MockServer) -> SessionStore {
    store_with(
        server,
        Arc::new(MemoryCache::default()),
        SessionOptions::default(),
    )
}

/// `/user/profile` answering with an empty envelope, so background
/// fetches leave the seeded profile alone
pub async fn mount_empty_profile(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
        .mount(server)
        .await;
}
