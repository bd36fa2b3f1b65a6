//! In-memory catalog service standing in for the real HTTP API.
//!
//! Unlike the production service this store actually persists mutations,
//! so tests can assert what a create/update/delete left behind.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::{BTreeMap, VecDeque};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A request the store saw, for wire-level assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    /// `Value::Null` for requests without a body.
    pub body: Value,
}

struct StoreInner {
    products: BTreeMap<u64, Value>,
    next_id: u64,
    failures: VecDeque<(u16, String)>,
    requests: Vec<CapturedRequest>,
}

#[derive(Clone)]
struct StoreState {
    inner: Arc<Mutex<StoreInner>>,
}

pub struct MockStore {
    pub addr: SocketAddr,
    state: StoreState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockStore {
    /// Bind an ephemeral port and serve the catalog routes on it.
    pub async fn start() -> Self {
        let state = StoreState {
            inner: Arc::new(Mutex::new(StoreInner {
                products: BTreeMap::new(),
                next_id: 1,
                failures: VecDeque::new(),
                requests: Vec::new(),
            })),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/products", get(list_products).post(create_product))
            .route(
                "/products/{id}",
                get(fetch_product).put(update_product).delete(remove_product),
            )
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock store");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Load products directly into the store, bypassing the wire.
    pub async fn seed(&self, products: Vec<Value>) {
        let mut inner = self.state.inner.lock().await;
        for product in products {
            let id = product["id"].as_u64().expect("seeded product needs an id");
            inner.next_id = inner.next_id.max(id + 1);
            inner.products.insert(id, product);
        }
    }

    /// Fail the next request with this status instead of touching the store.
    pub async fn fail_next(&self, status: u16, body: &str) {
        self.state
            .inner
            .lock()
            .await
            .failures
            .push_back((status, body.to_string()));
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.inner.lock().await.requests.clone()
    }

    pub async fn stored(&self, id: u64) -> Option<Value> {
        self.state.inner.lock().await.products.get(&id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.state.inner.lock().await.products.len()
    }
}

impl Drop for MockStore {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn failure_response(inner: &mut StoreInner) -> Option<Response> {
    inner.failures.pop_front().map(|(status, body)| {
        let status = StatusCode::from_u16(status).expect("valid failure status");
        (status, body).into_response()
    })
}

async fn list_products(State(state): State<StoreState>) -> Response {
    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: "/products".to_string(),
        body: Value::Null,
    });
    if let Some(failure) = failure_response(&mut inner) {
        return failure;
    }
    let products: Vec<Value> = inner.products.values().cloned().collect();
    Json(products).into_response()
}

async fn fetch_product(State(state): State<StoreState>, Path(id): Path<u64>) -> Response {
    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: "GET".to_string(),
        path: format!("/products/{id}"),
        body: Value::Null,
    });
    if let Some(failure) = failure_response(&mut inner) {
        return failure;
    }
    match inner.products.get(&id) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn create_product(State(state): State<StoreState>, Json(draft): Json<Value>) -> Response {
    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: "POST".to_string(),
        path: "/products".to_string(),
        body: draft.clone(),
    });
    if let Some(failure) = failure_response(&mut inner) {
        return failure;
    }
    let id = inner.next_id;
    inner.next_id += 1;
    let mut product = draft;
    product["id"] = json!(id);
    inner.products.insert(id, product.clone());
    Json(product).into_response()
}

async fn update_product(
    State(state): State<StoreState>,
    Path(id): Path<u64>,
    Json(draft): Json<Value>,
) -> Response {
    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: "PUT".to_string(),
        path: format!("/products/{id}"),
        body: draft.clone(),
    });
    if let Some(failure) = failure_response(&mut inner) {
        return failure;
    }
    if !inner.products.contains_key(&id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut product = draft;
    product["id"] = json!(id);
    inner.products.insert(id, product.clone());
    Json(product).into_response()
}

async fn remove_product(State(state): State<StoreState>, Path(id): Path<u64>) -> Response {
    let mut inner = state.inner.lock().await;
    inner.requests.push(CapturedRequest {
        method: "DELETE".to_string(),
        path: format!("/products/{id}"),
        body: Value::Null,
    });
    if let Some(failure) = failure_response(&mut inner) {
        return failure;
    }
    match inner.products.remove(&id) {
        Some(product) => Json(product).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
