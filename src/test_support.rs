//! Shared helpers for tests that need a live HTTP round trip: a stub Solr
//! server with a pluggable responder, and the API router bound to it.

use crate::catalog::types::FacetCatalog;
use crate::server::router;
use crate::solr::client::SolrClient;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type Responder = Arc<dyn Fn(&Value) -> (StatusCode, Value) + Send + Sync>;

/// Records every request it receives and answers through `respond`.
#[derive(Clone)]
pub struct StubSolr {
    pub queries: Arc<Mutex<Vec<Value>>>,
    pub suggest_calls: Arc<Mutex<Vec<HashMap<String, String>>>>,
    respond: Responder,
}

impl StubSolr {
    pub fn new<F>(respond: F) -> Self
    where
        F: Fn(&Value) -> (StatusCode, Value) + Send + Sync + 'static,
    {
        Self {
            queries: Arc::new(Mutex::new(Vec::new())),
            suggest_calls: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    /// Always answers with the same status and body.
    pub fn fixed(status: StatusCode, body: Value) -> Self {
        Self::new(move |_| (status, body.clone()))
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn last_query(&self) -> Option<Value> {
        self.queries.lock().unwrap().last().cloned()
    }

    pub fn suggest_count(&self) -> usize {
        self.suggest_calls.lock().unwrap().len()
    }
}

async fn stub_query(
    Extension(stub): Extension<StubSolr>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    stub.queries.lock().unwrap().push(body.clone());
    let (status, response) = (stub.respond)(&body);
    (status, Json(response))
}

async fn stub_suggest(
    Extension(stub): Extension<StubSolr>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    stub.suggest_calls.lock().unwrap().push(params.clone());
    let (status, response) = (stub.respond)(&serde_json::json!(params));
    (status, Json(response))
}

pub async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn spawn_stub_solr(stub: StubSolr) -> SocketAddr {
    let app = Router::new()
        .route("/solr/:collection/query", post(stub_query))
        .route("/solr/:collection/suggest", get(stub_suggest))
        .layer(Extension(stub));
    spawn(app).await
}

pub fn client_for(solr_addr: SocketAddr) -> SolrClient {
    SolrClient::new(
        &format!("http://{}/", solr_addr),
        "test-collection",
        Duration::from_secs(5),
    )
}

/// Starts the stub engine and the API in front of it; returns the API address.
pub async fn spawn_api(stub: StubSolr) -> SocketAddr {
    let solr_addr = spawn_stub_solr(stub).await;
    let app = router(
        Arc::new(FacetCatalog::standard().unwrap()),
        Arc::new(client_for(solr_addr)),
    );
    spawn(app).await
}
