//! Test helpers for HTTP integration tests.
//!
//! Spawns a stand-in matching service on a random local port so
//! `HttpMatcherApi` can be exercised over real HTTP.
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::task::JoinHandle;

/// A running test server. The server stops when the runtime shuts down.
pub struct TestServer {
    pub addr: SocketAddr,
    pub url: String,
    _handle: JoinHandle<()>,
}

/// Serve `router` on `127.0.0.1` with an OS-assigned port.
pub async fn spawn_test_server(router: Router) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to get local addr");
    let url = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server failed");
    });

    TestServer {
        addr,
        url,
        _handle: handle,
    }
}

/// Canned reply for one endpoint.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Raw(&'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Self::Json(body) => Json(body).into_response(),
            Self::Status(status) => (status, "service unavailable").into_response(),
            Self::Raw(body) => ([("content-type", "application/json")], body).into_response(),
        }
    }
}

#[derive(Clone)]
struct MatcherState {
    users: Reply,
    search: Reply,
    search_bodies: Arc<Mutex<Vec<Value>>>,
}

/// Stand-in matching service with fixed replies.
pub struct FakeMatcher {
    pub server: TestServer,
    search_bodies: Arc<Mutex<Vec<Value>>>,
}

impl FakeMatcher {
    pub async fn spawn(users: Reply, search: Reply) -> Self {
        let search_bodies = Arc::new(Mutex::new(Vec::new()));
        let state = MatcherState {
            users,
            search,
            search_bodies: Arc::clone(&search_bodies),
        };
        let router = Router::new()
            .route("/users", get(users_handler))
            .route("/search", post(search_handler))
            .with_state(state);

        Self {
            server: spawn_test_server(router).await,
            search_bodies,
        }
    }

    pub fn url(&self) -> &str {
        &self.server.url
    }

    /// JSON bodies received on `POST /search`.
    pub fn search_bodies(&self) -> Vec<Value> {
        self.search_bodies.lock().unwrap().clone()
    }
}

async fn users_handler(State(state): State<MatcherState>) -> Reply {
    state.users
}

async fn search_handler(State(state): State<MatcherState>, Json(body): Json<Value>) -> Reply {
    state.search_bodies.lock().unwrap().push(body);
    state.search
}

pub fn roster_json() -> Value {
    serde_json::json!({
        "users": [
            {
                "id": 1,
                "name": "Ada Lovelace",
                "bio": "Analytical engines",
                "location": "London",
                "domain_expertise": ["ai", "fintech"],
                "current_role": "technical_founder",
                "experience_level": "expert",
                "networking_intent": "seeking_cofounder",
                "activity_status": "active",
                "conversation_count": 4,
                "remote_preference": "hybrid"
            },
            {
                "id": 2,
                "name": "Grace Hopper",
                "bio": "Compilers",
                "domain_expertise": ["compilers"],
                "activity_status": "inactive",
                "conversation_count": 0
            }
        ],
        "total": 2,
        "timestamp": 1_719_705_600.5
    })
}

pub fn ada_search_json() -> Value {
    serde_json::json!({
        "query": "fintech AI",
        "results": [{
            "user_id": 1,
            "id": 1,
            "name": "Ada Lovelace",
            "bio": "Analytical engines",
            "domain_expertise": ["ai", "fintech"],
            "activity_status": "active",
            "conversations": [{"text": "Building an AI lender", "timestamp": "2024-06-01"}],
            "similarity_score": 0.9213,
            "similarity_percentage": 92.1,
            "explanation": "Strong overlap in AI and fintech",
            "rank": 1
        }],
        "total_found": 1,
        "search_time_ms": 41.6,
        "top_match_explanation": "Ada is an excellent match for fintech AI",
        "status": "success",
        "error_message": null,
        "suggestions": []
    })
}
