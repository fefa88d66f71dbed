//! Test fixtures and a scripted [`MatcherApi`].

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use fb_common::{Person, PersonId, SearchRequest, SearchResponse, SearchResult, UsersResponse};
use tokio::sync::oneshot;

use crate::api::MatcherApi;
use crate::error::TransportError;

type SearchReply = Result<SearchResponse, TransportError>;

pub fn person(id: PersonId, name: &str) -> Person {
    serde_json::from_value(serde_json::json!({"id": id, "name": name})).unwrap()
}

pub fn users(users: Vec<Person>) -> UsersResponse {
    UsersResponse {
        total: users.len(),
        users,
        timestamp: 1_719_705_600.0,
    }
}

pub fn search_result(user_id: PersonId, name: &str, score: f64) -> SearchResult {
    serde_json::from_value(serde_json::json!({
        "user_id": user_id,
        "name": name,
        "similarity_score": score,
        "similarity_percentage": (score * 1000.0).round() / 10.0,
    }))
    .unwrap()
}

pub fn search_response(query: &str, results: Vec<SearchResult>) -> SearchResponse {
    SearchResponse {
        query: query.to_string(),
        total_found: u32::try_from(results.len()).unwrap(),
        results,
        search_time_ms: 8.0,
        top_match_explanation: None,
        status: fb_common::SearchStatus::Success,
        error_message: None,
        suggestions: Vec::new(),
    }
}

enum Scripted {
    Ready(SearchReply),
    Deferred(oneshot::Receiver<SearchReply>),
}

/// Replays queued responses in order. An unscripted call fails as unreachable.
#[derive(Default)]
pub struct FakeMatcherApi {
    users: Mutex<VecDeque<Result<UsersResponse, TransportError>>>,
    searches: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<SearchRequest>>,
    users_calls: AtomicUsize,
}

impl FakeMatcherApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_users(&self, reply: Result<UsersResponse, TransportError>) {
        self.users.lock().unwrap().push_back(reply);
    }

    pub fn push_search(&self, reply: SearchReply) {
        self.searches
            .lock()
            .unwrap()
            .push_back(Scripted::Ready(reply));
    }

    /// Queue a search whose reply is sent later through the returned sender.
    pub fn defer_search(&self) -> oneshot::Sender<SearchReply> {
        let (tx, rx) = oneshot::channel();
        self.searches
            .lock()
            .unwrap()
            .push_back(Scripted::Deferred(rx));
        tx
    }

    /// Search requests received so far.
    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn users_calls(&self) -> usize {
        self.users_calls.load(Ordering::SeqCst)
    }

    /// Wait until at least `count` search requests have arrived.
    pub async fn wait_for_searches(&self, count: usize) {
        while self.requests.lock().unwrap().len() < count {
            tokio::task::yield_now().await;
        }
    }

    fn next_search(&self, request: &SearchRequest) -> Option<Scripted> {
        self.requests.lock().unwrap().push(request.clone());
        self.searches.lock().unwrap().pop_front()
    }
}

impl MatcherApi for FakeMatcherApi {
    async fn fetch_users(&self) -> Result<UsersResponse, TransportError> {
        self.users_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.users.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(TransportError::Unreachable("no scripted roster".into())))
    }

    async fn search(&self, request: &SearchRequest) -> SearchReply {
        match self.next_search(request) {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Unreachable("reply dropped".into()))),
            None => Err(TransportError::Unreachable("no scripted search".into())),
        }
    }
}
