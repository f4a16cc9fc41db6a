//! Endpoint-contract tests.
//!
//! Each test assembles the full router against an in-memory SQLite store and
//! a scripted chat provider, then drives it with `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use wayfare_agent::types::{Role, ToolCall};
use wayfare_agent::{AgentError, Assistant, ChatProvider, CompletionRequest, ProviderReply};

use wayfare_server::config::Config;
use wayfare_server::entities::{AnyStore, MessageStore};
use wayfare_server::routes;
use wayfare_server::state::AppState;
use wayfare_server::tools::{FetchEventsTool, SaveItineraryTool};

/// Provider that plays back a fixed sequence of replies and records the
/// requests it saw.
struct ScriptedProvider {
    replies: Mutex<Vec<ProviderReply>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<ProviderReply>) -> Self {
        Self { replies: Mutex::new(replies), requests: Mutex::new(Vec::new()) }
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<ProviderReply, AgentError> {
        self.requests.lock().unwrap().push(request.clone());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(AgentError::InvalidResponse("script exhausted".into()));
        }
        Ok(replies.remove(0))
    }
}

fn text_reply(text: &str) -> ProviderReply {
    ProviderReply { text: text.into(), tool_calls: vec![] }
}

fn tool_reply(name: &str, args: serde_json::Value) -> ProviderReply {
    ProviderReply {
        text: String::new(),
        tool_calls: vec![ToolCall { id: "call_1".into(), name: name.into(), arguments: args }],
    }
}

fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".into(),
        database_url: "sqlite::memory:".into(),
        log_level: "warn".into(),
        log_json: false,
        enable_swagger: false,
        cors_allowed_origins: None,
        llm_base_url: "http://localhost:0".into(),
        llm_api_key: "test".into(),
        llm_model: "scripted".into(),
        memory_window: 9,
    }
}

async fn test_state_with_provider(
    replies: Vec<ProviderReply>,
) -> (Arc<AppState>, Arc<ScriptedProvider>) {
    let store = Arc::new(AnyStore::connect("sqlite::memory:").await.expect("store"));
    let provider = Arc::new(ScriptedProvider::new(replies));
    let assistant = Assistant::new(Arc::clone(&provider) as Arc<dyn ChatProvider>)
        .with_tool(Arc::new(SaveItineraryTool::new(Arc::clone(&store))))
        .with_tool(Arc::new(FetchEventsTool::new(Arc::clone(&store))));
    let state = Arc::new(AppState {
        config: Arc::new(test_config()),
        store,
        assistant: Arc::new(assistant),
    });
    (state, provider)
}

async fn test_state(replies: Vec<ProviderReply>) -> Arc<AppState> {
    test_state_with_provider(replies).await.0
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("JSON body")
}

// ── Health ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_reports_store_reachability() {
    let app = routes::build(test_state(vec![]).await);
    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "up");
    assert!(!body["version"].as_str().unwrap_or("").is_empty());
}

// ── Chat ──────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn chat_empty_message_is_400_with_no_writes() {
    let state = test_state(vec![text_reply("unused")]).await;
    let app = routes::build(Arc::clone(&state));

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({ "message": "   ", "history": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.count_messages().await.unwrap(), 0);
}

#[tokio::test]
async fn chat_round_trip_appends_two_turns_in_order() {
    let state = test_state(vec![text_reply("Lisbon sounds lovely.")]).await;
    let app = routes::build(Arc::clone(&state));

    let history = serde_json::json!([
        { "type": "user", "text": "hi" },
        { "type": "ai", "text": "hello! where to?" },
    ]);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({
                "message": "what about Lisbon?",
                "history": history,
                "currentDateTime": "2026-08-30T09:00:00Z",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["aiResponse"], "Lisbon sounds lovely.");

    let out = body["history"].as_array().unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(out[0]["text"], "hi");
    assert_eq!(out[2]["type"], "user");
    assert_eq!(out[2]["text"], "what about Lisbon?");
    assert_eq!(out[3]["type"], "ai");

    // Both turns were persisted to the newly created conversation.
    let cid = body["conversationId"].as_str().expect("conversation id");
    let messages = state.store.list_messages(cid).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, "user");
    assert_eq!(messages[1].sender, "ai");
}

#[tokio::test]
async fn chat_oversized_message_is_400_with_no_writes() {
    let state = test_state(vec![text_reply("unused")]).await;
    let app = routes::build(Arc::clone(&state));

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({ "message": "x".repeat(33 * 1024), "history": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(state.store.count_messages().await.unwrap(), 0);
}

#[tokio::test]
async fn chat_unknown_conversation_is_404() {
    let app = routes::build(test_state(vec![text_reply("unused")]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({
                "message": "hello",
                "history": [],
                "conversationId": "no-such-conversation",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_provider_failure_is_generic_500() {
    // Empty script → the provider errors on the first call.
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({ "message": "hello", "history": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn chat_save_itinerary_tool_persists_a_record() {
    let (state, provider) = test_state_with_provider(vec![
        tool_reply(
            "save_itinerary",
            serde_json::json!({
                "title": "Kyoto in autumn",
                "destination": "Kyoto",
                "duration_days": 5,
                "travel_style": "cultural",
                "budget_range": "mid-range",
            }),
        ),
        text_reply("Saved! Five days of temples and kaiseki."),
    ])
    .await;
    let app = routes::build(Arc::clone(&state));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/chat",
            serde_json::json!({ "message": "book it in", "history": [] }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The model saw the tool's confirmation string on the second request.
    {
        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        let tool_msg = requests[1]
            .messages
            .iter()
            .find(|m| m.role == Role::Tool)
            .expect("tool result message");
        assert_eq!(
            tool_msg.content.as_deref(),
            Some("Saved the itinerary 'Kyoto in autumn': 5 days in Kyoto."),
        );
    }

    let response = app.oneshot(get_request("/v1/itineraries")).await.unwrap();
    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["destination"], "Kyoto");
    assert_eq!(items[0]["duration_days"], 5);
}

// ── Conversations ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn conversations_create_then_fetch_with_messages() {
    let app = routes::build(test_state(vec![]).await);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/conversations",
            serde_json::json!({ "title": "Trip planning" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_owned();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/v1/conversations/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["conversation"]["title"], "Trip planning");
    assert!(body["messages"].as_array().unwrap().is_empty());

    let response = app.oneshot(get_request("/v1/conversations")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn conversation_fetch_unknown_is_404() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(get_request("/v1/conversations/nope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ── Events ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn events_listing_returns_seed_rows() {
    let app = routes::build(test_state(vec![]).await);
    let response = app.oneshot(get_request("/v1/events")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 5);
    assert!(events.iter().all(|e| e["title"].is_string() && e["venue"].is_string()));
}

// ── Discover catalog ──────────────────────────────────────────────────────────

#[tokio::test]
async fn discover_filters_by_category() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(get_request("/v1/discover/events?category=music"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let events = body.as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e["category"] == "music"));
}

#[tokio::test]
async fn discover_non_numeric_id_is_404_with_exact_body() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(get_request("/v1/discover/events/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Event not found." }));
}

// ── Itinerary generation ──────────────────────────────────────────────────────

#[tokio::test]
async fn generate_relaxed_three_days() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/itineraries/generate",
            serde_json::json!({
                "interests": ["food", "music"],
                "duration_days": 3,
                "pace": "relaxed",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 3);
    for day in days {
        let activities = day["activities"].as_array().unwrap();
        assert!((2..=4).contains(&activities.len()));
    }
    // Round-robin: first two slots cover both interests in order.
    assert_eq!(days[0]["activities"][0]["interest"], "food");
    assert_eq!(days[0]["activities"][1]["interest"], "music");
}

#[tokio::test]
async fn generate_unknown_pace_is_422() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/itineraries/generate",
            serde_json::json!({
                "interests": ["food"],
                "duration_days": 2,
                "pace": "extreme",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn generate_accepts_thirty_days_but_caps_there() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/itineraries/generate",
            serde_json::json!({
                "interests": ["food"],
                "duration_days": 30,
                "pace": "moderate",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["days"].as_array().unwrap().len(), 30);

    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/itineraries/generate",
            serde_json::json!({
                "interests": ["food"],
                "duration_days": 31,
                "pace": "moderate",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn generate_non_positive_duration_is_422() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/itineraries/generate",
            serde_json::json!({
                "interests": ["food"],
                "duration_days": 0,
                "pace": "relaxed",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Community posts ───────────────────────────────────────────────────────────

#[tokio::test]
async fn post_with_ftp_url_is_422() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/posts",
            serde_json::json!({ "media_url": "ftp://x", "caption": "sunset" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn post_with_valid_url_is_201_with_positive_id() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/v1/posts",
            serde_json::json!({
                "media_url": "https://cdn.example.com/p.jpg",
                "caption": "sunset over the harbour",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);

    let response = app.oneshot(get_request("/v1/posts")).await.unwrap();
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn post_with_empty_caption_is_422() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .oneshot(json_request(
            "POST",
            "/v1/posts",
            serde_json::json!({ "media_url": "https://cdn.example.com/p.jpg", "caption": "  " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ── Profiles ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn profile_upsert_then_get() {
    let app = routes::build(test_state(vec![]).await);
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/v1/profiles/traveler-1",
            serde_json::json!({ "display_name": "Alex", "bio": "always packing" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/v1/profiles/traveler-1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["display_name"], "Alex");
    assert_eq!(body["bio"], "always packing");
}

#[tokio::test]
async fn profile_unknown_is_404() {
    let app = routes::build(test_state(vec![]).await);
    let response = app.oneshot(get_request("/v1/profiles/ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
