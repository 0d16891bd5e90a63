use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use scholora_core::model::VoiceCommand;
use serde_json::json;
use services::{VoiceAssistantClient, VoiceAssistantConfig, VoiceAssistantError};

type Hits = Arc<Mutex<Vec<&'static str>>>;

async fn spawn_stub(stop_status: StatusCode) -> (String, Hits) {
    let hits: Hits = Arc::new(Mutex::new(Vec::new()));
    let start_hits = Arc::clone(&hits);
    let stop_hits = Arc::clone(&hits);

    let app = Router::new()
        .route(
            "/api/start-voicebot",
            post(move || {
                let hits = Arc::clone(&start_hits);
                async move {
                    hits.lock().unwrap().push("start");
                    Json(json!({ "message": "Voicebot started" }))
                }
            }),
        )
        .route(
            "/api/stop-voicebot",
            post(move || {
                let hits = Arc::clone(&stop_hits);
                async move {
                    hits.lock().unwrap().push("stop");
                    (stop_status, Json(json!({ "message": "Voicebot stopped" })))
                }
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), hits)
}

#[tokio::test]
async fn start_and_stop_hit_their_endpoints() {
    let (base_url, hits) = spawn_stub(StatusCode::OK).await;
    let client = VoiceAssistantClient::new(VoiceAssistantConfig::new(base_url));

    client.send(VoiceCommand::Start).await.unwrap();
    client.send(VoiceCommand::Stop).await.unwrap();

    assert_eq!(*hits.lock().unwrap(), vec!["start", "stop"]);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let (base_url, hits) = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR).await;
    let client = VoiceAssistantClient::new(VoiceAssistantConfig::new(base_url));

    let err = client.send(VoiceCommand::Stop).await.unwrap_err();

    assert!(matches!(
        err,
        VoiceAssistantError::HttpStatus(status) if status == StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(*hits.lock().unwrap(), vec!["stop"]);
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = VoiceAssistantClient::new(VoiceAssistantConfig::new(format!("http://{addr}")));

    let err = client.send(VoiceCommand::Start).await.unwrap_err();
    assert!(matches!(err, VoiceAssistantError::Http(_)));

    // The fire-and-forget path swallows the same failure.
    client.trigger(VoiceCommand::Start).await;
}
