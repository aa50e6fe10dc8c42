//! Handler tests for the Events domain
//!
//! Drive the router with `oneshot` over the in-memory repository and check
//! status codes, the response envelope and the payload shapes.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_events::{
    Event, EventError, EventInput, EventRepository, EventResult, EventService,
    InMemoryEventRepository, handlers,
};
use http_body_util::BodyExt;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use std::time::Duration;
use test_utils::assertions::{assert_hex_id, assert_some};
use tower::ServiceExt; // For oneshot()

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(EventService::new(InMemoryEventRepository::new()))
}

fn launch() -> Value {
    json!({
        "title": "Launch",
        "date": "2025-01-01",
        "time": "10:00",
        "location": "HQ",
        "amount": "0"
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, json_body(response.into_body()).await)
}

async fn create(app: &Router, body: Value) -> String {
    let (status, json) = send(app, "POST", "/event", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    json["data"]["data"]["InsertedID"]
        .as_str()
        .expect("InsertedID should be a string")
        .to_string()
}

#[tokio::test]
async fn test_create_returns_201_with_inserted_id() {
    let app = app();

    let (status, json) = send(&app, "POST", "/event", Some(launch())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["status"], 201);
    assert_eq!(json["message"], "success");
    let id = assert_some(json["data"]["data"]["InsertedID"].as_str(), "InsertedID");
    assert_hex_id(id, "InsertedID");
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = app();
    let id = create(&app, launch()).await;

    let (status, json) = send(&app, "GET", &format!("/event/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "success");
    let event = &json["data"]["data"];
    assert_eq!(event["id"], id);
    assert_eq!(event["title"], "Launch");
    assert_eq!(event["date"], "2025-01-01");
    assert_eq!(event["time"], "10:00");
    assert_eq!(event["location"], "HQ");
    assert_eq!(event["amount"], "0");
    assert_eq!(event["description"], "");
}

#[tokio::test]
async fn test_create_missing_field_returns_400_and_persists_nothing() {
    let app = app();
    let mut body = launch();
    body.as_object_mut().unwrap().remove("location");

    let (status, json) = send(&app, "POST", "/event", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "error");
    assert!(
        json["data"]["data"]
            .as_str()
            .unwrap()
            .contains("location")
    );

    let (_, list) = send(&app, "GET", "/events", None).await;
    assert_eq!(list["data"]["data"], json!([]));
}

#[tokio::test]
async fn test_create_empty_field_returns_400() {
    let app = app();
    let mut body = launch();
    body["amount"] = json!("");

    let (status, json) = send(&app, "POST", "/event", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "error");
}

#[tokio::test]
async fn test_create_malformed_json_returns_400_envelope() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/event")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response.into_body()).await;
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "error");
    assert!(json["data"]["data"].is_string());
}

#[tokio::test]
async fn test_create_wrong_field_type_returns_400() {
    let app = app();
    let mut body = launch();
    body["amount"] = json!(42);

    let (status, json) = send(&app, "POST", "/event", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_create_without_content_type_returns_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/event")
        .body(Body::from(launch().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_unknown_id_returns_500_no_documents() {
    let app = app();

    let (status, json) = send(
        &app,
        "GET",
        &format!("/event/{}", ObjectId::new().to_hex()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert_eq!(json["message"], "error");
    assert_eq!(json["data"]["data"], "mongo: no documents in result");
}

#[tokio::test]
async fn test_get_malformed_id_returns_500_no_documents() {
    let app = app();
    create(&app, launch()).await;

    let (status, json) = send(&app, "GET", "/event/not-an-id", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["data"]["data"], "mongo: no documents in result");
}

#[tokio::test]
async fn test_update_existing_returns_updated_event() {
    let app = app();
    let id = create(&app, launch()).await;

    let mut body = launch();
    body["title"] = json!("Relaunch");
    body["description"] = json!("second try");

    let (status, json) = send(&app, "PUT", &format!("/event/{id}"), Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "success");
    let event = &json["data"]["data"];
    assert_eq!(event["id"], id);
    assert_eq!(event["title"], "Relaunch");
    assert_eq!(event["description"], "second try");

    let (_, fetched) = send(&app, "GET", &format!("/event/{id}"), None).await;
    assert_eq!(fetched["data"]["data"]["title"], "Relaunch");
}

#[tokio::test]
async fn test_update_unknown_id_returns_200_empty_event() {
    let app = app();

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/event/{}", ObjectId::new().to_hex()),
        Some(launch()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], 200);
    assert_eq!(json["data"]["data"], json!({ "description": "" }));
}

#[tokio::test]
async fn test_update_malformed_id_returns_200_empty_event() {
    let app = app();
    create(&app, launch()).await;

    let (status, json) = send(&app, "PUT", "/event/xyz", Some(launch())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["data"], json!({ "description": "" }));
}

#[tokio::test]
async fn test_update_invalid_body_returns_400() {
    let app = app();
    let id = create(&app, launch()).await;

    let (status, json) = send(
        &app,
        "PUT",
        &format!("/event/{id}"),
        Some(json!({ "title": "Only a title" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "error");

    let (_, fetched) = send(&app, "GET", &format!("/event/{id}"), None).await;
    assert_eq!(fetched["data"]["data"]["title"], "Launch");
}

#[tokio::test]
async fn test_delete_existing_then_get_fails() {
    let app = app();
    let id = create(&app, launch()).await;

    let (status, json) = send(&app, "DELETE", &format!("/event/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({
            "status": 200,
            "message": "success",
            "data": { "data": "Event successfully deleted!" }
        })
    );

    let (status, json) = send(&app, "GET", &format!("/event/{id}"), None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["data"]["data"], "mongo: no documents in result");
}

#[tokio::test]
async fn test_delete_unknown_id_returns_404() {
    let app = app();

    let (status, json) = send(
        &app,
        "DELETE",
        &format!("/event/{}", ObjectId::new().to_hex()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json,
        json!({
            "status": 404,
            "message": "error",
            "data": { "data": "Event with specified ID not found!" }
        })
    );
}

#[tokio::test]
async fn test_delete_malformed_id_returns_404() {
    let app = app();
    create(&app, launch()).await;

    let (status, _) = send(&app, "DELETE", "/event/12345", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_utf8_id_is_answered_in_envelope() {
    let app = app();
    create(&app, launch()).await;

    for uri in ["/event/%FF", "/event/%C3%28"] {
        let (status, json) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "GET {uri}");
        assert_eq!(
            json,
            json!({
                "status": 500,
                "message": "error",
                "data": { "data": "mongo: no documents in result" }
            })
        );

        let (status, json) = send(&app, "PUT", uri, Some(launch())).await;
        assert_eq!(status, StatusCode::OK, "PUT {uri}");
        assert_eq!(json["message"], "success");
        assert_eq!(json["data"]["data"], json!({ "description": "" }));

        let (status, json) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");
        assert_eq!(json["data"]["data"], "Event with specified ID not found!");
    }

    let (_, list) = send(&app, "GET", "/events", None).await;
    assert_eq!(list["data"]["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_empty_returns_empty_array() {
    let app = app();

    let (status, json) = send(&app, "GET", "/events", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "success");
    assert_eq!(json["data"]["data"], json!([]));
}

#[tokio::test]
async fn test_list_returns_all_created_events() {
    let app = app();
    for title in ["First", "Second", "Third"] {
        let mut body = launch();
        body["title"] = json!(title);
        create(&app, body).await;
    }

    let (status, json) = send(&app, "GET", "/events", None).await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json["data"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

/// Store whose every call fails or stalls, to exercise the 500 paths
struct BrokenRepository {
    stall: bool,
}

#[async_trait]
impl EventRepository for BrokenRepository {
    async fn insert(&self, _input: EventInput) -> EventResult<ObjectId> {
        Err(EventError::Store("connection refused".into()))
    }

    async fn find_by_id(&self, _id: ObjectId) -> EventResult<Option<Event>> {
        Err(EventError::Store("connection refused".into()))
    }

    async fn update_fields(&self, _id: ObjectId, _input: EventInput) -> EventResult<u64> {
        Err(EventError::Store("connection refused".into()))
    }

    async fn delete(&self, _id: ObjectId) -> EventResult<u64> {
        Err(EventError::Store("connection refused".into()))
    }

    async fn find_all(&self) -> EventResult<Vec<Event>> {
        if self.stall {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }
        Err(EventError::Store(
            "invalid type: integer `42`, expected a string".into(),
        ))
    }
}

#[tokio::test]
async fn test_store_failures_return_500_envelope() {
    let app = handlers::router(EventService::new(BrokenRepository { stall: false }));
    let id = ObjectId::new().to_hex();

    for (method, uri, body) in [
        ("POST", "/event".to_string(), Some(launch())),
        ("PUT", format!("/event/{id}"), Some(launch())),
        ("DELETE", format!("/event/{id}"), None),
        ("GET", "/events".to_string(), None),
    ] {
        let (status, json) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{method} {uri}");
        assert_eq!(json["status"], 500);
        assert_eq!(json["message"], "error");
    }
}

#[tokio::test]
async fn test_store_timeout_returns_500_envelope() {
    let service = EventService::new(BrokenRepository { stall: true })
        .with_timeout(Duration::from_millis(20));
    let app = handlers::router(service);

    let (status, json) = send(&app, "GET", "/events", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], "error");
    assert!(
        json["data"]["data"]
            .as_str()
            .unwrap()
            .contains("timed out")
    );
}
