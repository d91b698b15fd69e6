//! HTTP contract tests against a live listener.

use phonebook_api::{ErrorBody, Person};
use phonebook_server::{router, sample_persons, PersonStore};
use serde_json::json;
use std::sync::Arc;

/// Binds an ephemeral port, serves the store on a background task, and
/// returns the base URL.
async fn start_server(store: Arc<PersonStore>) -> String {
    let app = router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn error_body(response: reqwest::Response) -> String {
    response.json::<ErrorBody>().await.unwrap().error
}

#[tokio::test]
async fn lists_empty_directory_as_json_array() {
    let base = start_server(Arc::new(PersonStore::new())).await;

    let response = reqwest::get(format!("{base}/api/persons")).await.unwrap();
    assert_eq!(response.status(), 200);
    let persons: Vec<Person> = response.json().await.unwrap();
    assert!(persons.is_empty());
}

#[tokio::test]
async fn create_returns_201_with_assigned_id() {
    let store = Arc::new(PersonStore::new());
    let base = start_server(Arc::clone(&store)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"name": "Arto Hellas", "number": "040-123456"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let person: Person = response.json().await.unwrap();
    assert_eq!(person.name, "Arto Hellas");
    assert_eq!(person.number, "040-123456");
    assert!(!person.id.as_str().is_empty());

    let listed: Vec<Person> = reqwest::get(format!("{base}/api/persons"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed, vec![person]);
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let base = start_server(Arc::new(PersonStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"id": "client-pick", "name": "Ada Lovelace", "number": "39-44-5323523"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 201);

    let person: Person = response.json().await.unwrap();
    assert_ne!(person.id.as_str(), "client-pick");
}

#[tokio::test]
async fn create_rejects_missing_fields_with_400() {
    let base = start_server(Arc::new(PersonStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"number": "040-123456"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "name missing");

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"name": "   ", "number": "040-123456"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "name missing");

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"name": "Arto Hellas"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "number missing");
}

#[tokio::test]
async fn create_treats_non_string_fields_as_missing() {
    let base = start_server(Arc::new(PersonStore::new())).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"name": 42, "number": "040-123456"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "name missing");
}

#[tokio::test]
async fn create_rejects_duplicate_name_case_insensitively() {
    let store = Arc::new(PersonStore::with_persons(sample_persons()));
    let base = start_server(Arc::clone(&store)).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/persons"))
        .json(&json!({"name": "  arto HELLAS ", "number": "000"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(error_body(response).await, "name must be unique");
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn get_one_returns_record_or_404() {
    let base = start_server(Arc::new(PersonStore::with_persons(sample_persons()))).await;

    let response = reqwest::get(format!("{base}/api/persons/2")).await.unwrap();
    assert_eq!(response.status(), 200);
    let person: Person = response.json().await.unwrap();
    assert_eq!(person.name, "Ada Lovelace");

    let response = reqwest::get(format!("{base}/api/persons/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(error_body(response).await, "person not found");
}

#[tokio::test]
async fn delete_is_204_then_404() {
    let store = Arc::new(PersonStore::with_persons(sample_persons()));
    let base = start_server(Arc::clone(&store)).await;
    let client = reqwest::Client::new();

    let response = client
        .delete(format!("{base}/api/persons/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);
    assert_eq!(response.bytes().await.unwrap().len(), 0);
    assert_eq!(store.len(), 3);

    // The id is gone: a repeat delete and a fetch both 404.
    let response = client
        .delete(format!("{base}/api/persons/3"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(error_body(response).await, "person not found");

    let response = reqwest::get(format!("{base}/api/persons/3")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn unknown_paths_and_methods_get_the_fallback() {
    let base = start_server(Arc::new(PersonStore::new())).await;
    let client = reqwest::Client::new();

    let response = reqwest::get(format!("{base}/api/nothing")).await.unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(error_body(response).await, "unknown endpoint");

    // Known path, undefined verb.
    let response = client
        .put(format!("{base}/api/persons"))
        .json(&json!({"name": "X", "number": "1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(error_body(response).await, "unknown endpoint");
}

#[tokio::test]
async fn root_reports_liveness_as_text() {
    let base = start_server(Arc::new(PersonStore::new())).await;

    let response = reqwest::get(format!("{base}/")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Phonebook backend is running");
}

#[tokio::test]
async fn info_reports_count_and_time_as_html() {
    let base = start_server(Arc::new(PersonStore::with_persons(sample_persons()))).await;

    let response = reqwest::get(format!("{base}/info")).await.unwrap();
    assert_eq!(response.status(), 200);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.unwrap();
    assert!(body.contains("Phonebook has info for 4 people"));
}
