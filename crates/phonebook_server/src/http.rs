//! HTTP surface of the phonebook service.
//!
//! A thin translation layer: verbs and paths map onto `PersonStore`
//! operations, store outcomes map onto status codes and `{"error": ...}`
//! bodies. All directory invariants live in the store; nothing here may
//! touch the collection directly.

use crate::error::StoreError;
use crate::store::PersonStore;
use axum::body::HttpBody;
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use phonebook_api::{ErrorBody, Person, PersonId};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Builds the phonebook router with request logging enabled.
pub fn router(store: Arc<PersonStore>) -> Router {
    router_with(store, true)
}

/// Builds the phonebook router, optionally without the request log layer.
///
/// The fallback applies per method as well as per path: a `PUT` to a
/// known path is just as much outside the surface as an unknown path.
pub fn router_with(store: Arc<PersonStore>, log_requests: bool) -> Router {
    let router = Router::new()
        .route("/", get(root).fallback(unknown_endpoint))
        .route("/info", get(info_page).fallback(unknown_endpoint))
        .route(
            "/api/persons",
            get(list_persons)
                .post(create_person)
                .fallback(unknown_endpoint),
        )
        .route(
            "/api/persons/:id",
            get(get_person)
                .delete(delete_person)
                .fallback(unknown_endpoint),
        )
        .fallback(unknown_endpoint)
        .with_state(store);

    if log_requests {
        router.layer(middleware::from_fn(log_request))
    } else {
        router
    }
}

/// `GET /` - liveness text.
async fn root() -> &'static str {
    "Phonebook backend is running"
}

/// `GET /info` - entry count plus server time, as HTML.
async fn info_page(State(store): State<Arc<PersonStore>>) -> Html<String> {
    let count = store.len();
    let now = chrono::Local::now();
    Html(format!(
        "<div><p>Phonebook has info for {count} people</p><p>{now}</p></div>"
    ))
}

/// `GET /api/persons` - the whole directory in insertion order.
async fn list_persons(State(store): State<Arc<PersonStore>>) -> Json<Vec<Person>> {
    Json(store.list())
}

/// `GET /api/persons/:id` - one record.
async fn get_person(State(store): State<Arc<PersonStore>>, Path(id): Path<String>) -> Response {
    match store.get(&PersonId::new(id)) {
        Some(person) => Json(person).into_response(),
        None => store_error(StoreError::NotFound),
    }
}

/// `POST /api/persons` - create a record.
///
/// The body is taken as loose JSON so that absent or non-string fields
/// surface as the contract's own `{"error": "name missing"}` payloads
/// instead of extractor rejections. Any client-supplied id is ignored.
async fn create_person(State(store): State<Arc<PersonStore>>, Json(body): Json<Value>) -> Response {
    debug!(body = %body, "create request");

    let name = body.get("name").and_then(Value::as_str).unwrap_or("");
    let number = body.get("number").and_then(Value::as_str).unwrap_or("");

    match store.create(name, number) {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(err) => store_error(err),
    }
}

/// `DELETE /api/persons/:id` - remove a record.
async fn delete_person(State(store): State<Arc<PersonStore>>, Path(id): Path<String>) -> Response {
    match store.remove(&PersonId::new(id)) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error(err),
    }
}

/// Catch-all for anything outside the API surface.
async fn unknown_endpoint() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("unknown endpoint")),
    )
        .into_response()
}

/// Maps a store failure onto its status code and wire body.
fn store_error(err: StoreError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(ErrorBody::new(err.to_string()))).into_response()
}

/// One log line per handled request, in the classic
/// `method url status length - time ms` shape.
async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    let length = response.body().size_hint().exact().unwrap_or(0);
    info!(
        method = %method,
        url = %uri,
        status = response.status().as_u16(),
        length,
        elapsed_ms,
        "handled request"
    );
    response
}
