//! Handlers mounted on an axum router, driven end to end through `oneshot`.

mod common;

use api_responser::{ApiResponse, ErrorContext, Responder, ResponseError};
use axum::{
    body::Body,
    extract::State,
    http::{header, Method, Request, StatusCode},
    routing::{get, post},
    Router,
};
use common::{responder, Person};
use tower::ServiceExt;

async fn show_item(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_show(None::<&Person>)
}

async fn list_items(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_index(&Vec::<Person>::new(), None)
}

async fn show_existing_item(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_show(Some(&Person::new(1, "Test Name")))
}

async fn list_existing_items(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    let people = vec![Person::new(1, "Test Name 1"), Person::new(2, "Test Name 2")];
    r.record_index(&people, None)
}

async fn item_not_found(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_not_found()
}

async fn create_item(State(r): State<Responder>) -> ApiResponse {
    r.record_created()
}

async fn update_item(State(r): State<Responder>) -> ApiResponse {
    r.record_updated()
}

async fn delete_item(State(r): State<Responder>) -> ApiResponse {
    r.record_deleted()
}

async fn cannot_create_item(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_not_created(
        "Can't create item. Name should present",
        ErrorContext::debug("column 'name' should exists"),
    )
}

async fn cannot_update_item(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_not_updated(
        "Can't update item. Name cannot be blank",
        ErrorContext::debug("column 'name' should exists"),
    )
}

async fn cannot_delete_item(State(r): State<Responder>) -> Result<ApiResponse, ResponseError> {
    r.record_not_deleted(
        "Can't delete item. Not permitted",
        ErrorContext::debug("Action not permitted for user id='123'").reported(),
    )
}

fn app() -> Router {
    Router::new()
        .route("/item", get(show_item))
        .route("/items", get(list_items))
        .route("/show_exists_item", get(show_existing_item))
        .route("/show_exists_items", get(list_existing_items))
        .route("/item_not_found", get(item_not_found))
        .route("/create_item", post(create_item))
        .route("/update_item", post(update_item))
        .route("/delete_item", post(delete_item))
        .route("/can_t_create_item", post(cannot_create_item))
        .route("/can_t_update_item", post(cannot_update_item))
        .route("/can_t_delete_item", post(cannot_delete_item))
        .with_state(responder())
}

async fn call(method: Method, path: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn blank_item_show() {
    let (status, content_type, body) = call(Method::GET, "/item").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    assert_eq!(
        body,
        r#"{"status":"success","code":200,"message":"Show","records":null,"records_count":0}"#
    );
}

#[tokio::test]
async fn empty_index() {
    let (status, _, body) = call(Method::GET, "/items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"status":"success","code":200,"message":"List","records":[],"records_count":0}"#
    );
}

#[tokio::test]
async fn existing_item_show() {
    let (status, _, body) = call(Method::GET, "/show_exists_item").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"status":"success","code":200,"message":"Show","records":{"id":1,"name":"Test Name"},"records_count":1}"#
    );
}

#[tokio::test]
async fn existing_items_index() {
    let (status, _, body) = call(Method::GET, "/show_exists_items").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"status":"success","code":200,"message":"List","records":[{"id":1,"name":"Test Name 1"},{"id":2,"name":"Test Name 2"}],"records_count":2}"#
    );
}

#[tokio::test]
async fn mutations_return_bare_status() {
    for (path, expected) in [
        ("/create_item", StatusCode::CREATED),
        ("/update_item", StatusCode::NO_CONTENT),
        ("/delete_item", StatusCode::NO_CONTENT),
    ] {
        let (status, content_type, body) = call(Method::POST, path).await;
        assert_eq!(status, expected, "{path}");
        assert_eq!(content_type, None, "{path}");
        assert_eq!(body, "", "{path}");
    }
}

#[tokio::test]
async fn failed_mutations() {
    for (path, expected, message) in [
        (
            "/can_t_create_item",
            StatusCode::UNPROCESSABLE_ENTITY,
            "Record not created: Can't create item. Name should present",
        ),
        (
            "/can_t_update_item",
            StatusCode::UNPROCESSABLE_ENTITY,
            "Record not updated: Can't update item. Name cannot be blank",
        ),
        (
            "/can_t_delete_item",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Record not deleted: Can't delete item. Not permitted",
        ),
    ] {
        let (status, _, body) = call(Method::POST, path).await;
        assert_eq!(status, expected, "{path}");
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], expected.as_u16());
        assert_eq!(body["message"], message);
        assert!(body.get("debug_message").is_none());
    }
}

#[tokio::test]
async fn record_not_found() {
    let (status, _, body) = call(Method::GET, "/item_not_found").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"status":"error","code":404,"message":"Record not found"}"#);
}
