use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use ring::signature::{Ed25519KeyPair, KeyPair};
use roll_bot::{create_router, AppState, FormatStyle, SignatureVerifier};
use serde_json::{json, Value};
use tower::ServiceExt;

const TIMESTAMP: &str = "1700000000";

fn key_pair() -> Ed25519KeyPair {
    Ed25519KeyPair::from_seed_unchecked(&[42u8; 32]).unwrap()
}

fn app(style: FormatStyle) -> Router {
    let public_key = hex::encode(key_pair().public_key());
    let verifier = SignatureVerifier::from_hex(&public_key).unwrap();
    create_router(AppState::new(verifier, style))
}

fn sign(timestamp: &str, body: &str) -> String {
    let mut message = timestamp.as_bytes().to_vec();
    message.extend_from_slice(body.as_bytes());
    hex::encode(key_pair().sign(&message).as_ref())
}

fn signed_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/interactions")
        .header("content-type", "application/json")
        .header("X-Signature-Ed25519", sign(TIMESTAMP, body))
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn roll_body(dice: &str) -> String {
    json!({
        "type": 2,
        "data": {
            "name": "roll",
            "options": [{ "name": "dice", "type": 3, "value": dice }]
        }
    })
    .to_string()
}

#[tokio::test]
async fn test_ping_returns_pong() {
    let (status, body) = send_json(
        app(FormatStyle::Plain),
        signed_request(r#"{"type":1}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "type": 1 }));
}

#[tokio::test]
async fn test_roll_end_to_end() {
    let (status, body) = send_json(app(FormatStyle::Plain), signed_request(&roll_body("2d6+2"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], 4);

    let content = body["data"]["content"].as_str().unwrap();
    assert!(content.contains("2d6+2"));

    let rolls: Vec<i64> = content[content.find('[').unwrap() + 1..content.find(']').unwrap()]
        .split(", ")
        .map(|r| r.parse().unwrap())
        .collect();
    assert_eq!(rolls.len(), 2);
    assert!(rolls.iter().all(|r| (1..=6).contains(r)));

    let total: i64 = content.rsplit("**").nth(1).unwrap().parse().unwrap();
    assert_eq!(total, rolls.iter().sum::<i64>() + 2);
    assert!((4..=14).contains(&total));
}

#[tokio::test]
async fn test_roll_table_format() {
    let (status, body) = send_json(app(FormatStyle::Table), signed_request(&roll_body("3d6"))).await;

    assert_eq!(status, StatusCode::OK);
    let content = body["data"]["content"].as_str().unwrap();
    assert!(content.starts_with("```"));
    assert!(content.contains("3d6"));
    assert!(["FAILED", "MIXED SUCCESS", "FULL SUCCESS"]
        .iter()
        .any(|tier| content.contains(tier)));
}

#[tokio::test]
async fn test_invalid_notation_is_a_chat_message() {
    let (status, body) = send_json(app(FormatStyle::Plain), signed_request(&roll_body("xyz"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["type"], 4);
    let content = body["data"]["content"].as_str().unwrap();
    assert!(content.contains("xyz"));
    assert!(content.contains("2d6"));
    assert!(content.contains("3d8-2"));
}

#[tokio::test]
async fn test_unknown_command() {
    let body = json!({ "type": 2, "data": { "name": "flip" } }).to_string();
    let (status, body) = send_json(app(FormatStyle::Plain), signed_request(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "type": 4, "data": { "content": "Unknown command" } }));
}

#[tokio::test]
async fn test_missing_headers_rejected_before_parsing() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/interactions")
        .body(Body::from("this is not json"))
        .unwrap();

    let (status, _) = send(app(FormatStyle::Plain), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_tampered_body_rejected() {
    let signature = sign(TIMESTAMP, r#"{"type":1}"#);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("X-Signature-Ed25519", signature)
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(roll_body("1d20")))
        .unwrap();

    let (status, _) = send(app(FormatStyle::Plain), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_signature_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header("X-Signature-Ed25519", "zz")
        .header("X-Signature-Timestamp", TIMESTAMP)
        .body(Body::from(r#"{"type":1}"#))
        .unwrap();

    let (status, _) = send(app(FormatStyle::Plain), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_method() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/interactions")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(app(FormatStyle::Plain), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_signed_but_malformed_payload() {
    let (status, _) = send(app(FormatStyle::Plain), signed_request("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(app(FormatStyle::Plain), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}
