// HTTP API tests, driven in-process through the router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use legal_sentiment::server::{router, AppState};
use legal_sentiment::{
    AnalyzerError, LazyClassifier, LegalSentimentAnalyzer, Result, SentimentClassifier,
    SharedClassifier,
};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const BOUNDARY: &str = "legal-sentiment-test-boundary";

struct KeywordClassifier;

impl SentimentClassifier for KeywordClassifier {
    fn classify(&self, sentence: &str) -> Result<String> {
        Ok(if sentence.contains("granted") {
            "Positive"
        } else if sentence.contains("denied") {
            "Negative"
        } else {
            "Neutral"
        }
        .to_string())
    }
}

/// Lazy classifier that counts how many times its loader ran.
fn counting_classifier(loads: Arc<AtomicUsize>) -> LazyClassifier {
    LazyClassifier::new(move || {
        loads.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(100));
        Ok(Arc::new(KeywordClassifier) as SharedClassifier)
    })
}

fn app_with(classifier: LazyClassifier, upload_dir: &Path) -> Router {
    let state = AppState::new(LegalSentimentAnalyzer::new(classifier)).with_upload_dir(upload_dir);
    router(state)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn text_request(text: &str) -> Request<Body> {
    Request::post("/analyze_text")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "text": text }).to_string()))
        .unwrap()
}

fn upload_request(filename: &str, contents: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    );
    Request::post("/analyze_file")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn dir_is_empty(dir: &Path) -> bool {
    std::fs::read_dir(dir).unwrap().next().is_none()
}

#[tokio::test]
async fn root_reports_status() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let (status, body) = send(app, Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Backend is running 🚀" }));
}

#[tokio::test]
async fn ping_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let (status, body) = send(app, Request::post("/ping").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn analyze_text_returns_results_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let (status, body) = send(
        app,
        text_request("The motion was granted. The appeal was granted too. Denied."),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"],
        json!([
            { "text": "The motion was granted", "sentiment": "Positive" },
            { "text": " The appeal was granted too", "sentiment": "Positive" }
        ])
    );
    let summary = body["summary"].as_str().unwrap();
    assert!(summary.contains("Total Segments Analyzed: 2"));
    assert!(summary.contains("predominantly positive"));
}

#[tokio::test]
async fn concurrent_first_requests_load_the_model_once() {
    let dir = tempfile::tempdir().unwrap();
    let loads = Arc::new(AtomicUsize::new(0));
    let app = app_with(counting_classifier(Arc::clone(&loads)), dir.path());

    let requests = (0..8).map(|_| {
        send(
            app.clone(),
            text_request("The petition for review was denied."),
        )
    });
    let responses = futures::future::join_all(requests).await;

    for (status, body) in responses {
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["results"][0]["sentiment"], "Negative");
    }
    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn model_failure_is_reported_without_retry() {
    let dir = tempfile::tempdir().unwrap();
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&attempts);
    let failing = LazyClassifier::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        Err(AnalyzerError::Download("connection refused".to_string()))
    });
    let app = app_with(failing, dir.path());

    for _ in 0..2 {
        let (status, body) = send(
            app.clone(),
            text_request("The settlement terms are acceptable."),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Sentiment model unavailable"));
        assert!(error.contains("connection refused"));
    }
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unsupported_upload_is_rejected_before_staging() {
    let dir = tempfile::tempdir().unwrap();
    let loads = Arc::new(AtomicUsize::new(0));
    let app = app_with(counting_classifier(Arc::clone(&loads)), dir.path());

    let (status, body) = send(app, upload_request("report.pdf", "%PDF-1.4")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "Only TXT or CSV files allowed" }));
    assert!(dir_is_empty(dir.path()));
    assert_eq!(loads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn csv_upload_is_analyzed_and_cleaned_up() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let csv = "text\nThe claim was denied with prejudice.\nThe license was granted on appeal.\n";
    let (status, body) = send(app, upload_request("rulings.csv", csv)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["results"],
        json!([
            { "text": "The claim was denied with prejudice.", "sentiment": "Negative" },
            { "text": "The license was granted on appeal.", "sentiment": "Positive" }
        ])
    );
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .contains("balanced or neutral tone"));
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn csv_upload_without_text_column_reports_error_and_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let (status, body) = send(
        app,
        upload_request("rulings.csv", "body\nThe claim was denied with prejudice.\n"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "error": "CSV file must contain a 'text' column." }));
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn txt_upload_uses_sentence_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let (status, body) = send(
        app,
        upload_request(
            "brief.txt",
            "Was the motion granted? Yes, it was granted in part.",
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let texts: Vec<_> = body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["text"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        texts,
        vec!["Was the motion granted?", "Yes, it was granted in part."]
    );
    assert!(dir_is_empty(dir.path()));
}

#[tokio::test]
async fn upload_without_file_field_is_unprocessable() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with(counting_classifier(Arc::default()), dir.path());

    let body = format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nvalue\r\n--{BOUNDARY}--\r\n");
    let request = Request::post("/analyze_file")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();

    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("file"));
}

#[tokio::test]
async fn malformed_text_body_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let loads = Arc::new(AtomicUsize::new(0));
    let app = app_with(counting_classifier(Arc::clone(&loads)), dir.path());

    let request = Request::post("/analyze_text")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"body": "The motion was granted."}"#))
        .unwrap();
    let (status, body) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("text"));

    let request = Request::post("/analyze_text")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    assert_eq!(loads.load(Ordering::SeqCst), 0);
}
