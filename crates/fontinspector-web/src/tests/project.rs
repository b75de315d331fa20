use axum::http::StatusCode;
use tower::ServiceExt;

use fontinspector_core::models::{Inspection, Project};

use super::harness::{TestHarness, decode_json, get_request, json_request};

#[tokio::test]
async fn create_then_get_project_round_trips() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/project/create",
            serde_json::json!({
                "name": "marketing",
                "urls": ["https://example.com/", "https://example.com/pricing"],
            }),
        ))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::OK);
    let created: Project = decode_json(response).await;
    assert_eq!(created.inspection_ids.len(), 2);

    let response = harness
        .router
        .clone()
        .oneshot(get_request(&format!("/api/project?id={}", created.id)))
        .await
        .expect("get response");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Project = decode_json(response).await;
    assert_eq!(fetched.name, "marketing");

    let response = harness
        .router
        .clone()
        .oneshot(get_request("/api/projects"))
        .await
        .expect("list response");
    let listed: Vec<Project> = decode_json(response).await;
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn create_project_with_blank_name_is_bad_request() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/project/create",
            serde_json::json!({ "name": "  ", "urls": [] }),
        ))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload: serde_json::Value = decode_json(response).await;
    assert_eq!(payload["code"], "VALIDATION_FAILED");
    assert_eq!(payload["operation"], "project.create");
}

#[tokio::test]
async fn missing_project_is_not_found() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(get_request("/api/project?id=nope"))
        .await
        .expect("get response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload: serde_json::Value = decode_json(response).await;
    assert_eq!(payload["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_inspection_validates_the_url() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/inspection/create",
            serde_json::json!({ "url": "ftp://example.com/" }),
        ))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/inspection/create",
            serde_json::json!({ "url": "https://example.com/" }),
        ))
        .await
        .expect("create response");
    assert_eq!(response.status(), StatusCode::OK);
    let inspection: Inspection = decode_json(response).await;
    assert_eq!(inspection.status.as_str(), "pending");
}

#[tokio::test]
async fn delete_project_clears_back_references() {
    let harness = TestHarness::setup();
    let (project_id, inspection_ids) =
        harness.seed_project("doomed", &["https://example.com/"]);

    let response = harness
        .router
        .clone()
        .oneshot(json_request(
            "/api/project/delete",
            serde_json::json!({ "id": project_id }),
        ))
        .await
        .expect("delete response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = harness
        .router
        .clone()
        .oneshot(get_request(&format!(
            "/api/inspection?id={}",
            inspection_ids[0]
        )))
        .await
        .expect("get inspection");
    let inspection: Inspection = decode_json(response).await;
    assert!(inspection.project_id.is_none());
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let harness = TestHarness::setup();
    let response = harness
        .router
        .clone()
        .oneshot(get_request("/"))
        .await
        .expect("index response");
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(
        headers
            .get("x-content-type-options")
            .and_then(|value| value.to_str().ok()),
        Some("nosniff")
    );
    assert!(headers.contains_key("content-security-policy"));
}
