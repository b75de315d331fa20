use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use fontinspector_core::InspectorError;
use fontinspector_core::models::RebuildOptions;

use crate::WebState;
use crate::dto::{
    CreateInspectionRequest, CreateProjectRequest, DeleteProjectRequest, InspectionQuery,
    LinkRequest, ProjectQuery, QueueQuery, RebuildRequest, RunInspectionRequest,
};
use crate::error::inspector_error_response;
use crate::html::{INDEX_CSS, INDEX_HTML, INDEX_JS};

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn index_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        INDEX_CSS,
    )
        .into_response()
}

pub async fn index_js() -> Response {
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "application/javascript; charset=utf-8",
        )],
        INDEX_JS,
    )
        .into_response()
}

pub async fn get_project(
    State(state): State<WebState>,
    Query(query): Query<ProjectQuery>,
) -> Response {
    match state.app.get_project_by_id(&query.id) {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(err) => inspector_error_response(err, "project.get", Some(query.id)),
    }
}

pub async fn list_projects(State(state): State<WebState>) -> Response {
    match state.app.list_projects() {
        Ok(projects) => (StatusCode::OK, Json(projects)).into_response(),
        Err(err) => inspector_error_response(err, "project.list", None),
    }
}

pub async fn create_project(
    State(state): State<WebState>,
    Json(request): Json<CreateProjectRequest>,
) -> Response {
    match state.app.create_project(&request.name, &request.urls) {
        Ok(project) => (StatusCode::OK, Json(project)).into_response(),
        Err(err) => inspector_error_response(err, "project.create", None),
    }
}

pub async fn delete_project(
    State(state): State<WebState>,
    Json(request): Json<DeleteProjectRequest>,
) -> Response {
    match state.app.delete_project(&request.id) {
        Ok(deleted) => (
            StatusCode::OK,
            Json(serde_json::json!({ "deleted": deleted })),
        )
            .into_response(),
        Err(err) => inspector_error_response(err, "project.delete", Some(request.id)),
    }
}

pub async fn get_inspection(
    State(state): State<WebState>,
    Query(query): Query<InspectionQuery>,
) -> Response {
    match state.app.get_inspection_by_id(&query.id) {
        Ok(inspection) => (StatusCode::OK, Json(inspection)).into_response(),
        Err(err) => inspector_error_response(err, "inspection.get", Some(query.id)),
    }
}

pub async fn list_inspections(State(state): State<WebState>) -> Response {
    match state.app.list_inspections() {
        Ok(inspections) => (StatusCode::OK, Json(inspections)).into_response(),
        Err(err) => inspector_error_response(err, "inspection.list", None),
    }
}

pub async fn create_inspection(
    State(state): State<WebState>,
    Json(request): Json<CreateInspectionRequest>,
) -> Response {
    match state
        .app
        .create_inspection(&request.url, request.project_id.as_deref())
    {
        Ok(inspection) => (StatusCode::OK, Json(inspection)).into_response(),
        Err(err) => inspector_error_response(err, "inspection.create", Some(request.url)),
    }
}

/// The runner fetches over the network with a blocking client, so it runs on
/// the blocking pool rather than a runtime worker.
pub async fn run_inspection(
    State(state): State<WebState>,
    Json(request): Json<RunInspectionRequest>,
) -> Response {
    let app = state.app.clone();
    let id = request.id.clone();
    match tokio::task::spawn_blocking(move || app.run_inspection(&id)).await {
        Ok(Ok(inspection)) => (StatusCode::OK, Json(inspection)).into_response(),
        Ok(Err(err)) => inspector_error_response(err, "inspection.run", Some(request.id)),
        Err(join_err) => inspector_error_response(
            InspectorError::Internal(format!("inspection run task failed: {join_err}")),
            "inspection.run",
            Some(request.id),
        ),
    }
}

pub async fn link(State(state): State<WebState>, Json(request): Json<LinkRequest>) -> Response {
    match state.app.link(&request.project_id, &request.inspection_id) {
        Ok(change) => (StatusCode::OK, Json(change)).into_response(),
        Err(err) => inspector_error_response(err, "link.add", Some(request.project_id)),
    }
}

pub async fn unlink(State(state): State<WebState>, Json(request): Json<LinkRequest>) -> Response {
    match state
        .app
        .unlink(&request.project_id, &request.inspection_id)
    {
        Ok(change) => (StatusCode::OK, Json(change)).into_response(),
        Err(err) => inspector_error_response(err, "link.remove", Some(request.project_id)),
    }
}

pub async fn rebuild(
    State(state): State<WebState>,
    Json(request): Json<RebuildRequest>,
) -> Response {
    let options = RebuildOptions {
        dry_run: request.dry_run,
        ..RebuildOptions::default()
    };
    match state.app.rebuild_links_with_options(options) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => inspector_error_response(err, "link.rebuild", None),
    }
}

pub async fn queue(State(state): State<WebState>, Query(query): Query<QueueQuery>) -> Response {
    match state.app.queue_snapshot(query.project_id.as_deref()) {
        Ok(snapshot) => (StatusCode::OK, Json(snapshot)).into_response(),
        Err(err) => inspector_error_response(err, "queue.status", query.project_id),
    }
}
