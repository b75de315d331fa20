use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use fontinspector_core::InspectorError;

#[expect(
    clippy::needless_pass_by_value,
    reason = "handlers naturally own error values from `Result` and pass them through"
)]
pub fn inspector_error_response(
    err: InspectorError,
    operation: &str,
    target: Option<String>,
) -> Response {
    let status = status_for_inspector_error(&err);
    let payload = err.to_payload(operation.to_string(), target);
    (status, Json(payload)).into_response()
}

fn status_for_inspector_error(err: &InspectorError) -> StatusCode {
    match err {
        InspectorError::InvalidUrl(_) | InspectorError::Validation(_) => StatusCode::BAD_REQUEST,
        InspectorError::NotFound(_) => StatusCode::NOT_FOUND,
        InspectorError::Conflict(_) => StatusCode::CONFLICT,
        InspectorError::Fetch(_) | InspectorError::Http(_) => StatusCode::BAD_GATEWAY,
        InspectorError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
            StatusCode::NOT_FOUND
        }
        InspectorError::Io(_)
        | InspectorError::Json(_)
        | InspectorError::Sqlite(_)
        | InspectorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
