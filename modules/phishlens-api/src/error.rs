use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use phishlens_common::AnalyzeError;

/// HTTP face of an [`AnalyzeError`]: status code plus the `ErrorResult` body.
#[derive(Debug)]
pub struct ApiError(pub AnalyzeError);

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(kind = self.0.kind(), "Analysis failed: {}", self.0);
        }

        (status, Json(self.0.to_error_result())).into_response()
    }
}
