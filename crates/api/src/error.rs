use std::io;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::request::ParameterError;
use crate::state::StartRunError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
    #[error("run id space exhausted")]
    RunIdOverflow,
    #[error("failed to encode export: {0}")]
    Export(#[from] io::Error),
}

impl From<StartRunError> for ApiError {
    fn from(err: StartRunError) -> Self {
        match err {
            StartRunError::RunIdOverflow => Self::RunIdOverflow,
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            Self::RunIdOverflow | Self::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "simulation request failed");
        }

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::request::ParameterError;

    use super::ApiError;

    #[test]
    fn parameter_errors_map_to_bad_request() {
        let err = ApiError::from(ParameterError::NotFinite { name: "fair_price" });

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "invalid parameter: fair_price must be a finite number"
        );
    }

    #[test]
    fn overflow_maps_to_internal_error() {
        assert_eq!(
            ApiError::RunIdOverflow.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
