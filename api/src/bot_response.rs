use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum BotResponse {
    Text { text: String },
    Status { status: String },
}

impl BotResponse {
    pub fn text(text: impl Into<String>) -> Self {
        BotResponse::Text { text: text.into() }
    }

    pub fn ignored() -> Self {
        BotResponse::Status {
            status: "ignored".to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Any failure while answering. The cause is logged, never sent back.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to answer message: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_without_variant_tags() {
        assert_eq!(
            serde_json::to_value(BotResponse::text("Save 20%.")).unwrap(),
            json!({ "text": "Save 20%." })
        );
        assert_eq!(
            serde_json::to_value(BotResponse::ignored()).unwrap(),
            json!({ "status": "ignored" })
        );
    }

    #[test]
    fn internal_error_hides_cause() {
        let response = ApiError::from(anyhow::anyhow!("Gemini API error (503): secret detail"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
