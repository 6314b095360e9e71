use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing '{0}' field")]
    MissingField(&'static str),

    #[error("Invalid datetime format: {0}")]
    InvalidTimeFormat(String),

    #[error("{0}")]
    Config(String),

    #[error("Failed to generate voice")]
    VoiceSynthesis { status: u16, details: String },

    #[error("Failed to create contact")]
    ContactCreation { status: u16, details: String },

    #[error("Failed to get contact ID")]
    MissingContactId,

    #[error("Failed to book appointment")]
    AppointmentCreation { status: u16, details: String },

    #[error("{0}")]
    Unexpected(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingField(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidTimeFormat(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // The voice endpoint relays the upstream status verbatim.
            AppError::VoiceSynthesis { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            AppError::ContactCreation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingContactId => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::AppointmentCreation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = serde_json::json!({ "error": self.to_string() });
        match &self {
            AppError::VoiceSynthesis { details, .. }
            | AppError::ContactCreation { details, .. }
            | AppError::AppointmentCreation { details, .. } => {
                body["details"] = serde_json::Value::String(details.clone());
            }
            _ => {}
        }

        (status, Json(body)).into_response()
    }
}
