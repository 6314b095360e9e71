use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct VoiceRequest {
    pub text: Option<String>,
}

pub async fn generate_voice(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VoiceRequest>,
) -> Result<Response, AppError> {
    let text = request.text.ok_or(AppError::MissingField("text"))?;

    let preview: String = text.chars().take(50).collect();
    tracing::info!(preview = %preview, "voice generation request received");

    state.config.require_tts()?;

    let reply = state.tts.synthesize(&text).await?;
    if !reply.is_success() {
        tracing::error!(status = reply.status, "speech synthesis rejected");
        return Err(AppError::VoiceSynthesis {
            status: reply.status,
            details: reply.body_text(),
        });
    }

    tracing::info!("voice successfully generated");

    Ok((
        [
            (header::CONTENT_TYPE, "audio/mpeg"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"voice.mp3\"",
            ),
        ],
        reply.body,
    )
        .into_response())
}
