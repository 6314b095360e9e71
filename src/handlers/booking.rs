use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{BookingConfirmation, BookingRequest};
use crate::services::booking;
use crate::state::AppState;

pub async fn book(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingConfirmation>, AppError> {
    let confirmation = booking::book_appointment(&state, request).await?;
    Ok(Json(confirmation))
}
