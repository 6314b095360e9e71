use anyhow::Context;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::{BookingConfirmation, BookingRequest, ContactName};
use crate::services::crm::{AppointmentPayload, ContactPayload};
use crate::services::localtime;
use crate::state::AppState;

const APPOINTMENT_DESCRIPTION: &str = "Appointment booked via voice assistant";

/// The booking workflow: validate, localize the slot, guard configuration,
/// upsert the CRM contact, then create the appointment referencing it. The
/// two CRM calls are strictly sequential — the appointment payload needs the
/// contact id from the first call. A failure after the contact upsert leaves
/// the contact in place; there is no rollback.
pub async fn book_appointment(
    state: &AppState,
    request: BookingRequest,
) -> Result<BookingConfirmation, AppError> {
    let details = request.validate()?;

    tracing::info!(name = %details.name, "booking request received");

    let start_time = localtime::localize_slot(
        &details.selected_slot,
        state.config.default_timezone,
    )?;
    tracing::info!(start_time = %start_time.to_rfc3339(), "appointment time localized");

    state.config.require_crm()?;

    let name = ContactName::split(&details.name);
    let contact = ContactPayload {
        first_name: name.first,
        last_name: name.last,
        email: details.email.clone(),
        phone: details.phone.clone(),
        location_id: state.config.crm_location_id.clone(),
    };

    let reply = state.crm.upsert_contact(&contact).await?;
    if !reply.is_success() {
        tracing::error!(status = reply.status, body = %reply.body, "contact upsert rejected");
        return Err(AppError::ContactCreation {
            status: reply.status,
            details: reply.body,
        });
    }

    let contact_body: Value =
        serde_json::from_str(&reply.body).context("contact response was not valid JSON")?;
    let contact_id = extract_contact_id(&contact_body).ok_or(AppError::MissingContactId)?;

    let appointment = AppointmentPayload {
        calendar_id: state.config.crm_calendar_id.clone(),
        contact_id,
        start_time: start_time.to_rfc3339(),
        title: format!("Appointment with {}", details.name),
        description: APPOINTMENT_DESCRIPTION.to_string(),
        location_id: state.config.crm_location_id.clone(),
    };

    let reply = state.crm.create_appointment(&appointment).await?;
    if !reply.is_success() {
        tracing::error!(status = reply.status, body = %reply.body, "appointment creation rejected");
        return Err(AppError::AppointmentCreation {
            status: reply.status,
            details: reply.body,
        });
    }

    tracing::info!(name = %details.name, "appointment booked");

    let appointment_body: Value =
        serde_json::from_str(&reply.body).context("appointment response was not valid JSON")?;

    Ok(BookingConfirmation {
        success: true,
        message: "Appointment booked successfully".to_string(),
        scheduled_time: start_time.to_rfc3339(),
        appointment: appointment_body,
    })
}

/// The CRM returns the contact id either at the top level or nested under a
/// `contact` object, depending on whether the upsert created or updated.
fn extract_contact_id(body: &Value) -> Option<String> {
    body.get("id")
        .and_then(Value::as_str)
        .or_else(|| {
            body.get("contact")
                .and_then(|c| c.get("id"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
}
