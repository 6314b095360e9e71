use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Inbound `/book` payload. Fields stay optional at the serde boundary so
/// each absence can be reported as its own 400.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "selectedSlot")]
    pub selected_slot: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookingDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub selected_slot: String,
}

impl BookingRequest {
    pub fn validate(self) -> Result<BookingDetails, AppError> {
        Ok(BookingDetails {
            name: self.name.ok_or(AppError::MissingField("name"))?,
            phone: self.phone.ok_or(AppError::MissingField("phone"))?,
            email: self.email.ok_or(AppError::MissingField("email"))?,
            selected_slot: self
                .selected_slot
                .ok_or(AppError::MissingField("selectedSlot"))?,
        })
    }
}

/// First/last split of a full name as the CRM expects it: first token is the
/// first name, everything else joins into the last name.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactName {
    pub first: String,
    pub last: String,
}

impl ContactName {
    pub fn split(full: &str) -> Self {
        let mut tokens = full.split_whitespace();
        let first = tokens.next().unwrap_or_default().to_string();
        let last = tokens.collect::<Vec<_>>().join(" ");
        Self { first, last }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingConfirmation {
    pub success: bool,
    pub message: String,
    pub scheduled_time: String,
    pub appointment: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multi_token_name() {
        let name = ContactName::split("Jane Doe Smith");
        assert_eq!(name.first, "Jane");
        assert_eq!(name.last, "Doe Smith");
    }

    #[test]
    fn test_split_single_token_name() {
        let name = ContactName::split("Prince");
        assert_eq!(name.first, "Prince");
        assert_eq!(name.last, "");
    }

    #[test]
    fn test_split_collapses_extra_whitespace() {
        let name = ContactName::split("  Ada   Lovelace ");
        assert_eq!(name.first, "Ada");
        assert_eq!(name.last, "Lovelace");
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let request = BookingRequest {
            name: Some("Jane Doe".to_string()),
            phone: None,
            email: None,
            selected_slot: None,
        };
        let err = request.validate().unwrap_err();
        assert!(matches!(err, AppError::MissingField("phone")));
    }
}
