pub mod booking;

pub use booking::{BookingConfirmation, BookingDetails, BookingRequest, ContactName};
