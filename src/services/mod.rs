pub mod booking;
pub mod crm;
pub mod localtime;
pub mod tts;
