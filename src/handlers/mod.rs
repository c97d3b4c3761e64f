pub mod api;
pub mod reservation;
pub mod tts;
