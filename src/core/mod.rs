pub mod kiosk;
pub mod lookup;
pub mod sheet;
pub mod speech;
pub mod tts;
