//! Prompt texts shown and spoken by the kiosk.
//!
//! Some prompts have a separate spoken form: the displayed text carries the
//! phone glyph and line breaks, while the spoken text shortens the phone
//! guidance instead of reading digits aloud.

use crate::core::sheet::ReservationRecord;

pub const PHONE_NUMBER: &str = "03-1234-5678";

pub const GREETING: &str = "いらっしゃいませ。ご用件をお選びください。";

pub const ASK_NAME: &str = "お名前をお聞かせください。";

pub const STAFF_DISPATCH: &str = "担当が参りますので、少々お待ちください。";

pub const CALL_INSTRUCTION: &str =
    "恐れ入りますが、下記の番号にお電話ください。\n\n📞 03-1234-5678";
pub const CALL_INSTRUCTION_SPOKEN: &str = "恐れ入りますが、下記の番号にお電話ください。";

pub const SEARCHING: &str = "お調べしております...";

pub const NOT_FOUND: &str =
    "申し訳ございません。ご予約が見つかりませんでした。\n\n恐れ入りますが、下記の番号にお電話ください。\n\n📞 03-1234-5678";
pub const NOT_FOUND_SPOKEN: &str =
    "申し訳ございません。ご予約が見つかりませんでした。恐れ入りますが、お電話にてお問い合わせください。";

pub const SYSTEM_ERROR: &str =
    "システムエラーが発生しました。\n\n恐れ入りますが、下記の番号にお電話ください。\n\n📞 03-1234-5678";
pub const SYSTEM_ERROR_SPOKEN: &str =
    "システムエラーが発生しました。恐れ入りますが、お電話にてお問い合わせください。";

/// Personalized confirmation shown when a reservation is found.
pub fn found_message(record: &ReservationRecord) -> String {
    format!(
        "{}様ですね。\n{}の{}が参りますので、少々お待ちください。",
        record.visitor_name(),
        record.department(),
        record.staff()
    )
}

/// Spoken form of [`found_message`] without the line break.
pub fn found_spoken(record: &ReservationRecord) -> String {
    format!(
        "{}様ですね。{}の{}が参りますので、少々お待ちください。",
        record.visitor_name(),
        record.department(),
        record.staff()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sheet::{FIELD_DEPARTMENT, FIELD_STAFF, FIELD_VISITOR_NAME};

    #[test]
    fn found_message_interpolates_record_fields() {
        let mut record = ReservationRecord::new();
        record.insert(FIELD_VISITOR_NAME, "山田太郎");
        record.insert(FIELD_DEPARTMENT, "営業部");
        record.insert(FIELD_STAFF, "佐藤");

        let msg = found_message(&record);
        assert!(msg.contains("山田太郎様ですね。"));
        assert!(msg.contains("営業部の佐藤"));

        let spoken = found_spoken(&record);
        assert!(!spoken.contains('\n'));
    }
}
