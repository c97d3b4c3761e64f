use std::collections::BTreeMap;

// Column headers as they appear in the reception sheet.
pub const FIELD_VISITOR_NAME: &str = "来客者名";
pub const FIELD_COMPANY: &str = "会社";
pub const FIELD_STAFF: &str = "担当者";
pub const FIELD_DEPARTMENT: &str = "部門";
pub const FIELD_PHONE: &str = "電話";
pub const FIELD_NOTE: &str = "備考";

/// One row of the reservation sheet, keyed by header name.
///
/// A missing cell is stored as an empty string, never as an absent key, so
/// consumers can read any known field without an option dance. Records are
/// built fresh on every fetch and are immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationRecord {
    fields: BTreeMap<String, String>,
}

impl ReservationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value. Mostly used by the parser and by test fixtures.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Value of a field, or `""` if the sheet has no such column.
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn visitor_name(&self) -> &str {
        self.get(FIELD_VISITOR_NAME)
    }

    pub fn company(&self) -> &str {
        self.get(FIELD_COMPANY)
    }

    pub fn staff(&self) -> &str {
        self.get(FIELD_STAFF)
    }

    pub fn department(&self) -> &str {
        self.get(FIELD_DEPARTMENT)
    }

    pub fn phone(&self) -> &str {
        self.get(FIELD_PHONE)
    }

    pub fn note(&self) -> &str {
        self.get(FIELD_NOTE)
    }
}

impl FromIterator<(String, String)> for ReservationRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
