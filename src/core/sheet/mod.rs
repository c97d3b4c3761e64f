//! Record source adapter for the reservation sheet.
//!
//! The reception desk keeps its visitor list in a shared Google Sheet. This
//! module fetches the sheet through the gviz JSON export and normalizes it
//! into a flat list of [`ReservationRecord`]s. Every fetch re-reads the sheet
//! so the kiosk always reflects the latest edits; failures degrade to an
//! empty record set and are never surfaced past this boundary.

mod client;
mod parse;
mod record;

pub use client::SheetClient;
pub use parse::{SheetError, parse_records};
pub use record::{
    FIELD_COMPANY, FIELD_DEPARTMENT, FIELD_NOTE, FIELD_PHONE, FIELD_STAFF, FIELD_VISITOR_NAME,
    ReservationRecord,
};

use async_trait::async_trait;

/// Source of reservation records.
///
/// `fetch` returns an empty vector on any upstream failure; callers cannot
/// distinguish "source is down" from "no rows".
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Vec<ReservationRecord>;
}
