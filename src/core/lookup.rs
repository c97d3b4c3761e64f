//! Reservation lookup over the record source.

use std::sync::Arc;

use crate::core::sheet::{RecordSource, ReservationRecord};

/// Lookup errors surfaced to the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("name fragment must not be empty")]
    InvalidArgument,
}

/// Outcome of a reservation lookup.
///
/// `NotFound` covers both "no row matched" and "the source returned no data";
/// the two are deliberately indistinguishable to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(ReservationRecord),
    NotFound,
}

/// Searches the current record set for a visitor by name fragment.
#[derive(Clone)]
pub struct LookupService {
    source: Arc<dyn RecordSource>,
}

impl LookupService {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Find the first record whose visitor name contains `fragment`.
    ///
    /// Matching is case-sensitive substring containment, ties broken by
    /// source row order. The full record set is re-fetched on every call.
    pub async fn lookup(&self, fragment: &str) -> Result<LookupResult, LookupError> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(LookupError::InvalidArgument);
        }

        let records = self.source.fetch().await;
        let found = records
            .into_iter()
            .find(|record| record.visitor_name().contains(fragment));

        Ok(match found {
            Some(record) => LookupResult::Found(record),
            None => LookupResult::NotFound,
        })
    }
}
