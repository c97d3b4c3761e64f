use std::time::Duration;

use async_trait::async_trait;

use super::parse::{SheetError, parse_records};
use super::record::ReservationRecord;
use super::RecordSource;
use crate::config::ServerConfig;

/// Fetches the reservation sheet through the gviz JSON export.
///
/// No caching: every call re-fetches and re-parses so the kiosk reflects the
/// latest sheet edits. Failures degrade to an empty record set.
#[derive(Debug, Clone)]
pub struct SheetClient {
    http: reqwest::Client,
    export_url: String,
}

impl SheetClient {
    pub fn new(config: &ServerConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .unwrap_or_default();

        let export_url = format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:json",
            config.sheet_base_url.trim_end_matches('/'),
            config.spreadsheet_id
        );

        Self { http, export_url }
    }

    async fn try_fetch(&self) -> Result<Vec<ReservationRecord>, SheetError> {
        let response = self.http.get(&self.export_url).send().await?;
        let body = response.error_for_status()?.text().await?;
        parse_records(&body)
    }
}

#[async_trait]
impl RecordSource for SheetClient {
    async fn fetch(&self) -> Vec<ReservationRecord> {
        match self.try_fetch().await {
            Ok(records) => {
                tracing::debug!("Fetched {} reservation records", records.len());
                records
            }
            Err(e) => {
                tracing::error!("Failed to fetch reservation sheet: {}", e);
                Vec::new()
            }
        }
    }
}
