use serde::Deserialize;
use serde_json::Value;

use super::record::{FIELD_VISITOR_NAME, ReservationRecord};

/// Errors raised while fetching or decoding the sheet export.
///
/// These never leave the adapter: [`super::SheetClient::fetch`] converts every
/// variant into an empty record set after logging it.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("response is not a gviz payload")]
    MissingWrapper,

    #[error("malformed gviz payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("sheet request failed: {0}")]
    Request(#[from] reqwest::Error),
}

// The gviz export wraps its JSON in a JS call:
//   google.visualization.Query.setResponse({...});
const GVIZ_PREFIX: &str = "google.visualization.Query.setResponse(";

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: GvizTable,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    cols: Vec<GvizCol>,
    #[serde(default)]
    rows: Vec<GvizRow>,
}

#[derive(Debug, Deserialize)]
struct GvizCol {
    #[serde(default)]
    label: String,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Value,
}

/// Strip the JS wrapper and return the inner JSON text.
fn unwrap_gviz(body: &str) -> Result<&str, SheetError> {
    let start = body.find(GVIZ_PREFIX).ok_or(SheetError::MissingWrapper)? + GVIZ_PREFIX.len();
    let inner = body[start..].trim_end();
    let inner = inner.strip_suffix(';').unwrap_or(inner);
    let inner = inner.strip_suffix(')').ok_or(SheetError::MissingWrapper)?;
    Ok(inner)
}

/// Render a gviz cell value the way the sheet UI would show it.
fn cell_text(cell: &Option<GvizCell>) -> String {
    match cell {
        Some(cell) => match &cell.v {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        },
        None => String::new(),
    }
}

/// Parse a raw gviz export body into reservation records.
///
/// Header resolution prefers the `cols` labels; when the sheet has no frozen
/// header row all labels come back empty and the first data row is consumed
/// as the header instead. Rows whose visitor-name cell is empty are dropped
/// as formatting/blank rows.
pub fn parse_records(body: &str) -> Result<Vec<ReservationRecord>, SheetError> {
    let inner = unwrap_gviz(body)?;
    let response: GvizResponse = serde_json::from_str(inner)?;

    let rows = response.table.rows;
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut headers: Vec<String> = response.table.cols.iter().map(|c| c.label.clone()).collect();
    let mut data_rows = &rows[..];

    if headers.iter().all(String::is_empty) {
        headers = rows[0].c.iter().map(cell_text).collect();
        data_rows = &rows[1..];
    }

    let records = data_rows
        .iter()
        .map(|row| {
            row.c
                .iter()
                .enumerate()
                .filter_map(|(idx, cell)| {
                    let header = headers.get(idx)?;
                    if header.is_empty() {
                        return None;
                    }
                    Some((header.clone(), cell_text(cell)))
                })
                .collect::<ReservationRecord>()
        })
        .filter(|record| !record.get(FIELD_VISITOR_NAME).is_empty())
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(json: &str) -> String {
        format!("/*O_o*/\ngoogle.visualization.Query.setResponse({json});")
    }

    fn labeled_payload() -> String {
        wrap(
            r#"{"table":{
                "cols":[{"label":"来客者名"},{"label":"会社"},{"label":"担当者"}],
                "rows":[
                    {"c":[{"v":"山田太郎"},{"v":"株式会社A"},{"v":"佐藤"}]},
                    {"c":[{"v":"山田花子"},null,{"v":"鈴木"}]},
                    {"c":[{"v":null},{"v":"空行"},{"v":""}]}
                ]
            }}"#,
        )
    }

    #[test]
    fn parses_labeled_columns() {
        let records = parse_records(&labeled_payload()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].visitor_name(), "山田太郎");
        assert_eq!(records[0].staff(), "佐藤");
        // null cell becomes empty string, not absence
        assert_eq!(records[1].company(), "");
    }

    #[test]
    fn field_count_matches_header_count() {
        let records = parse_records(&labeled_payload()).unwrap();
        for record in &records {
            assert_eq!(record.visitor_name().is_empty(), false);
            // every header resolves, empty or not
            assert_eq!(record.get("来客者名"), record.visitor_name());
            let _ = record.get("会社");
            let _ = record.get("担当者");
        }
    }

    #[test]
    fn first_row_becomes_header_when_labels_empty() {
        let payload = wrap(
            r#"{"table":{
                "cols":[{"label":""},{"label":""}],
                "rows":[
                    {"c":[{"v":"来客者名"},{"v":"担当者"}]},
                    {"c":[{"v":"田中一郎"},{"v":"高橋"}]}
                ]
            }}"#,
        );
        let records = parse_records(&payload).unwrap();

        // The header row itself is consumed, not emitted as a record.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].visitor_name(), "田中一郎");
        assert_eq!(records[0].staff(), "高橋");
    }

    #[test]
    fn rows_without_visitor_name_are_dropped() {
        let payload = wrap(
            r#"{"table":{
                "cols":[{"label":"来客者名"}],
                "rows":[{"c":[{"v":""}]},{"c":[null]}]
            }}"#,
        );
        let records = parse_records(&payload).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_rows_yield_empty_set() {
        let payload = wrap(r#"{"table":{"cols":[{"label":"来客者名"}],"rows":[]}}"#);
        assert!(parse_records(&payload).unwrap().is_empty());
    }

    #[test]
    fn rejects_unwrapped_body() {
        let err = parse_records(r#"{"table":{"cols":[],"rows":[]}}"#).unwrap_err();
        assert!(matches!(err, SheetError::MissingWrapper));
    }

    #[test]
    fn numeric_cells_render_as_text() {
        let payload = wrap(
            r#"{"table":{
                "cols":[{"label":"来客者名"},{"label":"電話"}],
                "rows":[{"c":[{"v":"山田太郎"},{"v":5678}]}]
            }}"#,
        );
        let records = parse_records(&payload).unwrap();
        assert_eq!(records[0].phone(), "5678");
    }
}
