//! CSV export of table rows.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::Column;
use tracing::{debug, info, warn};

/// Serialize a header plus records to CSV text.
pub fn to_csv<I, R>(header: &[&str], records: I) -> Result<String, AppError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(header)
        .map_err(|e| AppError::internal(format!("CSV write failed: {e}")))?;
    for record in records {
        let record: Vec<String> = record.into_iter().collect();
        writer
            .write_record(&record)
            .map_err(|e| AppError::internal(format!("CSV write failed: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("CSV flush failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::internal(format!("CSV is not UTF-8: {e}")))
}

/// Export rows as the table displays and searches them.
pub fn table_csv<T>(columns: &[Column<T>], rows: &[T]) -> Result<String, AppError> {
    let header: Vec<&str> = columns.iter().map(|c| c.label()).collect();
    let records = rows
        .iter()
        .map(|row| columns.iter().map(|c| c.cell_text(row)).collect::<Vec<_>>());
    to_csv(&header, records)
}

/// File name like `users-2026-10-16.csv`.
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}-{}.csv", now.format("%Y-%m-%d"))
}

fn download_script(filename: &str, csv: &str) -> String {
    let encoded = STANDARD.encode(csv.as_bytes());
    format!(
        r#"const a = document.createElement("a");
a.href = "data:text/csv;charset=utf-8;base64,{encoded}";
a.download = {name};
document.body.appendChild(a);
a.click();
a.remove();
return true;"#,
        name = serde_json::Value::String(filename.to_string()),
    )
}

/// Build the CSV for `rows` and hand it to the browser as a download.
/// Must run inside the Dioxus runtime; script failures are logged once the
/// browser reports back.
pub fn download_csv<T>(prefix: &str, columns: &[Column<T>], rows: &[T]) -> Result<(), AppError> {
    let csv = table_csv(columns, rows)?;
    let filename = export_filename(prefix, Utc::now());
    info!(%filename, rows = rows.len(), "exporting table");
    let eval = document::eval(&download_script(&filename, &csv));
    debug!(%filename, bytes = csv.len(), "download script dispatched");
    spawn(async move {
        if let Err(e) = eval.await {
            warn!(%filename, error = %e, "download script failed");
        }
    });
    Ok(())
}

/// [`download_csv`] with failures logged instead of returned, for use in
/// event handlers.
pub fn export_or_log<T>(prefix: &str, columns: &[Column<T>], rows: &[T]) {
    if let Err(e) = download_csv(prefix, columns, rows) {
        warn!(error = %e, "export failed");
    }
}
