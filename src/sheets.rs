use google_sheets4::Sheets;
use google_sheets4::api::Scope;
use serde_json::Value;

use crate::creds::SheetsAuthenticator;
use crate::errors::AppError;

pub type SheetsClient = Sheets<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>;

/// Builds the Sheets v4 hub over an HTTPS client with native roots.
pub fn build_client(auth: SheetsAuthenticator) -> Result<SheetsClient, AppError> {
    let connector = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| AppError::Sheets(format!("Sheets API connection failed: {}", e)))?
        .https_or_http()
        .enable_http1()
        .build();

    let hyper_client = hyper::Client::builder().build(connector);

    Ok(Sheets::new(hyper_client, auth))
}

/// Reads one bounded cell range with the read-only scope. An empty sheet
/// comes back as an empty vec, not an error.
pub async fn read_range(
    client: &SheetsClient,
    sheet_id: &str,
    range: &str,
) -> Result<Vec<Vec<Value>>, AppError> {
    let (_, value_range) = client
        .spreadsheets()
        .values_get(sheet_id, range)
        .add_scope(Scope::SpreadsheetReadonly)
        .doit()
        .await
        .map_err(|e| AppError::Sheets(format!("Failed to read Google Sheet: {}", e)))?;

    Ok(value_range.values.unwrap_or_default())
}

/// Renders one row of cells for the console, in original cell order.
pub fn render_row(row: &[Value]) -> String {
    Value::Array(row.to_vec()).to_string()
}

#[cfg(test)]
mod tests {
    use super::render_row;
    use serde_json::json;

    #[test]
    fn renders_cells_in_original_order() {
        let row = vec![json!("Lead_ID"), json!("Status"), json!(42)];
        assert_eq!(render_row(&row), r#"["Lead_ID","Status",42]"#);
    }

    #[test]
    fn renders_an_empty_row() {
        assert_eq!(render_row(&[]), "[]");
    }
}
