//! Google Sheets client implementation

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use mise_errors::{AppError, AppResult};
use mise_ports::{Row, SheetGateway, SheetRange};
use mise_telemetry::record_sheet_call;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::auth::{AccessTokenProvider, ServiceAccountAuth};
use crate::config::GoogleSheetsConfig;
use crate::error::{map_sheets_error, map_status_error};

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// Non-string cells (numbers, booleans) come back when a caller asks for
/// unformatted values; keep them readable as text.
fn cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Google Sheets v4 client
pub struct GoogleSheetsClient {
    http: reqwest::Client,
    base_url: String,
    spreadsheet_id: String,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl GoogleSheetsClient {
    /// Create a client authenticated with the configured service account
    pub fn new(config: GoogleSheetsConfig) -> AppResult<Self> {
        let http = build_http(&config)?;
        let private_key = config
            .private_key
            .as_ref()
            .ok_or_else(|| AppError::internal("Service account private key is not configured"))?;

        let auth = ServiceAccountAuth::new(
            http.clone(),
            config.service_account_email.clone(),
            private_key,
            config.token_uri.clone(),
        )?;

        info!(spreadsheet_id = %config.spreadsheet_id, "Google Sheets client created");
        Ok(Self::from_parts(http, &config, Arc::new(auth)))
    }

    /// Create a client with a custom token source
    pub fn with_token_provider(
        config: GoogleSheetsConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> AppResult<Self> {
        let http = build_http(&config)?;
        Ok(Self::from_parts(http, &config, tokens))
    }

    fn from_parts(
        http: reqwest::Client,
        config: &GoogleSheetsConfig,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.spreadsheet_id.clone(),
            tokens,
        }
    }

    fn values_url(&self, range: &SheetRange) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(&range.to_a1())
        )
    }

    async fn get_values(&self, range: &SheetRange) -> AppResult<Vec<Row>> {
        let context = format!("Reading {}", range);
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .get(self.values_url(range))
            .bearer_auth(token)
            .query(&[("majorDimension", "ROWS"), ("valueRenderOption", "FORMATTED_VALUE")])
            .send()
            .await
            .map_err(|e| map_sheets_error(e, &context))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &body, &context));
        }

        let value_range: ValueRange = response
            .json()
            .await
            .map_err(|e| map_sheets_error(e, &context))?;

        Ok(value_range
            .values
            .into_iter()
            .map(|row| row.into_iter().map(cell_text).collect())
            .collect())
    }

    async fn post_append(&self, range: &SheetRange, rows: Vec<Vec<Value>>) -> AppResult<()> {
        let context = format!("Appending to {}", range);
        let token = self.tokens.access_token().await?;

        let response = self
            .http
            .post(format!("{}:append", self.values_url(range)))
            .bearer_auth(token)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": rows }))
            .send()
            .await
            .map_err(|e| map_sheets_error(e, &context))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status.as_u16(), &body, &context));
        }

        Ok(())
    }
}

fn build_http(config: &GoogleSheetsConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))
}

#[async_trait]
impl SheetGateway for GoogleSheetsClient {
    async fn read_range(&self, range: &SheetRange) -> AppResult<Vec<Row>> {
        debug!(range = %range, "Reading range");
        let started = Instant::now();

        let result = self.get_values(range).await;

        record_sheet_call(
            "read",
            &range.sheet,
            started.elapsed().as_secs_f64() * 1000.0,
            result.is_ok(),
        );
        if let Ok(rows) = &result {
            debug!(range = %range, rows = rows.len(), "Range read");
        }
        result
    }

    async fn append_rows(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> AppResult<()> {
        let range = SheetRange::append_target(sheet_name);
        let count = rows.len();
        debug!(range = %range, rows = count, "Appending rows");
        let started = Instant::now();

        let result = self.post_append(&range, rows).await;

        record_sheet_call(
            "append",
            sheet_name,
            started.elapsed().as_secs_f64() * 1000.0,
            result.is_ok(),
        );
        if result.is_ok() {
            info!(sheet = %sheet_name, rows = count, "Rows appended");
        }
        result
    }
}
