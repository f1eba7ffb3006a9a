//! Google Sheets configuration

use mise_config::SheetsConfig;
use secrecy::Secret;

/// Google Sheets client configuration
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    /// Spreadsheet ID (the long id in the sheet URL)
    pub spreadsheet_id: String,

    /// API base, overridable for emulators and tests
    pub api_base_url: String,

    /// OAuth token endpoint
    pub token_uri: String,

    /// Service account e-mail (JWT issuer)
    pub service_account_email: String,

    /// Service account PEM key
    pub private_key: Option<Secret<String>>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for GoogleSheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            api_base_url: "https://sheets.googleapis.com".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            service_account_email: String::new(),
            private_key: None,
            request_timeout_secs: 30,
        }
    }
}

impl From<&SheetsConfig> for GoogleSheetsConfig {
    fn from(config: &SheetsConfig) -> Self {
        Self {
            spreadsheet_id: config.spreadsheet_id.clone(),
            api_base_url: config.api_base_url.clone(),
            token_uri: config.token_uri.clone(),
            service_account_email: config.service_account_email.clone(),
            private_key: config.private_key.clone(),
            request_timeout_secs: config.request_timeout_secs,
        }
    }
}

/// Builder for GoogleSheetsConfig
pub struct GoogleSheetsConfigBuilder {
    config: GoogleSheetsConfig,
}

impl GoogleSheetsConfigBuilder {
    /// Create a new builder for a spreadsheet
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            config: GoogleSheetsConfig {
                spreadsheet_id: spreadsheet_id.into(),
                ..Default::default()
            },
        }
    }

    /// Set service account credentials
    pub fn with_service_account(
        mut self,
        email: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Self {
        self.config.service_account_email = email.into();
        self.config.private_key = Some(Secret::new(private_key.into()));
        self
    }

    /// Point the client at a different API host
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = url.into();
        self
    }

    pub fn with_token_uri(mut self, uri: impl Into<String>) -> Self {
        self.config.token_uri = uri.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.request_timeout_secs = timeout_secs;
        self
    }

    pub fn build(self) -> GoogleSheetsConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GoogleSheetsConfig::default();
        assert_eq!(config.api_base_url, "https://sheets.googleapis.com");
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.private_key.is_none());
    }

    #[test]
    fn test_builder() {
        let config = GoogleSheetsConfigBuilder::new("sheet-1")
            .with_service_account("svc@proj.iam.gserviceaccount.com", "pem")
            .with_api_base_url("http://127.0.0.1:9000")
            .with_request_timeout(5)
            .build();

        assert_eq!(config.spreadsheet_id, "sheet-1");
        assert_eq!(config.service_account_email, "svc@proj.iam.gserviceaccount.com");
        assert!(config.private_key.is_some());
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout_secs, 5);
    }
}
