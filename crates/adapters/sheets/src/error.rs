//! Error mapping for the Sheets adapter

use mise_errors::AppError;

const MAX_BODY_CHARS: usize = 200;

/// Convert a transport / decode error to AppError
pub fn map_sheets_error(err: impl std::fmt::Display, context: &str) -> AppError {
    AppError::upstream_unavailable(format!("{}: {}", context, err))
}

/// Convert a non-2xx response to AppError
pub fn map_status_error(status: u16, body: &str, context: &str) -> AppError {
    let body: String = body.chars().take(MAX_BODY_CHARS).collect();
    AppError::upstream_unavailable(format!("{}: HTTP {} {}", context, status, body.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_is_upstream() {
        let err = map_sheets_error("connection refused", "Reading Sales_Log!A2:D");
        assert!(matches!(err, AppError::UpstreamUnavailable(ref m) if m.contains("Sales_Log")));
    }

    #[test]
    fn test_status_error_truncates_body() {
        let body = "x".repeat(1000);
        let err = map_status_error(503, &body, "Appending to Order_Log");
        let AppError::UpstreamUnavailable(msg) = err else {
            panic!("expected upstream error");
        };
        assert!(msg.contains("HTTP 503"));
        assert!(msg.len() < 300);
    }
}
