//! mise-errors - 统一错误处理
//!
//! 错误分类：缺少参数、校验失败、表结构不匹配、上游表格不可用

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn missing_parameter(msg: impl Into<String>) -> Self {
        Self::MissingParameter(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn schema_mismatch(msg: impl Into<String>) -> Self {
        Self::SchemaMismatch(msg.into())
    }

    pub fn upstream_unavailable(msg: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 是否为客户端错误（不重试）
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingParameter(_) | Self::Validation(_) | Self::NotFound(_)
        )
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingParameter(_) => 400,
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::SchemaMismatch(_) => 500,
            Self::UpstreamUnavailable(_) => 502,
            Self::Internal(_) => 500,
        }
    }

    /// 错误标题（返回给调用方的静态消息）
    pub fn error_title(&self) -> &'static str {
        match self {
            Self::MissingParameter(_) => "Missing required parameter.",
            Self::Validation(_) => "Invalid request.",
            Self::NotFound(_) => "Resource not found.",
            Self::SchemaMismatch(_) => "Sheet layout does not match the expected schema.",
            Self::UpstreamUnavailable(_) => "Failed to reach Google Sheet.",
            Self::Internal(_) => "Internal server error.",
        }
    }

    /// 转换为 JSON 错误体
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.error_title().to_string(),
            details: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_client_error() {
            tracing::debug!(error = %self, "Request rejected");
        } else {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::missing_parameter("outlet").status_code(), 400);
        assert_eq!(AppError::validation("bad date").status_code(), 400);
        assert_eq!(AppError::schema_mismatch("DishName").status_code(), 500);
        assert_eq!(AppError::upstream_unavailable("timeout").status_code(), 502);
    }

    #[test]
    fn test_error_body_carries_details() {
        let body = AppError::upstream_unavailable("read Sales_Log!A2:D: 503").to_error_body();
        assert_eq!(body.error, "Failed to reach Google Sheet.");
        assert!(body.details.contains("Sales_Log!A2:D"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(AppError::missing_parameter("x").is_client_error());
        assert!(!AppError::upstream_unavailable("x").is_client_error());
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::missing_parameter("selectedDate").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
