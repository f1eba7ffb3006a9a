//! telemetry - 可观测性库

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use mise_errors::{AppError, AppResult};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // 测试中可能被重复调用
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .try_init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> AppResult<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| AppError::internal(format!("Failed to install Prometheus recorder: {}", e)))
}

/// 记录表格 API 调用
pub fn record_sheet_call(operation: &str, sheet: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("sheet", sheet.to_string()),
        ("success", success.to_string()),
    ];

    counter!("sheets_requests_total", &labels).increment(1);
    histogram!("sheets_request_duration_ms", &labels).record(duration_ms);
}

/// 记录提交的行数
pub fn record_submission(kind: &str, outlet: &str, rows: usize) {
    let labels = [("kind", kind.to_string()), ("outlet", outlet.to_string())];

    counter!("submissions_total", &labels).increment(1);
    counter!("submission_rows_total", &labels).increment(rows as u64);
}
