//! 请求 / 响应结构

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/getSalesData` 查询参数
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesDataParams {
    pub outlet: Option<String>,
    pub selected_date: Option<String>,
}

/// `POST /api/postData` 请求体
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDataRequest {
    pub sheet_name: Option<String>,
    pub data: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDataResponse {
    pub success: bool,
    pub message: String,
}

impl PostDataResponse {
    pub fn added() -> Self {
        Self {
            success: true,
            message: "Data added successfully.".to_string(),
        }
    }
}

/// `POST /api/submissions/{kind}` 请求体；数量可为数字或字符串
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionRequest {
    pub outlet: Option<String>,
    #[serde(default)]
    pub entries: BTreeMap<String, Value>,
}

impl SubmissionRequest {
    /// `(原料名, 原始输入)`
    pub fn entry_pairs(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .map(|(item, quantity)| {
                let raw = match quantity {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    _ => String::new(),
                };
                (item, raw)
            })
            .collect()
    }
}
