//! 提交订货 / 盘点命令

use mise_cqrs_core::Command;
use serde::Serialize;

use crate::domain::submission::SubmissionKind;

/// 提交订货或盘点数量
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEntriesCommand {
    pub kind: SubmissionKind,
    pub outlet: String,
    /// `(原料名, 原始输入)`，按表单顺序
    pub entries: Vec<(String, String)>,
}

impl Command for SubmitEntriesCommand {
    type Result = SubmitEntriesResult;
}

impl SubmitEntriesCommand {
    pub fn new<I, K, V>(kind: SubmissionKind, outlet: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            outlet: outlet.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitEntriesResult {
    pub success: bool,
    /// 写入的行数
    pub rows: usize,
}
