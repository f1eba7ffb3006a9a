//! Kitchen Ops - 多门店厨房运营服务
//!
//! 分层结构：
//! - `domain`: 门店、目录、销售汇总、提交行
//! - `application`: 命令 / 查询处理器与目录快照状态
//! - `infrastructure`: 工作表行映射、后端选择、演示工作簿
//! - `api`: JSON 接口
//! - `presentation`: 服务端渲染页面

pub mod api;
pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use app::{AppState, build_router};
