//! mise-bootstrap - 统一服务启动骨架
//!
//! 运行时初始化、关闭信号、健康检查路由

mod health;
mod runtime;

pub use health::*;
pub use runtime::*;
