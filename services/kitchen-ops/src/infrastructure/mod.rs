//! 基础设施层

pub mod demo;
pub mod gateway;
pub mod rows;
