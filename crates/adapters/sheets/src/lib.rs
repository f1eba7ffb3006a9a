//! adapter-sheets - Google Sheets adapter
//!
//! Implements the `SheetGateway` port with:
//! - Google Sheets v4 REST (values get / values append)
//! - Service-account (JWT bearer) authentication with token caching
//! - An in-memory workbook for tests and local runs
//! - Automatic error mapping to AppError

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod memory;

pub use auth::{AccessTokenProvider, ServiceAccountAuth, StaticToken};
pub use client::GoogleSheetsClient;
pub use config::{GoogleSheetsConfig, GoogleSheetsConfigBuilder};
pub use memory::InMemorySheetGateway;
