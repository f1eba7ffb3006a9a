//! JSON HTTP 接口

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::api_routes;
