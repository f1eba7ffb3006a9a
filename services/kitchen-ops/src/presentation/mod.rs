//! 服务端渲染页面

pub mod controller;
pub mod views;

pub use controller::page_routes;
pub use views::Views;
