//! JSON 路由

use axum::{
    Router,
    routing::{get, post},
};

use crate::api::http::handlers::{get_data, get_sales_data, post_data, post_submission};
use crate::app::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/getData", get(get_data))
        .route("/api/getSalesData", get(get_sales_data))
        .route("/api/postData", post(post_data))
        .route("/api/submissions/{kind}", post(post_submission))
}
