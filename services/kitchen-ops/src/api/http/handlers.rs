//! JSON 接口处理函数

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use mise_cqrs_core::{CommandHandler, QueryHandler};
use mise_errors::{AppError, AppResult};
use tracing::debug;

use crate::api::http::dto::{PostDataRequest, PostDataResponse, SalesDataParams, SubmissionRequest};
use crate::app::AppState;
use crate::application::commands::{AppendRowsCommand, SubmitEntriesCommand, SubmitEntriesResult};
use crate::application::queries::GetSalesRollupQuery;
use crate::domain::catalog::Catalog;
use crate::domain::sales::SalesRollup;
use crate::domain::submission::SubmissionKind;

/// 请求体被拒绝时也返回统一的错误体
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Err(AppError::missing_parameter(
            "Expected request with `Content-Type: application/json`",
        )),
        Err(rejection) => Err(AppError::validation(rejection.body_text())),
    }
}

/// 完整读取目录，同时刷新快照
pub async fn get_data(State(state): State<AppState>) -> AppResult<Json<Catalog>> {
    let catalog = state.catalog.reload().await?;
    Ok(Json(Arc::unwrap_or_clone(catalog)))
}

pub async fn get_sales_data(
    State(state): State<AppState>,
    Query(params): Query<SalesDataParams>,
) -> AppResult<Json<SalesRollup>> {
    let query = GetSalesRollupQuery::from_params(
        params.outlet.as_deref(),
        params.selected_date.as_deref(),
    )?;
    let rollup = state.rollup.handle(query).await?;
    Ok(Json(rollup))
}

pub async fn post_data(
    State(state): State<AppState>,
    payload: Result<Json<PostDataRequest>, JsonRejection>,
) -> AppResult<Json<PostDataResponse>> {
    let request = json_body(payload)?;
    let command = AppendRowsCommand::from_request(request.sheet_name, request.data)?;
    debug!(sheet = %command.sheet_name, rows = command.rows.len(), "postData");
    state.appender.handle(command).await?;
    Ok(Json(PostDataResponse::added()))
}

pub async fn post_submission(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    payload: Result<Json<SubmissionRequest>, JsonRejection>,
) -> AppResult<Json<SubmitEntriesResult>> {
    let kind: SubmissionKind = kind.parse()?;
    let request = json_body(payload)?;
    let outlet = request.outlet.clone().unwrap_or_default();
    let command = SubmitEntriesCommand::new(kind, outlet, request.entry_pairs());
    let result = state.submissions.handle(command).await?;
    Ok(Json(result))
}
