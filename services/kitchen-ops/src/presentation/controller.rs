//! 页面控制器
//!
//! 门店必须是已配置门店之一；目录读取失败时渲染静态错误页，不自动重试。

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use mise_cqrs_core::{CommandHandler, QueryHandler};
use mise_errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::app::AppState;
use crate::application::commands::SubmitEntriesCommand;
use crate::application::queries::GetSalesRollupQuery;
use crate::domain::catalog::Catalog;
use crate::domain::submission::SubmissionKind;
use crate::presentation::views::{
    ErrorView, FormView, IndexView, MenuView, OutletView, ProductionView, SalesView, SubmittedView,
    item_sections, production_sections, sales_cards,
};

#[derive(Debug, Default, Deserialize)]
pub struct GroupParams {
    pub group: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateParams {
    pub date: Option<String>,
}

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/reload", post(reload))
        .route("/outlet/{outlet}", get(outlet_home))
        .route("/outlet/{outlet}/order", get(order_form).post(submit_order))
        .route("/outlet/{outlet}/inventory", get(inventory_form).post(submit_inventory))
        .route("/outlet/{outlet}/production", get(production))
        .route("/outlet/{outlet}/sales", get(sales))
}

fn html(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

fn page<T: Serialize>(state: &AppState, template: &str, view: &T) -> Response {
    match state.views.render(template, view) {
        Ok(body) => html(StatusCode::OK, body),
        Err(e) => e.into_response(),
    }
}

/// 按错误分类渲染错误页
fn error_page(state: &AppState, err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if !err.is_client_error() {
        warn!(error = %err, "Page request failed");
    }
    let details = err.to_string();
    let view = ErrorView {
        title: err.error_title(),
        details: &details,
    };
    match state.views.render("error.html", &view) {
        Ok(body) => html(status, body),
        Err(e) => e.into_response(),
    }
}

fn known_outlet(state: &AppState, outlet: &str) -> AppResult<()> {
    if state.outlets.iter().any(|o| o == outlet) {
        Ok(())
    } else {
        Err(AppError::not_found(format!("Unknown outlet '{}'", outlet)))
    }
}

async fn catalog_for(state: &AppState, outlet: &str) -> AppResult<Arc<Catalog>> {
    known_outlet(state, outlet)?;
    state.catalog.snapshot_or_load().await
}

async fn index(State(state): State<AppState>) -> Response {
    page(&state, "index.html", &IndexView { outlets: &state.outlets })
}

async fn reload(State(state): State<AppState>) -> Response {
    match state.catalog.reload().await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_page(&state, &e),
    }
}

async fn outlet_home(State(state): State<AppState>, Path(outlet): Path<String>) -> Response {
    if let Err(e) = known_outlet(&state, &outlet) {
        return error_page(&state, &e);
    }
    page(&state, "outlet.html", &OutletView { outlet: &outlet, tab: "" })
}

async fn order_form(
    State(state): State<AppState>,
    Path(outlet): Path<String>,
    Query(params): Query<GroupParams>,
) -> Response {
    entry_form(&state, &outlet, SubmissionKind::Order, params.group.as_deref()).await
}

async fn inventory_form(
    State(state): State<AppState>,
    Path(outlet): Path<String>,
    Query(params): Query<GroupParams>,
) -> Response {
    entry_form(&state, &outlet, SubmissionKind::Inventory, params.group.as_deref()).await
}

async fn submit_order(
    State(state): State<AppState>,
    Path(outlet): Path<String>,
    Query(params): Query<GroupParams>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    submit(&state, &outlet, SubmissionKind::Order, params.group.as_deref(), fields).await
}

async fn submit_inventory(
    State(state): State<AppState>,
    Path(outlet): Path<String>,
    Query(params): Query<GroupParams>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    submit(&state, &outlet, SubmissionKind::Inventory, params.group.as_deref(), fields).await
}

/// 有大类且未选择时先显示大类菜单；`group=` 为空表示全部原料
async fn entry_form(
    state: &AppState,
    outlet: &str,
    kind: SubmissionKind,
    group: Option<&str>,
) -> Response {
    render_form(state, outlet, kind, group, None, StatusCode::OK).await
}

async fn render_form(
    state: &AppState,
    outlet: &str,
    kind: SubmissionKind,
    group: Option<&str>,
    message: Option<String>,
    status: StatusCode,
) -> Response {
    let catalog = match catalog_for(state, outlet).await {
        Ok(catalog) => catalog,
        Err(e) => return error_page(state, &e),
    };

    let groups = catalog.super_categories();
    if group.is_none() && !groups.is_empty() {
        let view = MenuView {
            outlet,
            tab: kind.as_str(),
            title: kind.title(),
            groups,
        };
        return page(state, "menu.html", &view);
    }

    let group = group.filter(|g| !g.is_empty());
    let view = FormView {
        outlet,
        tab: kind.as_str(),
        title: kind.title(),
        submit_label: kind.submit_label(),
        step: kind.input_step(),
        group,
        sections: item_sections(&catalog, catalog.items_in_group(group)),
        message,
    };
    match state.views.render("form.html", &view) {
        Ok(body) => html(status, body),
        Err(e) => e.into_response(),
    }
}

async fn submit(
    state: &AppState,
    outlet: &str,
    kind: SubmissionKind,
    group: Option<&str>,
    fields: Vec<(String, String)>,
) -> Response {
    if let Err(e) = known_outlet(state, outlet) {
        return error_page(state, &e);
    }

    let command = SubmitEntriesCommand::new(kind, outlet, fields);
    match state.submissions.handle(command).await {
        Ok(result) => {
            let view = SubmittedView {
                outlet,
                tab: kind.as_str(),
                title: kind.title(),
                rows: result.rows,
            };
            page(state, "submitted.html", &view)
        }
        Err(AppError::Validation(message)) => {
            // 停留在表单页显示提示
            let group = Some(group.unwrap_or(""));
            render_form(state, outlet, kind, group, Some(message), StatusCode::BAD_REQUEST).await
        }
        Err(e) => error_page(state, &e),
    }
}

async fn production(State(state): State<AppState>, Path(outlet): Path<String>) -> Response {
    let catalog = match catalog_for(&state, &outlet).await {
        Ok(catalog) => catalog,
        Err(e) => return error_page(&state, &e),
    };
    let view = ProductionView {
        outlet: &outlet,
        tab: "production",
        sections: production_sections(&catalog, &outlet),
    };
    page(&state, "production.html", &view)
}

/// 日期缺省为门店时区的今天
async fn sales(
    State(state): State<AppState>,
    Path(outlet): Path<String>,
    Query(params): Query<DateParams>,
) -> Response {
    if let Err(e) = known_outlet(&state, &outlet) {
        return error_page(&state, &e);
    }

    let date = params
        .date
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| state.clock.today().format("%Y-%m-%d").to_string());

    let rollup = match GetSalesRollupQuery::from_params(Some(&outlet), Some(&date)) {
        Ok(query) => state.rollup.handle(query).await,
        Err(e) => Err(e),
    };

    match rollup {
        Ok(rollup) => {
            let view = SalesView {
                outlet: &outlet,
                tab: "sales",
                date,
                cards: sales_cards(&rollup, &state.currency_symbol),
            };
            page(&state, "sales.html", &view)
        }
        Err(e) => error_page(&state, &e),
    }
}
