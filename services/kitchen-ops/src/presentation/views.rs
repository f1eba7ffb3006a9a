//! 页面模板
//!
//! 模板随二进制嵌入，启动时一次性编译。

use mise_errors::{AppError, AppResult};
use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::domain::catalog::{Catalog, Item, UNCATEGORISED};
use crate::domain::sales::SalesRollup;
use crate::domain::services::group_by_category;

const TEMPLATES: [(&str, &str); 10] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("tabs.html", include_str!("../../templates/tabs.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("outlet.html", include_str!("../../templates/outlet.html")),
    ("menu.html", include_str!("../../templates/menu.html")),
    ("form.html", include_str!("../../templates/form.html")),
    ("submitted.html", include_str!("../../templates/submitted.html")),
    ("production.html", include_str!("../../templates/production.html")),
    ("sales.html", include_str!("../../templates/sales.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

#[derive(Debug, Serialize)]
pub struct IndexView<'a> {
    pub outlets: &'a [String],
}

#[derive(Debug, Serialize)]
pub struct OutletView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MenuView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
    pub title: &'static str,
    pub groups: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct ItemRow {
    pub name: String,
    pub unit: String,
}

#[derive(Debug, Serialize)]
pub struct CategorySection<T> {
    pub category: String,
    pub rows: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct FormView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub step: &'static str,
    pub group: Option<&'a str>,
    pub sections: Vec<CategorySection<ItemRow>>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmittedView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
    pub title: &'static str,
    pub rows: usize,
}

#[derive(Debug, Serialize)]
pub struct DishRow {
    pub name: String,
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct ProductionView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
    pub sections: Vec<CategorySection<DishRow>>,
}

#[derive(Debug, Serialize)]
pub struct SalesCard {
    pub heading: &'static str,
    pub period: String,
    pub orders: i64,
    pub amount: String,
}

#[derive(Debug, Serialize)]
pub struct SalesView<'a> {
    pub outlet: &'a str,
    pub tab: &'static str,
    pub date: String,
    pub cards: Vec<SalesCard>,
}

#[derive(Debug, Serialize)]
pub struct ErrorView<'a> {
    pub title: &'a str,
    pub details: &'a str,
}

/// 页面渲染器
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> AppResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)
            .map_err(|e| AppError::internal(format!("Failed to compile templates: {}", e)))?;
        debug!(templates = TEMPLATES.len(), "Page templates compiled");
        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, template: &str, view: &T) -> AppResult<String> {
        let context = Context::from_serialize(view).map_err(|e| {
            AppError::internal(format!("Failed to build context for {}: {}", template, e))
        })?;
        self.tera
            .render(template, &context)
            .map_err(|e| AppError::internal(format!("Failed to render {}: {}", template, e)))
    }
}

/// 原料表单分组
pub fn item_sections(catalog: &Catalog, items: Vec<&Item>) -> Vec<CategorySection<ItemRow>> {
    group_by_category(items, &catalog.category_order, |item| item.category.as_str())
        .into_iter()
        .map(|group| CategorySection {
            category: group.category,
            rows: group
                .entries
                .into_iter()
                .map(|item| ItemRow {
                    name: item.name.clone(),
                    unit: item.unit.clone(),
                })
                .collect(),
        })
        .collect()
}

/// 生产计划按菜品分类分组；计划里不在菜品表的菜归入未分类
pub fn production_sections(catalog: &Catalog, outlet: &str) -> Vec<CategorySection<DishRow>> {
    let entries: Vec<(&str, DishRow)> = catalog
        .production_plan
        .iter()
        .map(|entry| {
            let category = catalog
                .dish(&entry.dish_name)
                .map(|dish| dish.category.as_str())
                .unwrap_or(UNCATEGORISED);
            let row = DishRow {
                name: entry.dish_name.clone(),
                target: entry.target_for(outlet).normalize().to_string(),
            };
            (category, row)
        })
        .collect();

    group_by_category(entries, &catalog.dish_category_order, |entry| entry.0)
        .into_iter()
        .map(|group| CategorySection {
            category: group.category,
            rows: group.entries.into_iter().map(|(_, row)| row).collect(),
        })
        .collect()
}

/// 三张汇总卡片
pub fn sales_cards(rollup: &SalesRollup, currency: &str) -> Vec<SalesCard> {
    let money = |amount: rust_decimal::Decimal| format!("{}{:.2}", currency, amount);
    vec![
        SalesCard {
            heading: "Yesterday",
            period: rollup.yesterday.date.format("%d/%m/%Y").to_string(),
            orders: rollup.yesterday.order_count,
            amount: money(rollup.yesterday.amount),
        },
        SalesCard {
            heading: "This Week",
            period: format!(
                "{} - {}",
                rollup.this_week.start.format("%d/%m/%Y"),
                rollup.this_week.end.format("%d/%m/%Y")
            ),
            orders: rollup.this_week.order_count,
            amount: money(rollup.this_week.amount),
        },
        SalesCard {
            heading: "This Month",
            period: rollup.this_month.month_start.format("%B").to_string(),
            orders: rollup.this_month.order_count,
            amount: money(rollup.this_month.amount),
        },
    ]
}
