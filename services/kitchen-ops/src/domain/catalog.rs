//! 目录：原料、菜品、生产计划与分类顺序

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// 未填写分类时的归类名称
pub const UNCATEGORISED: &str = "Uncategorised";

/// 原料
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub category: String,
    pub unit: String,
    pub super_category: Option<String>,
}

/// 菜品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    pub category: String,
}

/// 生产计划条目：一个菜品在各门店的目标产量
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionPlanEntry {
    pub dish_name: String,
    pub per_outlet_target: BTreeMap<String, Decimal>,
}

impl ProductionPlanEntry {
    /// 门店目标产量；计划表中没有该门店时为零
    pub fn target_for(&self, outlet: &str) -> Decimal {
        self.per_outlet_target
            .get(outlet)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

/// 一次完整加载得到的目录快照
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub items: Vec<Item>,
    pub dishes: Vec<Dish>,
    pub production_plan: Vec<ProductionPlanEntry>,
    pub category_order: Vec<String>,
    pub dish_category_order: Vec<String>,
}

impl Catalog {
    /// 按首次出现顺序列出的大类
    pub fn super_categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for item in &self.items {
            if let Some(group) = item.super_category.as_deref() {
                if !seen.contains(&group) {
                    seen.push(group);
                }
            }
        }
        seen
    }

    /// 指定大类下的原料；`None` 表示全部
    pub fn items_in_group(&self, group: Option<&str>) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| group.is_none_or(|g| item.super_category.as_deref() == Some(g)))
            .collect()
    }

    pub fn dish(&self, name: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.name == name)
    }
}
