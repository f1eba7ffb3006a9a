//! 按分类分组展示

use std::collections::BTreeMap;

/// 一个分类及其条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<T> {
    pub category: String,
    pub entries: Vec<T>,
}

/// 顺序表中的分类按给定顺序在前，其余分类按字母序追加
///
/// 组内保持原始顺序；顺序表里没有条目的分类不产生分组。
pub fn group_by_category<T, F>(
    entries: Vec<T>,
    order: &[String],
    category_of: F,
) -> Vec<CategoryGroup<T>>
where
    F: Fn(&T) -> &str,
{
    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for entry in entries {
        let category = category_of(&entry).to_string();
        buckets.entry(category).or_default().push(entry);
    }

    let mut groups = Vec::with_capacity(buckets.len());
    for category in order {
        if let Some(entries) = buckets.remove(category) {
            groups.push(CategoryGroup {
                category: category.clone(),
                entries,
            });
        }
    }
    groups.extend(
        buckets
            .into_iter()
            .map(|(category, entries)| CategoryGroup { category, entries }),
    );
    groups
}
