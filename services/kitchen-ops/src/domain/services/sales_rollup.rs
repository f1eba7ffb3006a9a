//! 销售汇总
//!
//! 先按门店过滤，再按日历日落入三个窗口；窗口两端都包含。

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::sales::{
    MonthSales, RollupWindow, SalesRecord, SalesRollup, WeekSales, WindowTotals, YesterdaySales,
};
use crate::domain::value_objects::Outlet;

/// 所选日期所在周的周一
pub fn week_start(selected: NaiveDate) -> NaiveDate {
    let back = u64::from(selected.weekday().num_days_from_monday());
    selected.checked_sub_days(Days::new(back)).unwrap_or(selected)
}

/// 所选日期所在月的 1 号
pub fn month_start(selected: NaiveDate) -> NaiveDate {
    selected.with_day(1).unwrap_or(selected)
}

/// 计算昨日、本周至今、本月至今的订单数与金额
///
/// `orderCount` 是匹配行 `orderId` 之和，不是行数。晚于所选日期的记录不计入任何窗口。
pub fn compute_rollup(log: &[SalesRecord], outlet: &Outlet, selected: NaiveDate) -> SalesRollup {
    let yesterday = selected.pred_opt().unwrap_or(selected);

    let windows = [
        RollupWindow::single_day(yesterday),
        RollupWindow::new(week_start(selected), selected),
        RollupWindow::new(month_start(selected), selected),
    ];
    let mut totals = [WindowTotals::default(); 3];

    for record in log.iter().filter(|r| outlet.matches(&r.outlet)) {
        let Some(day) = record.day else {
            continue;
        };
        for (window, total) in windows.iter().zip(totals.iter_mut()) {
            if window.contains(day) {
                total.add(record);
            }
        }
    }

    let [day, week, month] = totals;
    SalesRollup {
        yesterday: YesterdaySales {
            order_count: day.order_count,
            amount: day.amount,
            date: yesterday,
        },
        this_week: WeekSales {
            order_count: week.order_count,
            amount: week.amount,
            start: windows[1].start,
            end: selected,
        },
        this_month: MonthSales {
            order_count: month.order_count,
            amount: month.amount,
            month_start: windows[2].start,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(day: NaiveDate, outlet: &str, order_id: i64, amount: Decimal) -> SalesRecord {
        SalesRecord {
            day: Some(day),
            outlet: outlet.to_string(),
            order_id,
            amount,
        }
    }

    fn outlet(name: &str) -> Outlet {
        Outlet::new(name).unwrap()
    }

    fn january_log() -> Vec<SalesRecord> {
        vec![
            record(ymd(2025, 1, 6), "A", 2, dec!(100)),
            record(ymd(2025, 1, 7), "A", 3, dec!(150)),
        ]
    }

    #[test]
    fn test_empty_log_is_all_zero() {
        let rollup = compute_rollup(&[], &outlet("Yelahanka"), ymd(2025, 3, 15));
        assert_eq!(rollup.yesterday.order_count, 0);
        assert_eq!(rollup.this_week.order_count, 0);
        assert_eq!(rollup.this_month.order_count, 0);
        assert_eq!(rollup.yesterday.amount, Decimal::ZERO);
        assert_eq!(rollup.this_week.amount, Decimal::ZERO);
        assert_eq!(rollup.this_month.amount, Decimal::ZERO);
    }

    #[test]
    fn test_tuesday_scenario() {
        let rollup = compute_rollup(&january_log(), &outlet("A"), ymd(2025, 1, 7));

        assert_eq!(rollup.yesterday.date, ymd(2025, 1, 6));
        assert_eq!(rollup.yesterday.order_count, 2);
        assert_eq!(rollup.yesterday.amount, dec!(100));

        assert_eq!(rollup.this_week.start, ymd(2025, 1, 6));
        assert_eq!(rollup.this_week.end, ymd(2025, 1, 7));
        assert_eq!(rollup.this_week.order_count, 5);
        assert_eq!(rollup.this_week.amount, dec!(250));

        assert_eq!(rollup.this_month.month_start, ymd(2025, 1, 1));
        assert_eq!(rollup.this_month.order_count, 5);
        assert_eq!(rollup.this_month.amount, dec!(250));
    }

    #[test]
    fn test_records_after_selected_date_are_excluded() {
        let rollup = compute_rollup(&january_log(), &outlet("A"), ymd(2025, 1, 1));
        assert_eq!(rollup.yesterday.order_count, 0);
        assert_eq!(rollup.this_week.order_count, 0);
        assert_eq!(rollup.this_month.order_count, 0);
        assert_eq!(rollup.this_month.amount, Decimal::ZERO);
    }

    #[test]
    fn test_yesterday_outside_week_and_month() {
        // 周一、1 号：昨天属于上一周和上一个月
        let selected = ymd(2024, 7, 1);
        assert_eq!(selected.weekday(), Weekday::Mon);
        let log = vec![record(ymd(2024, 6, 30), "A", 4, dec!(80))];

        let rollup = compute_rollup(&log, &outlet("A"), selected);
        assert_eq!(rollup.yesterday.order_count, 4);
        assert_eq!(rollup.this_week.order_count, 0);
        assert_eq!(rollup.this_month.order_count, 0);
    }

    #[test]
    fn test_week_reaching_into_previous_year() {
        // 2025-01-01 是周三，本周从 2024-12-30 开始
        let log = vec![
            record(ymd(2024, 12, 29), "A", 1, dec!(10)),
            record(ymd(2024, 12, 30), "A", 2, dec!(20)),
            record(ymd(2024, 12, 31), "A", 3, dec!(30)),
            record(ymd(2025, 1, 1), "A", 4, dec!(40)),
        ];
        let rollup = compute_rollup(&log, &outlet("A"), ymd(2025, 1, 1));

        assert_eq!(rollup.yesterday.date, ymd(2024, 12, 31));
        assert_eq!(rollup.yesterday.order_count, 3);

        assert_eq!(rollup.this_week.start, ymd(2024, 12, 30));
        assert_eq!(rollup.this_week.order_count, 9);
        assert_eq!(rollup.this_week.amount, dec!(90));

        assert_eq!(rollup.this_month.month_start, ymd(2025, 1, 1));
        assert_eq!(rollup.this_month.order_count, 4);
        assert_eq!(rollup.this_month.amount, dec!(40));
    }

    #[test]
    fn test_first_of_month_is_inside_month_window() {
        let log = vec![
            record(ymd(2025, 2, 28), "A", 5, dec!(500)),
            record(ymd(2025, 3, 1), "A", 2, dec!(200)),
            record(ymd(2025, 3, 12), "A", 1, dec!(100)),
        ];
        let rollup = compute_rollup(&log, &outlet("A"), ymd(2025, 3, 12));

        assert_eq!(rollup.this_month.month_start, ymd(2025, 3, 1));
        assert_eq!(rollup.this_month.order_count, 3);
        assert_eq!(rollup.this_month.amount, dec!(300));
        // 2025-03-12 是周三，本周从 03-10 开始
        assert_eq!(rollup.this_week.order_count, 1);
    }

    #[test]
    fn test_order_count_sums_order_ids() {
        let log = vec![
            record(ymd(2025, 1, 6), "A", 3, dec!(10)),
            record(ymd(2025, 1, 6), "A", 5, dec!(20)),
        ];
        let rollup = compute_rollup(&log, &outlet("A"), ymd(2025, 1, 7));
        assert_eq!(rollup.yesterday.order_count, 8);
        assert_eq!(rollup.yesterday.amount, dec!(30));
    }

    #[test]
    fn test_outlet_match_is_case_sensitive() {
        let log = vec![record(ymd(2025, 1, 6), "yelahanka", 2, dec!(100))];
        let rollup = compute_rollup(&log, &outlet("Yelahanka"), ymd(2025, 1, 7));
        assert_eq!(rollup.yesterday.order_count, 0);
        assert_eq!(rollup.this_month.amount, Decimal::ZERO);
    }

    #[test]
    fn test_sunday_week_starts_six_days_earlier() {
        let sunday = ymd(2025, 1, 12);
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(week_start(sunday), ymd(2025, 1, 6));

        let log = vec![
            record(ymd(2025, 1, 5), "A", 1, dec!(1)),
            record(ymd(2025, 1, 6), "A", 2, dec!(2)),
            record(ymd(2025, 1, 12), "A", 4, dec!(4)),
        ];
        let rollup = compute_rollup(&log, &outlet("A"), sunday);
        assert_eq!(rollup.this_week.order_count, 6);
    }

    #[test]
    fn test_week_start_is_monday_and_never_after_selected() {
        let mut day = ymd(2024, 12, 20);
        for _ in 0..30 {
            let start = week_start(day);
            assert_eq!(start.weekday(), Weekday::Mon);
            assert!(start <= day);
            assert!((day - start).num_days() < 7);
            assert_eq!(month_start(day).day(), 1);
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_undated_records_fall_in_no_window() {
        let mut undated = record(ymd(2025, 1, 6), "A", 9, dec!(90));
        undated.day = None;
        let rollup = compute_rollup(&[undated], &outlet("A"), ymd(2025, 1, 7));
        assert_eq!(rollup.this_month.order_count, 0);
    }

    #[test]
    fn test_wire_shape() {
        let rollup = compute_rollup(&january_log(), &outlet("A"), ymd(2025, 1, 7));
        let json = serde_json::to_value(&rollup).unwrap();

        assert_eq!(json["yesterday"]["orderCount"], 2);
        assert_eq!(json["yesterday"]["amount"], 100.0);
        assert_eq!(json["yesterday"]["date"], "06/01/2025");
        assert_eq!(json["thisWeek"]["start"], "06/01/2025");
        assert_eq!(json["thisWeek"]["end"], "07/01/2025");
        assert_eq!(json["thisMonth"]["month"], "January");
        assert_eq!(json["thisMonth"]["amount"], 250.0);
    }
}
