//! 日志日期单元格解析
//!
//! 只保留日历日，时间部分丢弃；无法识别的文本返回 None。

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// 表格序列日期的上限（9999-12-31）
const MAX_SERIAL_DAY: f64 = 2_958_465.0;

/// 解析 ISO 日期、ISO 日期时间、RFC 3339、`YYYY/MM/DD`、
/// `A/B/YYYY [time]`（默认月在前）以及表格序列日期
pub fn parse_sheet_date(raw: &str, day_first: bool) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(day);
    }
    if s.contains('/') {
        return parse_slash_date(s, day_first);
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().date());
    }
    parse_serial_day(s)
}

/// 解析查询参数中的 `YYYY-MM-DD`
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_slash_date(s: &str, day_first: bool) -> Option<NaiveDate> {
    // 时间部分以空格或逗号分隔
    let date_part = s.split([' ', ',', 'T']).next()?;
    let parts: Vec<&str> = date_part.split('/').map(str::trim).collect();
    let [a, b, c] = parts.as_slice() else {
        return None;
    };

    if a.len() == 4 {
        return NaiveDate::from_ymd_opt(a.parse().ok()?, b.parse().ok()?, c.parse().ok()?);
    }

    let (first, second): (u32, u32) = (a.parse().ok()?, b.parse().ok()?);
    let year: i32 = c.parse().ok()?;
    if c.len() != 4 {
        return None;
    }
    let (month, day) = if day_first { (second, first) } else { (first, second) };
    NaiveDate::from_ymd_opt(year, month, day)
}

/// 1899-12-30 起算的天数，小数部分为一天中的时间
fn parse_serial_day(s: &str) -> Option<NaiveDate> {
    let serial: f64 = s.parse().ok()?;
    if !serial.is_finite() || !(1.0..=MAX_SERIAL_DAY).contains(&serial) {
        return None;
    }
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.floor() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_forms() {
        assert_eq!(parse_sheet_date("2025-01-06", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date(" 2025-01-06 23:59:59 ", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("2025-01-06T08:30", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("2025-01-06T23:30:00+05:30", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("2025/01/06", false), Some(ymd(2025, 1, 6)));
    }

    #[test]
    fn test_slash_dates_follow_day_order() {
        assert_eq!(parse_sheet_date("1/6/2025", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("1/6/2025", true), Some(ymd(2025, 6, 1)));
        assert_eq!(parse_sheet_date("06/01/2025, 10:15:00", true), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("1/6/2025 18:00:00", false), Some(ymd(2025, 1, 6)));
        // 月份越界
        assert_eq!(parse_sheet_date("13/1/2025", false), None);
        assert_eq!(parse_sheet_date("1/6/25", false), None);
    }

    #[test]
    fn test_serial_day_numbers() {
        assert_eq!(parse_sheet_date("45663", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("45663.75", false), Some(ymd(2025, 1, 6)));
        assert_eq!(parse_sheet_date("-3", false), None);
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_sheet_date("", false), None);
        assert_eq!(parse_sheet_date("yesterday", false), None);
        assert_eq!(parse_sheet_date("2025-02-30", false), None);
    }

    #[test]
    fn test_iso_query_date() {
        assert_eq!(parse_iso_date("2025-01-07"), Some(ymd(2025, 1, 7)));
        assert_eq!(parse_iso_date("07/01/2025"), None);
    }
}
