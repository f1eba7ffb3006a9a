//! 单元格数字解析
//!
//! 日志单元格是人工录入的文本，解析取前缀数字，无法解析时记为零。

use std::str::FromStr;

use rust_decimal::Decimal;

/// 取可选符号后的连续数字：`" 3 "` → 3，`"3.9"` → 3，`"abc"` → 0
pub fn parse_leading_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return 0;
    }
    s[..sign_len + digits].parse().unwrap_or(0)
}

/// 取可选符号后的十进制前缀：`"150.5abc"` → 150.5，`"1.5E+3"` → 1500，空白或乱码 → 0
pub fn parse_leading_decimal(raw: &str) -> Decimal {
    let s = raw.trim_start();
    let (negative, body) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let int_len = body.bytes().take_while(|b| b.is_ascii_digit()).count();
    let rest = &body[int_len..];
    let frac_len = match rest.strip_prefix('.') {
        Some(after) => after.bytes().take_while(|b| b.is_ascii_digit()).count(),
        None => 0,
    };
    if int_len == 0 && frac_len == 0 {
        return Decimal::ZERO;
    }

    let int_part = if int_len == 0 { "0" } else { &body[..int_len] };
    let literal = if frac_len == 0 {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, &rest[1..=frac_len])
    };

    let mantissa_end = if rest.starts_with('.') { 1 + frac_len } else { 0 };
    let exponent = leading_exponent(&rest[mantissa_end..]);

    let mantissa = Decimal::from_str(&literal).unwrap_or(Decimal::ZERO);
    let value = scale_by_power_of_ten(mantissa, exponent);
    if negative { -value } else { value }
}

/// `e3` / `E+3` / `e-2`；没有数字的指数部分不算
fn leading_exponent(s: &str) -> i32 {
    let Some(after) = s.strip_prefix(['e', 'E']) else {
        return 0;
    };
    let (negative, digits) = match after.as_bytes().first() {
        Some(b'-') => (true, &after[1..]),
        Some(b'+') => (false, &after[1..]),
        _ => (false, after),
    };
    let len = digits.bytes().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return 0;
    }
    // 超出 Decimal 精度的指数没有意义
    let magnitude = digits[..len].parse::<i32>().unwrap_or(i32::MAX).min(MAX_EXPONENT);
    if negative { -magnitude } else { magnitude }
}

const MAX_EXPONENT: i32 = 64;

/// 上溢取 `Decimal::MAX`，下溢趋近零
fn scale_by_power_of_ten(mut value: Decimal, exponent: i32) -> Decimal {
    if value.is_zero() {
        return value;
    }
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            match value.checked_mul(Decimal::TEN) {
                Some(scaled) => scaled,
                None => return Decimal::MAX,
            }
        } else {
            value / Decimal::TEN
        };
    }
    value
}

/// 表单数量：整个输入必须是正数，否则返回 None
pub fn parse_positive_quantity(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .ok()
        .filter(|q| q.is_sign_positive() && !q.is_zero())
        .map(|q| q.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_leading_int() {
        assert_eq!(parse_leading_int("3"), 3);
        assert_eq!(parse_leading_int(" 3 "), 3);
        assert_eq!(parse_leading_int("3.9"), 3);
        assert_eq!(parse_leading_int("-2"), -2);
        assert_eq!(parse_leading_int("12 orders"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-"), 0);
    }

    #[test]
    fn test_leading_decimal() {
        assert_eq!(parse_leading_decimal("150.5"), dec!(150.5));
        assert_eq!(parse_leading_decimal("150.5abc"), dec!(150.5));
        assert_eq!(parse_leading_decimal(".5"), dec!(0.5));
        assert_eq!(parse_leading_decimal("7."), dec!(7));
        assert_eq!(parse_leading_decimal("-12.25"), dec!(-12.25));
        assert_eq!(parse_leading_decimal("1,234"), dec!(1));
        assert_eq!(parse_leading_decimal("₹100"), Decimal::ZERO);
        assert_eq!(parse_leading_decimal("12e"), dec!(12));
        assert_eq!(parse_leading_decimal("12 EUR"), dec!(12));
        assert_eq!(parse_leading_decimal(""), Decimal::ZERO);
    }

    #[test]
    fn test_leading_decimal_with_exponent() {
        assert_eq!(parse_leading_decimal("1.5E+3"), dec!(1500));
        assert_eq!(parse_leading_decimal("2e3"), dec!(2000));
        assert_eq!(parse_leading_decimal("-1.25E2"), dec!(-125));
        assert_eq!(parse_leading_decimal("5E-2"), dec!(0.05));
        assert_eq!(parse_leading_decimal("1.5E+3 INR"), dec!(1500));
        assert_eq!(parse_leading_decimal("1E+40"), Decimal::MAX);
        assert_eq!(parse_leading_decimal("1E-40"), Decimal::ZERO);
    }

    #[test]
    fn test_positive_quantity() {
        assert_eq!(parse_positive_quantity("2"), Some(dec!(2)));
        assert_eq!(parse_positive_quantity(" 2.50 "), Some(dec!(2.5)));
        assert_eq!(parse_positive_quantity("0"), None);
        assert_eq!(parse_positive_quantity("0.0"), None);
        assert_eq!(parse_positive_quantity("-1"), None);
        assert_eq!(parse_positive_quantity("two"), None);
        assert_eq!(parse_positive_quantity(""), None);
    }
}
