pub const CURRENCY_SYMBOL: &str = "£";

/// 格式化英镑金额：`1000.0` → `£1,000.00`
///
/// 缺失、零值和非有限数返回空字符串；负数以 `-£` 开头。
pub fn currency_converter(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(value) if value.is_finite() && value != 0.0 => value,
        _ => return String::new(),
    };

    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!("{sign}{CURRENCY_SYMBOL}{}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_positive_amounts() {
        assert_eq!(currency_converter(Some(1000.0)), "£1,000.00");
        assert_eq!(currency_converter(Some(99.99)), "£99.99");
        assert_eq!(currency_converter(Some(1_000_000.0)), "£1,000,000.00");
        assert_eq!(currency_converter(Some(123.456)), "£123.46");
    }

    #[test]
    fn zero_and_missing_are_blank() {
        assert_eq!(currency_converter(Some(0.0)), "");
        assert_eq!(currency_converter(None), "");
        assert_eq!(currency_converter(Some(f64::NAN)), "");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(currency_converter(Some(-100.0)), "-£100.00");
        assert_eq!(currency_converter(Some(-1234.5)), "-£1,234.50");
    }
}
