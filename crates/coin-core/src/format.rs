//! 통화 포맷팅.

use rust_decimal::Decimal;

/// 천 단위 구분자가 들어간 달러 문자열로 변환합니다.
///
/// # Examples
///
/// ```
/// use coin_core::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::new(6718733, 2), 2), "$67,187.33");
/// assert_eq!(format_usd(Decimal::new(31260929299, 0), 0), "$31,260,929,299");
/// ```
pub fn format_usd(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp(decimals);
    let text = format!("{:.*}", decimals as usize, rounded.abs());

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match frac_part {
        Some(frac) => format!("${}{}.{}", sign, grouped, frac),
        None => format!("${}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(dec!(0), 2), "$0.00");
        assert_eq!(format_usd(dec!(999.5), 2), "$999.50");
        assert_eq!(format_usd(dec!(1000), 2), "$1,000.00");
        assert_eq!(format_usd(dec!(123456.789), 2), "$123,456.79");
        assert_eq!(format_usd(dec!(1234567), 0), "$1,234,567");
        assert_eq!(format_usd(dec!(-1500.25), 2), "$-1,500.25");
    }
}
