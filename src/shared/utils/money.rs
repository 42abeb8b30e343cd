/// 금액 유틸리티
/// Money helpers
///
/// 역할:
/// - 가격 문자열 파싱 ("50,000frw" → 50000)
/// - 금액 표시 포맷 (100000 → "100,000frw")

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// 저장 가능한 최대 금액 (NUMERIC(14, 2) 컬럼)
/// Largest amount the money columns can hold
// 99_999_999_999_999 scale 2 (Decimal::new is not const)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// 가격 문자열에서 숫자만 추출하여 Decimal로 변환
/// Parse a price string, keeping only digits and '.'
///
/// # Returns
/// * `Some(Decimal)` - 소수점 2자리로 반올림된 가격
/// * `None` - 숫자가 없거나 형식이 잘못된 경우 (예: "1.2.3")
pub fn parse_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(&cleaned).ok().map(|price| price.round_dp(2))
}

/// 금액을 "100,000frw" 형태로 표시
/// Format an amount as whole francs with thousands separators
pub fn format_frw(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .trunc();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}frw", sign, grouped)
}
