// src/utils/money.rs

/// Formats an amount in minor currency units as dollars with separators.
/// Example: 123456 -> "$1,234.56", -4500 -> "-$45.00"
pub fn fmt_usd(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let dollars = (abs / 100).to_string();
    let cents = abs % 100;

    let bytes = dollars.as_bytes();
    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    format!("{sign}${grouped}.{cents:02}")
}
