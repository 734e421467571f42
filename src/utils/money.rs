use crate::utils::constants::CURRENCY;

/// Agrupa miles con coma: 81440 → "81,440"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Monto con separador de miles y hasta dos decimales (sin ceros finales)
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };

    if frac == 0 {
        format!("{}{}", sign, whole)
    } else if frac % 10 == 0 {
        format!("{}{}.{}", sign, whole, frac / 10)
    } else {
        format!("{}{}.{:02}", sign, whole, frac)
    }
}

/// `"PKR 1,200"`
pub fn format_price(amount: f64) -> String {
    format!("{} {}", CURRENCY, format_amount(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_and_trims_decimals() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(120.0), "120");
        assert_eq!(format_amount(1200.0), "1,200");
        assert_eq!(format_amount(81440.0), "81,440");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(4072.5), "4,072.5");
        assert_eq!(format_amount(10.25), "10.25");
    }

    #[test]
    fn prefixes_currency() {
        assert_eq!(format_price(85712.0), "PKR 85,712");
    }
}
