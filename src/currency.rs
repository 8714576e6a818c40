//! Currency display helpers. Amounts are kept at full precision internally
//! and rounded to minor units only when rendered.

const CURRENCY_SYMBOL: &str = "$";
const MINOR_UNITS: usize = 2;

/// Renders an amount with the currency symbol and two decimals. The sign
/// goes ahead of the symbol so negative nets read as `-$1.50`.
pub fn format_amount(amount: f64) -> String {
    let body = format!("{:.*}", MINOR_UNITS, amount.abs());
    if amount < 0.0 {
        format!("-{CURRENCY_SYMBOL}{body}")
    } else {
        format!("{CURRENCY_SYMBOL}{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_to_two_decimals() {
        assert_eq!(format_amount(61.78), "$61.78");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(308.9), "$308.90");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside_the_symbol() {
        assert_eq!(format_amount(-12.345), "-$12.35");
    }
}
