//! Fixed display currency: Indian rupees with Indian digit grouping.
//!
//! Amounts are always shown in this currency whatever the invoice's origin.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Format an amount as `₹1,23,456.78`.
///
/// Missing and non-finite amounts display as `₹0.00`. Values are rounded to
/// two fraction digits, half away from zero.
pub fn format_inr(amount: Option<f64>) -> String {
    let amount = amount.filter(|a| a.is_finite()).unwrap_or(0.0);
    let paise_total = (amount.abs() * 100.0).round();
    let sign = if amount < 0.0 && paise_total > 0.0 {
        "-"
    } else {
        ""
    };

    // Integer digits of the f64 itself, so no integer cast can saturate
    let digits = format!("{paise_total:03.0}");
    let (rupees, paise) = digits.split_at(digits.len() - 2);
    format!("{sign}{CURRENCY_SYMBOL}{}.{paise}", group_indian(rupees))
}

/// Group digits the Indian way: the last three together, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        let s = format!("{quantity:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
