//! Display formatting for prices and stock.
//!
//! Prices are shown in Brazilian reais the way `Intl.NumberFormat('pt-BR',
//! { style: 'currency', currency: 'BRL' })` renders them: `R$ 1.234,56`.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a price as BRL with `.` thousands and `,` decimals.
#[must_use]
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "R$ -".to_owned();
    }
    #[allow(clippy::cast_possible_truncation)]
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = group_thousands(cents / 100);
    format!("{sign}R$ {whole},{:02}", cents % 100)
}

/// Stock label, e.g. `15 un`.
#[must_use]
pub fn format_stock(quantity: u32) -> String {
    format!("{quantity} un")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
