//! Balance display formatting

use crate::models::Balance;

/// Format a balance as an aligned three-line summary
pub fn format_balance(balance: &Balance, symbol: &str) -> String {
    let income = balance.income.format_with_symbol(symbol);
    let outcome = balance.outcome.format_with_symbol(symbol);
    let total = balance.total.format_with_symbol(symbol);

    let width = [&income, &outcome, &total]
        .iter()
        .map(|s| s.len())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    output.push_str(&format!("Income:  {:>width$}\n", income, width = width));
    output.push_str(&format!("Outcome: {:>width$}\n", outcome, width = width));
    output.push_str(&format!("{:-<w$}\n", "", w = width + 9));
    output.push_str(&format!("Total:   {:>width$}\n", total, width = width));

    output
}
