//! Presentation strings for aggregate figures.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Formats money, quantities and percentages for report display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricFormatter {
    currency_symbol: String,
}

impl Default for MetricFormatter {
    fn default() -> Self {
        Self::new("₹")
    }
}

impl MetricFormatter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Whole currency units with thousands separators: `₹12,345`, `-₹2,680`.
    pub fn currency(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.currency_symbol,
            group_thousands(&integer_digits(rounded.abs()))
        )
    }

    /// Currency with an explicit `+` for zero and gains: `+₹2,680`.
    pub fn signed_currency(&self, amount: Decimal) -> String {
        let formatted = self.currency(amount);
        if formatted.starts_with('-') {
            formatted
        } else {
            format!("+{}", formatted)
        }
    }

    pub fn liters(&self, quantity: Decimal) -> String {
        format!("{} L", one_decimal(quantity))
    }

    pub fn kilograms(&self, quantity: Decimal) -> String {
        format!("{} kg", one_decimal(quantity))
    }

    pub fn percent(&self, value: Decimal) -> String {
        format!("{}%", one_decimal(value))
    }
}

fn one_decimal(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    // -0.0 prints as 0.0
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.1}", rounded)
}

fn integer_digits(value: Decimal) -> String {
    let text = value.trunc().to_string();
    match text.split_once('.') {
        Some((whole, _)) => whole.to_string(),
        None => text,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `(revenue - expense) / revenue * 100`, or 0 when there is no revenue.
/// Margins beyond the `Decimal` range saturate.
pub fn profit_margin(revenue: Decimal, expense: Decimal) -> Decimal {
    if revenue.is_zero() {
        return Decimal::ZERO;
    }
    let net = revenue.saturating_sub(expense);
    net.checked_div(revenue)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if net.is_sign_negative() == revenue.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Net result for a period. Breaking even counts as profit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    pub revenue: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
    pub margin: Decimal,
    pub positive: bool,
}

impl ProfitSummary {
    pub fn new(revenue: Decimal, expense: Decimal) -> Self {
        let net = revenue.saturating_sub(expense);
        Self {
            revenue,
            expense,
            net,
            margin: profit_margin(revenue, expense),
            positive: net >= Decimal::ZERO,
        }
    }
}
