//! Display helpers for listing output. The query engine never formats values.

use crate::models::{Locale, TransactionType};

const NBSP: char = '\u{a0}';

/// Whole-euro price in the locale's currency style
pub fn format_price(price: i64, locale: Locale) -> String {
    let sign = if price < 0 { "-" } else { "" };
    let amount = price.unsigned_abs();

    match locale {
        Locale::El => format!("{}{}{}€", sign, group_digits(amount, '.'), NBSP),
        Locale::En => format!("{}€{}", sign, group_digits(amount, ',')),
    }
}

/// Area rounded to whole square meters
pub fn format_area(area: f64, locale: Locale) -> String {
    let whole = area.round().max(0.0) as u64;

    match locale {
        Locale::El => format!("{} τ.μ.", group_digits(whole, '.')),
        Locale::En => format!("{} m²", group_digits(whole, ',')),
    }
}

pub fn rent_suffix(kind: TransactionType, locale: Locale) -> &'static str {
    match (kind, locale) {
        (TransactionType::Buy, _) => "",
        (TransactionType::Rent, Locale::El) => "/μήνα",
        (TransactionType::Rent, Locale::En) => "/month",
    }
}

/// Badge text shown on a listing card
pub fn transaction_label(kind: TransactionType, locale: Locale) -> &'static str {
    match (kind, locale) {
        (TransactionType::Buy, Locale::El) => "Πώληση",
        (TransactionType::Buy, Locale::En) => "For Sale",
        (TransactionType::Rent, Locale::El) => "Ενοικίαση",
        (TransactionType::Rent, Locale::En) => "For Rent",
    }
}

fn group_digits(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }

    grouped
}
