use gambit_shared::{Offer, OfferType};

const HIGH_BONUS_THRESHOLD: f64 = 1000.0;
const LOW_ENTRY_THRESHOLD: f64 = 100.0;

/// Short explanations of why an offer stands out.
///
/// Rules are evaluated in a fixed order and each adds at most one line.
/// `deposit` and `bonus` are the sanitized amounts used for scoring.
pub fn generate_insights(offer: &Offer, deposit: f64, bonus: f64, value_ratio: f64) -> Vec<String> {
    let mut insights = Vec::new();

    if value_ratio >= 2.0 {
        insights.push(format!("Exceptional value: {}% return on deposit", percent(value_ratio)));
    } else if value_ratio >= 1.0 {
        insights.push(format!("Good value: {}% match", percent(value_ratio)));
    }

    if bonus >= HIGH_BONUS_THRESHOLD {
        insights.push(format!("High bonus amount: ${}", format_grouped(bonus)));
    }

    if offer.offer_type == OfferType::Lossback {
        insights.push("Risk-free: Get losses back".to_string());
    }

    if deposit == 0.0 {
        insights.push("No deposit required!".to_string());
    } else if deposit <= LOW_ENTRY_THRESHOLD {
        insights.push(format!("Low entry: Only ${} deposit", deposit));
    }

    if offer.state.abbreviation == "WV" {
        insights.push("West Virginia exclusive".to_string());
    }

    insights
}

fn percent(ratio: f64) -> String {
    format!("{:.0}", (ratio * 100.0).round())
}

/// `1234.5` -> `"1,234.5"`; at most three fraction digits, trailing zeros dropped
pub(crate) fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
