use gambit_shared::{Offer, OfferType};
use crate::insights::generate_insights;
use crate::models::{ScoreBreakdown, ScoredOffer};

/// Relative weight of each component in the priority score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub value_ratio: f64,
    pub bonus_amount: f64,
    pub offer_type: f64,
    pub accessibility: f64,
}

pub const WEIGHTS: ScoreWeights = ScoreWeights {
    value_ratio: 0.40,
    bonus_amount: 0.30,
    offer_type: 0.20,
    accessibility: 0.10,
};

/// Ratio reported for a bonus that needs no deposit
const NO_DEPOSIT_RATIO: f64 = 3.0;

/// Largest bonus and deposit in the working set being scored.
///
/// Bonus and accessibility scores are relative to these, so they must come
/// from the filtered set on screen rather than the whole store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkingSetMaxima {
    pub max_bonus: f64,
    pub max_deposit: f64,
}

impl WorkingSetMaxima {
    /// `None` for an empty working set, which has no maxima
    pub fn from_offers(offers: &[Offer]) -> Option<Self> {
        if offers.is_empty() {
            return None;
        }
        let (max_bonus, max_deposit) = offers.iter().fold((0.0_f64, 0.0_f64), |(b, d), o| {
            (
                b.max(sanitize_amount(o.expected_bonus)),
                d.max(sanitize_amount(o.expected_deposit)),
            )
        });
        Some(Self { max_bonus, max_deposit })
    }
}

/// Negative or non-finite amounts count as zero
pub(crate) fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

pub fn value_ratio(deposit: f64, bonus: f64) -> f64 {
    if deposit == 0.0 {
        return if bonus > 0.0 { NO_DEPOSIT_RATIO } else { 0.0 };
    }
    bonus / deposit
}

/// Linear in the ratio, capped at 100 from a ratio of 2 upwards
pub fn value_ratio_score(ratio: f64) -> f64 {
    (ratio * 50.0).min(100.0)
}

/// Log-scaled so a $50 bonus is not dwarfed by a $2,500 one
pub fn bonus_amount_score(bonus: f64, max_bonus: f64) -> f64 {
    if max_bonus == 0.0 {
        return 0.0;
    }
    let score = (bonus + 1.0).log10() / (max_bonus + 1.0).log10() * 100.0;
    score.clamp(0.0, 100.0)
}

pub fn offer_type_score(offer_type: &OfferType) -> f64 {
    match offer_type {
        OfferType::Lossback => 100.0,
        OfferType::DepositCashable => 85.0,
        OfferType::NoDeposit => 70.0,
        OfferType::FreeSpins => 60.0,
        OfferType::Other(_) => 50.0,
    }
}

/// Inverse of the deposit relative to the largest deposit in the set
pub fn accessibility_score(deposit: f64, max_deposit: f64) -> f64 {
    if max_deposit == 0.0 || deposit == 0.0 {
        return 100.0;
    }
    (100.0 - (deposit / max_deposit) * 100.0).clamp(0.0, 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn to_breakdown_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Score a single offer against the maxima of its working set
pub fn score_offer(offer: &Offer, maxima: &WorkingSetMaxima) -> ScoredOffer {
    if offer.expected_deposit < 0.0 || offer.expected_bonus < 0.0 {
        tracing::warn!(
            offer_id = %offer.id,
            deposit = offer.expected_deposit,
            bonus = offer.expected_bonus,
            "negative amount treated as zero"
        );
    }
    let deposit = sanitize_amount(offer.expected_deposit);
    let bonus = sanitize_amount(offer.expected_bonus);

    let ratio = value_ratio(deposit, bonus);

    let ratio_score = value_ratio_score(ratio);
    let bonus_score = bonus_amount_score(bonus, maxima.max_bonus);
    let type_score = offer_type_score(&offer.offer_type);
    let access_score = accessibility_score(deposit, maxima.max_deposit);

    let priority = ratio_score * WEIGHTS.value_ratio
        + bonus_score * WEIGHTS.bonus_amount
        + type_score * WEIGHTS.offer_type
        + access_score * WEIGHTS.accessibility;

    ScoredOffer {
        offer: offer.clone(),
        priority_score: round_one_decimal(priority),
        value_ratio: ratio,
        score_breakdown: ScoreBreakdown {
            value_ratio_score: to_breakdown_score(ratio_score),
            bonus_amount_score: to_breakdown_score(bonus_score),
            offer_type_score: to_breakdown_score(type_score),
            accessibility_score: to_breakdown_score(access_score),
        },
        insights: generate_insights(offer, deposit, bonus, ratio),
    }
}

/// Score every offer in the working set, highest priority first.
///
/// Callers wanting a particular order should go through `sort_offers`.
pub fn prioritize_offers(offers: &[Offer]) -> Vec<ScoredOffer> {
    let Some(maxima) = WorkingSetMaxima::from_offers(offers) else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredOffer> = offers.iter().map(|o| score_offer(o, &maxima)).collect();
    scored.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    tracing::debug!(
        offers = scored.len(),
        max_bonus = maxima.max_bonus,
        max_deposit = maxima.max_deposit,
        "prioritized working set"
    );
    scored
}
