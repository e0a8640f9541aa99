use serde::{Deserialize, Serialize};
use std::fmt;

/// Promotion category as published by the operator.
///
/// The set of categories is open: anything not recognised is kept verbatim in
/// `Other` and scored with the default weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OfferType {
    Lossback,
    DepositCashable,
    NoDeposit,
    FreeSpins,
    Other(String),
}

impl OfferType {
    pub fn as_str(&self) -> &str {
        match self {
            OfferType::Lossback => "Lossback",
            OfferType::DepositCashable => "Deposit (Cashable)",
            OfferType::NoDeposit => "No Deposit",
            OfferType::FreeSpins => "Free Spins",
            OfferType::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for OfferType {
    fn from(raw: &str) -> Self {
        match raw {
            "Lossback" => OfferType::Lossback,
            "Deposit (Cashable)" => OfferType::DepositCashable,
            "No Deposit" => OfferType::NoDeposit,
            "Free Spins" => OfferType::FreeSpins,
            other => OfferType::Other(other.to_string()),
        }
    }
}

impl From<String> for OfferType {
    fn from(raw: String) -> Self {
        OfferType::from(raw.as_str())
    }
}

impl From<OfferType> for String {
    fn from(offer_type: OfferType) -> Self {
        offer_type.as_str().to_string()
    }
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// US state an offer is available in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateRef {
    pub name: String,
    pub abbreviation: String,
}

impl StateRef {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// A casino promotion as tracked by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Unique across the store; assigned by the repository.
    pub id: String,
    /// Casino reference. Not unique: multi-part promotions share it.
    pub casino_source_id: i64,
    pub offer_name: String,
    pub offer_type: OfferType,
    pub expected_deposit: f64,
    pub expected_bonus: f64,
    pub casino_name: String,
    pub state_id: i64,
    pub state: StateRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_type_known_values() {
        assert_eq!(OfferType::from("Lossback"), OfferType::Lossback);
        assert_eq!(OfferType::from("Deposit (Cashable)"), OfferType::DepositCashable);
        assert_eq!(OfferType::from("No Deposit"), OfferType::NoDeposit);
        assert_eq!(OfferType::from("Free Spins"), OfferType::FreeSpins);
    }

    #[test]
    fn test_unknown_offer_type_is_preserved() {
        let parsed: OfferType = serde_json::from_str("\"Cashback Tournament\"").unwrap();
        assert_eq!(parsed, OfferType::Other("Cashback Tournament".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Cashback Tournament\"");
    }

    #[test]
    fn test_offer_type_serializes_display_name() {
        let json = serde_json::to_string(&OfferType::DepositCashable).unwrap();
        assert_eq!(json, "\"Deposit (Cashable)\"");
    }
}
