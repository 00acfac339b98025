//! Core types for the fraud engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single card transaction
///
/// Used both for the transaction under review and for each entry of the
/// recent history supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction amount (non-negative)
    pub amount: Decimal,

    /// When the transaction occurred
    pub timestamp: DateTime<Utc>,

    /// Location identifier (merchant country or region)
    pub location: String,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(amount: Decimal, timestamp: DateTime<Utc>, location: impl Into<String>) -> Self {
        Self {
            amount,
            timestamp,
            location: location.into(),
        }
    }
}

/// A transaction plus its recent history, ready for screening
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudCheckRequest {
    /// Transaction under review
    pub transaction: Transaction,

    /// Prior transactions for the same account, in any order
    pub history: Vec<Transaction>,
}

/// Outcome of a fraud check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudCheckResult {
    /// Transaction looks suspicious and should be held for review
    pub is_fraudulent: bool,

    /// Transaction must be hard-blocked
    pub is_blocked: bool,

    /// Step-up verification is required (tracks `is_fraudulent`)
    pub verification_required: bool,

    /// Sum of the point contributions of every signal that fired
    pub risk_score: u32,

    /// Labels of the signals that fired, for audit trails
    pub risk_factors: Vec<String>,
}

impl FraudCheckResult {
    /// Result with no signals fired
    pub fn clear() -> Self {
        Self {
            is_fraudulent: false,
            is_blocked: false,
            verification_required: false,
            risk_score: 0,
            risk_factors: Vec::new(),
        }
    }

    /// True when no signal fired
    pub fn is_clear(&self) -> bool {
        !self.is_fraudulent && !self.is_blocked && self.risk_score == 0
    }

    /// Classify the additive score into a coarse level
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

impl Default for FraudCheckResult {
    fn default() -> Self {
        Self::clear()
    }
}

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Classify an additive score (< 50 low, 50-99 medium, >= 100 high)
    pub fn from_score(score: u32) -> Self {
        if score >= 100 {
            RiskLevel::High
        } else if score >= 50 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(99), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(200), RiskLevel::High);
    }

    #[test]
    fn test_clear_result() {
        let result = FraudCheckResult::clear();
        assert!(result.is_clear());
        assert_eq!(result.risk_level(), RiskLevel::Low);
    }

    #[test]
    fn test_result_field_names() {
        // Callers consume these over JSON; field names are part of the contract
        let result = FraudCheckResult {
            is_fraudulent: true,
            is_blocked: false,
            verification_required: true,
            risk_score: 50,
            risk_factors: vec!["High value transaction".to_string()],
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_fraudulent"], true);
        assert_eq!(json["is_blocked"], false);
        assert_eq!(json["verification_required"], true);
        assert_eq!(json["risk_score"], 50);
        assert_eq!(json["risk_factors"][0], "High value transaction");
    }
}
