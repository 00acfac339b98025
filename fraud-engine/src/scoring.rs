//! Fraud detection engine
//!
//! Four independent detection signals are evaluated against the transaction
//! under review; every signal that fires contributes its flags and points,
//! and the contributions are folded into one result. Signals never
//! short-circuit each other.

use crate::blacklist::LocationBlacklist;
use crate::config::FraudConfig;
use crate::error::{Error, Result};
use crate::types::{FraudCheckRequest, FraudCheckResult, Transaction};
use crate::velocity;
use chrono::Duration;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

const FACTOR_HIGH_VALUE: &str = "High value transaction";
const FACTOR_VELOCITY: &str = "Excessive transaction frequency";
const FACTOR_GEO_VELOCITY: &str = "Rapid location change";
const FACTOR_BLACKLIST: &str = "Blacklisted location";

/// One fired detection signal
struct Signal {
    factor: &'static str,
    points: u32,
    fraudulent: bool,
    blocked: bool,
}

/// Rule-based fraud detector
pub struct FraudDetector {
    config: FraudConfig,
}

impl FraudDetector {
    /// Create a detector with the given configuration
    pub fn new(config: FraudConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &FraudConfig {
        &self.config
    }

    /// Assess a transaction against its recent history and the blacklist
    ///
    /// Total over well-formed inputs: empty history and empty blacklist are
    /// valid and simply leave their signals silent. Returns
    /// [`Error::InvalidInput`] when the transaction under review violates the
    /// caller contract (negative amount, blank location).
    pub fn evaluate(
        &self,
        transaction: &Transaction,
        history: &[Transaction],
        blacklist: &LocationBlacklist,
    ) -> Result<FraudCheckResult> {
        self.validate(transaction)?;

        let signals = [
            self.check_high_value(transaction),
            self.check_velocity(transaction, history),
            self.check_geo_velocity(transaction, history),
            self.check_blacklist(transaction, blacklist),
        ];

        let mut result = FraudCheckResult::clear();
        for signal in signals.into_iter().flatten() {
            result.is_fraudulent |= signal.fraudulent;
            result.is_blocked |= signal.blocked;
            result.risk_score += signal.points;
            result.risk_factors.push(signal.factor.to_string());
        }
        result.verification_required = result.is_fraudulent;

        if result.is_blocked {
            info!(
                "Transaction BLOCKED (score: {}, factors: {})",
                result.risk_score,
                result.risk_factors.join(", ")
            );
        } else if result.is_fraudulent {
            info!(
                "Transaction flagged for verification (score: {}, factors: {})",
                result.risk_score,
                result.risk_factors.join(", ")
            );
        }

        Ok(result)
    }

    /// Batch screening against one blacklist
    pub fn evaluate_batch(
        &self,
        requests: &[FraudCheckRequest],
        blacklist: &LocationBlacklist,
    ) -> Vec<Result<FraudCheckResult>> {
        requests
            .iter()
            .map(|request| self.evaluate(&request.transaction, &request.history, blacklist))
            .collect()
    }

    fn validate(&self, transaction: &Transaction) -> Result<()> {
        if transaction.amount < Decimal::ZERO {
            return Err(Error::InvalidInput(format!(
                "negative amount: {}",
                transaction.amount
            )));
        }
        if transaction.location.trim().is_empty() {
            return Err(Error::InvalidInput("blank location".to_string()));
        }
        Ok(())
    }

    // Amounts strictly above the threshold are suspicious; the threshold
    // itself is not.
    fn check_high_value(&self, transaction: &Transaction) -> Option<Signal> {
        if transaction.amount > self.config.high_value.amount_threshold {
            debug!(
                "High value: {} > {}",
                transaction.amount, self.config.high_value.amount_threshold
            );
            return Some(Signal {
                factor: FACTOR_HIGH_VALUE,
                points: self.config.high_value.risk_points,
                fraudulent: true,
                blocked: false,
            });
        }
        None
    }

    fn check_velocity(&self, transaction: &Transaction, history: &[Transaction]) -> Option<Signal> {
        let window = Duration::minutes(self.config.velocity.window_minutes);
        let count = velocity::count_within_window(transaction, history, window);
        if count > self.config.velocity.max_transactions as usize {
            debug!(
                "Excessive frequency: {} transactions in {}m window",
                count, self.config.velocity.window_minutes
            );
            return Some(Signal {
                factor: FACTOR_VELOCITY,
                points: self.config.velocity.risk_points,
                fraudulent: false,
                blocked: true,
            });
        }
        None
    }

    fn check_geo_velocity(
        &self,
        transaction: &Transaction,
        history: &[Transaction],
    ) -> Option<Signal> {
        let window = Duration::minutes(self.config.geo_velocity.window_minutes);
        if velocity::has_location_change(transaction, history, window) {
            debug!(
                "Location change into {} within {}m window",
                transaction.location, self.config.geo_velocity.window_minutes
            );
            return Some(Signal {
                factor: FACTOR_GEO_VELOCITY,
                points: self.config.geo_velocity.risk_points,
                fraudulent: true,
                blocked: false,
            });
        }
        None
    }

    fn check_blacklist(
        &self,
        transaction: &Transaction,
        blacklist: &LocationBlacklist,
    ) -> Option<Signal> {
        if blacklist.contains(&transaction.location) {
            warn!("Blacklisted location hit: {}", transaction.location);
            return Some(Signal {
                factor: FACTOR_BLACKLIST,
                points: self.config.blacklist.risk_points,
                fraudulent: false,
                blocked: true,
            });
        }
        None
    }
}

impl Default for FraudDetector {
    fn default() -> Self {
        Self::new(FraudConfig::default())
    }
}
