//! Configuration for the fraud engine

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Engine configuration
///
/// All thresholds and point values of the detection signals are
/// configurable; the defaults carry the production values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudConfig {
    /// High-value amount signal
    pub high_value: HighValueConfig,

    /// Excessive-frequency signal
    pub velocity: VelocityConfig,

    /// Rapid-location-change signal
    pub geo_velocity: GeoVelocityConfig,

    /// Blacklisted-location signal
    pub blacklist: BlacklistConfig,
}

impl Default for FraudConfig {
    fn default() -> Self {
        Self {
            high_value: HighValueConfig::default(),
            velocity: VelocityConfig::default(),
            geo_velocity: GeoVelocityConfig::default(),
            blacklist: BlacklistConfig::default(),
        }
    }
}

/// High-value amount configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighValueConfig {
    /// Amounts strictly greater than this are flagged
    pub amount_threshold: Decimal,

    /// Points added when the signal fires
    pub risk_points: u32,
}

impl Default for HighValueConfig {
    fn default() -> Self {
        Self {
            amount_threshold: Decimal::from(10_000),
            risk_points: 50,
        }
    }
}

/// Excessive-frequency configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocityConfig {
    /// Trailing window (minutes)
    pub window_minutes: i64,

    /// Maximum prior transactions tolerated inside the window
    pub max_transactions: u32,

    /// Points added when the signal fires
    pub risk_points: u32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            window_minutes: 60,
            max_transactions: 10,
            risk_points: 30,
        }
    }
}

/// Rapid-location-change configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoVelocityConfig {
    /// Trailing window (minutes)
    pub window_minutes: i64,

    /// Points added when the signal fires
    pub risk_points: u32,
}

impl Default for GeoVelocityConfig {
    fn default() -> Self {
        Self {
            window_minutes: 30,
            risk_points: 20,
        }
    }
}

/// Blacklisted-location configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlacklistConfig {
    /// Points added when the signal fires
    pub risk_points: u32,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self { risk_points: 100 }
    }
}

impl FraudConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;
        let config: FraudConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        let mut config = FraudConfig::default();

        if let Ok(threshold) = std::env::var("FRAUD_AMOUNT_THRESHOLD") {
            config.high_value.amount_threshold = threshold
                .parse()
                .map_err(|e| Error::Config(format!("FRAUD_AMOUNT_THRESHOLD: {}", e)))?;
        }

        if let Ok(window) = std::env::var("FRAUD_VELOCITY_WINDOW_MINUTES") {
            config.velocity.window_minutes = window
                .parse()
                .map_err(|e| Error::Config(format!("FRAUD_VELOCITY_WINDOW_MINUTES: {}", e)))?;
        }

        if let Ok(max) = std::env::var("FRAUD_VELOCITY_MAX_TRANSACTIONS") {
            config.velocity.max_transactions = max
                .parse()
                .map_err(|e| Error::Config(format!("FRAUD_VELOCITY_MAX_TRANSACTIONS: {}", e)))?;
        }

        if let Ok(window) = std::env::var("FRAUD_GEO_WINDOW_MINUTES") {
            config.geo_velocity.window_minutes = window
                .parse()
                .map_err(|e| Error::Config(format!("FRAUD_GEO_WINDOW_MINUTES: {}", e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.high_value.amount_threshold < Decimal::ZERO {
            return Err(Error::Config(format!(
                "amount threshold must be non-negative, got {}",
                self.high_value.amount_threshold
            )));
        }
        if self.velocity.window_minutes <= 0 {
            return Err(Error::Config(format!(
                "velocity window must be positive, got {} minutes",
                self.velocity.window_minutes
            )));
        }
        if self.geo_velocity.window_minutes <= 0 {
            return Err(Error::Config(format!(
                "geo-velocity window must be positive, got {} minutes",
                self.geo_velocity.window_minutes
            )));
        }
        Ok(())
    }
}
