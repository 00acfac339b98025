//! Fraud Engine for Sentinel
//!
//! Rule-based risk assessment for card transactions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod blacklist;
pub mod config;
pub mod error;
pub mod scoring;
pub mod types;
pub mod velocity;

pub use blacklist::LocationBlacklist;
pub use config::{
    BlacklistConfig, FraudConfig, GeoVelocityConfig, HighValueConfig, VelocityConfig,
};
pub use error::{Error, Result};
pub use scoring::FraudDetector;
pub use types::*;
