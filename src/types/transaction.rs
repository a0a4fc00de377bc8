//! Transaction-related types for the card authorizer
//!
//! A transaction is a single card purchase attempt as supplied by the caller.
//! Timestamps come from the request itself and are only ever compared with
//! each other, never with the wall clock.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Amount in minor currency units
///
/// Signed so that limits initialized below zero are representable.
pub type Amount = i64;

/// Caller-supplied point in time (RFC 3339 on the wire)
pub type Timestamp = DateTime<Utc>;

/// A card transaction submitted for authorization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Merchant name, arbitrary text
    pub merchant: String,

    /// Amount in minor units
    ///
    /// Negative values are not rejected; amount validation is not one of
    /// the authorization rules.
    pub amount: Amount,

    /// When the transaction happened
    #[serde(alias = "timestamp")]
    pub time: Timestamp,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(merchant: impl Into<String>, amount: Amount, time: Timestamp) -> Self {
        Transaction {
            merchant: merchant.into(),
            amount,
            time,
        }
    }

    /// Absolute time distance between this transaction and `time`
    pub fn distance_to(&self, time: Timestamp) -> Duration {
        if self.time >= time {
            self.time - time
        } else {
            time - self.time
        }
    }

    /// Whether this transaction lies within `window` of `time`, bounds included
    pub fn is_within(&self, time: Timestamp, window: Duration) -> bool {
        self.distance_to(time) <= window
    }

    /// Same merchant and same amount, regardless of time
    pub fn is_similar_to(&self, other: &Transaction) -> bool {
        self.merchant == other.merchant && self.amount == other.amount
    }
}
