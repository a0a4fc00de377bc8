//! Violation codes and their messages
//!
//! Every rejection the engine can produce is one of these codes. Codes are
//! small integers with a fixed message each; looking up a code outside the
//! table yields no message rather than an error.

use std::fmt;

/// Code to message table, indexed by code
const MESSAGES: [&str; 7] = [
    "account-not-initialized",
    "card-not-active",
    "account-already-initialized",
    "insufficient-limit",
    "doubled-transaction",
    "high-frequency-small-interval",
    "blocked-merchant",
];

/// Reason an initialization or transaction was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Violation {
    AccountNotInitialized = 0,
    CardNotActive = 1,
    AccountAlreadyInitialized = 2,
    InsufficientLimit = 3,
    DoubledTransaction = 4,
    HighFrequencySmallInterval = 5,
    BlockedMerchant = 6,
}

impl Violation {
    /// Numeric code of this violation
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Fixed human-readable message
    pub fn message(self) -> &'static str {
        MESSAGES[self as usize]
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Message for a raw violation code
///
/// Unknown codes, negative ones included, have no message.
pub fn message_for_code(code: i32) -> Option<&'static str> {
    usize::try_from(code)
        .ok()
        .and_then(|index| MESSAGES.get(index))
        .copied()
}
