//! Transaction rules for an active account
//!
//! Each check looks at the incoming transaction against the account's
//! current state. `evaluate` runs them in their fixed order and combines the
//! results; it never mutates the account.

use crate::core::config::RuleConfig;
use crate::types::{Account, Transaction, Violation};
use tracing::debug;

/// Prior transaction with the same merchant and amount inside the window
pub fn find_duplicate<'a>(
    history: &'a [Transaction],
    tx: &Transaction,
    config: &RuleConfig,
) -> Option<&'a Transaction> {
    history
        .iter()
        .find(|prior| prior.is_similar_to(tx) && prior.is_within(tx.time, config.window))
}

/// Prior transaction that brings the in-window count up to the threshold
///
/// Scans history in stored order and stops at the first transaction that
/// reaches `max_transactions`; that transaction is returned.
pub fn find_frequency_breach<'a>(
    history: &'a [Transaction],
    tx: &Transaction,
    config: &RuleConfig,
) -> Option<&'a Transaction> {
    let mut in_window = 0;
    for prior in history {
        if prior.is_within(tx.time, config.window) {
            in_window += 1;
        }
        if in_window >= config.max_transactions {
            return Some(prior);
        }
    }
    None
}

pub fn exceeds_limit(account: &Account, tx: &Transaction) -> bool {
    tx.amount > account.limit()
}

/// Run every rule for an active account and collect the violations
///
/// The limit check is skipped once the duplicate or frequency check fired.
/// The blocklist check always runs.
pub fn evaluate(account: &Account, tx: &Transaction, config: &RuleConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let history = account.history();

    let duplicate = find_duplicate(history, tx, config);
    if let Some(prior) = duplicate {
        debug!(
            merchant = %tx.merchant,
            amount = tx.amount,
            prior_time = %prior.time,
            "doubled transaction"
        );
        violations.push(Violation::DoubledTransaction);
    }

    let breach = find_frequency_breach(history, tx, config);
    if let Some(prior) = breach {
        debug!(
            merchant = %tx.merchant,
            blamed_merchant = %prior.merchant,
            blamed_time = %prior.time,
            "high frequency in small interval"
        );
        violations.push(Violation::HighFrequencySmallInterval);
    }

    if duplicate.is_none() && breach.is_none() && exceeds_limit(account, tx) {
        debug!(
            amount = tx.amount,
            limit = account.limit(),
            "insufficient limit"
        );
        violations.push(Violation::InsufficientLimit);
    }

    if config.is_blocked(&tx.merchant) {
        debug!(merchant = %tx.merchant, "blocked merchant");
        violations.push(Violation::BlockedMerchant);
    }

    violations
}
