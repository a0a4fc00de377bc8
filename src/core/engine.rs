//! Account rule engine
//!
//! This module provides the RuleEngine that owns the (single) account and
//! applies initialization and transaction requests to it.
//!
//! The engine enforces business rules such as:
//! - At most one successful initialization
//! - No transactions before initialization or on an inactive card
//! - Duplicate, frequency, limit and blocklist checks on active accounts
//!
//! Rejections are reported as violations, never as errors. A transaction is
//! committed only when it raised no violation at all.

use crate::core::config::RuleConfig;
use crate::core::rules;
use crate::types::{Account, Amount, Transaction, Violation};
use tracing::debug;

/// Rule engine for a single account
///
/// Holds no account until the first successful initialization.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    account: Option<Account>,
    config: RuleConfig,
}

impl RuleEngine {
    /// Create an engine with the production rules and no account
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom rules and no account
    pub fn with_config(config: RuleConfig) -> Self {
        RuleEngine {
            account: None,
            config,
        }
    }

    /// The account, if one has been initialized
    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn is_initialized(&self) -> bool {
        self.account.is_some()
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Initialize the account
    ///
    /// Returns the account together with a violation if one already existed,
    /// in which case it is returned untouched.
    pub fn initialize(&mut self, active: bool, limit: Amount) -> (&Account, Option<Violation>) {
        let violation = if self.account.is_some() {
            debug!(active, limit, "account already initialized");
            Some(Violation::AccountAlreadyInitialized)
        } else {
            debug!(active, limit, "account initialized");
            None
        };

        let account = self
            .account
            .get_or_insert_with(|| Account::new(active, limit));
        (&*account, violation)
    }

    /// Authorize a transaction against the account
    ///
    /// # Returns
    ///
    /// The violations raised, in rule order. Empty means the transaction was
    /// accepted: the limit has been debited and the transaction appended to
    /// history. Otherwise the account is unchanged.
    pub fn apply_transaction(&mut self, tx: Transaction) -> Vec<Violation> {
        let Some(account) = self.account.as_mut() else {
            return vec![Violation::AccountNotInitialized];
        };

        if !account.active() {
            return vec![Violation::CardNotActive];
        }

        let violations = rules::evaluate(account, &tx, &self.config);
        if violations.is_empty() {
            debug!(
                merchant = %tx.merchant,
                amount = tx.amount,
                time = %tx.time,
                "transaction accepted"
            );
            account.commit(tx);
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;
    use chrono::{Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};

    fn at(m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2019, 2, 13, 10, m, s).unwrap()
    }

    fn tx(merchant: &str, amount: i64, time: Timestamp) -> Transaction {
        Transaction::new(merchant, amount, time)
    }

    fn accepted(engine: &mut RuleEngine, t: Transaction) -> bool {
        engine.apply_transaction(t).is_empty()
    }

    #[fixture]
    fn active_engine() -> RuleEngine {
        let mut engine = RuleEngine::new();
        engine.initialize(true, 100);
        engine
    }

    #[test]
    fn test_initialize_creates_account() {
        let mut engine = RuleEngine::new();
        assert!(!engine.is_initialized());

        let (account, violation) = engine.initialize(false, 100);
        assert_eq!(violation, None);
        assert!(!account.active());
        assert_eq!(account.limit(), 100);
        assert!(engine.is_initialized());
    }

    #[rstest]
    #[case::same_values(true, 100)]
    #[case::different_values(false, 350)]
    fn test_second_initialize_is_rejected(
        mut active_engine: RuleEngine,
        #[case] active: bool,
        #[case] limit: Amount,
    ) {
        let (account, violation) = active_engine.initialize(active, limit);
        assert_eq!(violation, Some(Violation::AccountAlreadyInitialized));
        assert!(account.active());
        assert_eq!(account.limit(), 100);
    }

    #[test]
    fn test_initialize_accepts_negative_limit() {
        let mut engine = RuleEngine::new();
        let (account, violation) = engine.initialize(true, -50);
        assert_eq!(violation, None);
        assert_eq!(account.limit(), -50);
    }

    #[rstest]
    #[case::blocked_merchant("Burger King", 20)]
    #[case::over_any_limit("Nike", i64::MAX)]
    #[case::plain("Habbib's", 1)]
    fn test_transaction_without_account(#[case] merchant: &str, #[case] amount: Amount) {
        let mut engine = RuleEngine::new();
        let violations = engine.apply_transaction(tx(merchant, amount, at(0, 0)));
        assert_eq!(violations, [Violation::AccountNotInitialized]);
        assert!(engine.account().is_none());
    }

    #[rstest]
    #[case::blocked_merchant("Burger King", 20)]
    #[case::over_limit("Nike", 500)]
    #[case::plain("Habbib's", 1)]
    fn test_transaction_on_inactive_card(#[case] merchant: &str, #[case] amount: Amount) {
        let mut engine = RuleEngine::new();
        engine.initialize(false, 100);

        let violations = engine.apply_transaction(tx(merchant, amount, at(0, 0)));

        assert_eq!(violations, [Violation::CardNotActive]);
        let account = engine.account().unwrap();
        assert_eq!(account.limit(), 100);
        assert!(account.history().is_empty());
    }

    #[rstest]
    fn test_accepted_transaction_debits_and_records(mut active_engine: RuleEngine) {
        let t = tx("Habbib's", 100, at(0, 0));
        let violations = active_engine.apply_transaction(t.clone());

        assert!(violations.is_empty());
        let account = active_engine.account().unwrap();
        assert_eq!(account.limit(), 0);
        assert_eq!(account.history(), [t]);
    }

    #[rstest]
    fn test_insufficient_limit_leaves_state(mut active_engine: RuleEngine) {
        let violations = active_engine.apply_transaction(tx("Nike", 101, at(0, 0)));

        assert_eq!(violations, [Violation::InsufficientLimit]);
        let account = active_engine.account().unwrap();
        assert_eq!(account.limit(), 100);
        assert!(account.history().is_empty());
    }

    #[rstest]
    fn test_blocked_merchant_is_never_recorded(mut active_engine: RuleEngine) {
        let violations = active_engine.apply_transaction(tx("Burger King", 100, at(0, 0)));

        assert_eq!(violations, [Violation::BlockedMerchant]);
        let account = active_engine.account().unwrap();
        assert_eq!(account.limit(), 100);
        assert!(account.history().is_empty());
    }

    #[rstest]
    fn test_doubled_transaction_keeps_limit(mut active_engine: RuleEngine) {
        assert!(accepted(&mut active_engine, tx("X", 50, at(0, 0))));

        let violations = active_engine.apply_transaction(tx("X", 50, at(1, 0)));

        assert_eq!(violations, [Violation::DoubledTransaction]);
        assert_eq!(active_engine.account().unwrap().limit(), 50);
        assert_eq!(active_engine.account().unwrap().history().len(), 1);
    }

    #[rstest]
    fn test_same_transaction_after_window_is_accepted(mut active_engine: RuleEngine) {
        assert!(accepted(&mut active_engine, tx("X", 10, at(0, 0))));
        assert!(accepted(&mut active_engine, tx("X", 10, at(2, 1))));
        assert_eq!(active_engine.account().unwrap().limit(), 80);
    }

    #[rstest]
    fn test_fourth_transaction_in_window_is_high_frequency(mut active_engine: RuleEngine) {
        assert!(accepted(&mut active_engine, tx("Burger King1", 20, at(0, 0))));
        assert!(accepted(&mut active_engine, tx("Burger King2", 30, at(0, 30))));
        assert!(accepted(&mut active_engine, tx("Burger King3", 10, at(1, 0))));

        let incoming = tx("Burger King4", 10, at(2, 0));
        let violations = active_engine.apply_transaction(incoming);

        assert_eq!(violations, [Violation::HighFrequencySmallInterval]);
        assert_eq!(active_engine.account().unwrap().limit(), 40);
    }

    #[rstest]
    fn test_doubled_and_high_frequency_together(mut active_engine: RuleEngine) {
        assert!(accepted(&mut active_engine, tx("Burger King1", 20, at(0, 0))));
        assert!(accepted(&mut active_engine, tx("Burger King2", 30, at(0, 30))));
        assert!(accepted(&mut active_engine, tx("Habbib's", 10, at(1, 0))));

        let violations = active_engine.apply_transaction(tx("Habbib's", 10, at(1, 0)));

        assert_eq!(
            violations,
            [
                Violation::DoubledTransaction,
                Violation::HighFrequencySmallInterval,
            ]
        );
        assert_eq!(active_engine.account().unwrap().limit(), 40);
    }

    #[test]
    fn test_custom_config_is_used() {
        let config = RuleConfig::new(Duration::seconds(10), 3, ["Nike"]);
        let mut engine = RuleEngine::with_config(config);
        engine.initialize(true, 100);

        assert!(accepted(&mut engine, tx("X", 10, at(0, 0))));
        // eleven seconds apart is outside a ten second window
        assert!(accepted(&mut engine, tx("X", 10, at(0, 11))));
        assert_eq!(
            engine.apply_transaction(tx("Nike", 1, at(5, 0))),
            [Violation::BlockedMerchant]
        );
        assert!(!engine.config().is_blocked("Burger King"));
    }
}
