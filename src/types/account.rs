//! Account state for the card authorizer
//!
//! An account only exists once it has been initialized; "no account yet" is
//! represented by the absence of an `Account`, never by a zeroed one.

use super::transaction::{Amount, Transaction};

/// The single tracked account
///
/// `active` and the starting `limit` are fixed at initialization. After that
/// the limit only moves through accepted transactions, and the history only
/// grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Whether the card can be used at all
    active: bool,

    /// Available spending limit
    ///
    /// May start negative if initialized that way.
    limit: Amount,

    /// Accepted transactions in acceptance order
    history: Vec<Transaction>,
}

impl Account {
    /// Create a freshly initialized account with an empty history
    pub fn new(active: bool, limit: Amount) -> Self {
        Account {
            active,
            limit,
            history: Vec::new(),
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn limit(&self) -> Amount {
        self.limit
    }

    /// Previously accepted transactions, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Record an accepted transaction
    ///
    /// Debits the limit, then appends to history. The debit saturates at the
    /// `i64` bounds instead of overflowing.
    pub(crate) fn commit(&mut self, tx: Transaction) {
        self.limit = self.limit.saturating_sub(tx.amount);
        self.history.push(tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_new_account_has_empty_history() {
        let account = Account::new(true, 100);
        assert!(account.active());
        assert_eq!(account.limit(), 100);
        assert!(account.history().is_empty());
    }

    #[test]
    fn test_commit_debits_limit_and_appends() {
        let mut account = Account::new(true, 100);
        let time = Utc.with_ymd_and_hms(2019, 2, 13, 10, 0, 0).unwrap();

        account.commit(Transaction::new("Habbib's", 30, time));
        account.commit(Transaction::new("Nike", 50, time));

        assert_eq!(account.limit(), 20);
        let merchants: Vec<_> = account
            .history()
            .iter()
            .map(|t| t.merchant.as_str())
            .collect();
        assert_eq!(merchants, ["Habbib's", "Nike"]);
    }

    #[test]
    fn test_commit_negative_amount_raises_limit() {
        let mut account = Account::new(true, 10);
        let time = Utc.with_ymd_and_hms(2019, 2, 13, 10, 0, 0).unwrap();

        account.commit(Transaction::new("Refund", -5, time));

        assert_eq!(account.limit(), 15);
    }

    #[test]
    fn test_commit_saturates_instead_of_overflowing() {
        let mut account = Account::new(true, i64::MAX);
        let time = Utc.with_ymd_and_hms(2019, 2, 13, 10, 0, 0).unwrap();

        account.commit(Transaction::new("Refund", -1, time));

        assert_eq!(account.limit(), i64::MAX);
    }
}
