//! Rule configuration
//!
//! The defaults are the production authorization rules. Other values are
//! only meant for tests and library callers.

use chrono::Duration;
use std::collections::HashSet;
use tracing::warn;

/// Time span used by both the duplicate and the high-frequency checks
pub const DEFAULT_WINDOW_MINUTES: i64 = 2;

/// Prior transactions inside the window that trip the high-frequency check
pub const DEFAULT_MAX_TRANSACTIONS: usize = 3;

/// Merchants whose transactions are always rejected
pub const DEFAULT_BLOCKLIST: &[&str] = &["Burger King"];

/// Parameters of the transaction rules
#[derive(Clone, Debug, PartialEq)]
pub struct RuleConfig {
    /// Inclusive window for duplicate and frequency checks
    pub window: Duration,
    /// Frequency threshold
    pub max_transactions: usize,
    /// Blocked merchant names, matched exactly
    pub blocklist: HashSet<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            window: Duration::minutes(DEFAULT_WINDOW_MINUTES),
            max_transactions: DEFAULT_MAX_TRANSACTIONS,
            blocklist: DEFAULT_BLOCKLIST.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl RuleConfig {
    /// Create a RuleConfig with custom values
    ///
    /// A negative window or a zero threshold falls back to the default.
    pub fn new<I, S>(window: Duration, max_transactions: usize, blocklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default = Self::default();

        let window = if window < Duration::zero() {
            warn!(
                ?window,
                default = ?default.window,
                "invalid rule window, using default"
            );
            default.window
        } else {
            window
        };

        let max_transactions = if max_transactions == 0 {
            warn!(
                max_transactions,
                default = default.max_transactions,
                "invalid max_transactions, using default"
            );
            default.max_transactions
        } else {
            max_transactions
        };

        Self {
            window,
            max_transactions,
            blocklist: blocklist.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a merchant is on the blocklist
    pub fn is_blocked(&self, merchant: &str) -> bool {
        self.blocklist.contains(merchant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_rules() {
        let config = RuleConfig::default();
        assert_eq!(config.window, Duration::minutes(2));
        assert_eq!(config.max_transactions, 3);
        assert!(config.is_blocked("Burger King"));
    }

    #[rstest]
    #[case::exact("Burger King", true)]
    #[case::different_case("burger king", false)]
    #[case::suffix("Burger King2", false)]
    #[case::empty("", false)]
    fn test_blocklist_matches_exactly(#[case] merchant: &str, #[case] expected: bool) {
        assert_eq!(RuleConfig::default().is_blocked(merchant), expected);
    }

    #[rstest]
    #[case::zero_threshold(Duration::minutes(5), 0, Duration::minutes(5), 3)]
    #[case::negative_window(Duration::minutes(-1), 4, Duration::minutes(2), 4)]
    #[case::valid(Duration::seconds(30), 1, Duration::seconds(30), 1)]
    fn test_new_falls_back_on_invalid_values(
        #[case] window: Duration,
        #[case] max_transactions: usize,
        #[case] expected_window: Duration,
        #[case] expected_max: usize,
    ) {
        let config = RuleConfig::new(window, max_transactions, ["Nike"]);
        assert_eq!(config.window, expected_window);
        assert_eq!(config.max_transactions, expected_max);
        assert!(config.is_blocked("Nike"));
        assert!(!config.is_blocked("Burger King"));
    }
}
