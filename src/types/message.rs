//! Wire-level request and response types
//!
//! Requests arrive one JSON object per line, either
//! `{"account": {"active-card": true, "available-limit": 100}}` or
//! `{"transaction": {"merchant": "...", "amount": 20, "time": "..."}}`.
//! Each request produces exactly one response carrying the account snapshot
//! after the request and the violations it raised.

use super::account::Account;
use super::transaction::{Amount, Transaction};
use super::violation::message_for_code;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Account initialization fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRequest {
    #[serde(rename = "active-card")]
    pub active: bool,

    #[serde(rename = "available-limit")]
    pub limit: Amount,
}

/// A decoded request
///
/// Externally tagged: the single top-level key decides the kind, so a
/// request can never be both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Request {
    Account(AccountRequest),
    Transaction(Transaction),
}

/// Account snapshot as reported in responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccountView {
    #[serde(rename = "active-card")]
    pub active: bool,

    #[serde(rename = "available-limit")]
    pub limit: Amount,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        AccountView {
            active: account.active(),
            limit: account.limit(),
        }
    }
}

/// Response to one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// Snapshot after the request; `{}` on the wire when there is no account
    #[serde(serialize_with = "serialize_account")]
    pub account: Option<AccountView>,

    /// Messages for the violations raised by this request only
    pub violations: Vec<String>,
}

impl Response {
    /// Empty response for the given account snapshot
    pub fn new(account: Option<AccountView>) -> Self {
        Response {
            account,
            violations: Vec::new(),
        }
    }

    /// Append the message for a violation code
    ///
    /// Codes without a message are ignored.
    pub fn add_violation(&mut self, code: i32) {
        if let Some(message) = message_for_code(code) {
            self.violations.push(message.to_string());
        }
    }
}

fn serialize_account<S>(account: &Option<AccountView>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match account {
        Some(view) => view.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
