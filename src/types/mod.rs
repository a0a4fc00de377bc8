//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: the tracked account and its history
//! - `transaction`: transactions, amounts and timestamps
//! - `violation`: violation codes and the message table
//! - `message`: wire-level requests and responses
//! - `error`: error types for the I/O around the engine

pub mod account;
pub mod error;
pub mod message;
pub mod transaction;
pub mod violation;

pub use account::Account;
pub use error::AuthorizerError;
pub use message::{AccountRequest, AccountView, Request, Response};
pub use transaction::{Amount, Timestamp, Transaction};
pub use violation::{message_for_code, Violation};
