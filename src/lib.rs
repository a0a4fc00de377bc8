//! Card Authorizer Library
//! # Overview
//!
//! This library authorizes a stream of card requests against a single
//! account, answering each request with the account state and the rule
//! violations it raised.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, Violation, wire messages)
//! - [`cli`] - CLI arguments parsing and log setup
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Account ownership, initialization and commit
//!   - [`core::rules`] - Duplicate, frequency, limit and blocklist checks
//!   - [`core::config`] - Rule parameters
//! - [`dispatch`] - Request classification and response assembly
//! - [`io`] - JSON lines input and response formatting
//! - [`processor`] - Sequential read, dispatch, write loop
//!
//! # Request Types
//!
//! - **Account**: initializes the account, once
//! - **Transaction**: a purchase checked against the account
//!
//! # Violations
//!
//! Each rejection is one of seven codes, reported by message:
//! `account-not-initialized`, `card-not-active`,
//! `account-already-initialized`, `insufficient-limit`,
//! `doubled-transaction`, `high-frequency-small-interval`,
//! `blocked-merchant`.

// Module declarations
pub mod cli;
pub mod core;
pub mod dispatch;
pub mod io;
pub mod processor;
pub mod types;

pub use core::{RuleConfig, RuleEngine};
pub use dispatch::Dispatcher;
pub use io::OutputStyle;
pub use processor::{process, ProcessSummary};
pub use types::{
    message_for_code, Account, AuthorizerError, Request, Response, Transaction, Violation,
};
