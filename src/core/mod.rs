//! Core business logic module
//!
//! This module contains the authorization components:
//! - `config` - Rule parameters (window, frequency threshold, blocklist)
//! - `rules` - The individual transaction checks and their ordering
//! - `engine` - Account ownership, initialization and transaction commit

pub mod config;
pub mod engine;
pub mod rules;

pub use config::RuleConfig;
pub use engine::RuleEngine;
