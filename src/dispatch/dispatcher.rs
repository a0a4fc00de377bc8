//! Request dispatcher
//!
//! Routes each decoded request to the matching engine operation and builds
//! the response for it. The dispatcher owns the engine, and through it the
//! one account, for as long as it lives.

use crate::core::{RuleConfig, RuleEngine};
use crate::types::{AccountRequest, AccountView, Request, Response, Transaction, Violation};
use tracing::debug;

/// Routes requests into a RuleEngine
#[derive(Debug, Default)]
pub struct Dispatcher {
    engine: RuleEngine,
}

impl Dispatcher {
    /// Create a dispatcher with the production rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher with custom rules
    pub fn with_config(config: RuleConfig) -> Self {
        Dispatcher {
            engine: RuleEngine::with_config(config),
        }
    }

    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Handle one request
    ///
    /// The response carries the account snapshot after the request and only
    /// this request's violations.
    pub fn dispatch(&mut self, request: Request) -> Response {
        let violations = match request {
            Request::Account(fields) => self.initialize(fields),
            Request::Transaction(tx) => self.authorize(tx),
        };

        if !violations.is_empty() {
            debug!(?violations, "request rejected");
        }

        let mut response = Response::new(self.engine.account().map(AccountView::from));
        for violation in violations {
            response.add_violation(violation.code());
        }
        response
    }

    fn initialize(&mut self, fields: AccountRequest) -> Vec<Violation> {
        let (_, violation) = self.engine.initialize(fields.active, fields.limit);
        violation.into_iter().collect()
    }

    fn authorize(&mut self, tx: Transaction) -> Vec<Violation> {
        self.engine.apply_transaction(tx)
    }
}
