// Dispatch module
// Classifies decoded requests and routes them into the rule engine

mod dispatcher;

pub use dispatcher::Dispatcher;
