pub mod error;
pub mod evaluator;
pub mod filters;
pub mod selector;
pub mod session;
pub mod state;

pub use error::QueryError;
pub use evaluator::evaluate;
pub use filters::{lookup, registry, FilterCriterion, FILTER_REGISTRY};
pub use selector::TypeSelector;
pub use session::{ResultSummary, Session};
pub use state::QueryState;

#[cfg(test)]
pub(crate) mod test_support;
