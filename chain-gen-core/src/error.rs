//! Error types for the chain engine.

use thiserror::Error;

/// Failures surfaced when starting a random walk.
///
/// Build-phase operations do not fail: registration and transition
/// recording always succeed, and handing them an id from another chain is
/// a caller bug (a panic), not a recoverable error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
	/// The chain holds no states at all.
	#[error("chain has no registered states")]
	EmptyChain,

	/// Every registered state is terminal, so no walk can ever start.
	#[error("every registered state is terminal, no walk can start")]
	AllTerminal,
}
