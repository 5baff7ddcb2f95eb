//! Top-level module for the Markov-chain engine.
//!
//! This module provides a value-generic, frequency-weighted Markov chain:
//! - The chain database and build operations (`MarkovChain`)
//! - The client capability seam (`Domain`)
//! - Internal state and transition-table representation (`state`)
//! - Random-walk generation (`walker`)

/// Client capability trait the chain is polymorphic over.
///
/// Supplies comparison, duplication, teardown and terminality for the
/// client's value type; the engine inspects values through nothing else.
pub mod domain;

/// The chain database: an insertion-ordered registry of unique states.
///
/// Handles registration, transition recording, read-only inspection and
/// teardown of client payloads.
pub mod markov_chain;

/// Internal representation of a single state and its transition table.
///
/// Tracks outgoing transition counts and supports weighted selection.
/// This module is not exposed publicly.
mod state;

/// Random-walk generation over a fully built chain.
///
/// Start-state selection by rejection sampling and bounded weighted
/// walks; strictly read-only on the chain.
mod walker;

/// Identifier of a registered state.
///
/// Ids are indices into the owning chain's insertion-ordered registry;
/// transition entries store ids rather than references, so no state ever
/// owns another. An id is only meaningful for the chain that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateId(pub(crate) usize);
