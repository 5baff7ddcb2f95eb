//! Generic Markov-chain engine.
//!
//! This crate provides a frequency-weighted Markov chain over arbitrary
//! state values, including:
//! - An insertion-ordered registry of unique states
//! - Per-state transition tables with weighted random selection
//! - Random-walk generation bounded by terminal states or a length cap
//! - A whitespace-token text domain for corpus-driven generation
//!
//! The engine never inspects state values itself: identity, copying,
//! teardown and terminality are delegated to a client-supplied
//! [`model::domain::Domain`] implementation, so the same chain machinery
//! serves words, board cells, or any other comparable value.

/// Core chain machinery: registry, transition tables, walk generation.
pub mod model;

/// Error types for the chain engine.
pub mod error;

/// I/O utilities (file loading, directory listing).
pub mod io;

/// Whitespace-token text domain and corpus ingestion.
pub mod text;
