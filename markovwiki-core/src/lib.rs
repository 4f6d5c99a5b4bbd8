//! Markov-chain text generation over wiki articles.
//!
//! This crate turns raw, markup-laden article text into a probabilistic
//! word-transition table and generates new text from it:
//! - Markup sanitization with ordered, interacting substitution passes
//! - A heuristic sentence detector used as a validation gate
//! - A word n-gram transition table with frequency-weighted duplicates
//! - A random-walk generator that preserves paragraph structure and
//!   approximate sentence boundaries
//!
//! The pipeline is a straight line: sanitize, validate, build, generate.
//! Retrieval of article text and presentation of the result are left to
//! the caller; the crate takes a string in and hands a string back.

/// Error taxonomy shared by the whole pipeline.
pub mod error;

/// Transition-table model and random-walk generation.
///
/// Exposes the state/token vocabulary, the append-only builder, the frozen
/// transition table, and the seeded generator.
pub mod model;

/// Text preparation: markup sanitization and the sentence heuristic.
///
/// Runs before any model is built. The sentence-end predicate defined here
/// is the single source of truth for both validation and generation.
pub mod text;
