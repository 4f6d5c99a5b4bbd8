//! Text preparation ahead of model building.
//!
//! Two concerns live here:
//! - Stripping wiki markup down to near-plain text (`sanitizer`)
//! - Deciding whether text contains at least one sentence, and whether a
//!   word ends one (`sentence`)

/// Ordered markup-stripping passes.
///
/// Turns raw wiki markup into human-readable text with paragraph breaks
/// kept as blank-line separators.
pub mod sanitizer;

/// Sentence-boundary heuristic.
///
/// Provides the validation gate and the word-level sentence-end predicate
/// shared with the generator.
pub mod sentence;
