//! Transition-table model and random-walk generation.
//!
//! The model is a Markov chain over words: a state is a fixed-length word
//! sequence, and each state maps to the list of tokens observed after it,
//! duplicates included. Building and reading are separate phases with
//! separate types, so a table can never be mutated once a generator holds it.

/// Keys and successor tokens of the transition table.
///
/// Defines the paragraph-boundary sentinel used as both a state and a token.
pub mod state;

/// Append-only builder and the frozen table it produces.
pub mod transition_table;

/// Random walk over a frozen table.
///
/// Owns its RNG; seeded generation is reproducible.
pub mod generator;

/// Number of words forming a successor token.
///
/// Fixed at 1 by design contract, not a tunable. With longer successors the
/// walk could emit a token that was followed by fewer than this many words
/// in its source paragraph; the last `past_state` words of the output would
/// then form a state that was never inserted as a key, and the next lookup
/// would fail with `StateNotFound`. Single-word successors are what make
/// every reachable state a guaranteed key.
pub const FUTURE_STATE_WORDS: usize = 1;
