use thiserror::Error;

/// Errors produced by the model pipeline.
///
/// The taxonomy is deliberately small:
/// - `InvalidInput` is an expected failure: the validation gate found no
///   sentence-like structure, so the chain could never produce one. Raised
///   before any table is built, propagated to the caller, never retried.
/// - `InvalidPastState` rejects a past-state length of zero at construction.
/// - `StateNotFound` is a contract violation: a generated state has no entry
///   in the table. It cannot occur while successor tokens are a single word
///   (see [`crate::model::FUTURE_STATE_WORDS`]); if it fires, the model was
///   built outside that contract and the walk cannot continue.
#[derive(Debug, Error)]
pub enum ModelError {
	#[error("input text contains no detectable sentence")]
	InvalidInput,

	#[error("past-state length must be at least 1, got {0}")]
	InvalidPastState(usize),

	#[error("no entry in the transition table for state {0:?}")]
	StateNotFound(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ModelError>;
