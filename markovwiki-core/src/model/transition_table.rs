use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::text::sanitizer::sanitize;
use crate::text::sentence::assert_has_sentence;

use super::FUTURE_STATE_WORDS;
use super::state::{State, Token};

/// Append-only builder for a [`TransitionTable`].
///
/// # Responsibilities
/// - Split text into paragraphs (runs of newlines) and paragraphs into words
/// - Record every `past_state`-word window with the word that follows it
/// - Tie each paragraph to the sentinel state on both ends, so generation
///   can enter and leave paragraphs
///
/// # Invariants
/// - `past_state` is at least 1 and immutable after construction
/// - Successor lists only grow; nothing is ever overwritten or removed
/// - Every key inserted maps to a non-empty successor list
pub struct ModelBuilder {
	/// Number of words forming a state.
	past_state: usize,
	/// Successor lists, duplicates encoding frequency.
	states: HashMap<State, Vec<Token>>,
}

impl ModelBuilder {
	/// Creates an empty builder for states of `past_state` words.
	///
	/// # Errors
	/// `ModelError::InvalidPastState` when `past_state` is 0.
	pub fn new(past_state: usize) -> Result<Self> {
		if past_state == 0 {
			return Err(ModelError::InvalidPastState(past_state));
		}
		Ok(Self { past_state, states: HashMap::new() })
	}

	/// One-call pipeline: sanitize the raw article, check it holds at least
	/// one sentence, parse it and freeze the table.
	///
	/// # Errors
	/// - `ModelError::InvalidInput` when the sanitized text has no sentence
	/// - `ModelError::InvalidPastState` when `past_state` is 0
	pub fn from_article(raw: &str, past_state: usize) -> Result<TransitionTable> {
		let text = sanitize(raw);
		assert_has_sentence(&text)?;

		let mut builder = Self::new(past_state)?;
		builder.parse_text(&text);
		Ok(builder.build())
	}

	/// Parses a text into the table, paragraph by paragraph.
	///
	/// Assumes the text already passed the sentence gate; an unvalidated
	/// text cannot fail here, it just contributes little or nothing.
	pub fn parse_text(&mut self, text: &str) {
		// Any run of newlines separates paragraphs; empty segments fall out
		// of the length check below.
		for paragraph in text.split('\n') {
			self.parse_paragraph(paragraph);
		}
	}

	fn parse_paragraph(&mut self, paragraph: &str) {
		let words: Vec<&str> = paragraph.split_whitespace().collect();

		// Stray headers and fragments shorter than a state cannot produce a
		// window and would break the boundary mappings below.
		if words.len() < self.past_state {
			return;
		}

		for window in words.windows(self.past_state + FUTURE_STATE_WORDS) {
			let (past, future) = window.split_at(self.past_state);
			self.push(State::from_words(past), Token::word(future[0]));
		}

		// The sentinel can open this paragraph...
		self.push(State::ParagraphBreak, Token::from_words(&words[..self.past_state]));
		// ...and the paragraph's closing state leads back to the sentinel.
		self.push(
			State::from_words(&words[words.len() - self.past_state..]),
			Token::ParagraphBreak,
		);
	}

	fn push(&mut self, state: State, token: Token) {
		self.states.entry(state).or_default().push(token);
	}

	/// Freezes the builder into a read-only table.
	pub fn build(self) -> TransitionTable {
		TransitionTable { past_state: self.past_state, states: self.states }
	}
}

/// Frozen word-transition table.
///
/// Built once by a [`ModelBuilder`], then only read. The builder is consumed
/// by [`ModelBuilder::build`], so a table in a generator's hands cannot be
/// mutated behind its back.
#[derive(Clone, Debug)]
pub struct TransitionTable {
	past_state: usize,
	states: HashMap<State, Vec<Token>>,
}

impl TransitionTable {
	/// Number of words forming a state in this table.
	pub fn past_state(&self) -> usize {
		self.past_state
	}

	/// Successors recorded for `state`, or `None` if it was never a key.
	/// A returned slice is never empty.
	pub fn successors(&self, state: &State) -> Option<&[Token]> {
		self.states.get(state).map(Vec::as_slice)
	}

	/// Number of distinct states.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
