use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ModelError, Result};

/// Characters that may terminate a sentence.
const TERMINALS: &str = "[.!?]";

// A word ending in terminal punctuation (optionally a closing quote),
// followed by whitespace and a capital letter. Built from the same terminal
// class as `ends_sentence` so the two readings cannot drift apart.
static SENTENCE_BOUNDARY: Lazy<Regex> =
	Lazy::new(|| Regex::new(&format!(r#"\S+{TERMINALS}"?\s+[A-Z]"#)).unwrap());

/// True if `word` could end a sentence: it ends in '.', '!' or '?',
/// optionally followed by a closing double quote.
///
/// This predicate is shared by the validation gate and the generator's
/// sentence counter; both sides of the pipeline must agree on what a
/// sentence end looks like.
pub fn ends_sentence(word: &str) -> bool {
	let word = word.strip_suffix('"').unwrap_or(word);
	matches!(word.chars().last(), Some('.' | '!' | '?'))
}

/// Rejects text that contains no detectable sentence.
///
/// Every boundary matched by the pattern above is deleted from a working
/// copy of `text`, and so is a terminal word sitting at the very end (a
/// sentence closing the text has no following capital to match on). If the
/// working copy still equals the input, nothing sentence-like was found and
/// the chain could never generate a sentence from it.
///
/// # Notes
/// This is a heuristic, not segmentation. A capitalized word after an
/// acronym ("U.S. Virgin Islands") reads as a sentence end, and sentences
/// opening with a digit or symbol are not recognized. Accepted limitation:
/// telling those apart needs real language processing.
///
/// # Errors
/// `ModelError::InvalidInput` when no boundary is found.
pub fn assert_has_sentence(text: &str) -> Result<()> {
	let mut stripped = SENTENCE_BOUNDARY.replace_all(text, "").into_owned();

	if let Some(last) = stripped.split_whitespace().last() {
		if ends_sentence(last) {
			if let Some(at) = stripped.rfind(last) {
				stripped.truncate(at);
			}
		}
	}

	if stripped == text {
		return Err(ModelError::InvalidInput);
	}
	Ok(())
}
