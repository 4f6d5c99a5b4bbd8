/// Textual rendering of the paragraph-boundary sentinel.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// A key in the transition table.
///
/// A state is either the paragraph-boundary sentinel or an ordered sequence
/// of exactly `past_state` words. States are compared by their exact text,
/// case and punctuation included, and rendered space-joined.
///
/// # Invariants
/// - `Words` always holds exactly `past_state` space-joined words
/// - The sentinel state exists in any table that parsed at least one
///   paragraph of `past_state` or more words
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum State {
	/// Start-of-paragraph state.
	ParagraphBreak,
	/// Space-joined word sequence.
	Words(String),
}

impl State {
	/// Builds a state by space-joining a word slice.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		State::Words(words.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" "))
	}

	/// Rendered form: the joined words, or a blank-line separator for the
	/// sentinel.
	pub fn render(&self) -> &str {
		match self {
			State::ParagraphBreak => PARAGRAPH_BREAK,
			State::Words(words) => words,
		}
	}
}

/// A successor stored in the transition table.
///
/// Usually a single word; the sentinel state's successors carry a whole
/// paragraph-opening word sequence, and the sentinel token marks a paragraph
/// end. Duplicates in a successor list are meaningful: a token observed N
/// times is N times as likely to be drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
	/// Paragraph-boundary sentinel.
	ParagraphBreak,
	/// One word, or a paragraph-opening sequence of `past_state` words.
	Words(String),
}

impl Token {
	/// Single-word token.
	pub fn word(word: &str) -> Self {
		Token::Words(word.to_owned())
	}

	/// Multi-word token, space-joined.
	pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
		Token::Words(words.iter().map(|w| w.as_ref()).collect::<Vec<&str>>().join(" "))
	}

	pub fn is_paragraph_break(&self) -> bool {
		matches!(self, Token::ParagraphBreak)
	}

	/// True if the token's first character is uppercase. The sentinel is
	/// never capitalized.
	pub fn starts_capitalized(&self) -> bool {
		match self {
			Token::ParagraphBreak => false,
			Token::Words(words) => words.chars().next().is_some_and(|c| c.is_uppercase()),
		}
	}

	/// Last word of the token, `None` for the sentinel.
	pub fn last_word(&self) -> Option<&str> {
		match self {
			Token::ParagraphBreak => None,
			Token::Words(words) => words.split_whitespace().last(),
		}
	}
}
