use once_cell::sync::Lazy;
use regex::Regex;

// Reference blocks, description text and all. Excluding '<' inside the match
// keeps it on one tag pair when several references share a line.
static REF_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"<ref[^<]*</ref>").unwrap());

// Markup tags, opening or closing, without the text between them. The first
// character after '<' must not be a capital: article text intentionally
// written inside angle brackets tends to start with one, tags never do.
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^A-Z][^<]*>").unwrap());

// Template invocations. Lazy match so adjacent templates on one line are
// removed separately instead of everything between the outermost braces.
static TEMPLATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{.*?\}\}").unwrap());

// File and image links. Greedy to the last "]]" on the line, since the
// caption may itself contain bracketed links.
static FILE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[File:.*\]\]").unwrap());

// The piped prefix of a link, lazily up to the first '|'. Excluding '[' and
// newline keeps "[[a]] ... [[b|" from matching across two links.
static PIPED_LINK_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[[^\[\n]*?\|").unwrap());

// Heading, subheading and bullet lines, marker through end of line.
static HEADING_OR_BULLET_LINE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"(?m)^(===|==|\*).*").unwrap());

// Residual table and infobox fragments: opens with '|', '*', '{' or '!',
// closes with '}', removed through end of line.
static TABLE_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\||\*|\{|!)[^}]*\}.*").unwrap());

// Behavior-switch magic words such as __NOTOC__ or __FORCETOC__.
static MAGIC_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"__[A-Z]+__").unwrap());

/// Strips wiki markup down to near-plain text.
///
/// Paragraph breaks survive as blank-line separators; headings, tables and
/// category listings are discarded outright. Total function: a pattern that
/// does not occur is a no-op, and no input can make it fail.
///
/// # Notes
/// The passes are ordered and the order is load-bearing. Reference blocks
/// must go before the generic tag pass (which would otherwise keep their
/// description text), `{{!}}` must go before the template pass (a literal
/// pipe inside braces would split a template match), and the category
/// truncation must run before link delimiters are stripped.
pub fn sanitize(raw: &str) -> String {
	// Reference descriptions vanish entirely; they are citation metadata,
	// not article prose.
	let mut text = REF_BLOCK.replace_all(raw, "").into_owned();

	// Remaining tags ("<span ...>", "<!--", self-closing "<ref ... />") are
	// dropped while the text they wrap is kept.
	text = MARKUP_TAG.replace_all(&text, "").into_owned();

	// Spacing entities become the characters they stand for.
	text = text.replace("&nbsp;", " ");
	text = text.replace("{{nbsp}}", " ");
	text = text.replace("&ndash;", "-");

	// "{{!}}" is an escaped pipe; removed first so it cannot break the
	// template pass below.
	text = text.replace("{{!}}", "");
	text = TEMPLATE.replace_all(&text, "").into_owned();

	text = FILE_LINK.replace_all(&text, "").into_owned();

	// The category section closes out an article; nothing after it is prose.
	if let Some(at) = text.find("[[Category:") {
		text.truncate(at);
	}

	// "[[Target|Shown]]" keeps only "Shown"; "[[Target]]" keeps "Target".
	text = PIPED_LINK_PREFIX.replace_all(&text, "").into_owned();
	text = text.replace("[[", "");
	text = text.replace("]]", "");

	// Bold before italics, "'''" contains "''".
	text = text.replace("'''", "");
	text = text.replace("''", "");

	text = HEADING_OR_BULLET_LINE.replace_all(&text, "").into_owned();
	text = TABLE_FRAGMENT.replace_all(&text, "").into_owned();
	text = MAGIC_WORD.replace_all(&text, "").into_owned();

	// Whatever closing braces survived the passes above are markup debris.
	text = text.replace("}}", "");

	text
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reference_blocks_vanish_entirely() {
		let out = sanitize("The river is long.<ref>Atlas of Rivers, p. 12</ref> It floods.");
		assert_eq!(out, "The river is long. It floods.");
		assert!(!out.contains("Atlas"));
	}

	#[test]
	fn named_reference_blocks_vanish() {
		let out = sanitize(r#"Cold winters.<ref name="climate">See climate data</ref> Hot summers."#);
		assert_eq!(out, "Cold winters. Hot summers.");
	}

	#[test]
	fn tags_are_stripped_but_inner_text_kept() {
		let out = sanitize("A <span class=\"x\">quiet</span> town.");
		assert_eq!(out, "A quiet town.");
	}

	#[test]
	fn piped_link_keeps_shown_text() {
		assert_eq!(sanitize("[[Target|Shown]]"), "Shown");
	}

	#[test]
	fn plain_link_keeps_target_text() {
		assert_eq!(sanitize("[[Target]]"), "Target");
	}

	#[test]
	fn two_links_on_one_line_stay_separate() {
		let out = sanitize("See [[Alpha]] and [[Beta|the beta page]].");
		assert_eq!(out, "See Alpha and the beta page.");
	}

	#[test]
	fn templates_and_escaped_pipes_are_removed() {
		let out = sanitize("Born {{circa|1850}} in {{!}} the north.");
		assert_eq!(out, "Born  in  the north.");
	}

	#[test]
	fn file_links_are_removed() {
		let out = sanitize("[[File:Town hall.jpg|thumb|The [[town hall]] in winter]]\nA town.");
		assert_eq!(out, "\nA town.");
	}

	#[test]
	fn text_is_truncated_at_the_category_section() {
		let out = sanitize("The end of prose.\n[[Category:Towns]]\n[[Category:Rivers]]");
		assert_eq!(out, "The end of prose.\n");
	}

	#[test]
	fn heading_and_bullet_lines_are_dropped() {
		let out = sanitize("== History ==\nThe town grew.\n* a bullet\nIt still grows.");
		assert_eq!(out, "\nThe town grew.\n\nIt still grows.");
	}

	#[test]
	fn bold_and_italic_markup_is_dropped() {
		assert_eq!(sanitize("'''Bold''' and ''italic'' words."), "Bold and italic words.");
	}

	#[test]
	fn spacing_entities_are_replaced() {
		assert_eq!(sanitize("10&nbsp;km, 1990&ndash;1995, 3{{nbsp}}m"), "10 km, 1990-1995, 3 m");
	}

	#[test]
	fn magic_words_are_removed() {
		assert_eq!(sanitize("__NOTOC__Plain text."), "Plain text.");
	}

	#[test]
	fn leftover_closing_braces_are_removed() {
		assert_eq!(sanitize("trailing}} debris"), "trailing debris");
	}

	#[test]
	fn idempotent_on_plain_text() {
		let plain = "A plain paragraph. It has two sentences.\n\nAnd a second paragraph.";
		let once = sanitize(plain);
		assert_eq!(once, plain);
		assert_eq!(sanitize(&once), once);
	}
}
