use std::sync::LazyLock;

use regex::Regex;

pub const SNIPPET_MAX_CHARS: usize = 140;
pub const SNIPPET_ELLIPSIS: char = '…';

static SCRIPT_OR_STYLE: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").ok());
static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").ok());

/// Plain-text teaser for a product: the short description when present, else the long one.
pub fn build_snippet(short_description: &str, description: &str) -> String {
	let raw = if short_description.trim().is_empty() { description } else { short_description };
	let text = collapse_whitespace(&strip_tags(raw));

	truncate_chars(&text, SNIPPET_MAX_CHARS)
}

pub fn strip_tags(html: &str) -> String {
	let mut out = html.to_string();

	for pattern in [&SCRIPT_OR_STYLE, &TAG] {
		if let Some(re) = pattern.as_ref() {
			out = re.replace_all(&out, "").into_owned();
		}
	}

	out
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => {
			let mut out = text[..cut].trim_end().to_string();

			out.push(SNIPPET_ELLIPSIS);

			out
		},
		None => text.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefers_short_description() {
		assert_eq!(build_snippet("Short one.", "Long one."), "Short one.");
		assert_eq!(build_snippet("  ", "Long one."), "Long one.");
		assert_eq!(build_snippet("", ""), "");
	}

	#[test]
	fn strips_markup_and_collapses_whitespace() {
		let html = "<p>Great <strong>blue</strong>\n\n widget</p><script>alert(1)</script><style>p{}</style>";

		assert_eq!(build_snippet(html, ""), "Great blue widget");
	}

	#[test]
	fn truncates_long_text_with_ellipsis() {
		let long = "a".repeat(200);
		let snippet = build_snippet(&long, "");

		assert_eq!(snippet.chars().count(), SNIPPET_MAX_CHARS + 1);
		assert!(snippet.ends_with(SNIPPET_ELLIPSIS));

		let exact = "é".repeat(SNIPPET_MAX_CHARS);

		assert_eq!(build_snippet(&exact, ""), exact);
	}
}
