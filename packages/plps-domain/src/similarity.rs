//! Shared-run similarity between two strings.
//!
//! The measure finds the longest common run of characters, then recurses into the text left and
//! right of that run in both strings and sums the run lengths. The percentage is
//! `2 * shared * 100 / (len(a) + len(b))`, so identical strings score 100 and strings with no
//! character in common score 0. Lengths are counted in `char`s, not bytes.

/// Percentage in `0.0..=100.0`.
pub fn similarity_percent(a: &str, b: &str) -> f64 {
	let a: Vec<char> = a.chars().collect();
	let b: Vec<char> = b.chars().collect();
	let total = a.len() + b.len();

	if total == 0 {
		return 0.0;
	}

	(shared_run_chars(&a, &b) * 2) as f64 * 100.0 / total as f64
}

pub fn shared_run_chars(a: &[char], b: &[char]) -> usize {
	let Some((pos_a, pos_b, len)) = longest_common_run(a, b) else { return 0 };
	let mut shared = len;

	if pos_a > 0 && pos_b > 0 {
		shared += shared_run_chars(&a[..pos_a], &b[..pos_b]);
	}
	if pos_a + len < a.len() && pos_b + len < b.len() {
		shared += shared_run_chars(&a[pos_a + len..], &b[pos_b + len..]);
	}

	shared
}

// First longest run wins on ties, scanning `a` then `b` left to right.
fn longest_common_run(a: &[char], b: &[char]) -> Option<(usize, usize, usize)> {
	let mut best: Option<(usize, usize, usize)> = None;

	for i in 0..a.len() {
		for j in 0..b.len() {
			let mut len = 0;

			while i + len < a.len() && j + len < b.len() && a[i + len] == b[j + len] {
				len += 1;
			}

			if len > best.map(|(_, _, best_len)| best_len).unwrap_or(0) {
				best = Some((i, j, len));
			}
		}
	}

	best
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chars(text: &str) -> Vec<char> {
		text.chars().collect()
	}

	#[test]
	fn identical_strings_are_fully_similar() {
		assert_eq!(similarity_percent("gadget", "gadget"), 100.0);
	}

	#[test]
	fn disjoint_strings_share_nothing() {
		assert_eq!(similarity_percent("abc", "xyz"), 0.0);
		assert_eq!(similarity_percent("", ""), 0.0);
		assert_eq!(similarity_percent("abc", ""), 0.0);
	}

	#[test]
	fn sums_runs_on_both_sides_of_the_longest_run() {
		// "World" vs "Word": longest run "Wor", then "l"/"" has nothing and "d"/"d" shares one.
		assert_eq!(shared_run_chars(&chars("World"), &chars("Word")), 4);
		assert!((similarity_percent("World", "Word") - 800.0 / 9.0).abs() < 1e-9);
	}

	#[test]
	fn counts_characters_not_bytes() {
		assert_eq!(shared_run_chars(&chars("café"), &chars("café")), 4);
		assert_eq!(similarity_percent("über", "uber"), 75.0);
	}
}
