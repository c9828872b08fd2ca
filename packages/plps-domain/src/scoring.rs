use serde::Serialize;

use crate::{query, similarity};

pub const SCORE_EXACT: u32 = 10_000;
pub const SCORE_PREFIX: u32 = 9_000;
pub const SCORE_CONTAINS: u32 = 8_000;
/// Upper bound for similarity-only matches. Strictly below [`SCORE_CONTAINS`].
pub const SCORE_SIMILAR_MAX: u32 = 7_000;

/// Coarse match-quality bucket, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
	None,
	Similar,
	Contains,
	Prefix,
	Exact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchScore {
	pub tier: MatchTier,
	pub score: u32,
}
impl MatchScore {
	const NONE: Self = Self { tier: MatchTier::None, score: 0 };
}

/// Scores `title` against `term`, both compared trimmed and case-folded.
pub fn score(title: &str, term: &str) -> u32 {
	score_match(title, term).score
}

pub fn score_match(title: &str, term: &str) -> MatchScore {
	score_normalized(&query::normalize(title), &query::normalize(term))
}

/// Same as [`score_match`] for inputs that already went through [`query::normalize`].
pub fn score_normalized(title: &str, term: &str) -> MatchScore {
	if title.is_empty() || term.is_empty() {
		return MatchScore::NONE;
	}
	if title == term {
		return MatchScore { tier: MatchTier::Exact, score: SCORE_EXACT };
	}
	if title.starts_with(term) {
		return MatchScore { tier: MatchTier::Prefix, score: SCORE_PREFIX };
	}
	if title.contains(term) {
		return MatchScore { tier: MatchTier::Contains, score: SCORE_CONTAINS };
	}

	let score = similarity_score(similarity::similarity_percent(title, term));

	if score == 0 { MatchScore::NONE } else { MatchScore { tier: MatchTier::Similar, score } }
}

fn similarity_score(percent: f64) -> u32 {
	if !percent.is_finite() {
		return 0;
	}

	(percent * 70.0).clamp(0.0, SCORE_SIMILAR_MAX as f64).round() as u32
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_sides_score_zero() {
		assert_eq!(score_match("", ""), MatchScore::NONE);
		assert_eq!(score_match("Blue Widget", "   "), MatchScore::NONE);
		assert_eq!(score_match("  ", "blue"), MatchScore::NONE);
	}

	#[test]
	fn similarity_score_is_bounded() {
		assert_eq!(similarity_score(0.0), 0);
		assert_eq!(similarity_score(100.0), SCORE_SIMILAR_MAX);
		assert_eq!(similarity_score(250.0), SCORE_SIMILAR_MAX);
		assert_eq!(similarity_score(-3.0), 0);
		assert_eq!(similarity_score(f64::NAN), 0);
		assert_eq!(similarity_score(50.004), 3_500);
	}
}
