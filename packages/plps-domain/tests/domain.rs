use plps_domain::{
	query,
	scoring::{self, MatchTier, SCORE_CONTAINS, SCORE_EXACT, SCORE_PREFIX, SCORE_SIMILAR_MAX},
	similarity, snippet,
};

#[test]
fn exact_match_ignores_case_and_padding() {
	assert_eq!(scoring::score("Blue Widget", "blue widget"), SCORE_EXACT);
	assert_eq!(scoring::score("  BLUE widget ", "Blue Widget"), SCORE_EXACT);
}

#[test]
fn strict_prefix_scores_prefix_tier() {
	let scored = scoring::score_match("Blue Widgets Pro", "blue");

	assert_eq!(scored.tier, MatchTier::Prefix);
	assert_eq!(scored.score, SCORE_PREFIX);
}

#[test]
fn inner_substring_scores_contains_tier() {
	let scored = scoring::score_match("Navy Blue Widget", "blue");

	assert_eq!(scored.tier, MatchTier::Contains);
	assert_eq!(scored.score, SCORE_CONTAINS);
}

#[test]
fn similarity_only_match_stays_below_contains_tier() {
	let titles = ["Red Gadget", "Bleu Widget", "b", "Gadget Blue-ish", "xyz"];
	let terms = ["blue", "gadgte", "widgets pro max", "red gadgets"];

	for title in titles {
		for term in terms {
			let scored = scoring::score_match(title, term);

			if matches!(scored.tier, MatchTier::Similar | MatchTier::None) {
				assert!(scored.score <= SCORE_SIMILAR_MAX, "{title:?} / {term:?}: {scored:?}");
				assert!(scored.score < SCORE_CONTAINS);
			}
		}
	}
}

#[test]
fn similarity_tier_maps_percentage_onto_seven_thousand() {
	// "bleu widget" vs "blue widget": 10 of 11 characters line up in runs.
	let percent = similarity::similarity_percent("bleu widget", "blue widget");
	let scored = scoring::score_match("Bleu Widget", "Blue Widget");

	assert_eq!(scored.tier, MatchTier::Similar);
	assert_eq!(scored.score, (percent * 70.0).round() as u32);
	assert!(scored.score > 5_000);
}

#[test]
fn unrelated_title_scores_zero_tier_none() {
	let scored = scoring::score_match("xyz", "abc");

	assert_eq!(scored.tier, MatchTier::None);
	assert_eq!(scored.score, 0);
}

#[test]
fn term_longer_than_title_is_never_a_prefix() {
	let scored = scoring::score_match("Blue", "blue widget");

	assert_eq!(scored.tier, MatchTier::Similar);
	assert!(scored.score < SCORE_CONTAINS);
}

#[test]
fn regex_metacharacters_match_literally() {
	assert_eq!(scoring::score("C++ Primer (5th ed.)", "c++ primer (5th"), SCORE_PREFIX);
	assert_eq!(scoring::score("Widget [XL]", "[xl]"), SCORE_CONTAINS);
	assert_eq!(scoring::score_match("Widget", ".*").tier, MatchTier::None);
}

#[test]
fn tiers_order_worst_to_best() {
	assert!(MatchTier::Exact > MatchTier::Prefix);
	assert!(MatchTier::Prefix > MatchTier::Contains);
	assert!(MatchTier::Contains > MatchTier::Similar);
	assert!(MatchTier::Similar > MatchTier::None);
}

#[test]
fn effective_limit_follows_clamp_formula() {
	for requested in [-10_i64, 0, 1, 8, 19, 20, 21, 500] {
		assert_eq!(query::clamp_limit(requested) as i64, requested.clamp(1, 20));
	}
}

#[test]
fn min_chars_clamps_to_one_through_ten() {
	assert_eq!(query::clamp_min_chars(0), 1);
	assert_eq!(query::clamp_min_chars(3), 3);
	assert_eq!(query::clamp_min_chars(99), 10);
}

#[test]
fn snippet_uses_long_description_when_excerpt_is_blank() {
	assert_eq!(
		snippet::build_snippet("", "<div>Fits  every\tdesk.</div>"),
		"Fits every desk."
	);
}
