use std::cmp::Ordering;

use plps_domain::{
	query,
	scoring::{self, MatchTier},
};

use crate::CatalogEntry;

/// A candidate with its per-request score. Scores only compare within one request.
#[derive(Debug, Clone)]
pub struct ScoredItem {
	pub entry: CatalogEntry,
	/// Trimmed, lowercased title used for scoring and the final tie-break.
	pub title_key: String,
	pub score: u32,
	pub tier: MatchTier,
	pub in_stock: bool,
}

pub fn rank(candidates: Vec<CatalogEntry>, term: &str) -> Vec<ScoredItem> {
	let term_key = query::normalize(term);
	let mut scored = candidates
		.into_iter()
		.map(|entry| {
			let title_key = query::normalize(&entry.title);
			let matched = scoring::score_normalized(&title_key, &term_key);

			ScoredItem {
				in_stock: entry.in_stock,
				title_key,
				score: matched.score,
				tier: matched.tier,
				entry,
			}
		})
		.collect::<Vec<_>>();

	scored.sort_by(compare_scored);

	scored
}

/// In stock first, then higher score, then title A-Z ignoring case.
pub fn compare_scored(a: &ScoredItem, b: &ScoredItem) -> Ordering {
	b.in_stock
		.cmp(&a.in_stock)
		.then_with(|| b.score.cmp(&a.score))
		.then_with(|| a.title_key.cmp(&b.title_key))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(id: i64, title: &str, in_stock: bool) -> CatalogEntry {
		CatalogEntry {
			id,
			title: title.to_string(),
			short_description: String::new(),
			description: String::new(),
			url: format!("https://shop.test/p/{id}"),
			category: None,
			price: None,
			availability: None,
			in_stock,
			status: "publish".to_string(),
			visible: true,
		}
	}

	fn titles(items: &[ScoredItem]) -> Vec<&str> {
		items.iter().map(|item| item.entry.title.as_str()).collect()
	}

	#[test]
	fn stock_beats_score() {
		let ranked = rank(vec![entry(1, "Blue", false), entry(2, "Navy Blue Mug", true)], "blue");

		assert_eq!(titles(&ranked), vec!["Navy Blue Mug", "Blue"]);
		assert_eq!(ranked[1].score, scoring::SCORE_EXACT);
	}

	#[test]
	fn score_beats_title() {
		let ranked = rank(vec![entry(1, "A Blue Cup", true), entry(2, "Blue Cup", true)], "blue");

		assert_eq!(titles(&ranked), vec!["Blue Cup", "A Blue Cup"]);
	}

	#[test]
	fn equal_stock_and_score_sort_by_title_ignoring_case() {
		let ranked = rank(
			vec![entry(1, "blue zebra", true), entry(2, "Blue apple", true), entry(3, "BLUE Moon", true)],
			"blue",
		);

		assert_eq!(titles(&ranked), vec!["Blue apple", "BLUE Moon", "blue zebra"]);
	}

	#[test]
	fn sorting_is_idempotent_and_total() {
		let candidates = vec![
			entry(1, "Red Gadget", true),
			entry(2, "Blue Widgets Pro", false),
			entry(3, "blue widget", true),
			entry(4, "Blue Widget", true),
			entry(5, "Widget, Blue", false),
			entry(6, "Gadget", true),
		];
		let once = rank(candidates.clone(), "blue");
		let mut twice = once.clone();

		twice.sort_by(compare_scored);

		let ids = |items: &[ScoredItem]| items.iter().map(|item| item.entry.id).collect::<Vec<_>>();

		assert_eq!(ids(&once), ids(&twice));

		for a in &once {
			for b in &once {
				let equal = compare_scored(a, b) == Ordering::Equal;
				let same_keys =
					a.in_stock == b.in_stock && a.score == b.score && a.title_key == b.title_key;

				assert_eq!(equal, same_keys, "{} vs {}", a.entry.title, b.entry.title);
				assert_eq!(compare_scored(a, b), compare_scored(b, a).reverse());
			}
		}
	}

	#[test]
	fn keys_tie_keeps_retrieval_order() {
		let ranked = rank(vec![entry(7, "Blue Widget", true), entry(3, "blue widget", true)], "blue");

		assert_eq!(ranked.iter().map(|item| item.entry.id).collect::<Vec<_>>(), vec![7, 3]);
	}
}
