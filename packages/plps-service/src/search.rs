mod assemble;
mod candidates;
mod ranking;

pub use assemble::{
	FALLBACK_CATEGORY, FALLBACK_PRICE, LABEL_IN_STOCK, LABEL_OUT_OF_STOCK, ResultItem, assemble,
};
pub use candidates::fetch_candidates;
pub use ranking::{ScoredItem, compare_scored, rank};

use serde::{Deserialize, Serialize};

use plps_domain::query;

use crate::{RankingService, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
	pub term: String,
	/// Requested display limit. Clamped to `1..=20`; `None` means the default of 8.
	pub limit: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
	pub items: Vec<ResultItem>,
}

impl RankingService {
	pub async fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let Some(term) = query::effective_term(&req.term) else {
			tracing::debug!("Empty term after trimming; skipping catalog.");

			return Ok(SearchResponse::default());
		};
		let limit = req.limit.map(query::clamp_limit).unwrap_or(query::DEFAULT_LIMIT);
		let oversample = query::oversample_limit(limit);
		let candidates = fetch_candidates(self.catalog.as_ref(), term, oversample).await?;
		let candidate_count = candidates.len();
		let ranked = rank(candidates, term);

		for item in ranked.iter().take(limit as usize) {
			tracing::trace!(
				title = %item.entry.title,
				tier = ?item.tier,
				score = item.score,
				in_stock = item.in_stock,
				"Ranked candidate."
			);
		}

		let items = assemble(ranked, limit);

		tracing::debug!(
			term_len = term.chars().count(),
			limit,
			oversample,
			candidates = candidate_count,
			returned = items.len(),
			"Search completed."
		);

		Ok(SearchResponse { items })
	}
}
