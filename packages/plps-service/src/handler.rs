use std::sync::Arc;

use serde::Deserialize;

use plps_domain::query;

use crate::{Error, NonceVerifier, RankingService, Result, SearchRequest, SearchResponse};

pub const SEARCH_ACTION: &str = "plps_search_products";

/// Form fields posted by the widget. Everything is optional at the wire level; [`RequestHandler`]
/// decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
	pub action: Option<String>,
	pub nonce: Option<String>,
	pub term: Option<String>,
	pub limit: Option<String>,
}

/// Checks a posted search form and hands valid requests to the ranking service.
#[derive(Clone)]
pub struct RequestHandler {
	ranking: RankingService,
	nonces: Arc<dyn NonceVerifier>,
}
impl RequestHandler {
	pub fn new(ranking: RankingService, nonces: Arc<dyn NonceVerifier>) -> Self {
		Self { ranking, nonces }
	}

	pub async fn handle(&self, form: SearchForm) -> Result<SearchResponse> {
		let action = form.action.as_deref().map(str::trim).unwrap_or_default();

		if action != SEARCH_ACTION {
			return Err(Error::UnknownAction { action: action.to_string() });
		}

		let nonce = form.nonce.as_deref().map(str::trim).unwrap_or_default();

		if nonce.is_empty() || !self.nonces.verify(SEARCH_ACTION, nonce) {
			tracing::warn!(nonce_present = !nonce.is_empty(), "Rejected search with invalid nonce.");

			return Err(Error::InvalidToken);
		}

		let limit = query::parse_limit(form.limit.as_deref());
		let request = SearchRequest { term: form.term.unwrap_or_default(), limit: Some(limit.into()) };

		self.ranking.search(request).await
	}
}
