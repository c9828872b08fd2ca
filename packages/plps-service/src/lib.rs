pub mod catalog;
pub mod handler;
pub mod nonce;
pub mod search;

mod error;

pub use catalog::{FileCatalogReader, PostgresCatalogReader};
pub use error::{Error, Result};
pub use handler::{RequestHandler, SEARCH_ACTION, SearchForm};
pub use nonce::{Blake3Nonces, NonceVerifier};
pub use plps_storage::models::CatalogEntry;
pub use search::{ResultItem, ScoredItem, SearchRequest, SearchResponse};

use std::{future::Future, pin::Pin, sync::Arc};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the catalog store.
pub trait CatalogReader
where
	Self: Send + Sync,
{
	/// Coarse title/description match returning at most `oversample_limit` public entries.
	///
	/// An unreachable store must surface as [`Error::BackendUnavailable`], never as an empty list.
	fn fetch_candidates<'a>(
		&'a self,
		term: &'a str,
		oversample_limit: u32,
	) -> BoxFuture<'a, Result<Vec<CatalogEntry>>>;
}

/// Scores, orders and truncates catalog candidates for one query at a time.
#[derive(Clone)]
pub struct RankingService {
	catalog: Arc<dyn CatalogReader>,
}
impl RankingService {
	pub fn new(catalog: Arc<dyn CatalogReader>) -> Self {
		Self { catalog }
	}
}
