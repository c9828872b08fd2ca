use plps_storage::{db::Db, file::FileCatalog, queries};

use crate::{BoxFuture, CatalogEntry, CatalogReader, Result};

pub struct FileCatalogReader {
	catalog: FileCatalog,
}
impl FileCatalogReader {
	pub fn new(catalog: FileCatalog) -> Self {
		Self { catalog }
	}
}
impl CatalogReader for FileCatalogReader {
	fn fetch_candidates<'a>(
		&'a self,
		term: &'a str,
		oversample_limit: u32,
	) -> BoxFuture<'a, Result<Vec<CatalogEntry>>> {
		let entries = self.catalog.search_products(term, oversample_limit);

		Box::pin(async move { Ok(entries) })
	}
}

pub struct PostgresCatalogReader {
	db: Db,
}
impl PostgresCatalogReader {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}
impl CatalogReader for PostgresCatalogReader {
	fn fetch_candidates<'a>(
		&'a self,
		term: &'a str,
		oversample_limit: u32,
	) -> BoxFuture<'a, Result<Vec<CatalogEntry>>> {
		Box::pin(async move {
			let rows = queries::search_products(&self.db, term, oversample_limit).await?;

			Ok(rows)
		})
	}
}
