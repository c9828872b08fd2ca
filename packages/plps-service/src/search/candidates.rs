use crate::{CatalogEntry, CatalogReader, Result};

/// Pulls the candidate pool. Entries a reader should not have returned (drafts, hidden products,
/// anything past the pool bound) are dropped here so ranking never sees them.
pub async fn fetch_candidates(
	catalog: &dyn CatalogReader,
	term: &str,
	oversample_limit: u32,
) -> Result<Vec<CatalogEntry>> {
	let mut entries = catalog.fetch_candidates(term, oversample_limit).await.inspect_err(|err| {
		tracing::warn!(error = %err, "Candidate retrieval failed.");
	})?;
	let fetched = entries.len();

	entries.retain(CatalogEntry::is_public);
	entries.truncate(oversample_limit as usize);

	if entries.len() != fetched {
		tracing::warn!(
			fetched,
			kept = entries.len(),
			"Catalog reader returned entries outside the public candidate pool."
		);
	}

	Ok(entries)
}
