//! Catalog held in memory, loaded once from a JSON array of products.

use std::{fs, path::Path, sync::Arc};

use crate::{Error, Result, models::CatalogEntry};

#[derive(Debug, Clone)]
struct IndexedEntry {
	entry: CatalogEntry,
	haystacks: [String; 3],
}

#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
	entries: Arc<[IndexedEntry]>,
}
impl FileCatalog {
	pub fn open(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCatalog { path: path.to_path_buf(), source: err })?;
		let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseCatalog { path: path.to_path_buf(), source: err })?;

		tracing::info!(path = %path.display(), products = entries.len(), "Catalog file loaded.");

		Ok(Self::from_entries(entries))
	}

	pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
		let entries = entries
			.into_iter()
			.map(|entry| IndexedEntry {
				haystacks: [
					entry.title.to_lowercase(),
					entry.short_description.to_lowercase(),
					entry.description.to_lowercase(),
				],
				entry,
			})
			.collect::<Vec<_>>();

		Self { entries: entries.into() }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Public entries whose title or descriptions contain `term`, in file order.
	pub fn search_products(&self, term: &str, limit: u32) -> Vec<CatalogEntry> {
		let needle = term.to_lowercase();

		self.entries
			.iter()
			.filter(|indexed| indexed.entry.is_public())
			.filter(|indexed| indexed.haystacks.iter().any(|haystack| haystack.contains(&needle)))
			.take(limit as usize)
			.map(|indexed| indexed.entry.clone())
			.collect()
	}
}
