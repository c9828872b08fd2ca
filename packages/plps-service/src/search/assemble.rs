use serde::{Deserialize, Serialize};

use plps_domain::snippet;

use super::ScoredItem;

pub const FALLBACK_CATEGORY: &str = "Uncategorised";
pub const FALLBACK_PRICE: &str = "N/A";
pub const LABEL_IN_STOCK: &str = "In stock";
pub const LABEL_OUT_OF_STOCK: &str = "Out of stock";

/// What a widget renders for one product. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItem {
	pub id: i64,
	pub title: String,
	pub url: String,
	pub category: String,
	pub price: String,
	pub availability: String,
	pub out_of_stock: bool,
	pub snippet: String,
}
impl From<ScoredItem> for ResultItem {
	fn from(item: ScoredItem) -> Self {
		let entry = item.entry;
		let availability = non_blank(entry.availability).unwrap_or_else(|| {
			if entry.in_stock { LABEL_IN_STOCK } else { LABEL_OUT_OF_STOCK }.to_string()
		});

		Self {
			id: entry.id,
			snippet: snippet::build_snippet(&entry.short_description, &entry.description),
			title: entry.title,
			url: entry.url,
			category: non_blank(entry.category).unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
			price: non_blank(entry.price).unwrap_or_else(|| FALLBACK_PRICE.to_string()),
			availability,
			out_of_stock: !entry.in_stock,
		}
	}
}

/// Keeps the first `limit` ranked items. Call only on already ranked input.
pub fn assemble(ranked: Vec<ScoredItem>, limit: u32) -> Vec<ResultItem> {
	ranked.into_iter().take(limit as usize).map(ResultItem::from).collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
	value.map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}
