use serde::Deserialize;

pub const STATUS_PUBLISH: &str = "publish";

/// One product as the catalog store holds it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, sqlx::FromRow)]
pub struct CatalogEntry {
	pub id: i64,
	pub title: String,
	#[serde(default)]
	pub short_description: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub url: String,
	#[serde(default)]
	pub category: Option<String>,
	#[serde(default)]
	pub price: Option<String>,
	#[serde(default)]
	pub availability: Option<String>,
	#[serde(default = "default_true")]
	pub in_stock: bool,
	#[serde(default = "default_status")]
	pub status: String,
	#[serde(default = "default_true")]
	pub visible: bool,
}
impl CatalogEntry {
	/// Published and visible to shoppers.
	pub fn is_public(&self) -> bool {
		self.status == STATUS_PUBLISH && self.visible
	}
}

fn default_true() -> bool {
	true
}

fn default_status() -> String {
	STATUS_PUBLISH.to_string()
}
