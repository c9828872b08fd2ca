use crate::{Result, db::Db, models::CatalogEntry};

/// Coarse match over title and descriptions, newest first. `term` is matched literally.
pub async fn search_products(db: &Db, term: &str, limit: u32) -> Result<Vec<CatalogEntry>> {
	let pattern = format!("%{}%", escape_like(term));
	let rows = sqlx::query_as::<_, CatalogEntry>(
		"\
SELECT
	product_id AS id,
	title,
	short_description,
	description,
	url,
	category,
	price,
	availability,
	in_stock,
	status,
	visible
FROM catalog_products
WHERE status = 'publish'
	AND visible
	AND (
		title ILIKE $1 ESCAPE '\\'
		OR short_description ILIKE $1 ESCAPE '\\'
		OR description ILIKE $1 ESCAPE '\\'
	)
ORDER BY updated_at DESC, product_id DESC
LIMIT $2",
	)
	.bind(pattern)
	.bind(i64::from(limit))
	.fetch_all(&db.pool)
	.await?;

	Ok(rows)
}

/// Escapes `LIKE` metacharacters so user input never acts as a pattern.
pub fn escape_like(term: &str) -> String {
	let mut out = String::with_capacity(term.len());

	for ch in term.chars() {
		if matches!(ch, '%' | '_' | '\\') {
			out.push('\\');
		}

		out.push(ch);
	}

	out
}
