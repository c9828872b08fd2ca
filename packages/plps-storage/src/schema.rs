const CATALOG_SQL: &str = include_str!("../sql/catalog.sql");

/// DDL for the catalog table the Postgres reader expects.
pub fn render_schema() -> &'static str {
	CATALOG_SQL
}

pub fn statements() -> impl Iterator<Item = &'static str> {
	CATALOG_SQL.split(';').map(str::trim).filter(|statement| !statement.is_empty())
}
