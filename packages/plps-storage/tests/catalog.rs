use std::{env, fs, path::PathBuf};

use plps_storage::{Error, file::FileCatalog, models::CatalogEntry, queries};
use plps_testkit::{TestCatalog, catalog_entry};

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

#[test]
fn file_catalog_loads_fixture_with_defaults() {
	let catalog = FileCatalog::open(&fixture("catalog.json")).expect("Fixture must load.");

	assert_eq!(catalog.len(), 4);

	let hits = catalog.search_products("BLUE", 50);
	let ids = hits.iter().map(|entry| entry.id).collect::<Vec<_>>();

	assert_eq!(ids, vec![101, 102]);
	assert_eq!(hits[1].short_description, "");
	assert!(!hits[1].in_stock);
	assert!(hits[0].visible);
}

#[test]
fn file_catalog_reports_missing_file() {
	let err = FileCatalog::open(&fixture("does_not_exist.json")).expect_err("Expected read error.");

	assert!(matches!(err, Error::ReadCatalog { .. }), "Unexpected error: {err:?}");
}

#[test]
fn file_catalog_reports_malformed_json() {
	let path = env::temp_dir().join(format!("plps_catalog_malformed_{}.json", std::process::id()));

	fs::write(&path, "[{\"id\": 1,").expect("Failed to write malformed catalog.");

	let result = FileCatalog::open(&path);

	fs::remove_file(&path).expect("Failed to remove malformed catalog.");

	assert!(matches!(result, Err(Error::ParseCatalog { .. })), "Unexpected result: {result:?}");
}

fn ids(entries: Vec<CatalogEntry>) -> Vec<i64> {
	entries.into_iter().map(|entry| entry.id).collect()
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set PLPS_PG_DSN to run."]
async fn postgres_search_matches_published_products_only() {
	let Some(base_dsn) = plps_testkit::env_dsn() else {
		eprintln!("Skipping postgres_search_matches_published_products_only; set PLPS_PG_DSN.");

		return;
	};
	let catalog = TestCatalog::create(&base_dsn).await.expect("Failed to create test catalog.");

	catalog
		.seed(&[
			CatalogEntry {
				description: "Comes in blue too.".to_string(),
				..catalog_entry(6, "Green Gizmo")
			},
			catalog_entry(1, "Blue Widget"),
			catalog_entry(2, "Red Gadget"),
			CatalogEntry { status: "draft".to_string(), ..catalog_entry(3, "Blue Draft") },
			CatalogEntry { visible: false, ..catalog_entry(4, "Blue Hidden") },
			catalog_entry(5, "100% Cotton Tee"),
		])
		.await
		.expect("Failed to seed catalog.");

	let db = catalog.db();

	assert_eq!(
		ids(queries::search_products(db, "BLUE", 50).await.expect("Search failed.")),
		vec![6, 1]
	);
	assert_eq!(ids(queries::search_products(db, "100%", 50).await.expect("Search failed.")), vec![5]);
	assert_eq!(ids(queries::search_products(db, "%", 50).await.expect("Search failed.")), vec![5]);
	assert_eq!(ids(queries::search_products(db, "e", 2).await.expect("Search failed.")), vec![6, 1]);

	catalog.drop_database().await.expect("Failed to drop test catalog.");
}
