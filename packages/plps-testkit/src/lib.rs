//! Disposable Postgres catalogs for integration tests.
//!
//! A [`TestCatalog`] owns a uniquely named database with the catalog schema applied. Tests seed it
//! with [`CatalogEntry`] values, so fixtures read the same way on the file and Postgres paths.

mod error;

pub use error::{Error, Result};

use std::{env, str::FromStr, thread};

use sqlx::{
	ConnectOptions, Connection, Executor,
	postgres::{PgConnectOptions, PgConnection},
};
use tokio::runtime::Builder;
use uuid::Uuid;

use plps_config::Postgres;
use plps_storage::{
	db::Db,
	models::{CatalogEntry, STATUS_PUBLISH},
};

pub const DSN_ENV: &str = "PLPS_PG_DSN";

const MAINTENANCE_DATABASES: [&str; 2] = ["postgres", "template1"];
const POOL_MAX_CONNS: u32 = 2;

pub struct TestCatalog {
	name: String,
	maintenance: PgConnectOptions,
	db: Db,
	dropped: bool,
}
impl TestCatalog {
	/// Creates a fresh database on the server `base_dsn` points at and applies the catalog schema.
	pub async fn create(base_dsn: &str) -> Result<Self> {
		let base = PgConnectOptions::from_str(base_dsn)
			.map_err(|err| Error::Message(format!("Failed to parse {DSN_ENV}: {err}.")))?;
		let (maintenance, mut conn) = connect_maintenance(&base).await?;
		let name = format!("plps_test_{}", Uuid::new_v4().simple());

		conn.execute(format!(r#"CREATE DATABASE "{name}""#).as_str())
			.await
			.map_err(|err| Error::Message(format!("Failed to create catalog database: {err}.")))?;
		conn.close().await?;

		let dsn = base.database(&name).to_url_lossy().to_string();
		let db = match Db::connect(&Postgres { dsn, pool_max_conns: POOL_MAX_CONNS }).await {
			Ok(db) => db,
			Err(err) => {
				let _ = drop_named(&maintenance, &name).await;

				return Err(err.into());
			},
		};
		let catalog = Self { name, maintenance, db, dropped: false };

		catalog.db.ensure_schema().await?;

		Ok(catalog)
	}

	pub fn db(&self) -> &Db {
		&self.db
	}

	/// Inserts `entries` in one transaction. Each entry is one second older than the one before
	/// it, so seed order is the newest-first order of the candidate query.
	pub async fn seed(&self, entries: &[CatalogEntry]) -> Result<()> {
		let mut tx = self.db.pool.begin().await?;

		for (age_secs, entry) in entries.iter().enumerate() {
			sqlx::query(
				"\
INSERT INTO catalog_products (
	product_id,
	title,
	short_description,
	description,
	url,
	category,
	price,
	availability,
	in_stock,
	status,
	visible,
	updated_at
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, now() - make_interval(secs => $12))",
			)
			.bind(entry.id)
			.bind(&entry.title)
			.bind(&entry.short_description)
			.bind(&entry.description)
			.bind(&entry.url)
			.bind(entry.category.as_deref())
			.bind(entry.price.as_deref())
			.bind(entry.availability.as_deref())
			.bind(entry.in_stock)
			.bind(&entry.status)
			.bind(entry.visible)
			.bind(age_secs as f64)
			.execute(&mut *tx)
			.await?;
		}

		tx.commit().await?;

		Ok(())
	}

	/// Closes the pool and drops the database.
	pub async fn drop_database(mut self) -> Result<()> {
		self.db.pool.close().await;

		drop_named(&self.maintenance, &self.name).await?;

		self.dropped = true;

		Ok(())
	}
}
impl Drop for TestCatalog {
	fn drop(&mut self) {
		if self.dropped {
			return;
		}

		let name = self.name.clone();
		let maintenance = self.maintenance.clone();
		let cleanup = thread::spawn(move || {
			let runtime = match Builder::new_current_thread().enable_all().build() {
				Ok(runtime) => runtime,
				Err(err) => {
					eprintln!("Catalog database {name} was not dropped: {err}.");

					return;
				},
			};

			if let Err(err) = runtime.block_on(drop_named(&maintenance, &name)) {
				eprintln!("Catalog database {name} was not dropped: {err}.");
			}
		});
		let _ = cleanup.join();
	}
}

pub fn env_dsn() -> Option<String> {
	env::var(DSN_ENV).ok()
}

/// A published, visible, in-stock product with empty descriptions.
pub fn catalog_entry(id: i64, title: &str) -> CatalogEntry {
	CatalogEntry {
		id,
		title: title.to_string(),
		short_description: String::new(),
		description: String::new(),
		url: format!("https://shop.example.test/p/{id}"),
		category: None,
		price: None,
		availability: None,
		in_stock: true,
		status: STATUS_PUBLISH.to_string(),
		visible: true,
	}
}

async fn connect_maintenance(base: &PgConnectOptions) -> Result<(PgConnectOptions, PgConnection)> {
	let mut last_err = None;

	for database in MAINTENANCE_DATABASES {
		let options = base.clone().database(database);

		match PgConnection::connect_with(&options).await {
			Ok(conn) => return Ok((options, conn)),
			Err(err) => last_err = Some(err),
		}
	}

	Err(Error::Message(format!("Failed to reach a maintenance database: {last_err:?}.")))
}

async fn drop_named(maintenance: &PgConnectOptions, name: &str) -> Result<()> {
	let mut conn = PgConnection::connect_with(maintenance).await?;

	conn.execute(format!(r#"DROP DATABASE IF EXISTS "{name}" WITH (FORCE)"#).as_str())
		.await
		.map_err(|err| Error::Message(format!("Failed to drop catalog database {name}: {err}.")))?;
	conn.close().await?;

	Ok(())
}
