use std::sync::Arc;

use color_eyre::eyre;

use plps_config::Config;
use plps_service::{
	Blake3Nonces, CatalogReader, FileCatalogReader, PostgresCatalogReader, RankingService,
	RequestHandler,
};
use plps_storage::{db::Db, file::FileCatalog};

/// What the widget config route hands out besides a fresh nonce.
#[derive(Debug, Clone)]
pub struct WidgetSettings {
	pub ajax_url: String,
	pub limit: u32,
	pub min_chars: u32,
	pub placeholder: String,
}

#[derive(Clone)]
pub struct AppState {
	pub handler: Arc<RequestHandler>,
	pub nonces: Arc<Blake3Nonces>,
	pub widget: Arc<WidgetSettings>,
}
impl AppState {
	pub async fn new(config: Config) -> color_eyre::Result<Self> {
		let catalog: Arc<dyn CatalogReader> =
			match (config.storage.catalog_file.as_deref(), config.storage.postgres.as_ref()) {
				(Some(path), None) => Arc::new(FileCatalogReader::new(FileCatalog::open(path)?)),
				(None, Some(postgres)) => {
					// Lazy so an unreachable catalog surfaces per request instead of at boot.
					let db = Db::connect_lazy(postgres)?;

					Arc::new(PostgresCatalogReader::new(db))
				},
				_ => return Err(eyre::eyre!("Exactly one catalog source must be configured.")),
			};

		Ok(Self::with_catalog(&config, catalog))
	}

	pub fn with_catalog(config: &Config, catalog: Arc<dyn CatalogReader>) -> Self {
		let nonces = Arc::new(Blake3Nonces::new(
			&config.security.nonce_secret,
			config.security.nonce_lifetime_secs,
		));
		let handler = RequestHandler::new(RankingService::new(catalog), nonces.clone());
		let widget = WidgetSettings {
			ajax_url: format!("{}{}", config.service.endpoint_base(), crate::routes::AJAX_PATH),
			limit: config.widget.limit,
			min_chars: config.widget.min_chars,
			placeholder: config.widget.placeholder.clone(),
		};

		Self { handler: Arc::new(handler), nonces, widget: Arc::new(widget) }
	}
}
