use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub widget: Widget,
	pub security: Security,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	/// Base URL advertised to widgets as the search endpoint host. Defaults to `http://{http_bind}`.
	pub public_url: Option<String>,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

/// Exactly one catalog source must be configured.
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
	pub catalog_file: Option<PathBuf>,
	pub postgres: Option<Postgres>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Widget {
	#[serde(default = "default_widget_limit")]
	pub limit: u32,
	#[serde(default = "default_min_chars")]
	pub min_chars: u32,
	#[serde(default = "default_placeholder")]
	pub placeholder: String,
}
impl Default for Widget {
	fn default() -> Self {
		Self {
			limit: default_widget_limit(),
			min_chars: default_min_chars(),
			placeholder: default_placeholder(),
		}
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	#[serde(default = "default_true")]
	pub bind_localhost_only: bool,
	pub nonce_secret: String,
	#[serde(default = "default_nonce_lifetime_secs")]
	pub nonce_lifetime_secs: u64,
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_widget_limit() -> u32 {
	8
}

fn default_min_chars() -> u32 {
	2
}

fn default_placeholder() -> String {
	"Search products…".to_string()
}

fn default_true() -> bool {
	true
}

fn default_nonce_lifetime_secs() -> u64 {
	86_400
}
