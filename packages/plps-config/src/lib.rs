mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Security, Service, Storage, Widget};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(&raw).map_err(|err| match err {
		Error::ParseConfig { source, .. } =>
			Error::ParseConfig { path: path.to_path_buf(), source },
		other => other,
	})
}

/// Parses, normalizes and validates an in-memory TOML document.
pub fn parse(raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: Default::default(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}

	match (&cfg.storage.catalog_file, &cfg.storage.postgres) {
		(Some(_), Some(_)) => {
			return Err(Error::Validation {
				message: "storage.catalog_file and storage.postgres are mutually exclusive."
					.to_string(),
			});
		},
		(None, None) => {
			return Err(Error::Validation {
				message: "One of storage.catalog_file or storage.postgres is required.".to_string(),
			});
		},
		_ => {},
	}

	if let Some(postgres) = cfg.storage.postgres.as_ref() {
		if postgres.dsn.trim().is_empty() {
			return Err(Error::Validation {
				message: "storage.postgres.dsn must be non-empty.".to_string(),
			});
		}
		if postgres.pool_max_conns == 0 {
			return Err(Error::Validation {
				message: "storage.postgres.pool_max_conns must be greater than zero.".to_string(),
			});
		}
	}
	if !(1..=20).contains(&cfg.widget.limit) {
		return Err(Error::Validation {
			message: "widget.limit must be in the range 1-20.".to_string(),
		});
	}
	if !(1..=10).contains(&cfg.widget.min_chars) {
		return Err(Error::Validation {
			message: "widget.min_chars must be in the range 1-10.".to_string(),
		});
	}
	if cfg.security.nonce_secret.trim().is_empty() {
		return Err(Error::Validation {
			message: "security.nonce_secret must be non-empty.".to_string(),
		});
	}
	if cfg.security.nonce_lifetime_secs < 2 {
		return Err(Error::Validation {
			message: "security.nonce_lifetime_secs must be at least 2.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.storage.catalog_file.as_deref().map(|path| path.as_os_str().is_empty()).unwrap_or(false)
	{
		cfg.storage.catalog_file = None;
	}
	if cfg.service.public_url.as_deref().map(|url| url.trim().is_empty()).unwrap_or(false) {
		cfg.service.public_url = None;
	}
	if let Some(url) = cfg.service.public_url.as_mut() {
		let trimmed = url.trim().trim_end_matches('/').to_string();

		*url = trimmed;
	}

	cfg.widget.placeholder = cfg.widget.placeholder.trim().to_string();
}

impl Service {
	/// Base URL widgets should post searches to.
	pub fn endpoint_base(&self) -> String {
		match self.public_url.as_deref() {
			Some(url) => url.to_string(),
			None => format!("http://{}", self.http_bind.trim()),
		}
	}
}
