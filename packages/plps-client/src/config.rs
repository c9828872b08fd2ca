use serde::Deserialize;

use plps_domain::query;

use crate::{Error, Result};

/// Host-supplied widget settings, in the camelCase shape served by `/v1/widget/config`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
	#[serde(default)]
	pub ajax_url: String,
	#[serde(default)]
	pub nonce: String,
	#[serde(default = "default_limit")]
	pub limit: u32,
	#[serde(default = "default_min_chars")]
	pub min_chars: u32,
	#[serde(default)]
	pub placeholder: String,
	#[serde(default = "default_debounce_ms")]
	pub debounce_ms: u64,
	#[serde(default = "default_request_timeout_ms")]
	pub request_timeout_ms: u64,
}
impl WidgetConfig {
	pub fn new(ajax_url: impl Into<String>, nonce: impl Into<String>) -> Self {
		Self {
			ajax_url: ajax_url.into(),
			nonce: nonce.into(),
			limit: default_limit(),
			min_chars: default_min_chars(),
			placeholder: String::new(),
			debounce_ms: default_debounce_ms(),
			request_timeout_ms: default_request_timeout_ms(),
		}
	}

	/// A widget without an endpoint or a nonce cannot search and must not mount.
	pub fn validate(&self) -> Result<()> {
		if self.ajax_url.trim().is_empty() {
			return Err(Error::MissingConfig { field: "ajaxUrl" });
		}
		if self.nonce.trim().is_empty() {
			return Err(Error::MissingConfig { field: "nonce" });
		}

		Ok(())
	}

	pub fn effective_limit(&self) -> u32 {
		query::clamp_limit(self.limit.into())
	}

	pub fn effective_min_chars(&self) -> u32 {
		query::clamp_min_chars(self.min_chars.into())
	}
}

fn default_limit() -> u32 {
	query::DEFAULT_LIMIT
}

fn default_min_chars() -> u32 {
	query::DEFAULT_MIN_CHARS
}

fn default_debounce_ms() -> u64 {
	250
}

fn default_request_timeout_ms() -> u64 {
	5_000
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn server_config_shape_deserializes_with_client_defaults() {
		let config: WidgetConfig = serde_json::from_str(
			r#"{"ajaxUrl":"http://127.0.0.1:8089/wp-admin/admin-ajax.php","nonce":"abc","limit":40,"minChars":0,"placeholder":"Find"}"#,
		)
		.expect("Failed to parse widget config.");

		assert!(config.validate().is_ok());
		assert_eq!(config.effective_limit(), 20);
		assert_eq!(config.effective_min_chars(), 1);
		assert_eq!(config.debounce_ms, 250);
		assert_eq!(config.request_timeout_ms, 5_000);
	}

	#[test]
	fn missing_endpoint_or_nonce_refuses() {
		let no_url: WidgetConfig =
			serde_json::from_str(r#"{"nonce":"abc"}"#).expect("Failed to parse widget config.");
		let no_nonce = WidgetConfig::new("http://127.0.0.1/wp-admin/admin-ajax.php", "  ");

		assert!(matches!(no_url.validate(), Err(Error::MissingConfig { field: "ajaxUrl" })));
		assert!(matches!(no_nonce.validate(), Err(Error::MissingConfig { field: "nonce" })));
	}
}
