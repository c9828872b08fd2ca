use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::{BoxFuture, Error, Result, WidgetConfig};

/// Action name the search endpoint dispatches on.
pub const SEARCH_ACTION: &str = "plps_search_products";

const WIDGET_CONFIG_PATH: &str = "/v1/widget/config";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
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

/// Sends one search to the server. Implementations must not retry.
pub trait SearchTransport
where
	Self: Send + Sync,
{
	fn search<'a>(&'a self, term: &'a str, limit: u32) -> BoxFuture<'a, Result<Vec<ResultItem>>>;
}

/// Form-encoded POST against the widget's `ajaxUrl`.
#[derive(Clone)]
pub struct HttpTransport {
	client: Client,
	ajax_url: String,
	nonce: String,
}
impl HttpTransport {
	pub fn new(config: &WidgetConfig) -> Result<Self> {
		config.validate()?;

		Ok(Self {
			client: Client::new(),
			ajax_url: config.ajax_url.clone(),
			nonce: config.nonce.clone(),
		})
	}

	async fn post_search(&self, term: &str, limit: u32) -> Result<Vec<ResultItem>> {
		let limit = limit.to_string();
		let response = self
			.client
			.post(&self.ajax_url)
			.form(&[
				("action", SEARCH_ACTION),
				("nonce", self.nonce.as_str()),
				("term", term),
				("limit", limit.as_str()),
			])
			.send()
			.await?;
		let status = response.status();
		let bytes = response.bytes().await?;

		decode_search(status, &bytes)
	}
}
impl SearchTransport for HttpTransport {
	fn search<'a>(&'a self, term: &'a str, limit: u32) -> BoxFuture<'a, Result<Vec<ResultItem>>> {
		Box::pin(self.post_search(term, limit))
	}
}

#[derive(Debug, Deserialize)]
struct Envelope {
	success: bool,
	#[serde(default)]
	data: Option<SearchData>,
	#[serde(default)]
	message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
	#[serde(default)]
	items: Vec<ResultItem>,
}

/// Fetches a ready-to-mount widget config, including a fresh nonce, from a running server.
pub async fn fetch_widget_config(client: &Client, server_url: &str) -> Result<WidgetConfig> {
	let url = format!("{}{WIDGET_CONFIG_PATH}", server_url.trim_end_matches('/'));
	let bytes = client.get(url).send().await?.error_for_status()?.bytes().await?;
	let config: WidgetConfig = serde_json::from_slice(&bytes)?;

	config.validate()?;

	Ok(config)
}

/// Error envelopes arrive with non-2xx statuses, so the body is read before the status.
fn decode_search(status: StatusCode, body: &[u8]) -> Result<Vec<ResultItem>> {
	let envelope = match serde_json::from_slice::<Envelope>(body) {
		Ok(envelope) => envelope,
		Err(_) if !status.is_success() => {
			return Err(Error::Rejected { message: format!("HTTP {status}") });
		},
		Err(err) => return Err(err.into()),
	};

	if !envelope.success {
		return Err(Error::Rejected {
			message: envelope.message.unwrap_or_else(|| format!("HTTP {status}")),
		});
	}

	Ok(envelope.data.map(|data| data.items).unwrap_or_default())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn success_envelope_yields_items_in_server_order() {
		let body = br#"{"success":true,"data":{"items":[
			{"id":2,"title":"Blue Widget","url":"https://shop.example.test/b","category":"Widgets","price":"N/A","availability":"In stock","outOfStock":false,"snippet":""},
			{"id":1,"title":"Blue Widgets Pro","url":"https://shop.example.test/a","outOfStock":true}
		]}}"#;
		let items = decode_search(StatusCode::OK, body).expect("Failed to decode items.");

		assert_eq!(items.len(), 2);
		assert_eq!(items[0].title, "Blue Widget");
		assert!(items[1].out_of_stock);
	}

	#[test]
	fn success_without_items_is_empty() {
		let items =
			decode_search(StatusCode::OK, br#"{"success":true,"data":{}}"#).expect("Decode failed.");

		assert!(items.is_empty());
	}

	#[test]
	fn failure_envelope_is_rejected_with_server_message() {
		let err = decode_search(
			StatusCode::FORBIDDEN,
			br#"{"success":false,"message":"Invalid request."}"#,
		)
		.expect_err("Expected rejection.");

		assert!(matches!(err, Error::Rejected { ref message } if message == "Invalid request."));
	}

	#[test]
	fn non_json_bodies_are_errors() {
		let rejected = decode_search(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
			.expect_err("Expected rejection.");
		let garbled = decode_search(StatusCode::OK, b"<html>").expect_err("Expected decode error.");

		assert!(matches!(rejected, Error::Rejected { .. }));
		assert!(matches!(garbled, Error::Decode(_)));
	}
}
