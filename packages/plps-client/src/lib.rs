//! Typeahead query client: widget state machine, async driver and HTTP transport.

pub mod config;
pub mod driver;
pub mod transport;
pub mod widget;

mod error;

pub use config::WidgetConfig;
pub use driver::{WidgetHandle, mount};
pub use error::{Error, Result};
pub use transport::{
	HttpTransport, ResultItem, SEARCH_ACTION, SearchTransport, fetch_widget_config,
};
pub use widget::{Key, KeyOutcome, Phase, SearchTicket, Widget};

use std::{future::Future, pin::Pin};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
