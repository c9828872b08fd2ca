use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre;
use serde::Serialize;

use plps_client::{HttpTransport, Phase, ResultItem, Widget};

#[derive(Debug, Parser)]
#[command(
	version = plps_cli::VERSION,
	rename_all = "kebab",
	styles = plps_cli::styles(),
)]
pub struct Args {
	/// Base URL of a running plps-api server.
	#[arg(long, short = 's', value_name = "URL", default_value = "http://127.0.0.1:8089")]
	pub server: String,
	#[arg(long, short = 't', value_name = "TERM")]
	pub term: String,
	/// Overrides the widget's configured result limit.
	#[arg(long, value_name = "N")]
	pub limit: Option<u32>,
	#[arg(long, value_name = "LEVEL", default_value = "warn")]
	pub log_level: String,
}

#[derive(Debug, Serialize)]
struct Output {
	term: String,
	status: String,
	items: Vec<ResultItem>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	plps_cli::init_tracing(&args.log_level);

	if args.term.trim().is_empty() {
		return Err(eyre::eyre!("Search term must not be blank."));
	}

	let client = reqwest::Client::new();
	let mut config = plps_client::fetch_widget_config(&client, &args.server).await?;

	if let Some(limit) = args.limit {
		config.limit = limit;
	}

	let transport = Arc::new(HttpTransport::new(&config)?);
	let handle = plps_client::mount(config, transport)?;
	let mut state = handle.subscribe();

	handle.input(args.term.as_str())?;

	let widget = state.wait_for(is_settled).await.map(|widget| widget.clone());

	handle.unmount().await;

	let widget = widget.map_err(|_| eyre::eyre!("Widget stopped before the search settled."))?;
	let output = Output {
		term: widget.term().to_string(),
		status: widget.status().to_string(),
		items: widget.items().to_vec(),
	};
	let json = serde_json::to_string_pretty(&output)?;

	println!("{json}");

	if widget.phase() == Phase::Failed {
		return Err(eyre::eyre!("Search failed."));
	}

	Ok(())
}

/// Settled means the widget will not change again without more input. An idle widget has only
/// settled once it has seen the term, which then was too short to search.
fn is_settled(widget: &Widget) -> bool {
	match widget.phase() {
		Phase::Displaying | Phase::Empty | Phase::Failed => true,
		Phase::Idle => !widget.term().is_empty(),
		Phase::Debouncing | Phase::Loading => false,
	}
}
