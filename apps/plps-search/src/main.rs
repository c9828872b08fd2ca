use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = plps_search::Args::parse();
	plps_search::run(args).await
}
