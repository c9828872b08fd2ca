use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = plps_api::Args::parse();
	plps_api::run(args).await
}
