use anyhow::Result;
use ghprofile::cli::Cli;
use ghprofile::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.common.verbose)?;
    cli.execute().await
}
