use anyhow::Result;
use clap::Parser;
use signboard::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cli.validate()?;
    signboard::run(cli).await
}
