use clap::Parser;
use prodplan::{cli, logging};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose);

    tracing::info!("prodplan 啟動");
    let output = cli::run(&args)?;
    println!("{}", output);

    Ok(())
}
