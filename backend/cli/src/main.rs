use anyhow::Result;
use clap::Parser;
use cli::{Args, run};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    println!("{}", run(args.command)?);

    Ok(())
}
