// src/main.rs
//
// One-shot CLI: load the dataset (cache or archive), print the overview
// and the monthly likes trend. Exit code 0 on success; failures render
// through color-eyre naming the offending file.

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use fb_activity::{cli::Cli, report, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let params = Cli::parse().into_params();
    let data = runner::load(&params)?;

    report::print_overview(&data)?;
    report::print_monthly_likes(&data)?;
    Ok(())
}
