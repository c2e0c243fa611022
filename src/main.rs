use anyhow::Context;
use auto_driving_sim::prelude::*;
use clap::Parser;
use std::io;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();
    if args.no_color {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock())
        .with_field(args.field())
        .run()
        .context("interactive session failed")?;

    Ok(())
}
