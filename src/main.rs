use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::CommandFactory;
use colored::Colorize;
use log::{debug, info};

use whereis::cli::Cli;
use whereis::finder::{Finder, SearchConfig};
use whereis::output;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse_lenient(std::env::args_os());

    // 初始化日志，RUST_LOG 优先
    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.pattern.is_none() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = SearchConfig::from_cli(&cli).context("Failed to resolve search directory")?;
    debug!("Search config: {:?}", config);

    let start_time = Instant::now();
    let outcome = Finder::new(config.clone()).find()?;
    info!("Search finished in {:.3?}", start_time.elapsed());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::print_header(&mut out, &config)?;
    output::print_outcome(&mut out, &config, &outcome)?;
    out.flush()?;

    if cli.verbose {
        output::print_skipped(&mut io::stderr().lock(), &outcome)?;
    }

    Ok(())
}
