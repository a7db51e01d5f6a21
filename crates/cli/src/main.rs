// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use fbrs::Cli;

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = fbrs::env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    setup_logging();
    let cli = Cli::parse();
    if let Err(e) = fbrs::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
