use std::io;

use clap::Parser;
use httpd_router::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    cli::run(&args, &mut io::stdout().lock())
}
