use std::{fs, io::Write, path::PathBuf};

use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

use crate::{cond::CondFlags, router::Router};

/// Resolve request paths against a set of route rules.
#[derive(Parser, Debug)]
#[command(name = "route-match", version)]
pub struct Args {
    /// Path prefix all rules are relative to
    #[arg(short, long, default_value = "")]
    pub base_path: String,

    /// Route rule such as "GET|POST /user/{id:[0-9]+}"; may be repeated
    #[arg(short = 'r', long = "route", value_name = "RULE")]
    pub routes: Vec<String>,

    /// File with one rule per line; blank lines and "#" comments are skipped
    #[arg(short = 'f', long, value_name = "FILE")]
    pub routes_file: Option<PathBuf>,

    /// Request method, e.g. "GET" or "GET|HEAD"
    #[arg(short, long, default_value = "GET")]
    pub method: CondFlags,

    /// More logging on stderr; repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Request paths to resolve
    #[arg(required = true)]
    pub paths: Vec<String>,
}

impl Args {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Builds the router described by `args` and writes one line per path.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let router = build_router(args)?;
    info!(
        routes = router.len(),
        base_path = router.base_path(),
        "router ready"
    );

    for path in &args.paths {
        write!(out, "{} -> ", path)?;
        match router.pattern_match(args.method, path) {
            Ok(Some(m)) => {
                write!(out, "#{} {}", m.handler(), m.route())?;
                let mut names: Vec<_> = m.route().var_names().collect();
                names.sort_by_key(|(_, idx)| *idx);
                for (name, _) in names {
                    write!(out, " {}={}", name, m.var(name))?;
                }
                writeln!(out)?;
            }
            Ok(None) => writeln!(out, "no match")?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
    Ok(())
}

fn build_router(args: &Args) -> anyhow::Result<Router<usize>> {
    let mut router = Router::with_base_path(&args.base_path);

    for rule in &args.routes {
        let idx = router.len();
        router
            .add(rule, idx)
            .with_context(|| format!("--route {:?}", rule))?;
    }

    if let Some(file) = &args.routes_file {
        let contents = fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let idx = router.len();
            router
                .add(line, idx)
                .with_context(|| format!("{}:{}: {:?}", file.display(), lineno + 1, line))?;
        }
    }

    if router.is_empty() {
        bail!("no routes given; use --route or --routes-file");
    }
    Ok(router)
}
