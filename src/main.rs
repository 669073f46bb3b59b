use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use handrail::{headless, init};

#[derive(Parser, Debug)]
#[command(name = "hr")]
#[command(about = "Split agent diffs and resolve permission modes, headlessly")]
#[command(version)]
struct Args {
    /// Unified diff file to split (reads stdin when omitted)
    file: Option<PathBuf>,

    /// Treat input as a structured change set (patch tool call JSON)
    #[arg(long)]
    changes: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Resolve the effective permission mode for the given flavor and exit
    #[arg(long, value_name = "FLAVOR")]
    resolve_mode: Option<String>,

    /// Candidate (draft) permission mode for --resolve-mode
    #[arg(long, value_name = "MODE", requires = "resolve_mode")]
    mode: Option<String>,

    /// Record the resolved mode as last used
    #[arg(long, requires = "resolve_mode")]
    save: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.init {
        return init::write_default_config();
    }

    if let Some(flavor) = args.resolve_mode.as_deref() {
        return headless::run_resolve_mode(
            Some(flavor),
            args.mode.as_deref(),
            args.save,
            args.pretty,
        );
    }

    headless::run_split(args.file.as_deref(), args.changes, args.pretty)
}
