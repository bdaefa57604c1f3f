//! linkv command-line runner.
//!
//! Runs each argument as a command against one backend, then shuts the
//! backend down (which writes the snapshot for the list backend).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use linkv::{Backend, BackendKind, DEFAULT_SNAPSHOT, StoreConfig, command};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "linkv")]
#[command(about = "Integer-keyed key-value store with flat-file snapshots")]
struct Args {
    /// Commands to run in order: p,KEY,VALUE | g,KEY | d,KEY | c | a
    ops: Vec<String>,

    /// Backend implementation (logger reports each call on stderr at info level)
    #[arg(short, long, value_enum, default_value_t = BackendKind::List)]
    backend: BackendKind,

    /// Snapshot file loaded at startup and written at shutdown
    #[arg(short, long, env = "LINKV_SNAPSHOT", default_value = DEFAULT_SNAPSHOT)]
    snapshot: PathBuf,

    /// Neither load nor save a snapshot
    #[arg(long)]
    no_snapshot: bool,

    /// Log level (trace, debug, info, warn, error); at least info with the logger backend
    #[arg(short, long, default_value = "warn")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries command output
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.backend.log_level(args.log_level))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.ops.is_empty() {
        return Ok(());
    }

    let config = if args.no_snapshot {
        StoreConfig::in_memory()
    } else {
        StoreConfig::new().with_snapshot(&args.snapshot)
    };

    let mut backend = linkv::open(args.backend, &config)
        .with_context(|| format!("failed to open {:?} backend", args.backend))?;

    let ran = run(backend.as_mut(), &args.ops);
    let shutdown = backend.shutdown().context("shutdown failed");

    ran?;
    shutdown
}

fn run(backend: &mut dyn Backend, ops: &[String]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for op in ops {
        command::run_op(backend, op, &mut out)?;
    }
    out.flush()?;
    Ok(())
}
