use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cluster_netdiag::diag::{compute_diagnostics, DiagnosticFilter};
use cluster_netdiag::report::render_report;
use cluster_netdiag::snapshot::load_snapshot;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a cluster snapshot and print the diagnostic report
    Analyze(AnalyzeArgs),
    /// Show version and build information
    Version,
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Path to a JSON-encoded cluster snapshot
    #[arg(long, env = "NETDIAG_SNAPSHOT")]
    snapshot: PathBuf,

    /// Comma-separated node ids to restrict the view to
    #[arg(long, default_value = "")]
    nodes: String,

    /// Locality pattern; matching nodes are hidden from the view
    #[arg(long, default_value = "")]
    locality: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Version => {
            println!("Cluster-Netdiag v{}", env!("CARGO_PKG_VERSION"));
            println!("Build Date: {}", env!("BUILD_DATE"));
            Ok(())
        }
        Commands::Analyze(analyze_args) => run_analyze(analyze_args),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();

    let filter = DiagnosticFilter::parse(&args.nodes, &args.locality);
    let snapshot = load_snapshot(&args.snapshot)?;

    let result = compute_diagnostics(&snapshot, &filter);
    info!(
        "Computed diagnostics: {} displayed, {} stale, {} missing connections",
        result.display_identities.len(),
        result.stale_identities.len(),
        result.no_connections.len()
    );

    print!("{}", render_report(&result));
    Ok(())
}
