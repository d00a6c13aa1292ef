//! wgraph CLI: interactive menu over an in-memory weighted graph
//!
//! The graph lives for the duration of the session; nothing is persisted.

mod menu;

use clap::Parser;
use menu::{run_menu, OutputFormat, ShellConfig};
use tracing_subscriber::EnvFilter;
use wgraph::WeightedGraph;

#[derive(Parser)]
#[command(name = "wgraph", version, about = "Weighted graph shell with Dijkstra shortest paths")]
struct Cli {
    /// Output format for the matrix and distance listings
    #[arg(long, default_value = "plain")]
    format: OutputFormat,

    /// Log filter (e.g. "debug", "wgraph=trace"), written to stderr
    #[arg(long, default_value = "warn", env = "WGRAPH_LOG")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = wgraph::version(), "starting shell");

    let config = ShellConfig { format: cli.format };
    let mut graph = WeightedGraph::new();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = run_menu(&mut graph, &config, stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
