//! Print a midpoint report for a graph file and a list of starts.
//!
//! Usage: `midpoint-report <graph.json> <start> <start> [<start>...]`

use std::path::PathBuf;
use std::process::ExitCode;

use midpoint_server::domain::StationId;
use midpoint_server::graph::load_graph;
use midpoint_server::midpoint::{evaluate, render_evaluation};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(graph_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: midpoint-report <graph.json> <start> <start> [<start>...]");
        return ExitCode::from(2);
    };
    let starts: Vec<StationId> = args.map(StationId::from).collect();

    let graph = match load_graph(&graph_path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match evaluate(&graph, &starts) {
        Ok(evaluation) => {
            print!("{}", render_evaluation(&evaluation));
            if evaluation.is_feasible() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
