//! Example that generates a large graph, prints degree statistics, and
//! compares the cost of predecessor queries in both representations.
//!
//! Usage:
//!   cargo run --example graph_stats -- --representation list
//!   cargo run --example graph_stats -- -r matrix --sweeps 20 -v

use std::time::{Duration, Instant};

use clap::Parser;
use dualgraph::{Graph, Representation, generate_large_graph::generate_large_graph};
use tracing::{Level, info};

/// Generate a large graph and report statistics about it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Representation to build the graph in ("matrix" or "list")
    #[arg(short, long, default_value_t = Representation::List)]
    representation: Representation,

    /// Number of full predecessor sweeps to time
    #[arg(long, default_value_t = 10)]
    sweeps: usize,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let graph = generate_large_graph(args.representation);
    print_summary(&graph);

    let converted = graph.convert(args.representation.other());
    for g in [&graph, &converted] {
        let elapsed = time_predecessor_sweeps(g, args.sweeps);
        info!(representation = %g.representation(), sweeps = args.sweeps, ?elapsed, "predecessor sweeps");
        println!(
            "{:>6}: {} predecessor sweeps in {:?}",
            g.representation().to_string(),
            args.sweeps,
            elapsed
        );
    }

    converted.dispose();
    graph.dispose();
}

fn print_summary(graph: &Graph) {
    let n = graph.vertex_count();
    let max_out = (0..n).map(|v| (graph.out_degree(v), v)).max();
    let max_in = (0..n).map(|v| (graph.in_degree(v), v)).max();
    let self_loops = (0..n).filter(|&v| graph.has_edge(v, v)).count();
    let total_weight: f64 = graph.edges().map(|(_, _, w)| w).sum();

    println!("representation: {}", graph.representation());
    println!("vertices:       {n}");
    println!("edges:          {}", graph.num_edges());
    println!("self loops:     {self_loops}");
    println!("total weight:   {total_weight}");
    if let Some((degree, vertex)) = max_out {
        println!("max out-degree: {degree} (vertex {vertex})");
    }
    if let Some((degree, vertex)) = max_in {
        println!("max in-degree:  {degree} (vertex {vertex})");
    }
}

fn time_predecessor_sweeps(graph: &Graph, sweeps: usize) -> Duration {
    let start = Instant::now();
    let mut total = 0;
    for _ in 0..sweeps {
        for v in 0..graph.vertex_count() {
            total += graph.predecessors(v).len();
        }
    }
    assert_eq!(total, sweeps * graph.num_edges());
    start.elapsed()
}
