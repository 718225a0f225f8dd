//! Ripple CLI - degrees-of-separation exploration from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show graph statistics
//! ripple stats facebook_combined.txt
//!
//! # Explore from a random origin, up to 6 degrees
//! ripple explore facebook_combined.txt --seed 42
//!
//! # Explore from a fixed origin
//! ripple explore facebook_combined.txt --origin 107 --max-depth 4
//!
//! # Show the bounded view selection
//! ripple sample facebook_combined.txt --origin 107 --cap 50
//!
//! # Export subgraph + per-depth frames as JSON for a renderer
//! ripple frames facebook_combined.txt --origin 107 -o frames.json
//!
//! # Coverage across several random origins
//! ripple experiment facebook_combined.txt --runs 5
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::ProgressBar;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use ripple_core::{
    choose_origin, explore, explore_many, select_nodes, summarize_runs, NodeId, RunConfig,
    SocialGraph,
};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(about = "Degrees-of-separation exploration in social graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show statistics about an edge-list graph
    Stats {
        /// Input file (SNAP edge list: two ids per line)
        input: PathBuf,
    },

    /// Explore reachability layers from an origin
    Explore {
        /// Input file (SNAP edge list)
        input: PathBuf,

        /// Origin node id (default: random, seeded)
        #[arg(long)]
        origin: Option<NodeId>,

        /// Maximum degrees of separation
        #[arg(long, default_value = "6")]
        max_depth: u32,

        /// Cap on nodes kept in the drawable subgraph
        #[arg(long, default_value = "2000")]
        cap: usize,

        /// Seed for random origin selection
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Show the bounded view selection for an origin
    Sample {
        /// Input file (SNAP edge list)
        input: PathBuf,

        /// Origin node id
        #[arg(long)]
        origin: NodeId,

        /// Cap on nodes kept
        #[arg(long, default_value = "20")]
        cap: usize,

        /// Maximum degrees of separation
        #[arg(long, default_value = "6")]
        max_depth: u32,
    },

    /// Export the bounded subgraph and per-depth frames as JSON
    Frames {
        /// Input file (SNAP edge list)
        input: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Origin node id (default: random, seeded)
        #[arg(long)]
        origin: Option<NodeId>,

        /// Maximum degrees of separation
        #[arg(long, default_value = "6")]
        max_depth: u32,

        /// Cap on nodes kept in the drawable subgraph
        #[arg(long, default_value = "2000")]
        cap: usize,

        /// Seed for random origin selection
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Run several explorations from random origins and summarize coverage
    Experiment {
        /// Input file (SNAP edge list)
        input: PathBuf,

        /// Number of independent runs
        #[arg(long, default_value = "5")]
        runs: usize,

        /// Maximum degrees of separation
        #[arg(long, default_value = "6")]
        max_depth: u32,

        /// Cap on nodes kept per run
        #[arg(long, default_value = "2000")]
        cap: usize,

        /// Base seed; run i uses seed + i
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { input } => cmd_stats(&input),
        Commands::Explore {
            input,
            origin,
            max_depth,
            cap,
            seed,
        } => cmd_explore(&input, origin, max_depth, cap, seed),
        Commands::Sample {
            input,
            origin,
            cap,
            max_depth,
        } => cmd_sample(&input, origin, cap, max_depth),
        Commands::Frames {
            input,
            output,
            origin,
            max_depth,
            cap,
            seed,
        } => cmd_frames(&input, &output, origin, max_depth, cap, seed),
        Commands::Experiment {
            input,
            runs,
            max_depth,
            cap,
            seed,
        } => cmd_experiment(&input, runs, max_depth, cap, seed),
    }
}

fn load_graph(path: &PathBuf) -> Result<SocialGraph> {
    let start = Instant::now();
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading {}...", path.display()));

    let g = SocialGraph::from_edge_list_file(path)
        .with_context(|| format!("Failed to load edge list {}", path.display()))?;

    pb.finish_with_message(format!("Loaded in {:.2?}", start.elapsed()));
    Ok(g)
}

fn resolve_origin(g: &SocialGraph, origin: Option<NodeId>, seed: u64) -> Result<NodeId> {
    match origin {
        Some(id) => Ok(id),
        None => {
            let mut rng = XorShiftRng::seed_from_u64(seed);
            Ok(choose_origin(g, &mut rng)?)
        }
    }
}

fn cmd_stats(input: &PathBuf) -> Result<()> {
    let g = load_graph(input)?;
    let stats = g.stats();

    println!("Social Graph Statistics");
    println!("=======================");
    println!("Nodes:      {}", stats.node_count);
    println!("Edges:      {}", stats.edge_count);
    println!("Avg degree: {:.2}", stats.avg_degree);

    Ok(())
}

fn cmd_explore(
    input: &PathBuf,
    origin: Option<NodeId>,
    max_depth: u32,
    cap: usize,
    seed: u64,
) -> Result<()> {
    let g = load_graph(input)?;
    let origin = resolve_origin(&g, origin, seed)?;

    let config = RunConfig {
        origin: Some(origin),
        max_depth,
        max_nodes_in_view: cap,
    };

    println!("Exploring from origin {} (max depth {})...", origin, max_depth);
    let start = Instant::now();
    let run = explore(&g, origin, &config)?;
    println!("Explored in {:.2?}", start.elapsed());
    println!();

    println!("Depth  Frontier  Reached  Coverage");
    println!("-----  --------  -------  --------");
    for m in &run.metrics {
        let frontier = run.reachability.layer(m.depth).len();
        println!(
            "{:>5}  {:>8}  {:>7}  {:>7.1}%",
            m.depth,
            frontier,
            m.people_reached,
            m.fraction_of_graph * 100.0
        );
    }
    println!();

    if run.reachability.exhausted() {
        println!(
            "Fully explored: no growth past depth {}.",
            run.reachability.last_depth()
        );
    } else {
        println!("Stopped by the depth cutoff; the component may extend further.");
    }
    println!(
        "View subgraph: {} nodes, {} edges (cap {}).",
        run.subgraph.node_count(),
        run.subgraph.edge_count(),
        cap
    );

    Ok(())
}

fn cmd_sample(input: &PathBuf, origin: NodeId, cap: usize, max_depth: u32) -> Result<()> {
    let g = load_graph(input)?;

    let reach = ripple_core::compute_layers(&g, origin, max_depth)?;
    let selected = select_nodes(&reach, &g, cap)?;

    println!(
        "Selected {} of {} reached nodes (cap {}):",
        selected.len(),
        reach.reached_count(),
        cap
    );
    println!("Node       Distance  Degree");
    println!("----       --------  ------");
    for &u in &selected {
        println!(
            "{:<10} {:>8}  {:>6}",
            u,
            reach.distance(u).unwrap_or(0),
            g.degree(u)
        );
    }

    Ok(())
}

fn cmd_frames(
    input: &PathBuf,
    output: &PathBuf,
    origin: Option<NodeId>,
    max_depth: u32,
    cap: usize,
    seed: u64,
) -> Result<()> {
    let g = load_graph(input)?;
    let origin = resolve_origin(&g, origin, seed)?;

    let config = RunConfig {
        origin: Some(origin),
        max_depth,
        max_nodes_in_view: cap,
    };

    println!("Computing frames from origin {}...", origin);
    let start = Instant::now();
    let run = explore(&g, origin, &config)?;
    println!("Computed in {:.2?}", start.elapsed());

    let doc = json!({
        "origin": run.origin,
        "graph_nodes": g.node_count(),
        "subgraph": run.subgraph,
        "metrics": run.metrics,
        "frames": run.frames.frames(),
    });

    let content = serde_json::to_string_pretty(&doc)?;
    fs::write(output, content)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote {} frames ({} view nodes) to {}",
        run.frames.frame_count(),
        run.subgraph.node_count(),
        output.display()
    );
    Ok(())
}

fn cmd_experiment(
    input: &PathBuf,
    runs: usize,
    max_depth: u32,
    cap: usize,
    seed: u64,
) -> Result<()> {
    let g = load_graph(input)?;

    let config = RunConfig {
        origin: None,
        max_depth,
        max_nodes_in_view: cap,
    };

    println!("Running {} explorations from random origins...", runs);
    let start = Instant::now();
    let explorations = explore_many(&g, &config, runs, seed)?;
    println!("Finished in {:.2?}", start.elapsed());
    println!();

    let origins: Vec<NodeId> = explorations.iter().map(|r| r.origin).collect();
    println!("Origins: {:?}", origins);
    println!();

    let streams: Vec<_> = explorations.iter().map(|r| r.metrics.clone()).collect();
    let summary = summarize_runs(&streams);

    println!("Depth  Runs  Mean coverage  Std dev");
    println!("-----  ----  -------------  -------");
    for s in &summary {
        println!(
            "{:>5}  {:>4}  {:>12.1}%  {:>6.2}%",
            s.depth,
            s.runs,
            s.mean_fraction * 100.0,
            s.sd_fraction * 100.0
        );
    }

    Ok(())
}
