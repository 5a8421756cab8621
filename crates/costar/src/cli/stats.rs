//! `costar stats` command implementation.

use std::io;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use costar::{CollabGraph, NodeKind};
use serde::Serialize;

/// JSON shape of the stats report.
#[derive(Serialize)]
struct GraphStats {
    persons: usize,
    events: usize,
    nodes: usize,
    edges: usize,
}

/// Run the stats command.
pub fn run(data: &Path, json: bool) -> Result<(), costar::Error> {
    let started = Instant::now();
    let graph = CollabGraph::from_path(data)?;
    let elapsed = started.elapsed();

    let stats = GraphStats {
        persons: graph.count_by_kind(NodeKind::Person),
        events: graph.count_by_kind(NodeKind::Event),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    };

    if json {
        let rendered = serde_json::to_string_pretty(&stats).map_err(io::Error::other)?;
        println!("{rendered}");
        return Ok(());
    }

    println!("{}", "Collaboration Graph Statistics".cyan().bold());
    println!();
    println!("  {}: {}", "Data file".white().bold(), data.display());
    println!();
    println!(
        "  {}: {} total",
        "Nodes".white().bold(),
        stats.nodes.to_string().green()
    );
    println!("    {}: {}", "Persons".dimmed(), stats.persons);
    println!("    {}: {}", "Events".dimmed(), stats.events);
    println!();
    println!(
        "  {}: {}",
        "Edges".white().bold(),
        stats.edges.to_string().green()
    );
    println!();
    println!("{}: {:.2?}", "Load time".dimmed(), elapsed);
    Ok(())
}
