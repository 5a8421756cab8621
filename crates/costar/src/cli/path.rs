//! `costar path` command implementation.

use std::io;
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use costar::{CollabGraph, NodeKind, display_name};
use serde::Serialize;

use super::display;

/// JSON shape of one node on a found path.
#[derive(Serialize)]
struct PathNode<'a> {
    id: &'a str,
    kind: NodeKind,
    name: &'a str,
}

/// JSON shape of a path query result.
#[derive(Serialize)]
struct PathResult<'a> {
    from: &'a str,
    to: &'a str,
    found: bool,
    degrees: Option<usize>,
    path: Vec<PathNode<'a>>,
}

/// Run the path command.
pub fn run(data: &Path, from: &str, to: Option<&str>, json: bool) -> Result<(), costar::Error> {
    let start = display::person_arg_to_id(from);
    let target = to.map_or_else(|| display::DEFAULT_TARGET.to_string(), display::person_arg_to_id);

    let loading = Instant::now();
    let graph = CollabGraph::from_path(data)?;
    tracing::debug!(elapsed = ?loading.elapsed(), "data file loaded");

    for id in [&start, &target] {
        if !graph.contains(id) {
            if json {
                print_json(&start, &target, &[])?;
            } else {
                println!("No such person in the data set: {}", display_name(id).bold());
                println!();
                println!(
                    "{}: names are matched as \"Firstname Lastname\" against the loaded records.",
                    "hint".dimmed()
                );
            }
            return Ok(());
        }
    }

    let searching = Instant::now();
    let path = graph.shortest_path(&start, &target);
    tracing::debug!(elapsed = ?searching.elapsed(), "search finished");

    if json {
        return print_json(&start, &target, &path);
    }

    if path.is_empty() {
        println!(
            "No connection between {} and {}.",
            display_name(&start).bold(),
            display_name(&target).bold()
        );
        return Ok(());
    }

    display::print_summary(&path, &start, &target);
    println!();
    display::print_path(&path);
    Ok(())
}

fn print_json(from: &str, to: &str, path: &[String]) -> Result<(), costar::Error> {
    let result = PathResult {
        from,
        to,
        found: !path.is_empty(),
        degrees: (!path.is_empty()).then(|| display::degrees(path)),
        path: path
            .iter()
            .map(|id| PathNode {
                id,
                kind: NodeKind::of(id).unwrap_or(NodeKind::Event),
                name: display_name(id),
            })
            .collect(),
    };

    let rendered = serde_json::to_string_pretty(&result).map_err(io::Error::other)?;
    println!("{rendered}");
    Ok(())
}
