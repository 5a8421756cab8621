//! `costar repl` command implementation.
//!
//! Interactive session: load the data file once, then answer repeated
//! queries from a small menu. The search target starts as Kevin Bacon and
//! can be changed to any loaded person.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Instant;

use colored::Colorize;
use costar::{CollabGraph, display_name};

use super::display;

/// Run the interactive session.
pub fn run(data: &Path) -> Result<(), costar::Error> {
    println!("Loading people and events from {}...", data.display());
    let loading = Instant::now();
    let graph = CollabGraph::from_path(data)?;
    println!(
        "{} {} nodes, {} edges in {:.2?}.",
        "Loaded".green().bold(),
        graph.node_count(),
        graph.edge_count(),
        loading.elapsed()
    );
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut target = display::DEFAULT_TARGET.to_string();

    loop {
        println!("Choose an option:");
        println!("  1. Find the connection to a person");
        println!(
            "  2. Change the person searched for (now {})",
            display_name(&target).cyan()
        );
        println!("  3. Quit");

        let Some(choice) = read_line(&mut input, "> ")? else {
            break;
        };
        match choice.trim() {
            "1" => find(&graph, &mut input, &target)?,
            "2" => {
                if let Some(new_target) = pick_person(&graph, &mut input)? {
                    target = new_target;
                    println!("Person changed.");
                }
                println!();
            }
            "3" => break,
            _ => {
                println!("Unknown command, try again.");
                println!();
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Prompt for one line of input; `None` means the input stream ended.
fn read_line(
    input: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    input.next().transpose()
}

/// Ask for a first and last name and format them into an identifier.
fn ask_person_id(
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    let Some(first) = read_line(input, "First name: ")? else {
        return Ok(None);
    };
    let Some(last) = read_line(input, "Last name: ")? else {
        return Ok(None);
    };
    Ok(Some(display::format_person(&last, &first)))
}

/// Ask for a person and return the identifier only if it is loaded.
fn pick_person(
    graph: &CollabGraph,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<String>> {
    let Some(id) = ask_person_id(input)? else {
        return Ok(None);
    };
    if graph.contains(&id) {
        Ok(Some(id))
    } else {
        println!("No such person in the data set.");
        Ok(None)
    }
}

/// One find-connection round: ask for a person, search, render the result.
fn find(
    graph: &CollabGraph,
    input: &mut impl Iterator<Item = io::Result<String>>,
    target: &str,
) -> io::Result<()> {
    let Some(id) = ask_person_id(input)? else {
        return Ok(());
    };
    if !graph.contains(&id) {
        println!("No such person in the data set.");
        println!();
        return Ok(());
    }

    let searching = Instant::now();
    let path = graph.shortest_path(&id, target);
    let elapsed = searching.elapsed();

    if path.is_empty() {
        println!(
            "No connection between {} and {}.",
            display_name(&id),
            display_name(target)
        );
    } else {
        display::print_summary(&path, &id, target);
        display::print_path(&path);
    }
    println!("{}: {:.2?}", "Search time".dimmed(), elapsed);
    println!();
    Ok(())
}
