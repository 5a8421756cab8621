//! Integration tests for shortest-path queries.
//!
//! The sample topology gives one person at each distance from Bacon plus an
//! unconnected person, so every query outcome the search can produce is
//! covered: found at depth 0-3, no connection, unknown identifier.

use std::io::Cursor;

use costar::{CollabGraph, NodeKind};
use rstest::rstest;

const BACON: &str = "<a>Bacon, Kevin (I)";
const CONNERY: &str = "<a>Connery, Sean";
const CAGE: &str = "<a>Cage, Nicolas";
const MALKOVICH: &str = "<a>Malkovich, John";
const HERMIT: &str = "<a>Hermit, Harry";
const WILD_THINGS: &str = "<t>Wild Things (1998)";

/// Chain topology: Bacon -1- Connery -2- Cage -3- Malkovich, Hermit apart.
const SAMPLE: &str = "\
<a>Bacon, Kevin (I)
<t>Wild Things (1998)
<t>Apollo 13 (1995)
<a>Connery, Sean
<t>Wild Things (1998)
<t>The Rock (1996)
<a>Cage, Nicolas
<t>The Rock (1996)
<t>Con Air (1997)
<a>Malkovich, John
<t>Con Air (1997)
<a>Hermit, Harry
";

fn sample_graph() -> CollabGraph {
    CollabGraph::from_reader(Cursor::new(SAMPLE)).expect("sample records must load")
}

// ============================================================================
// Found paths
// ============================================================================

#[test]
fn example_dataset_connects_connery_to_bacon() {
    let records = "\
<a>Bacon, Kevin (I)
<t>Wild Things (1998)
<a>Connery, Sean
<t>Wild Things (1998)
";
    let graph = CollabGraph::from_reader(Cursor::new(records)).expect("records must load");

    assert_eq!(
        graph.shortest_path(CONNERY, BACON),
        [CONNERY, WILD_THINGS, BACON]
    );
}

#[rstest]
#[case::one_degree(CONNERY, 3)]
#[case::two_degrees(CAGE, 5)]
#[case::three_degrees(MALKOVICH, 7)]
fn path_length_matches_bfs_depth(#[case] from: &str, #[case] expected_len: usize) {
    let graph = sample_graph();

    assert_eq!(graph.shortest_path(from, BACON).len(), expected_len);
}

#[test]
fn path_runs_start_to_target_and_alternates_kinds() {
    let graph = sample_graph();
    let path = graph.shortest_path(MALKOVICH, BACON);

    assert_eq!(path.first().map(String::as_str), Some(MALKOVICH));
    assert_eq!(path.last().map(String::as_str), Some(BACON));
    for pair in path.windows(2) {
        assert_ne!(NodeKind::of(&pair[0]), NodeKind::of(&pair[1]));
    }
}

#[rstest]
#[case::person(BACON)]
#[case::event(WILD_THINGS)]
fn path_to_self_is_single_node(#[case] id: &str) {
    let graph = sample_graph();

    assert_eq!(graph.shortest_path(id, id), [id]);
}

#[test]
fn ties_resolve_to_first_loaded_event() {
    // Two equal-length routes; the event listed first in the start node's
    // adjacency wins.
    let records = "\
<a>Abel, Al
<t>First (2000)
<t>Second (2001)
<a>Beck, Bo
<t>First (2000)
<t>Second (2001)
";
    let graph = CollabGraph::from_reader(Cursor::new(records)).expect("records must load");

    assert_eq!(
        graph.shortest_path("<a>Abel, Al", "<a>Beck, Bo"),
        ["<a>Abel, Al", "<t>First (2000)", "<a>Beck, Bo"]
    );
}

// ============================================================================
// Soft misses
// ============================================================================

#[rstest]
#[case::unknown_start("<a>Nobody, Jane", BACON)]
#[case::unknown_target(BACON, "<a>Nobody, Jane")]
#[case::unknown_reflexive("<a>Nobody, Jane", "<a>Nobody, Jane")]
fn unknown_identifiers_yield_empty_path(#[case] from: &str, #[case] to: &str) {
    let graph = sample_graph();

    assert!(graph.shortest_path(from, to).is_empty());
}

#[test]
fn unconnected_person_yields_empty_path() {
    let graph = sample_graph();

    assert!(graph.shortest_path(HERMIT, BACON).is_empty());
    assert!(graph.shortest_path(BACON, HERMIT).is_empty());
}

// ============================================================================
// Query contract
// ============================================================================

#[rstest]
#[case(CONNERY, BACON)]
#[case(CAGE, MALKOVICH)]
#[case(HERMIT, BACON)]
fn distance_is_symmetric_in_length(#[case] a: &str, #[case] b: &str) {
    let graph = sample_graph();

    assert_eq!(
        graph.shortest_path(a, b).len(),
        graph.shortest_path(b, a).len()
    );
}

#[test]
fn repeated_queries_are_identical() {
    let graph = sample_graph();

    assert_eq!(
        graph.shortest_path(MALKOVICH, BACON),
        graph.shortest_path(MALKOVICH, BACON)
    );
}
