//! Bipartite collaboration graph: bulk load and adjacency queries.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::NodeKind;

/// Adjacency-list bipartite graph over person and event nodes.
///
/// A graph is built once from a record stream and is read-only afterwards:
/// the type exposes no mutation API, so every query runs against the exact
/// structure the load produced. A failed load never yields a partial graph;
/// the constructors return `Err` instead of a value that must not be
/// queried.
///
/// Invariants maintained by construction:
/// - every edge is mutual: if A lists B as a neighbor, B lists A;
/// - a person's neighbors are exclusively events and vice versa;
/// - neighbor lists preserve input record order; duplicate edges are
///   tolerated, not deduplicated.
#[derive(Debug)]
pub struct CollabGraph {
    adjacency: HashMap<String, Vec<String>>,
}

impl CollabGraph {
    /// Load a graph from a record file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be opened, plus the
    /// record-level errors described on [`CollabGraph::from_reader`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a graph from a line-oriented record stream.
    ///
    /// Each line is one record and the full line is the node identifier. A
    /// person record becomes the "current person" context and gets an empty
    /// adjacency entry if absent. An event record gets an empty adjacency
    /// entry if absent, then a mutual edge to the current person.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the stream cannot be read,
    /// [`Error::MalformedRecord`] when a record is too short to carry a kind
    /// tag, and [`Error::OrphanEvent`] when an event record appears before
    /// any person record.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        let mut current_person: Option<String> = None;

        for (index, record) in reader.lines().enumerate() {
            let record = record?;
            let line = index + 1;
            let kind = NodeKind::of(&record).ok_or(Error::MalformedRecord { line })?;

            match kind {
                NodeKind::Person => {
                    adjacency.entry(record.clone()).or_default();
                    current_person = Some(record);
                }
                NodeKind::Event => {
                    let Some(person) = current_person.as_ref() else {
                        return Err(Error::OrphanEvent { line });
                    };
                    adjacency
                        .entry(record.clone())
                        .or_default()
                        .push(person.clone());
                    adjacency.entry(person.clone()).or_default().push(record);
                }
            }
        }

        debug!(nodes = adjacency.len(), "collaboration graph loaded");
        Ok(Self { adjacency })
    }

    /// Whether `id` exists as a node, regardless of kind.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Count nodes whose kind tag matches `kind`.
    ///
    /// Walks every identifier; meant for load validation and statistics,
    /// not for hot paths.
    #[must_use]
    pub fn count_by_kind(&self, kind: NodeKind) -> usize {
        self.adjacency
            .keys()
            .filter(|id| NodeKind::of(id) == Some(kind))
            .count()
    }

    /// Total number of nodes of both kinds.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of person-event edges, duplicates counted.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether the graph holds no nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Neighbors of `id` in input order, empty for unknown identifiers.
    #[must_use]
    pub fn neighbors(&self, id: &str) -> &[String] {
        self.adjacency.get(id).map_or(&[], Vec::as_slice)
    }

    /// Iterate over every node identifier, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}
