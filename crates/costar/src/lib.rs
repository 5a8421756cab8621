//! # Costar: degrees-of-separation queries over collaboration graphs
//!
//! Costar builds a bipartite "people connected through shared events" graph
//! (actors through shared movies, say) from a flat record file and answers
//! shortest-connection queries against it.
//!
//! ## Design Philosophy
//!
//! - **Load once, query many** - the graph is immutable after construction
//! - **Soft misses** - unknown identifiers and missing connections are
//!   ordinary results, never errors
//! - **Embeddable** - library first, CLI second
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use costar::CollabGraph;
//!
//! let graph = CollabGraph::from_path(Path::new("moviedata.txt"))?;
//!
//! let path = graph.shortest_path("<a>Connery, Sean", "<a>Bacon, Kevin (I)");
//! if path.is_empty() {
//!     println!("no connection");
//! } else {
//!     println!("{} degrees of separation", (path.len() - 1) / 2);
//! }
//! # Ok::<(), costar::Error>(())
//! ```

mod error;
mod graph;
mod search;
mod types;

pub use error::{Error, Result};
pub use graph::CollabGraph;
pub use types::{NodeKind, display_name, person_id};
