//! # FZDD
//!
//! FZDD builds zero-suppressed binary decision diagrams (ZDDs) whose
//! models are constrained edge subsets of an undirected graph: simple
//! s-t paths, single cycles, Hamiltonian paths and cycles, trees and
//! forests, matchings and degree-constrained subgraphs.
//!
//! Construction uses the frontier method: edges are decided one by one
//! in their fixed order, and a specification only keeps per-vertex
//! scratch for the small window of vertices that are incident to both a
//! decided and an undecided edge. Partial decisions with equal scratch
//! fold into a single diagram node, which is what keeps the diagram
//! tractable on graphs whose model count is astronomically large.
//!
//! # Examples
//!
//! Count and list the simple paths between the corners of a square:
//!
//! ```
//! use fzdd::enumerate::enumerate;
//! use fzdd::graph::Graph;
//! use fzdd::spec::StPathSpec;
//! use fzdd::zdd::Zdd;
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "d");
//! g.add_edge("a", "c");
//! g.add_edge("c", "d");
//!
//! let s = g.vertex_id("a").unwrap();
//! let t = g.vertex_id("d").unwrap();
//! let spec = StPathSpec::new(&g, false, s, t).unwrap();
//! let dd = Zdd::build(&spec);
//! assert_eq!(dd.cardinality().to_string(), "2");
//!
//! let mut lines = Vec::new();
//! enumerate(&dd, &mut lines).unwrap();
//! assert_eq!(String::from_utf8(lines).unwrap(), "1 1 0 0\n0 0 1 1\n");
//! ```

pub mod enumerate;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod spec;
pub mod zdd;

pub use error::{Error, Result};
pub use frontier::FrontierSchedule;
pub use graph::{Edge, Graph, Vertex};
pub use zdd::Zdd;
