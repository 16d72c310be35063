//! # Edge-Ordered Undirected Graph
//!
//! The input side of the crate: an immutable list of vertices `1..=n`
//! and an ordered list of edges `0..m-1`. The edge order is significant,
//! it fixes the variable order of every decision diagram built from the
//! graph. Vertices carry arbitrary string names which are mapped to
//! consecutive ids in first-seen order.
//!
//! # Examples
//!
//! ```
//! use fzdd::graph::Graph;
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "c");
//!
//! assert_eq!(g.vertex_count(), 3);
//! assert_eq!(g.edge(1).v1, 2);
//! assert_eq!(g.edge(1).v2, 3);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;

use crate::error::{Error, Result};

/// Vertex id. Valid vertices are `1..=n`; `0` is never a vertex.
pub type Vertex = usize;

/// An undirected edge between two vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub v1: Vertex,
	pub v2: Vertex,
}

impl Edge {
	pub fn new(v1: Vertex, v2: Vertex) -> Self {
		Self { v1, v2 }
	}

	/// Check if `v` is one of the two endpoints.
	pub fn is_incident(&self, v: Vertex) -> bool {
		self.v1 == v || self.v2 == v
	}
}

/// Graph container with named vertices and ordered edges.
pub struct Graph {
	names: Vec<String>,
	index: AHashMap<String, Vertex>,
	edges: Vec<Edge>,
}

impl Graph {
	/// Create a new empty Graph.
	pub fn new() -> Self {
		Self {
			names: Vec::new(),
			index: AHashMap::new(),
			edges: Vec::new(),
		}
	}

	/// Number of vertices `n`.
	pub fn vertex_count(&self) -> usize {
		self.names.len()
	}

	/// Number of edges `m`.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Get the `i`-th edge. Panics if `i >= m`.
	pub fn edge(&self, i: usize) -> Edge {
		self.edges[i]
	}

	/// Iterate over the edges in order.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.edges.iter().copied()
	}

	/// Get or create the vertex named `name` and return its id.
	pub fn add_vertex(&mut self, name: &str) -> Vertex {
		if let Some(&v) = self.index.get(name) {
			return v;
		}
		self.names.push(name.to_string());
		let v = self.names.len();
		self.index.insert(name.to_string(), v);
		v
	}

	/// Append the edge `{u, v}`, creating the endpoints as needed.
	pub fn add_edge(&mut self, u: &str, v: &str) -> usize {
		let v1 = self.add_vertex(u);
		let v2 = self.add_vertex(v);
		self.edges.push(Edge::new(v1, v2));
		self.edges.len() - 1
	}

	/// Look up a vertex id by name.
	pub fn vertex_id(&self, name: &str) -> Option<Vertex> {
		self.index.get(name).copied()
	}

	/// Name of vertex `v`. Panics if `v` is not a vertex.
	pub fn vertex_name(&self, v: Vertex) -> &str {
		&self.names[v - 1]
	}

	/// Read an edge list in the line-oriented `u v` format. Vertex
	/// names are arbitrary whitespace-free strings; ids are assigned in
	/// first-seen order. Blank lines are skipped, anything else with a
	/// token count other than two is an error.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let mut graph = Self::new();
		for (lineno, line) in BufReader::new(reader).lines().enumerate() {
			let line = line?;
			let mut tokens = line.split_whitespace();
			match (tokens.next(), tokens.next(), tokens.next()) {
				(None, _, _) => continue,
				(Some(u), Some(v), None) => {
					graph.add_edge(u, v);
				}
				_ => return Err(Error::MalformedLine(lineno + 1)),
			}
		}
		Ok(graph)
	}

	/// Read an edge list from a file.
	pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::from_reader(File::open(path)?)
	}

	/// Build the k×k grid graph used by the self-checks: vertex `(i, j)`
	/// is named `i:j`, edges run row by row, first to the right
	/// neighbour and then to the one below.
	pub fn grid(k: usize) -> Self {
		let name = |i: usize, j: usize| format!("{}:{}", i, j);
		let mut graph = Self::new();
		for i in 0..k {
			for j in 0..k {
				if j + 1 < k {
					graph.add_edge(&name(i, j), &name(i, j + 1));
				}
				if i + 1 < k {
					graph.add_edge(&name(i, j), &name(i + 1, j));
				}
			}
		}
		graph
	}
}

impl Default for Graph {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for Graph {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Graph")
			.field("vertices", &self.vertex_count())
			.field("edges", &self.edges)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parse_edge_list() {
		let g = Graph::from_reader("a b\nb c\n\nc a\n".as_bytes()).unwrap();
		assert_eq!(g.vertex_count(), 3);
		assert_eq!(g.edge_count(), 3);
		assert_eq!(g.vertex_id("a"), Some(1));
		assert_eq!(g.vertex_id("c"), Some(3));
		assert_eq!(g.edge(2), Edge::new(3, 1));
	}

	#[test]
	fn parse_rejects_odd_token_count() {
		assert!(Graph::from_reader("a b c\n".as_bytes()).is_err());
		assert!(Graph::from_reader("a\n".as_bytes()).is_err());
	}

	#[test]
	fn grid_sizes() {
		let g = Graph::grid(3);
		assert_eq!(g.vertex_count(), 9);
		assert_eq!(g.edge_count(), 12);
		assert_eq!(g.vertex_name(1), "0:0");
	}
}
