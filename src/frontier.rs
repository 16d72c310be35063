//! # Frontier Schedule
//!
//! The frontier method walks the edges of a graph in their fixed order
//! and, for every partial decision, only remembers data about vertices
//! that are still "live": incident to both an already-processed edge and
//! a not-yet-processed one. This module derives the full per-edge
//! schedule from the edge list alone: which vertices enter and leave at
//! each position, the live set itself, and a compact slot layout so a
//! state array of `max_width()` entries always suffices.
//!
//! The schedule is pure data. It is computed once per graph and shared
//! read-only by the frontier specifications.
//!
//! # Examples
//!
//! ```
//! use fzdd::graph::Graph;
//! use fzdd::frontier::FrontierSchedule;
//!
//! let mut g = Graph::new();
//! g.add_edge("a", "b");
//! g.add_edge("b", "c");
//! g.add_edge("c", "a");
//!
//! let fs = FrontierSchedule::build(&g).unwrap();
//! assert_eq!(fs.entering(0), &[1, 2]);
//! assert_eq!(fs.leaving(2), &[3, 1]);
//! assert_eq!(fs.max_width(), 3);
//! ```

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};

/// Per-edge frontier schedule of a graph.
pub struct FrontierSchedule {
	// entering[i] holds the vertices whose smallest incident edge
	// index is i; leaving[i] those whose largest incident edge index
	// is i. Both partition the vertex set.
	entering: Vec<Vec<Vertex>>,
	leaving: Vec<Vec<Vertex>>,
	// frontier[i] holds, in ascending vertex order, every vertex
	// incident to an edge in e_0..e_i and to an edge in e_i..e_{m-1}.
	// The order is observable: specs iterate it.
	frontier: Vec<Vec<Vertex>>,
	// slot[v] is the storage index of v in a state array while v is
	// live. Slots are handed out from a free list on entry and
	// reclaimed on exit, so distinct live vertices never collide.
	slot: Vec<usize>,
	// first_edge[v] is the edge index at which v enters the frontier.
	first_edge: Vec<usize>,
	max_width: usize,
	all_entered_edge: usize,
}

impl FrontierSchedule {
	/// Compute the schedule for `graph`. Fails only on graphs without
	/// vertices or without edges.
	pub fn build(graph: &Graph) -> Result<Self> {
		let n = graph.vertex_count();
		let m = graph.edge_count();
		if n == 0 {
			return Err(Error::NoVertices);
		}
		if m == 0 {
			return Err(Error::NoEdges);
		}

		let mut entering = vec![Vec::new(); m];
		let mut first_edge = vec![0; n + 1];
		let mut all_entered_edge = 0;
		let mut seen = vec![false; n + 1];
		for (i, e) in graph.edges().enumerate() {
			for v in [e.v1, e.v2] {
				if !seen[v] {
					seen[v] = true;
					entering[i].push(v);
					first_edge[v] = i;
					all_entered_edge = i;
				}
			}
		}
		debug_assert!(seen[1..].iter().all(|&s| s));

		let mut leaving = vec![Vec::new(); m];
		let mut seen = vec![false; n + 1];
		for i in (0..m).rev() {
			let e = graph.edge(i);
			for v in [e.v1, e.v2] {
				if !seen[v] {
					seen[v] = true;
					leaving[i].push(v);
				}
			}
		}

		// Forward pass over the live set. Slots come off a free list,
		// so a slot freed by a leaving vertex is the next one handed
		// out.
		let mut frontier = vec![Vec::new(); m];
		let mut slot = vec![0; n + 1];
		let mut free: Vec<usize> = (0..n).rev().collect();
		let mut live = BTreeSet::new();
		let mut max_width = 0;
		for i in 0..m {
			for &v in &entering[i] {
				live.insert(v);
				slot[v] = free.pop().unwrap();
			}
			frontier[i] = live.iter().copied().collect();
			if live.len() > max_width {
				max_width = live.len();
			}
			for &v in &leaving[i] {
				live.remove(&v);
				free.push(slot[v]);
			}
		}
		debug_assert!(live.is_empty());

		Ok(Self {
			entering,
			leaving,
			frontier,
			slot,
			first_edge,
			max_width,
			all_entered_edge,
		})
	}

	/// Vertices that first appear when the `i`-th edge is processed.
	pub fn entering(&self, i: usize) -> &[Vertex] {
		&self.entering[i]
	}

	/// Vertices that appear for the last time when the `i`-th edge is
	/// processed.
	pub fn leaving(&self, i: usize) -> &[Vertex] {
		&self.leaving[i]
	}

	/// Vertices live at edge position `i`, ascending.
	pub fn frontier(&self, i: usize) -> &[Vertex] {
		&self.frontier[i]
	}

	/// Storage index of `v` while `v` is on the frontier.
	pub fn slot(&self, v: Vertex) -> usize {
		self.slot[v]
	}

	/// The maximum frontier size over all edge positions.
	pub fn max_width(&self) -> usize {
		self.max_width
	}

	/// The edge index at which `v` enters the frontier.
	pub fn first_edge_of(&self, v: Vertex) -> usize {
		self.first_edge[v]
	}

	/// The edge index at which the last vertex enters the frontier.
	pub fn all_entered_edge(&self) -> usize {
		self.all_entered_edge
	}
}

impl fmt::Display for FrontierSchedule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let fmt_vs = |vs: &[Vertex]| {
			let strs: Vec<String> = vs.iter().map(|v| v.to_string()).collect();
			format!("[{}]", strs.join(", "))
		};
		for i in 0..self.entering.len() {
			writeln!(
				f,
				"{}{}{}",
				fmt_vs(&self.entering[i]),
				fmt_vs(&self.leaving[i]),
				fmt_vs(&self.frontier[i])
			)?;
		}
		let slots: Vec<String> = (1..self.slot.len())
			.map(|v| self.slot[v].to_string())
			.collect();
		writeln!(f, "slots = {}", slots.join(", "))?;
		write!(f, "max frontier size = {}", self.max_width)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path_graph(n: usize) -> Graph {
		let mut g = Graph::new();
		for i in 1..n {
			g.add_edge(&i.to_string(), &(i + 1).to_string());
		}
		g
	}

	#[test]
	fn path_graph_schedule() {
		let g = path_graph(4);
		let fs = FrontierSchedule::build(&g).unwrap();
		assert_eq!(fs.max_width(), 2);
		assert_eq!(fs.entering(0), &[1, 2]);
		assert_eq!(fs.entering(1), &[3]);
		assert_eq!(fs.leaving(0), &[1]);
		assert_eq!(fs.frontier(1), &[2, 3]);
		assert_eq!(fs.all_entered_edge(), 2);
	}

	#[test]
	fn slots_are_recycled() {
		let g = path_graph(5);
		let fs = FrontierSchedule::build(&g).unwrap();
		// Vertex 1 frees its slot after edge 0; vertex 3 picks it up.
		assert_eq!(fs.slot(1), fs.slot(3));
		assert_ne!(fs.slot(2), fs.slot(3));
	}

	#[test]
	fn empty_graph_is_rejected() {
		assert!(matches!(
			FrontierSchedule::build(&Graph::new()),
			Err(Error::NoVertices)
		));
	}
}
