//! # Forest Specification
//!
//! Acyclic edge sets. The scratch is a bare component label per live
//! vertex; taking an edge inside one component would close a cycle and
//! rejects on the spot. Nothing is checked when a vertex retires, and
//! every branch that survives to the last level is a model, including
//! the empty edge set.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::Graph;
use crate::spec::{get, put, FrontierSpec, ACCEPT, REJECT};

/// Models are the acyclic edge sets (spanning forests of subgraphs).
pub struct ForestSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
}

impl<'a> ForestSpec<'a> {
	pub fn new(graph: &'a Graph) -> Result<Self> {
		if graph.vertex_count() >= 1 << 15 {
			return Err(Error::TooManyVertices);
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
		})
	}
}

impl FrontierSpec for ForestSpec<'_> {
	type Slot = u16;

	fn array_size(&self) -> usize {
		self.fs.max_width()
	}

	fn init(&self, state: &mut [u16]) -> i32 {
		state.fill(0);
		self.m as i32
	}

	fn child(&self, state: &mut [u16], level: i32, value: usize) -> i32 {
		debug_assert!(1 <= level && level as usize <= self.m);
		let edge_index = self.m - level as usize;
		let edge = self.graph.edge(edge_index);

		for &v in self.fs.entering(edge_index) {
			put(state, &self.fs, v, v as u16);
		}

		if value == 1 {
			let c1 = get(state, &self.fs, edge.v1);
			let c2 = get(state, &self.fs, edge.v2);
			if c1 == c2 {
				return REJECT;
			}
			let cmin = c1.min(c2);
			let cmax = c1.max(c2);
			for &w in self.fs.frontier(edge_index) {
				if get(state, &self.fs, w) == cmin {
					put(state, &self.fs, w, cmax);
				}
			}
		}

		for &v in self.fs.leaving(edge_index) {
			put(state, &self.fs, v, 0);
		}
		if level == 1 {
			return ACCEPT;
		}
		level - 1
	}
}
