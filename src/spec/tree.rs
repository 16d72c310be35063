//! # Tree Specification
//!
//! Edge sets forming exactly one tree, optionally spanning. The scratch
//! packs a has-degree flag and a 15-bit component label into one `u16`
//! per live vertex, which is why this spec caps the vertex count at
//! 2^15. A take that stays inside one component rejects (cycle); a
//! sealed component with edges in it is the finished tree.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::{Graph, Vertex};
use crate::spec::{get, put, FrontierSpec, ACCEPT, REJECT};

const DEG_BIT: u16 = 1 << 15;
const COMP_MASK: u16 = DEG_BIT - 1;

/// Models are the edge sets forming a single tree with at least one
/// edge; with `spanning`, the spanning trees.
pub struct TreeSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
	spanning: bool,
}

impl<'a> TreeSpec<'a> {
	pub fn new(graph: &'a Graph, spanning: bool) -> Result<Self> {
		if graph.vertex_count() >= 1 << 15 {
			return Err(Error::TooManyVertices);
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
			spanning,
		})
	}

	fn has_deg(&self, state: &[u16], v: Vertex) -> bool {
		get(state, &self.fs, v) & DEG_BIT != 0
	}

	fn comp(&self, state: &[u16], v: Vertex) -> u16 {
		get(state, &self.fs, v) & COMP_MASK
	}
}

impl FrontierSpec for TreeSpec<'_> {
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
			let c1 = self.comp(state, edge.v1);
			let c2 = self.comp(state, edge.v2);
			if c1 == c2 {
				return REJECT;
			}
			for v in [edge.v1, edge.v2] {
				let cell = get(state, &self.fs, v);
				put(state, &self.fs, v, cell | DEG_BIT);
			}
			let cmin = c1.min(c2);
			let cmax = c1.max(c2);
			for &w in self.fs.frontier(edge_index) {
				let cell = get(state, &self.fs, w);
				if cell & COMP_MASK == cmin {
					put(state, &self.fs, w, (cell & DEG_BIT) | cmax);
				}
			}
		}

		let leaving = self.fs.leaving(edge_index);
		for (i, &v) in leaving.iter().enumerate() {
			if self.spanning && !self.has_deg(state, v) {
				return REJECT;
			}
			let comp = self.comp(state, v);
			let mut same_comp = false;
			let mut nonisolated = false;
			let mut live = false;
			for &w in self.fs.frontier(edge_index) {
				if w == v || leaving[..i].contains(&w) {
					continue;
				}
				live = true;
				if self.comp(state, w) == comp {
					same_comp = true;
				}
				if self.has_deg(state, w) {
					nonisolated = true;
				}
				if same_comp && nonisolated {
					break;
				}
			}
			if !same_comp && self.has_deg(state, v) {
				// The component of v is sealed and carries edges: it is
				// the candidate tree.
				if nonisolated {
					return REJECT;
				}
				if self.spanning
					&& (live || edge_index < self.fs.all_entered_edge())
				{
					return REJECT;
				}
				return ACCEPT;
			}
			put(state, &self.fs, v, 0);
		}
		if level == 1 {
			// Only the empty edge set reaches here; not a tree.
			return REJECT;
		}
		level - 1
	}
}
