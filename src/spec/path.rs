//! # s-t Path Specification
//!
//! Simple paths between two endpoints, optionally Hamiltonian. The
//! endpoints must retire with degree 1, every other vertex with degree
//! 0 or 2 (exactly 2 when Hamiltonian). A sealed component with edges
//! in it is the finished path, so acceptance additionally requires both
//! endpoints to have entered the frontier, otherwise the component is
//! a stray cycle.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::{Graph, Vertex};
use crate::spec::{
	admit_deg_comp, get, put, scan_frontier, union_comps, DegComp, FrontierSpec, ACCEPT, REJECT,
};

/// Models are the simple paths from `s` to `t`, Hamiltonian on demand.
pub struct StPathSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
	hamiltonian: bool,
	s: Vertex,
	t: Vertex,
}

impl<'a> StPathSpec<'a> {
	pub fn new(graph: &'a Graph, hamiltonian: bool, s: Vertex, t: Vertex) -> Result<Self> {
		let n = graph.vertex_count();
		if n > i16::MAX as usize {
			return Err(Error::TooManyVertices);
		}
		for v in [s, t] {
			if v == 0 || v > n {
				return Err(Error::VertexOutOfRange(v));
			}
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
			hamiltonian,
			s,
			t,
		})
	}
}

impl FrontierSpec for StPathSpec<'_> {
	type Slot = DegComp;

	fn array_size(&self) -> usize {
		self.fs.max_width()
	}

	fn init(&self, state: &mut [DegComp]) -> i32 {
		state.fill(DegComp::default());
		self.m as i32
	}

	fn child(&self, state: &mut [DegComp], level: i32, value: usize) -> i32 {
		debug_assert!(1 <= level && level as usize <= self.m);
		let edge_index = self.m - level as usize;
		let edge = self.graph.edge(edge_index);

		admit_deg_comp(state, &self.fs, edge_index);

		if value == 1 {
			let mut d1 = get(state, &self.fs, edge.v1);
			d1.deg += 1;
			put(state, &self.fs, edge.v1, d1);
			let mut d2 = get(state, &self.fs, edge.v2);
			d2.deg += 1;
			put(state, &self.fs, edge.v2, d2);
			union_comps(state, &self.fs, edge_index, d1.comp, d2.comp);
		}

		let leaving = self.fs.leaving(edge_index);
		for (i, &v) in leaving.iter().enumerate() {
			let deg = get(state, &self.fs, v).deg;
			if v == self.s || v == self.t {
				// Path endpoints retire with degree exactly 1.
				if deg != 1 {
					return REJECT;
				}
			} else if self.hamiltonian {
				if deg != 2 {
					return REJECT;
				}
			} else if deg != 0 && deg != 2 {
				return REJECT;
			}
			let scan = scan_frontier(state, &self.fs, edge_index, &leaving[..i], v);
			if !scan.same_comp && deg > 0 {
				if scan.nonisolated {
					return REJECT;
				}
				if self.hamiltonian {
					if scan.live || edge_index < self.fs.all_entered_edge() {
						return REJECT;
					}
				} else if edge_index < self.fs.first_edge_of(self.s)
					|| edge_index < self.fs.first_edge_of(self.t)
				{
					// The sealed component cannot contain both
					// endpoints, so it is a stray cycle.
					return REJECT;
				}
				return ACCEPT;
			}
			put(state, &self.fs, v, DegComp::INVALID);
		}
		if level == 1 {
			return REJECT;
		}
		level - 1
	}
}
