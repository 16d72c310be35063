//! # Single-Cycle Specifications
//!
//! Two deg/comp specifications over the same scratch layout: edge sets
//! forming exactly one cycle, and edge sets forming exactly one
//! Hamiltonian cycle. A cycle shows itself to the frontier as a
//! component whose members all reach degree 2 before they retire; the
//! closure policy decides what else may exist when that happens.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::Graph;
use crate::spec::{
	admit_deg_comp, get, put, scan_frontier, union_comps, DegComp, FrontierSpec, ACCEPT, REJECT,
};

/// Models are the edge sets forming a single cycle (of any length).
pub struct SingleCycleSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
}

impl<'a> SingleCycleSpec<'a> {
	pub fn new(graph: &'a Graph) -> Result<Self> {
		if graph.vertex_count() > i16::MAX as usize {
			return Err(Error::TooManyVertices);
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
		})
	}
}

impl FrontierSpec for SingleCycleSpec<'_> {
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
			// A vertex either stays off the cycle or passes through it.
			if deg != 0 && deg != 2 {
				return REJECT;
			}
			let scan = scan_frontier(state, &self.fs, edge_index, &leaving[..i], v);
			if !scan.same_comp && deg > 0 {
				// The component of v is now sealed. Any other started
				// component would stay disconnected from it.
				if scan.nonisolated {
					return REJECT;
				}
				return ACCEPT;
			}
			put(state, &self.fs, v, DegComp::INVALID);
		}
		if level == 1 {
			// Only the empty edge set reaches here; no cycle.
			return REJECT;
		}
		level - 1
	}
}

/// Models are the edge sets forming a single Hamiltonian cycle.
pub struct HamiltonianCycleSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
}

impl<'a> HamiltonianCycleSpec<'a> {
	pub fn new(graph: &'a Graph) -> Result<Self> {
		if graph.vertex_count() > i16::MAX as usize {
			return Err(Error::TooManyVertices);
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
		})
	}
}

impl FrontierSpec for HamiltonianCycleSpec<'_> {
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
			// Every vertex lies on the cycle.
			if get(state, &self.fs, v).deg != 2 {
				return REJECT;
			}
			let scan = scan_frontier(state, &self.fs, edge_index, &leaving[..i], v);
			if !scan.same_comp {
				if scan.nonisolated {
					return REJECT;
				}
				// The cycle is closed. It is Hamiltonian only when no
				// vertex is left on the frontier and none is still to
				// come.
				if scan.live || edge_index < self.fs.all_entered_edge() {
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
