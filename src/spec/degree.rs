//! # Degree-Specified Subgraphs
//!
//! Every vertex carries an admissible range for its final degree; the
//! models are exactly the edge sets meeting all ranges. No connectivity
//! is imposed. Shape presets such as the CLI letter subgraphs are built
//! from this spec by constraining the first few vertices and leaving
//! the rest free.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::Graph;
use crate::spec::{get, put, FrontierSpec, ACCEPT, REJECT};

/// Inclusive degree interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DegreeRange {
	min: u32,
	max: u32,
}

impl DegreeRange {
	/// Any degree at all.
	pub fn any() -> Self {
		Self {
			min: 0,
			max: u32::MAX,
		}
	}

	pub fn exactly(d: u32) -> Self {
		Self { min: d, max: d }
	}

	pub fn at_least(d: u32) -> Self {
		Self {
			min: d,
			max: u32::MAX,
		}
	}

	pub fn between(min: u32, max: u32) -> Self {
		Self { min, max }
	}

	pub fn contains(&self, d: u32) -> bool {
		self.min <= d && d <= self.max
	}
}

/// Models are the edge sets whose per-vertex degrees all land in the
/// given ranges. Ranges are listed per vertex id starting at vertex 1;
/// vertices beyond the list are unconstrained.
pub struct DegreeSpecifiedSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
	// Indexed by vertex id, entry 0 unused.
	ranges: Vec<DegreeRange>,
}

impl<'a> DegreeSpecifiedSpec<'a> {
	pub fn new(graph: &'a Graph, ranges: Vec<DegreeRange>) -> Result<Self> {
		let n = graph.vertex_count();
		if n > i16::MAX as usize {
			return Err(Error::TooManyVertices);
		}
		if ranges.len() > n {
			return Err(Error::VertexOutOfRange(ranges.len()));
		}
		let mut by_vertex = vec![DegreeRange::any(); n + 1];
		by_vertex[1..=ranges.len()].copy_from_slice(&ranges);
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
			ranges: by_vertex,
		})
	}
}

impl FrontierSpec for DegreeSpecifiedSpec<'_> {
	type Slot = i16;

	fn array_size(&self) -> usize {
		self.fs.max_width()
	}

	fn init(&self, state: &mut [i16]) -> i32 {
		state.fill(0);
		self.m as i32
	}

	fn child(&self, state: &mut [i16], level: i32, value: usize) -> i32 {
		debug_assert!(1 <= level && level as usize <= self.m);
		let edge_index = self.m - level as usize;
		let edge = self.graph.edge(edge_index);

		for &v in self.fs.entering(edge_index) {
			put(state, &self.fs, v, 0);
		}

		if value == 1 {
			let d1 = get(state, &self.fs, edge.v1);
			put(state, &self.fs, edge.v1, d1 + 1);
			let d2 = get(state, &self.fs, edge.v2);
			put(state, &self.fs, edge.v2, d2 + 1);
		}

		for &v in self.fs.leaving(edge_index) {
			let deg = get(state, &self.fs, v);
			if !self.ranges[v].contains(deg as u32) {
				return REJECT;
			}
			put(state, &self.fs, v, -1);
		}
		if level == 1 {
			return ACCEPT;
		}
		level - 1
	}
}
