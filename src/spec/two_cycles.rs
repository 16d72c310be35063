//! # Two-Single-Cycles Specification
//!
//! A multi-colour variant of the single-cycle family. Every edge takes
//! a value in `0..=2`: skip, or join the cycle of colour 1 or colour 2.
//! Each colour carries its own deg/comp pair per live vertex, and a
//! per-colour completed bit lives in a header slot in front of the
//! per-vertex array. Closing a colour's cycle sets its bit (a second
//! closure of the same colour rejects); a branch is a model when it
//! reaches the last level with both bits set.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::{Graph, Vertex};
use crate::spec::{FrontierSpec, ACCEPT, REJECT};

/// Number of cycle colours demanded of every model.
pub const COLORS: usize = 2;

const ALL_DONE: i16 = (1 << COLORS) - 1;

/// Per-vertex scratch, one deg/comp pair per colour. The header slot
/// reuses `deg[0]` as the completed-bit mask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSlot {
	deg: [i16; COLORS],
	comp: [i16; COLORS],
}

/// Models are the edge 3-colourings whose colour-1 and colour-2 classes
/// each form a single cycle.
pub struct TwoSingleCyclesSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
}

impl<'a> TwoSingleCyclesSpec<'a> {
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

	// The header occupies index 0; vertex slots are shifted by one.
	fn get(&self, state: &[ColorSlot], v: Vertex) -> ColorSlot {
		state[self.fs.slot(v) + 1]
	}

	fn put(&self, state: &mut [ColorSlot], v: Vertex, slot: ColorSlot) {
		state[self.fs.slot(v) + 1] = slot;
	}
}

impl FrontierSpec for TwoSingleCyclesSpec<'_> {
	type Slot = ColorSlot;

	fn arity(&self) -> usize {
		COLORS + 1
	}

	fn array_size(&self) -> usize {
		self.fs.max_width() + 1
	}

	fn init(&self, state: &mut [ColorSlot]) -> i32 {
		state.fill(ColorSlot::default());
		self.m as i32
	}

	fn child(&self, state: &mut [ColorSlot], level: i32, value: usize) -> i32 {
		debug_assert!(1 <= level && level as usize <= self.m);
		debug_assert!(value <= COLORS);
		let edge_index = self.m - level as usize;
		let edge = self.graph.edge(edge_index);

		for &v in self.fs.entering(edge_index) {
			self.put(
				state,
				v,
				ColorSlot {
					deg: [0; COLORS],
					comp: [v as i16; COLORS],
				},
			);
		}

		if value >= 1 {
			let c = value - 1;
			let mut s1 = self.get(state, edge.v1);
			s1.deg[c] += 1;
			self.put(state, edge.v1, s1);
			let mut s2 = self.get(state, edge.v2);
			s2.deg[c] += 1;
			self.put(state, edge.v2, s2);
			let (c1, c2) = (s1.comp[c], s2.comp[c]);
			if c1 != c2 {
				let cmin = c1.min(c2);
				let cmax = c1.max(c2);
				for &w in self.fs.frontier(edge_index) {
					let mut sw = self.get(state, w);
					if sw.comp[c] == cmin {
						sw.comp[c] = cmax;
						self.put(state, w, sw);
					}
				}
			}
		}

		let leaving = self.fs.leaving(edge_index);
		for (i, &v) in leaving.iter().enumerate() {
			let sv = self.get(state, v);
			for c in 0..COLORS {
				if sv.deg[c] != 0 && sv.deg[c] != 2 {
					return REJECT;
				}
			}
			let mut same_comp = [false; COLORS];
			let mut nonisolated = [false; COLORS];
			for &w in self.fs.frontier(edge_index) {
				if w == v || leaving[..i].contains(&w) {
					continue;
				}
				let sw = self.get(state, w);
				for c in 0..COLORS {
					if sw.comp[c] == sv.comp[c] {
						same_comp[c] = true;
					}
					if sw.deg[c] > 0 {
						nonisolated[c] = true;
					}
				}
			}
			for c in 0..COLORS {
				if !same_comp[c] && sv.deg[c] > 0 {
					if nonisolated[c] {
						return REJECT;
					}
					// A cycle of colour c is complete; only one per
					// colour is allowed.
					if state[0].deg[0] & (1 << c) != 0 {
						return REJECT;
					}
					state[0].deg[0] |= 1 << c;
				}
			}
			self.put(
				state,
				v,
				ColorSlot {
					deg: [-1; COLORS],
					comp: [-1; COLORS],
				},
			);
		}
		if level == 1 {
			if state[0].deg[0] == ALL_DONE {
				return ACCEPT;
			}
			return REJECT;
		}
		level - 1
	}
}
