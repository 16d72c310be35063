//! # Frontier Specifications
//!
//! A frontier specification is the state-transition function of one
//! subgraph family. The ZDD builder drives it top-down: levels are
//! numbered from `m` (the root, edge 0) down to `1` (the last edge),
//! with `edge_index = m - level`. At each level the builder clones the
//! fixed-width scratch array, applies [`FrontierSpec::child`] for every
//! branch value and merges branches whose post-state arrays are equal.
//! The scratch array is therefore the full equivalence key: a spec must
//! write the slot of every vertex entering at the current edge before
//! reading it, and overwrite the slot of every leaving vertex with a
//! fixed sentinel before returning, so that traces differing only in
//! leftover slot contents fold together.
//!
//! Every transition follows the same scaffold:
//!
//! 1. admit the entering vertices (fresh per-vertex scratch),
//! 2. apply the decision for the current edge (take may reject),
//! 3. retire the leaving vertices: validate the per-vertex condition,
//!    detect component closure and apply the family's closure policy,
//!    then invalidate the slot,
//! 4. step to `level - 1`, or reject at `level == 1` when the family
//!    only accepts at closure.
//!
//! Specs are pure: identical `(scratch, level, value)` triples yield
//! identical results and post-states, which is exactly the property
//! that lets the builder share nodes.

mod cycle;
mod degree;
mod forest;
mod matching;
mod mate;
mod path;
mod tree;
mod two_cycles;

pub use cycle::{HamiltonianCycleSpec, SingleCycleSpec};
pub use degree::{DegreeRange, DegreeSpecifiedSpec};
pub use forest::ForestSpec;
pub use matching::MatchingSpec;
pub use mate::MateSpec;
pub use path::StPathSpec;
pub use tree::TreeSpec;
pub use two_cycles::{ColorSlot, TwoSingleCyclesSpec, COLORS};

use std::hash::Hash;

use crate::frontier::FrontierSchedule;
use crate::graph::Vertex;

/// Next-level value for the reject (false) terminal.
pub const REJECT: i32 = 0;
/// Next-level value for the accept (true) terminal.
pub const ACCEPT: i32 = -1;

/// State-transition contract shared by all frontier specifications.
pub trait FrontierSpec {
	/// One entry of the scratch array.
	type Slot: Copy + Default + Eq + Hash;

	/// Number of branch values per level. Binary specs use 2.
	fn arity(&self) -> usize {
		2
	}

	/// Width of the scratch array.
	fn array_size(&self) -> usize;

	/// Reset `state` to the root state and return the root level `m`.
	fn init(&self, state: &mut [Self::Slot]) -> i32;

	/// Apply the decision `value` for the edge at `level`, updating
	/// `state` in place. Returns [`REJECT`], [`ACCEPT`] or the next
	/// level in `1..level`.
	fn child(&self, state: &mut [Self::Slot], level: i32, value: usize) -> i32;
}

/// Replay a spec over one full assignment of branch values, in edge
/// order. Returns whether the assignment is a model of the spec. Levels
/// skipped by an early terminal (or a level jump) only match when the
/// assignment keeps those edges at value 0, mirroring the
/// zero-suppression rule of the diagram.
pub fn accepts<S: FrontierSpec>(spec: &S, values: &[usize]) -> bool {
	let mut state = vec![S::Slot::default(); spec.array_size()];
	let mut level = spec.init(&mut state);
	let m = level as usize;
	debug_assert_eq!(values.len(), m);
	loop {
		let value = values[m - level as usize];
		let next = spec.child(&mut state, level, value);
		let decided = m - level as usize;
		match next {
			REJECT => return false,
			ACCEPT => return values[decided + 1..].iter().all(|&v| v == 0),
			_ => {
				let skipped = decided + 1..m - next as usize;
				if !values[skipped].iter().all(|&v| v == 0) {
					return false;
				}
				level = next;
			}
		}
	}
}

// Slot accessors shared by the specs. A vertex owns the slot the
// schedule assigned to it for as long as it is live.

#[inline]
pub(crate) fn get<T: Copy>(state: &[T], fs: &FrontierSchedule, v: Vertex) -> T {
	state[fs.slot(v)]
}

#[inline]
pub(crate) fn put<T>(state: &mut [T], fs: &FrontierSchedule, v: Vertex, value: T) {
	state[fs.slot(v)] = value;
}

/// Per-vertex scratch for the deg/comp family of specs: the partial
/// degree of the vertex among the decided edges, and the representative
/// of its connected component on the frontier. The representative is
/// always the maximum vertex id among the live members of the class.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DegComp {
	pub(crate) deg: i16,
	pub(crate) comp: i16,
}

impl DegComp {
	pub fn fresh(v: Vertex) -> Self {
		Self {
			deg: 0,
			comp: v as i16,
		}
	}

	pub const INVALID: Self = Self { deg: -1, comp: -1 };
}

/// Admit the vertices entering at `edge_index` with fresh deg/comp.
pub(crate) fn admit_deg_comp(state: &mut [DegComp], fs: &FrontierSchedule, edge_index: usize) {
	for &v in fs.entering(edge_index) {
		put(state, fs, v, DegComp::fresh(v));
	}
}

/// Union the component classes `c1` and `c2`: the smaller label is
/// replaced by the larger across every live frontier member.
pub(crate) fn union_comps(
	state: &mut [DegComp],
	fs: &FrontierSchedule,
	edge_index: usize,
	c1: i16,
	c2: i16,
) {
	if c1 == c2 {
		return;
	}
	let cmin = c1.min(c2);
	let cmax = c1.max(c2);
	for &w in fs.frontier(edge_index) {
		if get(state, fs, w).comp == cmin {
			let deg = get(state, fs, w).deg;
			put(state, fs, w, DegComp { deg, comp: cmax });
		}
	}
}

/// What a retiring vertex sees among the other live frontier members.
pub(crate) struct Scan {
	/// Some other live vertex shares the component of `v`.
	pub same_comp: bool,
	/// Some other live vertex has degree at least 1.
	pub nonisolated: bool,
	/// Some other live vertex exists at all.
	pub live: bool,
}

/// Scan the frontier at `edge_index` on behalf of the retiring vertex
/// `v`. Vertices in `retired` (the earlier entries of the current
/// leaving list) are already gone and are skipped.
pub(crate) fn scan_frontier(
	state: &[DegComp],
	fs: &FrontierSchedule,
	edge_index: usize,
	retired: &[Vertex],
	v: Vertex,
) -> Scan {
	let comp = get(state, fs, v).comp;
	let mut scan = Scan {
		same_comp: false,
		nonisolated: false,
		live: false,
	};
	for &w in fs.frontier(edge_index) {
		if w == v || retired.contains(&w) {
			continue;
		}
		scan.live = true;
		let dc = get(state, fs, w);
		if dc.comp == comp {
			scan.same_comp = true;
		}
		if dc.deg > 0 {
			scan.nonisolated = true;
		}
		if scan.same_comp && scan.nonisolated {
			break;
		}
	}
	scan
}
