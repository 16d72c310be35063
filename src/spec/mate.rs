//! # Mate Specification
//!
//! The path and cycle families again, encoded without component labels.
//! `mate[v]` holds the opposite endpoint of the path segment through
//! `v`: `v` itself while isolated, `0` once `v` is interior to a
//! segment. For an s-t path problem the two endpoints start out mated
//! to each other, which plants a virtual s-t segment; closing a loop
//! through that segment is exactly the completion of the path, and the
//! only loop that may ever be taken.
//!
//! Counts agree with [`StPathSpec`](crate::spec::StPathSpec) and the
//! cycle specs; only the scratch shape and the hot-path cost differ.

use crate::error::{Error, Result};
use crate::frontier::FrontierSchedule;
use crate::graph::{Graph, Vertex};
use crate::spec::{get, put, FrontierSpec, ACCEPT, REJECT};

/// Sentinel for a retired slot.
const INVALID: i16 = -1;

/// Models are simple paths or single cycles in the mate encoding,
/// Hamiltonian on demand.
pub struct MateSpec<'a> {
	graph: &'a Graph,
	fs: FrontierSchedule,
	m: usize,
	hamiltonian: bool,
	// None for the cycle family.
	st: Option<(Vertex, Vertex)>,
}

impl<'a> MateSpec<'a> {
	/// Spec for single cycles.
	pub fn cycles(graph: &'a Graph, hamiltonian: bool) -> Result<Self> {
		if graph.vertex_count() > i16::MAX as usize {
			return Err(Error::TooManyVertices);
		}
		Ok(Self {
			graph,
			fs: FrontierSchedule::build(graph)?,
			m: graph.edge_count(),
			hamiltonian,
			st: None,
		})
	}

	/// Spec for simple paths from `s` to `t`.
	pub fn paths(graph: &'a Graph, hamiltonian: bool, s: Vertex, t: Vertex) -> Result<Self> {
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
			st: Some((s, t)),
		})
	}

	/// Whether `v` has entered the frontier once `edge_index` is being
	/// processed (entering vertices are admitted first).
	fn entered(&self, v: Vertex, edge_index: usize) -> bool {
		edge_index >= self.fs.first_edge_of(v)
	}

	/// A mate value may name an endpoint that has not entered yet; its
	/// slot does not exist and must not be written.
	fn writable(&self, mate: i16, edge_index: usize) -> bool {
		if let Some((s, t)) = self.st {
			if mate == s as i16 && !self.entered(s, edge_index) {
				return false;
			}
			if mate == t as i16 && !self.entered(t, edge_index) {
				return false;
			}
		}
		true
	}
}

impl FrontierSpec for MateSpec<'_> {
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
		let frontier = self.fs.frontier(edge_index);

		for &v in self.fs.entering(edge_index) {
			put(state, &self.fs, v, v as i16);
			if let Some((s, t)) = self.st {
				// An endpoint enters mated to its partner; if some
				// live segment already ends in a marker for this
				// endpoint, chain through it instead.
				if v == s {
					put(state, &self.fs, v, t as i16);
					for &w in frontier {
						if w != v && get(state, &self.fs, w) == s as i16 {
							put(state, &self.fs, v, w as i16);
						}
					}
				} else if v == t {
					put(state, &self.fs, v, s as i16);
					for &w in frontier {
						if w != v && get(state, &self.fs, w) == t as i16 {
							put(state, &self.fs, v, w as i16);
						}
					}
				}
			}
		}

		if value == 1 {
			let m1 = get(state, &self.fs, edge.v1);
			let m2 = get(state, &self.fs, edge.v2);
			if m1 == 0 || m2 == 0 {
				// An endpoint already has degree 2.
				return REJECT;
			}
			if m1 == edge.v2 as i16 {
				// The take closes a loop. For paths this is only legal
				// through the virtual s-t segment, which needs both
				// endpoints on board.
				if let Some((s, t)) = self.st {
					if !self.entered(s, edge_index) && !self.entered(t, edge_index) {
						return REJECT;
					}
				}
				for &w in frontier {
					if w == edge.v1 || w == edge.v2 {
						continue;
					}
					let mw = get(state, &self.fs, w);
					if self.hamiltonian {
						if mw != 0 {
							return REJECT;
						}
					} else if mw != 0 && mw != w as i16 {
						return REJECT;
					}
				}
				if self.hamiltonian && edge_index < self.fs.all_entered_edge() {
					return REJECT;
				}
				return ACCEPT;
			}
			// Splice the two segments: the outer ends become mates,
			// the edge endpoints become interior.
			put(state, &self.fs, edge.v1, 0);
			put(state, &self.fs, edge.v2, 0);
			if self.writable(m1, edge_index) {
				put(state, &self.fs, m1 as Vertex, m2);
			}
			if self.writable(m2, edge_index) {
				put(state, &self.fs, m2 as Vertex, m1);
			}
		}

		for &v in self.fs.leaving(edge_index) {
			let mv = get(state, &self.fs, v);
			if self.hamiltonian {
				if mv != 0 {
					return REJECT;
				}
			} else if mv != 0 && mv != v as i16 {
				return REJECT;
			}
			put(state, &self.fs, v, INVALID);
		}
		if level == 1 {
			return REJECT;
		}
		level - 1
	}
}
