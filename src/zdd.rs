//! # ZDD Construction Engine
//!
//! Breadth-first, top-down construction of a zero-suppressed binary
//! decision diagram from a frontier specification. Levels run from `m`
//! at the root down to `1`; a node's branch either jumps to a lower
//! level, with every skipped level implicitly at value 0, or lands on a
//! terminal. Within one level, branches whose post-state arrays are
//! equal are merged into a single node, so the diagram stays as small
//! as the specification's state space.
//!
//! The engine owns the scratch arrays and clones them to explore the
//! branch values of a level; the specification itself stays immutable
//! and is free of allocations.
//!
//! # Examples
//!
//! ```
//! use fzdd::graph::Graph;
//! use fzdd::spec::SingleCycleSpec;
//! use fzdd::zdd::Zdd;
//!
//! let graph = Graph::grid(3);
//! let spec = SingleCycleSpec::new(&graph).unwrap();
//! let dd = Zdd::build(&spec);
//!
//! assert_eq!(dd.cardinality().to_string(), "13");
//! ```

use ahash::AHashMap;
use num_bigint::BigUint;

use crate::spec::FrontierSpec;

/// Index of a diagram node. `0` and `1` are the terminals.
pub type NodeId = usize;

/// A zero-suppressed decision diagram over levels `m..=1`.
pub struct Zdd {
	arity: usize,
	max_level: i32,
	root: NodeId,
	// levels[id] per node, 0 for the two terminals.
	levels: Vec<i32>,
	// branches[id * arity + value], present for terminals as padding.
	branches: Vec<NodeId>,
}

impl Zdd {
	/// The reject terminal.
	pub const ZERO: NodeId = 0;
	/// The accept terminal.
	pub const ONE: NodeId = 1;

	/// Construct the diagram of `spec` by breadth-first expansion.
	pub fn build<S: FrontierSpec>(spec: &S) -> Self {
		let arity = spec.arity();
		let width = spec.array_size();

		let mut root_state = vec![S::Slot::default(); width].into_boxed_slice();
		let root_level = spec.init(&mut root_state);
		log::info!(
			"building zdd: {} levels, arity {}, state width {}",
			root_level,
			arity,
			width
		);

		let mut dd = Self {
			arity,
			max_level: root_level,
			root: Self::ZERO,
			levels: vec![0, 0],
			branches: vec![Self::ZERO; 2 * arity],
		};
		match root_level {
			0 => return dd,
			-1 => {
				dd.root = Self::ONE;
				return dd;
			}
			_ => {}
		}

		let nlevels = root_level as usize + 1;
		// One unique table and one work list per level. A level's
		// table only grows while higher levels are processed, so it
		// can be dropped as soon as its own turn is over.
		let mut tables: Vec<AHashMap<Box<[S::Slot]>, NodeId>> =
			(0..nlevels).map(|_| AHashMap::new()).collect();
		let mut work: Vec<Vec<(NodeId, Box<[S::Slot]>)>> = (0..nlevels).map(|_| Vec::new()).collect();

		dd.root = dd.push_node(root_level);
		work[root_level as usize].push((dd.root, root_state));

		for level in (1..=root_level).rev() {
			let batch = std::mem::take(&mut work[level as usize]);
			log::debug!("level {}: {} nodes", level, batch.len());
			for (id, state) in batch {
				for value in 0..arity {
					let mut next_state = state.clone();
					let next_level = spec.child(&mut next_state, level, value);
					let child = match next_level {
						0 => Self::ZERO,
						-1 => Self::ONE,
						_ => {
							debug_assert!(next_level > 0 && next_level < level);
							*tables[next_level as usize]
								.entry(next_state)
								.or_insert_with_key(|key| {
									let node = dd.push_node(next_level);
									work[next_level as usize].push((node, key.clone()));
									node
								})
						}
					};
					dd.branches[id * arity + value] = child;
				}
			}
			let table = std::mem::take(&mut tables[level as usize]);
			drop(table);
		}
		log::info!("zdd built: {} nodes", dd.node_count());
		dd
	}

	fn push_node(&mut self, level: i32) -> NodeId {
		let id = self.levels.len();
		self.levels.push(level);
		self.branches.resize(self.branches.len() + self.arity, Self::ZERO);
		id
	}

	/// The root node (may be a terminal).
	pub fn root(&self) -> NodeId {
		self.root
	}

	/// Branch values per node.
	pub fn arity(&self) -> usize {
		self.arity
	}

	/// The level of the diagram's variable range, i.e. the edge count.
	pub fn max_level(&self) -> i32 {
		self.max_level
	}

	/// The level of node `id`; terminals are at level 0.
	pub fn level(&self, id: NodeId) -> i32 {
		self.levels[id]
	}

	/// The `value`-branch of node `id`.
	pub fn child(&self, id: NodeId, value: usize) -> NodeId {
		self.branches[id * self.arity + value]
	}

	/// Number of internal nodes.
	pub fn node_count(&self) -> usize {
		self.levels.len() - 2
	}

	// Internal node ids ordered children-first.
	fn bottom_up(&self) -> Vec<NodeId> {
		let mut order: Vec<NodeId> = (2..self.levels.len()).collect();
		order.sort_by_key(|&id| self.levels[id]);
		order
	}

	/// Count the models: the number of distinct root-to-accept paths,
	/// with skipped levels pinned at value 0.
	pub fn cardinality(&self) -> BigUint {
		let mut counts = vec![BigUint::from(0u32); self.levels.len()];
		counts[Self::ONE] = BigUint::from(1u32);
		for id in self.bottom_up() {
			let mut total = BigUint::from(0u32);
			for value in 0..self.arity {
				total += &counts[self.child(id, value)];
			}
			counts[id] = total;
		}
		counts[self.root].clone()
	}

	/// Apply the zero-suppression rule and share equal nodes. A node
	/// whose non-zero branches all lead to the reject terminal is
	/// replaced by its 0-branch; structurally equal nodes collapse to
	/// one. The model count is unchanged.
	pub fn reduce(&mut self) {
		let arity = self.arity;
		let mut remap: Vec<NodeId> = vec![Self::ZERO; self.levels.len()];
		remap[Self::ONE] = Self::ONE;

		let mut levels = vec![0, 0];
		let mut branches = vec![Self::ZERO; 2 * arity];
		let mut table: AHashMap<(i32, Box<[NodeId]>), NodeId> = AHashMap::new();

		for id in self.bottom_up() {
			let kids: Box<[NodeId]> = (0..arity)
				.map(|value| remap[self.child(id, value)])
				.collect();
			if kids[1..].iter().all(|&k| k == Self::ZERO) {
				remap[id] = kids[0];
				continue;
			}
			let level = self.levels[id];
			remap[id] = *table.entry((level, kids)).or_insert_with_key(|(_, kids)| {
				let node = levels.len();
				levels.push(level);
				branches.extend_from_slice(kids);
				node
			});
		}

		self.root = remap[self.root];
		self.levels = levels;
		self.branches = branches;
	}

	/// Render the diagram in DOT format: internal nodes labelled with
	/// their level, 0-branches dashed, higher branch values labelled.
	pub fn to_dot(&self) -> String {
		let mut s = String::new();
		s.push_str("digraph zdd {\n");
		s.push_str("\tn0 [shape=box, label=\"0\"];\n");
		s.push_str("\tn1 [shape=box, label=\"1\"];\n");
		for id in 2..self.levels.len() {
			s.push_str(&format!("\tn{} [label=\"{}\"];\n", id, self.levels[id]));
		}
		for id in 2..self.levels.len() {
			for value in 0..self.arity {
				let child = self.child(id, value);
				let mut attrs = Vec::new();
				if value == 0 {
					attrs.push("style=dashed".to_string());
				}
				if self.arity > 2 && value >= 1 {
					attrs.push(format!("label=\"{}\"", value));
				}
				if attrs.is_empty() {
					s.push_str(&format!("\tn{} -> n{};\n", id, child));
				} else {
					s.push_str(&format!("\tn{} -> n{} [{}];\n", id, child, attrs.join(", ")));
				}
			}
		}
		s.push_str("}\n");
		s
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::Graph;
	use crate::spec::{MatchingSpec, SingleCycleSpec};

	fn triangle() -> Graph {
		let mut g = Graph::new();
		g.add_edge("a", "b");
		g.add_edge("b", "c");
		g.add_edge("c", "a");
		g
	}

	#[test]
	fn triangle_has_one_cycle() {
		let g = triangle();
		let spec = SingleCycleSpec::new(&g).unwrap();
		let dd = Zdd::build(&spec);
		assert_eq!(dd.cardinality(), BigUint::from(1u32));
	}

	#[test]
	fn triangle_matchings() {
		let g = triangle();
		let spec = MatchingSpec::new(&g, false).unwrap();
		let dd = Zdd::build(&spec);
		// Empty set plus each single edge.
		assert_eq!(dd.cardinality(), BigUint::from(4u32));
	}

	#[test]
	fn reduce_preserves_cardinality() {
		let g = Graph::grid(3);
		let spec = SingleCycleSpec::new(&g).unwrap();
		let mut dd = Zdd::build(&spec);
		let before = dd.cardinality();
		let nodes_before = dd.node_count();
		dd.reduce();
		assert_eq!(dd.cardinality(), before);
		assert!(dd.node_count() <= nodes_before);
	}
}
