//! End-to-end scenarios: known model counts, agreement between the
//! counter and the enumerator, and invariance under edge reordering.

mod common;

use common::*;
use fzdd::enumerate::enumerate;
use fzdd::graph::Graph;
use fzdd::spec::{
	FrontierSpec, HamiltonianCycleSpec, MatchingSpec, MateSpec, SingleCycleSpec, StPathSpec,
	TreeSpec, TwoSingleCyclesSpec,
};
use fzdd::zdd::Zdd;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn count<S: FrontierSpec>(spec: &S) -> String {
	Zdd::build(spec).cardinality().to_string()
}

fn lines(dd: &Zdd) -> Vec<String> {
	let mut buf = Vec::new();
	enumerate(dd, &mut buf).unwrap();
	let text = String::from_utf8(buf).unwrap();
	text.lines().map(str::to_string).collect()
}

/// Values in edge order, parsed from one enumerator line (which lists
/// them in descending edge order).
fn parse_line(line: &str) -> Vec<usize> {
	let mut values: Vec<usize> = line
		.split_whitespace()
		.map(|token| token.parse().unwrap())
		.collect();
	values.reverse();
	values
}

// Single cycles in square grids, https://oeis.org/A140517.
#[test]
fn ut_grid_single_cycle_counts() {
	let expected = ["1", "13", "213", "9349"];
	for (k, expected) in (2..=5).zip(expected) {
		let g = Graph::grid(k);
		let spec = SingleCycleSpec::new(&g).unwrap();
		assert_eq!(count(&spec), expected, "grid {}x{}", k, k);
	}
}

#[test]
fn ut_k4_hamiltonian_cycles() {
	let g = complete_graph(4);
	let spec = HamiltonianCycleSpec::new(&g).unwrap();
	assert_eq!(count(&spec), "3");
	let mate = MateSpec::cycles(&g, true).unwrap();
	assert_eq!(count(&mate), "3");
}

#[test]
fn ut_path_graph_has_one_st_path() {
	let g = path_graph(4);
	let spec = StPathSpec::new(&g, false, 1, 4).unwrap();
	assert_eq!(count(&spec), "1");
	let mate = MateSpec::paths(&g, false, 1, 4).unwrap();
	assert_eq!(count(&mate), "1");
}

#[test]
fn ut_k4_perfect_matchings() {
	let g = complete_graph(4);
	let spec = MatchingSpec::new(&g, true).unwrap();
	assert_eq!(count(&spec), "3");
}

// Cayley: n^(n-2) spanning trees of the complete graph.
#[test]
fn ut_complete_graph_spanning_trees() {
	let g = complete_graph(4);
	let spec = TreeSpec::new(&g, true).unwrap();
	assert_eq!(count(&spec), "16");
	let g = complete_graph(5);
	let spec = TreeSpec::new(&g, true).unwrap();
	assert_eq!(count(&spec), "125");
}

#[test]
fn ut_mate_and_deg_comp_encodings_agree() {
	for g in [complete_graph(4), Graph::grid(3), bowtie()] {
		let (s, t) = (1, g.vertex_count());
		assert_eq!(
			count(&SingleCycleSpec::new(&g).unwrap()),
			count(&MateSpec::cycles(&g, false).unwrap())
		);
		assert_eq!(
			count(&HamiltonianCycleSpec::new(&g).unwrap()),
			count(&MateSpec::cycles(&g, true).unwrap())
		);
		assert_eq!(
			count(&StPathSpec::new(&g, false, s, t).unwrap()),
			count(&MateSpec::paths(&g, false, s, t).unwrap())
		);
		assert_eq!(
			count(&StPathSpec::new(&g, true, s, t).unwrap()),
			count(&MateSpec::paths(&g, true, s, t).unwrap())
		);
	}
}

#[test]
fn ut_enumeration_matches_cardinality() {
	let g = Graph::grid(3);
	let spec = SingleCycleSpec::new(&g).unwrap();
	let mut dd = Zdd::build(&spec);
	assert_eq!(lines(&dd).len().to_string(), dd.cardinality().to_string());
	let before = lines(&dd);
	dd.reduce();
	assert_eq!(lines(&dd), before);

	let bowtie = bowtie();
	let spec = TwoSingleCyclesSpec::new(&bowtie).unwrap();
	let dd = Zdd::build(&spec);
	assert_eq!(lines(&dd).len().to_string(), dd.cardinality().to_string());
}

#[test]
fn ut_enumerated_sets_satisfy_their_property() {
	let g = Graph::grid(3);

	let spec = SingleCycleSpec::new(&g).unwrap();
	let dd = Zdd::build(&spec);
	let all = lines(&dd);
	assert_eq!(all.len(), 13);
	for line in all {
		let values = parse_line(&line);
		assert_eq!(values.len(), g.edge_count());
		assert!(is_single_cycle(&g, &values, 1), "not a cycle: {}", line);
	}

	let spec = TreeSpec::new(&g, true).unwrap();
	let dd = Zdd::build(&spec);
	for line in lines(&dd) {
		let values = parse_line(&line);
		assert!(is_spanning_tree(&g, &values), "not spanning: {}", line);
	}

	let bowtie = bowtie();
	let spec = TwoSingleCyclesSpec::new(&bowtie).unwrap();
	let dd = Zdd::build(&spec);
	let all = lines(&dd);
	assert_eq!(all.len(), 2);
	for line in all {
		let values = parse_line(&line);
		assert!(is_two_single_cycles(&bowtie, &values));
	}
}

/// Rebuild a graph with its edge list shuffled; model counts of the
/// families not tied to named vertices must not move.
#[test]
fn ut_counts_survive_edge_reordering() {
	let mut rng = StdRng::seed_from_u64(42);
	for g in [complete_graph(4), Graph::grid(3), two_triangles()] {
		let mut edges: Vec<(String, String)> = g
			.edges()
			.map(|e| {
				(
					g.vertex_name(e.v1).to_string(),
					g.vertex_name(e.v2).to_string(),
				)
			})
			.collect();
		let cycles = count(&SingleCycleSpec::new(&g).unwrap());
		let trees = count(&TreeSpec::new(&g, true).unwrap());
		let matchings = count(&MatchingSpec::new(&g, false).unwrap());
		for _ in 0..5 {
			edges.shuffle(&mut rng);
			let mut shuffled = Graph::new();
			for (u, v) in &edges {
				shuffled.add_edge(u, v);
			}
			assert_eq!(count(&SingleCycleSpec::new(&shuffled).unwrap()), cycles);
			assert_eq!(count(&TreeSpec::new(&shuffled, true).unwrap()), trees);
			assert_eq!(count(&MatchingSpec::new(&shuffled, false).unwrap()), matchings);
		}
	}
}

#[test]
fn ut_dot_output_lists_every_node() {
	let g = complete_graph(4);
	let spec = MatchingSpec::new(&g, true).unwrap();
	let mut dd = Zdd::build(&spec);
	dd.reduce();
	let dot = dd.to_dot();
	assert!(dot.starts_with("digraph zdd {"));
	assert!(dot.contains("shape=box"));
	assert_eq!(
		dot.matches("\tn").count(),
		// One line per node plus one per branch.
		2 + dd.node_count() + dd.node_count() * dd.arity()
	);
}
