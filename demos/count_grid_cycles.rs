// # Counting Grid Cycles
//
// This demo reproduces the classic frontier-method benchmark: counting
// the simple cycles of the k-by-k grid graph. The counts grow fast
// (https://oeis.org/A140517), which is exactly why the diagram-based
// counter matters: the ZDD stays small even when the model count does
// not fit in a machine word.

use fzdd::graph::Graph;
use fzdd::spec::SingleCycleSpec;
use fzdd::zdd::Zdd;

fn main() {
	// The first few entries of A140517, for the self-check below.
	let known = ["1", "13", "213", "9349", "1222363"];

	for (k, expected) in (2..=6).zip(known) {
		// Build the grid and the single-cycle specification over it.
		// The spec computes its own frontier schedule; all the engine
		// sees is the state-transition contract.
		let graph = Graph::grid(k);
		let spec = SingleCycleSpec::new(&graph).unwrap();

		// Breadth-first construction, then a bottom-up count of the
		// root-to-accept paths with arbitrary precision.
		let dd = Zdd::build(&spec);
		let cycles = dd.cardinality();

		println!(
			"{}x{} grid: {} nodes, {} cycles",
			k,
			k,
			dd.node_count(),
			cycles
		);
		assert_eq!(cycles.to_string(), expected);
	}
}
