// # Enumerating s-t Paths
//
// This demo builds the ZDD of all simple paths between two opposite
// corners of a 3x3 grid and prints every model. Each output line lists
// the edge values in descending edge order; a `1` means the edge is on
// the path.

use fzdd::enumerate::enumerate;
use fzdd::graph::Graph;
use fzdd::spec::StPathSpec;
use fzdd::zdd::Zdd;

fn main() {
	let graph = Graph::grid(3);

	// Corner to corner: vertex 1 is `0:0`, the last vertex is `2:2`.
	let s = graph.vertex_id("0:0").unwrap();
	let t = graph.vertex_id("2:2").unwrap();

	let spec = StPathSpec::new(&graph, false, s, t).unwrap();
	let dd = Zdd::build(&spec);

	println!("{} paths from {} to {}:", dd.cardinality(), s, t);
	let stdout = std::io::stdout();
	enumerate(&dd, &mut stdout.lock()).unwrap();
}
