//! Command-line driver: build the ZDD of one subgraph family over an
//! edge-list file and print its model count, the models themselves or
//! the diagram in DOT format.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use fzdd::enumerate::enumerate;
use fzdd::frontier::FrontierSchedule;
use fzdd::graph::Graph;
use fzdd::spec::{
	DegreeRange, DegreeSpecifiedSpec, ForestSpec, HamiltonianCycleSpec, MatchingSpec, MateSpec,
	SingleCycleSpec, StPathSpec, TreeSpec, TwoSingleCyclesSpec,
};
use fzdd::zdd::Zdd;

#[derive(Parser)]
#[command(
	name = "fzdd",
	about = "Count or enumerate constrained edge subsets of a graph via frontier-method ZDD construction"
)]
struct Cli {
	/// Edge list file, one `u v` pair per line.
	file: PathBuf,

	/// Simple paths between the smallest and the largest vertex.
	#[arg(long, group = "family")]
	path: bool,

	/// Hamiltonian paths between the smallest and the largest vertex.
	#[arg(long, group = "family")]
	hampath: bool,

	/// Single cycles.
	#[arg(long, group = "family", visible_alias = "letter_O")]
	cycle: bool,

	/// Single Hamiltonian cycles.
	#[arg(long, group = "family")]
	hamcycle: bool,

	/// Simple paths, mate encoding.
	#[arg(long = "path_m", group = "family")]
	path_m: bool,

	/// Hamiltonian paths, mate encoding.
	#[arg(long = "hampath_m", group = "family")]
	hampath_m: bool,

	/// Single cycles, mate encoding.
	#[arg(long = "cycle_m", group = "family")]
	cycle_m: bool,

	/// Single Hamiltonian cycles, mate encoding.
	#[arg(long = "hamcycle_m", group = "family")]
	hamcycle_m: bool,

	/// Forests (acyclic edge sets).
	#[arg(long, group = "family")]
	forest: bool,

	/// Single trees.
	#[arg(long, group = "family")]
	tree: bool,

	/// Spanning trees.
	#[arg(long, group = "family")]
	stree: bool,

	/// Matchings.
	#[arg(long, group = "family")]
	matching: bool,

	/// Perfect matchings.
	#[arg(long, group = "family")]
	cmatching: bool,

	/// Two edge-disjoint single cycles (one per colour).
	#[arg(long = "two_cycles", group = "family")]
	two_cycles: bool,

	/// Degree preset: vertex 2 of degree exactly 2.
	#[arg(long = "letter_I", group = "family", visible_alias = "letter_L")]
	letter_i: bool,

	/// Degree preset: vertices 2 and 4 of degree exactly 1.
	#[arg(long = "letter_P", group = "family")]
	letter_p: bool,

	/// Report progress while building.
	#[arg(long)]
	show: bool,

	/// Print the diagram in DOT format instead of the count.
	#[arg(long)]
	dot: bool,

	/// Dump the frontier schedule.
	#[arg(long = "show-fs")]
	show_fs: bool,

	/// Print one line per model instead of the count.
	#[arg(long)]
	enumerate: bool,
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(err) => {
			let _ = err.print();
			return ExitCode::FAILURE;
		}
	};
	match run(cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {:#}", err);
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<()> {
	env_logger::Builder::new()
		.filter_level(if cli.show {
			log::LevelFilter::Info
		} else {
			log::LevelFilter::Warn
		})
		.parse_default_env()
		.init();

	let graph = Graph::from_path(&cli.file)?;
	eprintln!("# of vertices = {}", graph.vertex_count());
	eprintln!("# of edges = {}", graph.edge_count());

	if cli.show_fs {
		eprintln!("{}", FrontierSchedule::build(&graph)?);
	}

	// Path problems run between the smallest and the largest vertex.
	let s = 1;
	let t = graph.vertex_count();

	let dd = if cli.path {
		Zdd::build(&StPathSpec::new(&graph, false, s, t)?)
	} else if cli.hampath {
		Zdd::build(&StPathSpec::new(&graph, true, s, t)?)
	} else if cli.cycle {
		Zdd::build(&SingleCycleSpec::new(&graph)?)
	} else if cli.hamcycle {
		Zdd::build(&HamiltonianCycleSpec::new(&graph)?)
	} else if cli.path_m {
		Zdd::build(&MateSpec::paths(&graph, false, s, t)?)
	} else if cli.hampath_m {
		Zdd::build(&MateSpec::paths(&graph, true, s, t)?)
	} else if cli.cycle_m {
		Zdd::build(&MateSpec::cycles(&graph, false)?)
	} else if cli.hamcycle_m {
		Zdd::build(&MateSpec::cycles(&graph, true)?)
	} else if cli.forest {
		Zdd::build(&ForestSpec::new(&graph)?)
	} else if cli.tree {
		Zdd::build(&TreeSpec::new(&graph, false)?)
	} else if cli.stree {
		Zdd::build(&TreeSpec::new(&graph, true)?)
	} else if cli.matching {
		Zdd::build(&MatchingSpec::new(&graph, false)?)
	} else if cli.cmatching {
		Zdd::build(&MatchingSpec::new(&graph, true)?)
	} else if cli.two_cycles {
		Zdd::build(&TwoSingleCyclesSpec::new(&graph)?)
	} else if cli.letter_i {
		let ranges = vec![
			DegreeRange::any(),
			DegreeRange::exactly(2),
			DegreeRange::any(),
		];
		Zdd::build(&DegreeSpecifiedSpec::new(&graph, ranges)?)
	} else if cli.letter_p {
		let ranges = vec![
			DegreeRange::any(),
			DegreeRange::exactly(1),
			DegreeRange::any(),
			DegreeRange::exactly(1),
		];
		Zdd::build(&DegreeSpecifiedSpec::new(&graph, ranges)?)
	} else {
		anyhow::bail!("please specify a kind of subgraphs");
	};

	eprintln!("# of ZDD nodes = {}", dd.node_count());

	if cli.enumerate {
		let stdout = std::io::stdout();
		enumerate(&dd, &mut stdout.lock())?;
	} else if cli.dot {
		print!("{}", dd.to_dot());
	} else {
		println!("{}", dd.cardinality());
	}
	Ok(())
}
