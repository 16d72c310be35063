//! Shared graph builders and brute-force subgraph property checks.
//!
//! The checkers deliberately take the slow, obvious road: compute
//! degrees, build adjacency, walk components. They are the ground truth
//! the frontier specifications are measured against on small graphs.

#![allow(dead_code)]

use fzdd::graph::{Graph, Vertex};

pub fn path_graph(n: usize) -> Graph {
	let mut g = Graph::new();
	for i in 1..n {
		g.add_edge(&i.to_string(), &(i + 1).to_string());
	}
	g
}

pub fn complete_graph(n: usize) -> Graph {
	let mut g = Graph::new();
	for i in 1..=n {
		for j in i + 1..=n {
			g.add_edge(&i.to_string(), &j.to_string());
		}
	}
	g
}

/// Two triangles sharing the vertex `a`.
pub fn bowtie() -> Graph {
	let mut g = Graph::new();
	g.add_edge("a", "b");
	g.add_edge("b", "c");
	g.add_edge("c", "a");
	g.add_edge("a", "d");
	g.add_edge("d", "e");
	g.add_edge("e", "a");
	g
}

pub fn two_triangles() -> Graph {
	let mut g = Graph::new();
	g.add_edge("a", "b");
	g.add_edge("b", "c");
	g.add_edge("c", "a");
	g.add_edge("x", "y");
	g.add_edge("y", "z");
	g.add_edge("z", "x");
	g
}

/// Binary edge values for subset `mask` of the `m` edges.
pub fn subset(m: usize, mask: usize) -> Vec<usize> {
	(0..m).map(|i| mask >> i & 1).collect()
}

/// Base-3 edge values for colouring `mask` of the `m` edges.
pub fn colouring(m: usize, mut mask: usize) -> Vec<usize> {
	(0..m)
		.map(|_| {
			let v = mask % 3;
			mask /= 3;
			v
		})
		.collect()
}

/// Degree of every vertex among the edges at value 1 (or at `colour`).
pub fn degrees(g: &Graph, values: &[usize], colour: usize) -> Vec<usize> {
	let mut deg = vec![0; g.vertex_count() + 1];
	for (e, &v) in g.edges().zip(values) {
		if v == colour {
			deg[e.v1] += 1;
			deg[e.v2] += 1;
		}
	}
	deg
}

/// Vertices of nonzero degree.
pub fn support(g: &Graph, values: &[usize], colour: usize) -> Vec<Vertex> {
	let deg = degrees(g, values, colour);
	(1..=g.vertex_count()).filter(|&v| deg[v] > 0).collect()
}

/// Whether the chosen edges connect their whole support.
pub fn support_connected(g: &Graph, values: &[usize], colour: usize) -> bool {
	let support = support(g, values, colour);
	let Some(&start) = support.first() else {
		return false;
	};
	let n = g.vertex_count();
	let mut adj = vec![Vec::new(); n + 1];
	for (e, &v) in g.edges().zip(values) {
		if v == colour {
			adj[e.v1].push(e.v2);
			adj[e.v2].push(e.v1);
		}
	}
	let mut seen = vec![false; n + 1];
	let mut stack = vec![start];
	seen[start] = true;
	while let Some(v) = stack.pop() {
		for &w in &adj[v] {
			if !seen[w] {
				seen[w] = true;
				stack.push(w);
			}
		}
	}
	support.iter().all(|&v| seen[v])
}

/// Whether the chosen edges are acyclic, by incremental union-find.
pub fn acyclic(g: &Graph, values: &[usize]) -> bool {
	let n = g.vertex_count();
	let mut parent: Vec<usize> = (0..=n).collect();
	fn find(parent: &mut [usize], v: usize) -> usize {
		if parent[v] != v {
			parent[v] = find(parent, parent[v]);
		}
		parent[v]
	}
	for (e, &v) in g.edges().zip(values) {
		if v == 1 {
			let r1 = find(&mut parent, e.v1);
			let r2 = find(&mut parent, e.v2);
			if r1 == r2 {
				return false;
			}
			parent[r1] = r2;
		}
	}
	true
}

pub fn is_single_cycle(g: &Graph, values: &[usize], colour: usize) -> bool {
	let deg = degrees(g, values, colour);
	values.iter().any(|&v| v == colour)
		&& (1..=g.vertex_count()).all(|v| deg[v] == 0 || deg[v] == 2)
		&& support_connected(g, values, colour)
}

pub fn is_hamiltonian_cycle(g: &Graph, values: &[usize]) -> bool {
	is_single_cycle(g, values, 1) && support(g, values, 1).len() == g.vertex_count()
}

pub fn is_st_path(g: &Graph, values: &[usize], s: Vertex, t: Vertex) -> bool {
	let deg = degrees(g, values, 1);
	deg[s] == 1
		&& deg[t] == 1
		&& (1..=g.vertex_count())
			.filter(|&v| v != s && v != t)
			.all(|v| deg[v] == 0 || deg[v] == 2)
		&& support_connected(g, values, 1)
}

pub fn is_hamiltonian_st_path(g: &Graph, values: &[usize], s: Vertex, t: Vertex) -> bool {
	is_st_path(g, values, s, t) && support(g, values, 1).len() == g.vertex_count()
}

pub fn is_forest(g: &Graph, values: &[usize]) -> bool {
	acyclic(g, values)
}

pub fn is_tree(g: &Graph, values: &[usize]) -> bool {
	values.contains(&1) && acyclic(g, values) && support_connected(g, values, 1)
}

pub fn is_spanning_tree(g: &Graph, values: &[usize]) -> bool {
	is_tree(g, values) && support(g, values, 1).len() == g.vertex_count()
}

pub fn is_matching(g: &Graph, values: &[usize]) -> bool {
	let deg = degrees(g, values, 1);
	(1..=g.vertex_count()).all(|v| deg[v] <= 1)
}

pub fn is_perfect_matching(g: &Graph, values: &[usize]) -> bool {
	let deg = degrees(g, values, 1);
	(1..=g.vertex_count()).all(|v| deg[v] == 1)
}

pub fn is_two_single_cycles(g: &Graph, values: &[usize]) -> bool {
	(1..=2).all(|colour| is_single_cycle(g, values, colour))
}
