//! # Subgraph Enumerator
//!
//! Walks a constructed diagram and prints every model as one line of
//! branch values in descending edge order `m-1..0`. Edges skipped by a
//! level jump or cut short by an early accept are at value 0 and are
//! printed as such.

use std::io::{self, Write};

use crate::zdd::{NodeId, Zdd};

/// Print all models of `dd` to `out`, one line per model, values
/// space-separated in descending edge order.
pub fn enumerate<W: Write>(dd: &Zdd, out: &mut W) -> io::Result<()> {
	let mut taken = Vec::new();
	walk(dd, dd.root(), &mut taken, out)
}

fn walk<W: Write>(
	dd: &Zdd,
	node: NodeId,
	taken: &mut Vec<(usize, usize)>,
	out: &mut W,
) -> io::Result<()> {
	if node == Zdd::ZERO {
		return Ok(());
	}
	if node == Zdd::ONE {
		return emit(dd.max_level() as usize, taken, out);
	}
	let edge_index = (dd.max_level() - dd.level(node)) as usize;
	for value in 0..dd.arity() {
		if value >= 1 {
			taken.push((edge_index, value));
		}
		walk(dd, dd.child(node, value), taken, out)?;
		if value >= 1 {
			taken.pop();
		}
	}
	Ok(())
}

fn emit<W: Write>(m: usize, taken: &[(usize, usize)], out: &mut W) -> io::Result<()> {
	for i in (0..m).rev() {
		let value = taken
			.iter()
			.find(|&&(edge, _)| edge == i)
			.map_or(0, |&(_, value)| value);
		if i + 1 < m {
			out.write_all(b" ")?;
		}
		write!(out, "{}", value)?;
	}
	out.write_all(b"\n")
}
