//! Greedy column clustering.
//!
//! Consecutive single-qubit tuples on distinct wires share a column.
//! Measurements collect in their own bucket and never share a column with
//! gates. Any multi-qubit tuple, barrier brackets included, closes both
//! buckets and occupies a column alone.

use rustc_hash::FxHashSet;

use crate::tuple::{Column, GateTuple};

/// An open column that tracks which wires it already holds.
#[derive(Default)]
struct Bucket {
    tuples: Column,
    wires: FxHashSet<String>,
}

impl Bucket {
    fn holds(&self, label: &str) -> bool {
        self.wires.contains(label)
    }

    fn push(&mut self, tuple: GateTuple) {
        self.wires.insert(tuple.target().to_string());
        self.tuples.push(tuple);
    }

    fn flush_into(&mut self, columns: &mut Vec<Column>) {
        if !self.tuples.is_empty() {
            self.wires.clear();
            columns.push(std::mem::take(&mut self.tuples));
        }
    }
}

/// Group tuples into columns in a single left-to-right pass.
pub fn cluster(tuples: impl IntoIterator<Item = GateTuple>) -> Vec<Column> {
    let mut columns = Vec::new();
    let mut gates = Bucket::default();
    let mut measures = Bucket::default();

    for tuple in tuples {
        if !tuple.is_single_qubit() {
            gates.flush_into(&mut columns);
            measures.flush_into(&mut columns);
            columns.push(vec![tuple]);
        } else if tuple.is_measurement() {
            if measures.holds(tuple.target()) {
                gates.flush_into(&mut columns);
                measures.flush_into(&mut columns);
            }
            measures.push(tuple);
        } else {
            if gates.holds(tuple.target()) {
                gates.flush_into(&mut columns);
            }
            gates.push(tuple);
        }
    }

    gates.flush_into(&mut columns);
    measures.flush_into(&mut columns);
    columns
}

/// One column per tuple, in order.
pub fn unclustered(tuples: impl IntoIterator<Item = GateTuple>) -> Vec<Column> {
    tuples.into_iter().map(|t| vec![t]).collect()
}

/// Build columns in the requested mode.
pub fn columns(tuples: impl IntoIterator<Item = GateTuple>, cluster_gates: bool) -> Vec<Column> {
    if cluster_gates {
        cluster(tuples)
    } else {
        unclustered(tuples)
    }
}
