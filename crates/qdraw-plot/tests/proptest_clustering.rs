//! Property-based tests for clustering, label inference and the grid.

use proptest::prelude::*;
use qdraw_plot::cluster::cluster;
use qdraw_plot::{Column, GateTuple, Grid, Labels};
use std::collections::HashSet;

fn label(i: u32) -> String {
    format!("q_{i}")
}

/// Random tuples over five wires: gates, measurements and two-qubit gates.
fn arb_tuple() -> impl Strategy<Value = GateTuple> {
    prop_oneof![
        (prop::sample::select(vec!["H", "X", "RZ", "ID"]), 0_u32..5)
            .prop_map(|(name, q)| GateTuple::gate(name, label(q))),
        (0_u32..5).prop_map(|q| GateTuple::measure(label(q))),
        (0_u32..5, 0_u32..5)
            .prop_filter("operands must differ", |(a, b)| a != b)
            .prop_map(|(t, c)| GateTuple::controlled("CNOT", label(t), [label(c)])),
    ]
}

fn arb_tuples() -> impl Strategy<Value = Vec<GateTuple>> {
    prop::collection::vec(arb_tuple(), 0..40)
}

proptest! {
    #[test]
    fn test_columns_never_share_a_wire(tuples in arb_tuples()) {
        for column in cluster(tuples) {
            let mut seen = HashSet::new();
            for tuple in &column {
                for l in tuple.labels() {
                    prop_assert!(seen.insert(l.to_string()), "wire {} repeated in {:?}", l, column);
                }
            }
        }
    }

    #[test]
    fn test_measurements_never_mix(tuples in arb_tuples()) {
        for column in cluster(tuples) {
            let measures = column.iter().filter(|t| t.is_measurement()).count();
            prop_assert!(measures == 0 || measures == column.len());
        }
    }

    #[test]
    fn test_multi_qubit_tuples_stand_alone(tuples in arb_tuples()) {
        for column in cluster(tuples) {
            if column.iter().any(|t| !t.is_single_qubit()) {
                prop_assert_eq!(column.len(), 1);
            }
        }
    }

    #[test]
    fn test_clustering_keeps_order_within_kind(tuples in arb_tuples()) {
        let columns = cluster(tuples.clone());
        let flat: Vec<GateTuple> = columns.into_iter().flatten().collect();
        prop_assert_eq!(flat.len(), tuples.len());

        let gates = |v: &[GateTuple]| v.iter().filter(|t| !t.is_measurement()).cloned().collect::<Vec<_>>();
        let measures = |v: &[GateTuple]| v.iter().filter(|t| t.is_measurement()).cloned().collect::<Vec<_>>();
        prop_assert_eq!(gates(&flat), gates(&tuples));
        prop_assert_eq!(measures(&flat), measures(&tuples));
    }

    #[test]
    fn test_clustering_is_deterministic(tuples in arb_tuples()) {
        prop_assert_eq!(cluster(tuples.clone()), cluster(tuples));
    }

    #[test]
    fn test_inferred_labels_follow_first_occurrence(tuples in arb_tuples()) {
        let columns: Vec<Column> = tuples.iter().cloned().map(|t| vec![t]).collect();
        let inferred = Labels::infer(&columns);

        let mut expected: Vec<String> = Vec::new();
        for tuple in &tuples {
            for l in tuple.labels() {
                if !expected.iter().any(|e| e == l) {
                    expected.push(l.to_string());
                }
            }
        }
        prop_assert_eq!(inferred.len(), expected.len());
        prop_assert_eq!(inferred.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_wire_coordinates_strictly_decrease(n in 1_usize..12, scale in 0.1_f64..3.0) {
        let labels = Labels::new((0..n as u32).map(label));
        let grid = Grid::new(n, 1, scale);
        let ys: Vec<f64> = labels
            .as_slice()
            .iter()
            .map(|l| grid.wire_y(&labels, l).expect("label exists"))
            .collect();
        for (i, y) in ys.iter().enumerate() {
            prop_assert!((y - (n - 1 - i) as f64 * scale).abs() < 1e-9);
        }
        prop_assert!(ys.windows(2).all(|w| w[0] > w[1]));
    }
}
