//! Wire labels and the coordinate grid.

use rustc_hash::FxHashMap;

use crate::error::{DrawError, DrawResult};
use crate::tuple::Column;

/// Ordered wire labels with constant-time index lookup.
#[derive(Debug, Clone)]
pub struct Labels {
    labels: Vec<String>,
    index: FxHashMap<String, usize>,
}

impl Labels {
    /// Create from an ordered list. Later duplicates are ignored.
    pub fn new(labels: impl IntoIterator<Item = String>) -> Self {
        let mut ordered = Vec::new();
        let mut index = FxHashMap::default();
        for label in labels {
            if !index.contains_key(&label) {
                index.insert(label.clone(), ordered.len());
                ordered.push(label);
            }
        }
        Self {
            labels: ordered,
            index,
        }
    }

    /// Labels in first-seen order across all tuples, target before controls.
    pub fn infer(columns: &[Column]) -> Self {
        Self::new(
            columns
                .iter()
                .flatten()
                .flat_map(|t| t.labels())
                .map(str::to_string),
        )
    }

    /// Number of wires.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Check whether there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in list order.
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    /// Position of a label in the list.
    pub fn position(&self, label: &str) -> DrawResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| DrawError::LabelNotFound {
                label: label.to_string(),
            })
    }

    /// Wire index counted from the bottom: the first label is the top wire.
    pub fn flipped_index(&self, label: &str) -> DrawResult<usize> {
        Ok(self.len() - 1 - self.position(label)?)
    }
}

/// Coordinates of every wire and every column.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// `wires[k] = k * scale`, indexed by flipped wire index.
    pub wires: Vec<f64>,
    /// `columns[j] = j * scale`.
    pub columns: Vec<f64>,
    /// Spacing between neighbours on either axis.
    pub scale: f64,
}

impl Grid {
    /// Build a grid for `num_wires` wires and `num_columns` columns.
    pub fn new(num_wires: usize, num_columns: usize, scale: f64) -> Self {
        Self {
            wires: (0..num_wires).map(|k| k as f64 * scale).collect(),
            columns: (0..num_columns).map(|j| j as f64 * scale).collect(),
            scale,
        }
    }

    /// Vertical coordinate of a label: `(n - 1 - i) * scale`.
    pub fn wire_y(&self, labels: &Labels, label: &str) -> DrawResult<f64> {
        Ok(self.wires[labels.flipped_index(label)?])
    }

    /// Horizontal coordinate of a column.
    pub fn column_x(&self, column: usize) -> f64 {
        column as f64 * self.scale
    }

    /// Leftmost column coordinate.
    pub fn first_column(&self) -> f64 {
        self.columns.first().copied().unwrap_or(0.0)
    }

    /// Rightmost column coordinate.
    pub fn last_column(&self) -> f64 {
        self.columns.last().copied().unwrap_or(0.0)
    }

    /// Figure size: `(columns * scale, wires * scale)`.
    pub fn figure_size(&self) -> (f64, f64) {
        (
            self.columns.len() as f64 * self.scale,
            self.wires.len() as f64 * self.scale,
        )
    }

    /// Axis limits padded by half a scale unit.
    pub fn limits(&self) -> ((f64, f64), (f64, f64)) {
        let offset = 0.5 * self.scale;
        let bottom = self.wires.first().copied().unwrap_or(0.0);
        let top = self.wires.last().copied().unwrap_or(0.0);
        (
            (self.first_column() - offset, self.last_column() + offset),
            (bottom - offset, top + offset),
        )
    }
}

/// Earliest measurement column per flipped wire index.
#[derive(Debug, Clone, Default)]
pub struct MeasuredWires {
    first: FxHashMap<usize, usize>,
}

impl MeasuredWires {
    /// Scan the columns for measurement tuples.
    pub fn scan(columns: &[Column], labels: &Labels) -> DrawResult<Self> {
        let mut first = FxHashMap::default();
        for (i, column) in columns.iter().enumerate() {
            for tuple in column.iter().filter(|t| t.is_measurement()) {
                let wire = labels.flipped_index(tuple.target())?;
                first.entry(wire).or_insert(i);
            }
        }
        Ok(Self { first })
    }

    /// True if `wire` was measured strictly before `column`.
    pub fn measured_before(&self, wire: usize, column: usize) -> bool {
        self.first.get(&wire).is_some_and(|&j| j < column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::GateTuple;

    fn labels(n: usize) -> Labels {
        Labels::new((0..n).map(|i| format!("q_{i}")))
    }

    #[test]
    fn test_wire_coordinates_are_reversed() {
        let labels = labels(3);
        let grid = Grid::new(3, 2, 0.6);
        let ys: Vec<f64> = labels
            .as_slice()
            .iter()
            .map(|l| grid.wire_y(&labels, l).unwrap())
            .collect();
        assert_eq!(ys, vec![2.0 * 0.6, 0.6, 0.0]);
    }

    #[test]
    fn test_missing_label_is_an_error() {
        let labels = labels(2);
        let err = labels.flipped_index("q_7").unwrap_err();
        assert!(matches!(err, DrawError::LabelNotFound { label } if label == "q_7"));
    }

    #[test]
    fn test_infer_first_seen_order() {
        let columns = vec![
            vec![GateTuple::gate("H", "q_3")],
            vec![GateTuple::controlled("CNOT", "q_1", ["q_3".to_string()])],
            vec![GateTuple::measure("q_0"), GateTuple::measure("q_1")],
        ];
        let inferred = Labels::infer(&columns);
        assert_eq!(inferred.as_slice(), ["q_3", "q_1", "q_0"]);
    }

    #[test]
    fn test_limits_and_size() {
        let grid = Grid::new(2, 4, 1.0);
        assert_eq!(grid.figure_size(), (4.0, 2.0));
        assert_eq!(grid.limits(), ((-0.5, 3.5), (-0.5, 1.5)));
    }

    #[test]
    fn test_measured_wires_keep_earliest_column() {
        let labels = labels(2);
        let columns = vec![
            vec![GateTuple::measure("q_0")],
            vec![GateTuple::gate("H", "q_1")],
            vec![GateTuple::measure("q_0")],
        ];
        let measured = MeasuredWires::scan(&columns, &labels).unwrap();
        assert!(measured.measured_before(1, 1));
        assert!(!measured.measured_before(1, 0));
        assert!(!measured.measured_before(0, 5));
    }
}
