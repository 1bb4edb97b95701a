//! Display-oriented gate records produced by the flattener.

use qdraw_ir::QubitId;
use serde::Serialize;

/// Display name carried by measurement tuples.
pub const MEASURE: &str = "MEASURE";

/// Bounding-box descriptor for a fused group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FusedBarrier {
    /// Label of the smallest qubit touched by the group.
    pub low: String,
    /// Label of the largest qubit touched by the group.
    pub high: String,
    /// Number of columns the inner tuples occupy.
    pub columns: usize,
    /// The group is confined to a single qubit.
    pub equal_qubits: bool,
}

/// One flattened operation, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GateTuple {
    /// A gate drawn at `target`, with extra operand wires in `controls`.
    Gate {
        /// Normalized upper-case name.
        name: String,
        /// First target label.
        target: String,
        /// Remaining targets, then controls.
        controls: Vec<String>,
    },
    /// A single-qubit measurement.
    Measure {
        /// Measured label.
        target: String,
    },
    /// Opening bracket of a fused group.
    FusedStart(FusedBarrier),
    /// Closing bracket of a fused group.
    FusedEnd(FusedBarrier),
}

/// A time step: tuples drawn at the same horizontal position.
pub type Column = Vec<GateTuple>;

/// Wire label for a qubit, `q_<index>`.
pub fn qubit_label(qubit: QubitId) -> String {
    format!("q_{}", qubit.0)
}

impl GateTuple {
    /// Create an uncontrolled gate tuple.
    pub fn gate(name: impl Into<String>, target: impl Into<String>) -> Self {
        GateTuple::Gate {
            name: name.into(),
            target: target.into(),
            controls: vec![],
        }
    }

    /// Create a gate tuple with extra operand wires.
    pub fn controlled(
        name: impl Into<String>,
        target: impl Into<String>,
        controls: impl IntoIterator<Item = String>,
    ) -> Self {
        GateTuple::Gate {
            name: name.into(),
            target: target.into(),
            controls: controls.into_iter().collect(),
        }
    }

    /// Create a measurement tuple.
    pub fn measure(target: impl Into<String>) -> Self {
        GateTuple::Measure {
            target: target.into(),
        }
    }

    /// Display name of the tuple.
    pub fn name(&self) -> &str {
        match self {
            GateTuple::Gate { name, .. } => name,
            GateTuple::Measure { .. } => MEASURE,
            GateTuple::FusedStart(_) => "FUSED_START",
            GateTuple::FusedEnd(_) => "FUSED_END",
        }
    }

    /// Label of the wire the glyph sits on. Barriers report their low qubit.
    pub fn target(&self) -> &str {
        match self {
            GateTuple::Gate { target, .. } | GateTuple::Measure { target } => target,
            GateTuple::FusedStart(b) | GateTuple::FusedEnd(b) => &b.low,
        }
    }

    /// Labels after the target. Barriers report their high qubit.
    pub fn controls(&self) -> &[String] {
        match self {
            GateTuple::Gate { controls, .. } => controls,
            GateTuple::Measure { .. } => &[],
            GateTuple::FusedStart(b) | GateTuple::FusedEnd(b) => std::slice::from_ref(&b.high),
        }
    }

    /// Every label the tuple references: target first, then controls.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.target()).chain(self.controls().iter().map(String::as_str))
    }

    /// True for tuples occupying exactly one wire. Barriers never count.
    pub fn is_single_qubit(&self) -> bool {
        match self {
            GateTuple::Gate { controls, .. } => controls.is_empty(),
            GateTuple::Measure { .. } => true,
            GateTuple::FusedStart(_) | GateTuple::FusedEnd(_) => false,
        }
    }

    /// Check if this is a measurement.
    pub fn is_measurement(&self) -> bool {
        matches!(self, GateTuple::Measure { .. })
    }
}
