//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or loading a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is outside the circuit register.
    #[error("Qubit {qubit} not found in {num_qubits}-qubit circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Size of the register.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Instruction does not act on any qubit.
    #[error("Instruction '{0}' has no target qubits")]
    NoTargets(String),

    /// A fused group without inner instructions.
    #[error("Fused group must contain at least one instruction")]
    EmptyFusedGroup,

    /// A fused group inside another fused group.
    #[error("Fused groups cannot be nested")]
    NestedFusedGroup,

    /// Two circuits with different register sizes were combined.
    #[error("Cannot combine circuits with {left} and {right} qubits")]
    QubitCountDiffers {
        /// Qubits in the left-hand circuit.
        left: u32,
        /// Qubits in the right-hand circuit.
        right: u32,
    },

    /// Circuit JSON could not be parsed.
    #[error("Invalid circuit JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
