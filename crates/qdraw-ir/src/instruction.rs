//! Circuit instructions combining operations with operands.

use serde::{Deserialize, Serialize};

use crate::channel::ChannelKind;
use crate::gate::{Gate, GateKind, StandardGate};
use crate::qubit::QubitId;

/// The kind of instruction in a circuit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InstructionKind {
    /// A unitary gate, possibly controlled.
    Gate(Gate),
    /// Measurement of every target qubit.
    Measure,
    /// Noise channel on every target qubit.
    Channel(ChannelKind),
    /// Entanglement-entropy marker. Spans the whole register.
    EntanglementEntropy,
    /// Alignment marker holding a qubit idle for `delay` time units.
    Align {
        /// Idle duration in device-specific units.
        delay: u64,
    },
    /// A group of instructions drawn as one bracketed block.
    Fused(Vec<Instruction>),
}

/// A complete instruction with operands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// The kind of instruction.
    pub kind: InstructionKind,
    /// Qubits the operation acts on.
    #[serde(default)]
    pub targets: Vec<QubitId>,
    /// Control qubits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<QubitId>,
}

impl Instruction {
    /// Create a gate instruction.
    ///
    /// `qubits` lists controls first, then targets. For standard gates the
    /// split point is [`StandardGate::num_controls`]; custom gates are
    /// treated as uncontrolled.
    pub fn gate(gate: impl Into<Gate>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        let gate = gate.into();
        let mut targets: Vec<QubitId> = qubits.into_iter().collect();
        let num_controls = match &gate.kind {
            GateKind::Standard(g) => (g.num_controls() as usize).min(targets.len()),
            GateKind::Custom(_) => 0,
        };
        let controls = targets.drain(..num_controls).collect();
        Self {
            kind: InstructionKind::Gate(gate),
            targets,
            controls,
        }
    }

    /// Create a gate instruction with explicit controls and targets.
    pub fn controlled(
        gate: impl Into<Gate>,
        controls: impl IntoIterator<Item = QubitId>,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> Self {
        Self {
            kind: InstructionKind::Gate(gate.into()),
            targets: targets.into_iter().collect(),
            controls: controls.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate instruction.
    pub fn single_qubit_gate(gate: StandardGate, qubit: QubitId) -> Self {
        Self::gate(gate, [qubit])
    }

    /// Create a two-qubit gate instruction.
    pub fn two_qubit_gate(gate: StandardGate, q1: QubitId, q2: QubitId) -> Self {
        Self::gate(gate, [q1, q2])
    }

    /// Create a measurement instruction on one or more qubits.
    pub fn measure(qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Measure,
            targets: qubits.into_iter().collect(),
            controls: vec![],
        }
    }

    /// Create a noise channel instruction.
    pub fn channel(kind: ChannelKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            kind: InstructionKind::Channel(kind),
            targets: qubits.into_iter().collect(),
            controls: vec![],
        }
    }

    /// Create an entanglement-entropy marker.
    pub fn entanglement_entropy() -> Self {
        Self {
            kind: InstructionKind::EntanglementEntropy,
            targets: vec![],
            controls: vec![],
        }
    }

    /// Create an alignment marker.
    pub fn align(qubit: QubitId, delay: u64) -> Self {
        Self {
            kind: InstructionKind::Align { delay },
            targets: vec![qubit],
            controls: vec![],
        }
    }

    /// Create a fused group.
    ///
    /// The operands of a fused group are derived from its members.
    pub fn fused(instructions: impl IntoIterator<Item = Instruction>) -> Self {
        Self {
            kind: InstructionKind::Fused(instructions.into_iter().collect()),
            targets: vec![],
            controls: vec![],
        }
    }

    /// All qubits the instruction touches: targets then controls.
    ///
    /// For fused groups this walks the members in order.
    pub fn qubits(&self) -> Vec<QubitId> {
        match &self.kind {
            InstructionKind::Fused(members) => members.iter().flat_map(Self::qubits).collect(),
            _ => self
                .targets
                .iter()
                .chain(self.controls.iter())
                .copied()
                .collect(),
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.name(),
            InstructionKind::Measure => "measure",
            InstructionKind::Channel(kind) => kind.name(),
            InstructionKind::EntanglementEntropy => "EntanglementEntropy",
            InstructionKind::Align { .. } => "align",
            InstructionKind::Fused(_) => "fused",
        }
    }

    /// Label drawn on the target of a controlled instruction.
    pub fn draw_label(&self) -> &str {
        match &self.kind {
            InstructionKind::Gate(g) => g.draw_label(),
            _ => self.name(),
        }
    }
}
