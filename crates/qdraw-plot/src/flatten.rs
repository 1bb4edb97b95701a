//! Gate flattening: circuit instructions to display tuples.
//!
//! The flattener walks the instruction queue in order. Identity gates,
//! measurements and noise channels fan out into one tuple per target;
//! the entanglement-entropy marker fans out over the whole register. Fused
//! groups are bracketed by [`GateTuple::FusedStart`] and
//! [`GateTuple::FusedEnd`].

use qdraw_ir::{GateKind, Instruction, InstructionKind, QubitId, StandardGate};
use tracing::{debug, warn};

use crate::cluster;
use crate::tuple::{FusedBarrier, GateTuple, qubit_label};

/// Display name for the entanglement-entropy marker.
const ENTANGLEMENT_ENTROPY: &str = "ENTANGLEMENTENTROPY";

/// Flattens circuit instructions into gate tuples.
#[derive(Debug, Clone, Copy)]
pub struct Flattener {
    /// Register size, used by the entanglement-entropy fan-out.
    num_qubits: usize,
    /// Whether fused-group widths count clustered columns.
    cluster_gates: bool,
}

impl Flattener {
    /// Create a flattener for a register of `num_qubits` qubits.
    pub fn new(num_qubits: usize, cluster_gates: bool) -> Self {
        Self {
            num_qubits,
            cluster_gates,
        }
    }

    /// Flatten the instructions, preserving their order.
    pub fn flatten(&self, instructions: &[Instruction]) -> Vec<GateTuple> {
        let mut tuples = Vec::with_capacity(instructions.len());
        for instruction in instructions {
            self.flatten_one(instruction, &mut tuples);
        }
        debug!(
            "Flattened {} instructions into {} tuples",
            instructions.len(),
            tuples.len()
        );
        tuples
    }

    fn flatten_one(&self, instruction: &Instruction, out: &mut Vec<GateTuple>) {
        match &instruction.kind {
            InstructionKind::Measure => {
                out.extend(
                    instruction
                        .targets
                        .iter()
                        .map(|&q| GateTuple::measure(qubit_label(q))),
                );
            }
            InstructionKind::Channel(kind) => {
                broadcast(&kind.name().to_uppercase(), &instruction.targets, out);
            }
            InstructionKind::EntanglementEntropy => {
                out.extend(
                    (0..self.num_qubits)
                        .map(|q| GateTuple::gate(ENTANGLEMENT_ENTROPY, format!("q_{q}"))),
                );
            }
            InstructionKind::Align { .. } => combined("ALIGN".into(), instruction, out),
            InstructionKind::Gate(gate) => {
                if matches!(gate.kind, GateKind::Standard(StandardGate::I)) {
                    broadcast("ID", &instruction.targets, out);
                } else {
                    combined(normalize_name(instruction), instruction, out);
                }
            }
            InstructionKind::Fused(members) => self.flatten_fused(members, out),
        }
    }

    fn flatten_fused(&self, members: &[Instruction], out: &mut Vec<GateTuple>) {
        let qubits: Vec<QubitId> = members.iter().flat_map(|m| self.operands(m)).collect();
        let (Some(&low), Some(&high)) = (qubits.iter().min(), qubits.iter().max()) else {
            warn!("Skipping fused group without operands");
            return;
        };

        let mut inner = Vec::new();
        for member in members {
            self.flatten_one(member, &mut inner);
        }
        let columns = if self.cluster_gates {
            cluster::cluster(inner.iter().cloned()).len()
        } else {
            inner.len()
        };

        let barrier = FusedBarrier {
            low: qubit_label(low),
            high: qubit_label(high),
            columns,
            equal_qubits: low == high,
        };
        debug!(
            "Fused group on {}..{} spans {} columns",
            barrier.low, barrier.high, barrier.columns
        );

        out.push(GateTuple::FusedStart(barrier.clone()));
        out.append(&mut inner);
        out.push(GateTuple::FusedEnd(barrier));
    }

    /// Qubits an instruction draws on. The entanglement-entropy marker covers the register.
    fn operands(&self, instruction: &Instruction) -> Vec<QubitId> {
        match instruction.kind {
            InstructionKind::EntanglementEntropy => {
                (0..self.num_qubits as u32).map(QubitId).collect()
            }
            _ => instruction.qubits(),
        }
    }
}

/// One single-wire tuple per target.
fn broadcast(name: &str, targets: &[QubitId], out: &mut Vec<GateTuple>) {
    out.extend(
        targets
            .iter()
            .map(|&q| GateTuple::gate(name, qubit_label(q))),
    );
}

/// One tuple on the first target; remaining targets then controls follow.
fn combined(name: String, instruction: &Instruction, out: &mut Vec<GateTuple>) {
    let Some((first, rest)) = instruction.targets.split_first() else {
        warn!("Skipping '{}' without target qubits", instruction.name());
        return;
    };
    let controls = rest
        .iter()
        .chain(instruction.controls.iter())
        .map(|&q| qubit_label(q));
    out.push(GateTuple::controlled(name, qubit_label(*first), controls));
}

/// Normalize a gate instruction's display name.
///
/// Upper-cases the name, maps `CCX`/`CX` to `TOFFOLI`/`CNOT`, rewrites
/// square-root-X variants to `√X`/`√X†`, and replaces other controlled
/// `C*` names with the gate's draw label.
pub fn normalize_name(instruction: &Instruction) -> String {
    let mut name = instruction.name().to_uppercase();

    match name.as_str() {
        "CCX" => name = "TOFFOLI".into(),
        "CX" => name = "CNOT".into(),
        _ => {}
    }

    if contains_any(&name, &["SX", "CSX"]) {
        name = if name.ends_with("DG") { "√X†" } else { "√X" }.into();
    }

    if !instruction.controls.is_empty() && name.starts_with('C') && name != "CNOT" {
        name = instruction.draw_label().to_uppercase();
    }

    name
}

/// True if any of `needles` occurs in `haystack`.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}
