//! High-level circuit builder API.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::channel::ChannelKind;
use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind, StandardGate};
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::QubitId;

/// A quantum circuit: a register size and an ordered instruction queue.
///
/// Every instruction is validated against the register when it is added,
/// so a `Circuit` never references a qubit it does not own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the register.
    num_qubits: u32,
    /// The instruction queue, in application order.
    instructions: Vec<Instruction>,
}

/// Unvalidated on-disk form of a circuit.
#[derive(Deserialize)]
struct RawCircuit {
    #[serde(default = "default_name")]
    name: String,
    num_qubits: u32,
    #[serde(default)]
    instructions: Vec<Instruction>,
}

fn default_name() -> String {
    "circuit".into()
}

impl Circuit {
    /// Create an empty circuit on `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self::with_name("circuit", num_qubits)
    }

    /// Create an empty named circuit on `num_qubits` qubits.
    pub fn with_name(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Append an instruction after validating its operands.
    pub fn add(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        self.validate(&instruction, false)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    /// Append several instructions in order.
    ///
    /// Stops at the first invalid instruction; the ones before it stay queued.
    pub fn extend(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<&mut Self> {
        for instruction in instructions {
            self.add(instruction)?;
        }
        Ok(self)
    }

    /// Return a new circuit running `self` followed by `other`.
    pub fn concat(&self, other: &Circuit) -> IrResult<Circuit> {
        if self.num_qubits != other.num_qubits {
            return Err(IrError::QubitCountDiffers {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }
        let mut circuit = self.clone();
        circuit
            .instructions
            .extend(other.instructions.iter().cloned());
        Ok(circuit)
    }

    fn validate(&self, instruction: &Instruction, nested: bool) -> IrResult<()> {
        let gate_name = Some(instruction.name().to_string());
        match &instruction.kind {
            InstructionKind::Fused(members) => {
                if nested {
                    return Err(IrError::NestedFusedGroup);
                }
                if members.is_empty() {
                    return Err(IrError::EmptyFusedGroup);
                }
                for member in members {
                    self.validate(member, true)?;
                }
                return Ok(());
            }
            InstructionKind::EntanglementEntropy => return Ok(()),
            InstructionKind::Gate(gate) => {
                let got = (instruction.targets.len() + instruction.controls.len()) as u32;
                let expected = match &gate.kind {
                    GateKind::Standard(StandardGate::I) => None,
                    _ => Some(gate.num_qubits()),
                };
                if let Some(expected) = expected {
                    if expected != got {
                        return Err(IrError::QubitCountMismatch {
                            gate_name: gate.name().to_string(),
                            expected,
                            got,
                        });
                    }
                }
            }
            InstructionKind::Measure
            | InstructionKind::Channel(_)
            | InstructionKind::Align { .. } => {}
        }

        if instruction.targets.is_empty() {
            return Err(IrError::NoTargets(instruction.name().to_string()));
        }

        let mut seen = HashSet::new();
        for &qubit in instruction.targets.iter().chain(instruction.controls.iter()) {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name,
                });
            }
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit { qubit, gate_name });
            }
        }
        Ok(())
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply identity to one or more qubits.
    pub fn identity(&mut self, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<&mut Self> {
        self.add(Instruction::gate(StandardGate::I, qubits))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Y, qubit))
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Z, qubit))
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::S, qubit))
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Sdg, qubit))
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::T, qubit))
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Tdg, qubit))
    }

    /// Apply sqrt(X) gate.
    pub fn sx(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::SX, qubit))
    }

    /// Apply sqrt(X)-dagger gate.
    pub fn sxdg(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::SXdg, qubit))
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Rx(theta), qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::Rz(theta), qubit))
    }

    /// Apply U1 phase gate.
    pub fn u1(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(StandardGate::U1(theta), qubit))
    }

    /// Apply universal U3 gate.
    pub fn u3(&mut self, theta: f64, phi: f64, lambda: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::single_qubit_gate(
            StandardGate::U3(theta, phi, lambda),
            qubit,
        ))
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::CX, control, target))
    }

    /// Apply CY gate.
    pub fn cy(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::CY, control, target))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::CZ, control, target))
    }

    /// Apply controlled-Hadamard gate.
    pub fn ch(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::CH, control, target))
    }

    /// Apply controlled sqrt(X) gate.
    pub fn csx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::CSX, control, target))
    }

    /// Apply controlled-Rx gate.
    pub fn crx(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(
            StandardGate::CRx(theta),
            control,
            target,
        ))
    }

    /// Apply controlled-Rz gate.
    pub fn crz(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(
            StandardGate::CRz(theta),
            control,
            target,
        ))
    }

    /// Apply controlled-U1 gate.
    pub fn cu1(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(
            StandardGate::CU1(theta),
            control,
            target,
        ))
    }

    /// Apply symmetric controlled-phase gate.
    pub fn cphase(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(
            StandardGate::CPhase(theta),
            control,
            target,
        ))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::Swap, q1, q2))
    }

    /// Apply iSWAP gate.
    pub fn iswap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::ISwap, q1, q2))
    }

    /// Apply fSim gate.
    pub fn fsim(&mut self, theta: f64, phi: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(
            StandardGate::FSim(theta, phi),
            q1,
            q2,
        ))
    }

    /// Apply RXX (XX rotation) gate.
    pub fn rxx(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::RXX(theta), q1, q2))
    }

    /// Apply RZZ (ZZ rotation) gate.
    pub fn rzz(&mut self, theta: f64, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::two_qubit_gate(StandardGate::RZZ(theta), q1, q2))
    }

    // =========================================================================
    // Three-qubit gates
    // =========================================================================

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply Fredkin (CSWAP) gate.
    pub fn cswap(&mut self, control: QubitId, t1: QubitId, t2: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::gate(StandardGate::CSwap, [control, t1, t2]))
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Apply an arbitrary gate; `qubits` lists controls first.
    pub fn gate(
        &mut self,
        gate: impl Into<Gate>,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.add(Instruction::gate(gate, qubits))
    }

    /// Apply a gate with explicit control qubits.
    pub fn controlled(
        &mut self,
        gate: impl Into<Gate>,
        controls: impl IntoIterator<Item = QubitId>,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.add(Instruction::controlled(gate, controls, targets))
    }

    /// Measure a qubit.
    pub fn measure(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.add(Instruction::measure([qubit]))
    }

    /// Measure every qubit with a single instruction.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.add(Instruction::measure(qubits))
    }

    /// Apply a noise channel.
    pub fn channel(
        &mut self,
        kind: ChannelKind,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.add(Instruction::channel(kind, qubits))
    }

    /// Insert an entanglement-entropy marker.
    pub fn entanglement_entropy(&mut self) -> IrResult<&mut Self> {
        self.add(Instruction::entanglement_entropy())
    }

    /// Insert an alignment marker on a qubit.
    pub fn align(&mut self, qubit: QubitId, delay: u64) -> IrResult<&mut Self> {
        self.add(Instruction::align(qubit, delay))
    }

    /// Append a fused group of instructions.
    pub fn fuse(
        &mut self,
        instructions: impl IntoIterator<Item = Instruction>,
    ) -> IrResult<&mut Self> {
        self.add(Instruction::fused(instructions))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// The queued instructions, in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Circuit depth: one step per queued top-level instruction.
    ///
    /// A fused group counts as a single step.
    pub fn depth(&self) -> usize {
        self.instructions.len()
    }

    /// Check whether no instruction has been queued.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Load a circuit from JSON, validating every instruction.
    pub fn from_json(source: &str) -> IrResult<Self> {
        let raw: RawCircuit = serde_json::from_str(source)?;
        let mut circuit = Self::with_name(raw.name, raw.num_qubits);
        circuit.extend(raw.instructions)?;
        Ok(circuit)
    }

    /// Serialize the circuit to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// Create a Bell state circuit.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::with_name("bell", 2);
        let q0 = QubitId(0);
        let q1 = QubitId(1);

        circuit.h(q0)?.cx(q0, q1)?.measure(q0)?.measure(q1)?;

        Ok(circuit)
    }

    /// Create a GHZ state circuit.
    pub fn ghz(n: u32) -> IrResult<Self> {
        let mut circuit = Self::with_name("ghz", n);
        if n == 0 {
            return Ok(circuit);
        }

        circuit.h(QubitId(0))?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.measure(QubitId(i))?;
        }

        Ok(circuit)
    }

    /// Create a QFT circuit (without measurements).
    pub fn qft(n: u32) -> IrResult<Self> {
        use std::f64::consts::PI;

        let mut circuit = Self::with_name("qft", n);

        for i in 0..n {
            circuit.h(QubitId(i))?;
            for j in (i + 1)..n {
                let k = j - i;
                let angle = PI / f64::from(1u32 << k);
                circuit.cu1(angle, QubitId(j), QubitId(i))?;
            }
        }

        for i in 0..n / 2 {
            circuit.swap(QubitId(i), QubitId(n - 1 - i))?;
        }

        Ok(circuit)
    }
}
