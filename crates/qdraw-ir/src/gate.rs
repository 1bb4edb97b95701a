//! Quantum gate types.

use serde::{Deserialize, Serialize};

/// Standard gates with known names and arities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    // Single-qubit Pauli gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,

    // Single-qubit Clifford gates
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// sqrt(X)-dagger gate.
    SXdg,

    // Single-qubit rotation gates
    /// Rotation around X axis.
    Rx(f64),
    /// Rotation around Y axis.
    Ry(f64),
    /// Rotation around Z axis.
    Rz(f64),
    /// Phase gate diag(1, e^(iθ)).
    U1(f64),
    /// Universal single-qubit gate U3(θ, φ, λ).
    U3(f64, f64, f64),

    // Controlled gates (controls come first)
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Y gate.
    CY,
    /// Controlled-Z gate.
    CZ,
    /// Controlled-Hadamard gate.
    CH,
    /// Controlled sqrt(X) gate.
    CSX,
    /// Controlled sqrt(X)-dagger gate.
    CSXdg,
    /// Controlled rotation around X.
    CRx(f64),
    /// Controlled rotation around Y.
    CRy(f64),
    /// Controlled rotation around Z.
    CRz(f64),
    /// Controlled U1 gate.
    CU1(f64),
    /// Symmetric controlled phase gate, drawn with dots on both wires.
    CPhase(f64),

    // Two-qubit interaction gates
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,
    /// sqrt(iSWAP) gate.
    SiSwap,
    /// Fermionic SWAP gate.
    FSwap,
    /// fSim(θ, φ) gate.
    FSim(f64, f64),
    /// Generalized fSim gate with phase φ.
    GeneralizedFSim(f64),
    /// Sycamore gate.
    Syc,
    /// XX rotation gate.
    RXX(f64),
    /// YY rotation gate.
    RYY(f64),
    /// ZZ rotation gate.
    RZZ(f64),
    /// ZX rotation gate.
    RZX(f64),
    /// XX+YY interaction gate.
    RXXYY(f64),
    /// Echoed cross-resonance gate.
    ECR,
    /// Mølmer–Sørensen gate MS(φ0, φ1, θ).
    MS(f64, f64, f64),

    // Three-qubit gates
    /// Toffoli gate (CCX).
    CCX,
    /// Fredkin gate (CSWAP).
    CSwap,
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::I => "id",
            StandardGate::X => "x",
            StandardGate::Y => "y",
            StandardGate::Z => "z",
            StandardGate::H => "h",
            StandardGate::S => "s",
            StandardGate::Sdg => "sdg",
            StandardGate::T => "t",
            StandardGate::Tdg => "tdg",
            StandardGate::SX => "sx",
            StandardGate::SXdg => "sxdg",
            StandardGate::Rx(_) => "rx",
            StandardGate::Ry(_) => "ry",
            StandardGate::Rz(_) => "rz",
            StandardGate::U1(_) => "u1",
            StandardGate::U3(_, _, _) => "u3",
            StandardGate::CX => "cx",
            StandardGate::CY => "cy",
            StandardGate::CZ => "cz",
            StandardGate::CH => "ch",
            StandardGate::CSX => "csx",
            StandardGate::CSXdg => "csxdg",
            StandardGate::CRx(_) => "crx",
            StandardGate::CRy(_) => "cry",
            StandardGate::CRz(_) => "crz",
            StandardGate::CU1(_) => "cu1",
            StandardGate::CPhase(_) => "cphase",
            StandardGate::Swap => "swap",
            StandardGate::ISwap => "iswap",
            StandardGate::SiSwap => "siswap",
            StandardGate::FSwap => "fswap",
            StandardGate::FSim(_, _) => "fsim",
            StandardGate::GeneralizedFSim(_) => "generalizedfsim",
            StandardGate::Syc => "syc",
            StandardGate::RXX(_) => "rxx",
            StandardGate::RYY(_) => "ryy",
            StandardGate::RZZ(_) => "rzz",
            StandardGate::RZX(_) => "rzx",
            StandardGate::RXXYY(_) => "rxxyy",
            StandardGate::ECR => "ecr",
            StandardGate::MS(_, _, _) => "ms",
            StandardGate::CCX => "ccx",
            StandardGate::CSwap => "cswap",
        }
    }

    /// Label drawn on the target wire when the gate is shown with controls.
    pub fn draw_label(&self) -> &'static str {
        match self {
            StandardGate::CX | StandardGate::CCX => "X",
            StandardGate::CY => "Y",
            StandardGate::CZ => "Z",
            StandardGate::CH => "H",
            StandardGate::CSX => "SX",
            StandardGate::CSXdg => "SXDG",
            StandardGate::CRx(_) => "RX",
            StandardGate::CRy(_) => "RY",
            StandardGate::CRz(_) => "RZ",
            StandardGate::CU1(_) => "U1",
            StandardGate::CPhase(_) => "CPHASE",
            StandardGate::CSwap => "SWAP",
            StandardGate::I => "I",
            StandardGate::X => "X",
            StandardGate::Y => "Y",
            StandardGate::Z => "Z",
            StandardGate::H => "H",
            StandardGate::S => "S",
            StandardGate::Sdg => "SDG",
            StandardGate::T => "T",
            StandardGate::Tdg => "TDG",
            StandardGate::SX => "SX",
            StandardGate::SXdg => "SXDG",
            StandardGate::Rx(_) => "RX",
            StandardGate::Ry(_) => "RY",
            StandardGate::Rz(_) => "RZ",
            StandardGate::U1(_) => "U1",
            StandardGate::U3(_, _, _) => "U3",
            StandardGate::Swap => "SWAP",
            StandardGate::ISwap => "ISWAP",
            StandardGate::SiSwap => "SISWAP",
            StandardGate::FSwap => "FSWAP",
            StandardGate::FSim(_, _) => "FSIM",
            StandardGate::GeneralizedFSim(_) => "GENERALIZEDFSIM",
            StandardGate::Syc => "SYC",
            StandardGate::RXX(_) => "RXX",
            StandardGate::RYY(_) => "RYY",
            StandardGate::RZZ(_) => "RZZ",
            StandardGate::RZX(_) => "RZX",
            StandardGate::RXXYY(_) => "RXXYY",
            StandardGate::ECR => "ECR",
            StandardGate::MS(_, _, _) => "MS",
        }
    }

    /// Get the number of qubits this gate operates on.
    ///
    /// The identity gate reports one qubit but may be applied to any
    /// number of targets.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::I
            | StandardGate::X
            | StandardGate::Y
            | StandardGate::Z
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg
            | StandardGate::SX
            | StandardGate::SXdg
            | StandardGate::Rx(_)
            | StandardGate::Ry(_)
            | StandardGate::Rz(_)
            | StandardGate::U1(_)
            | StandardGate::U3(_, _, _) => 1,

            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CH
            | StandardGate::CSX
            | StandardGate::CSXdg
            | StandardGate::CRx(_)
            | StandardGate::CRy(_)
            | StandardGate::CRz(_)
            | StandardGate::CU1(_)
            | StandardGate::CPhase(_)
            | StandardGate::Swap
            | StandardGate::ISwap
            | StandardGate::SiSwap
            | StandardGate::FSwap
            | StandardGate::FSim(_, _)
            | StandardGate::GeneralizedFSim(_)
            | StandardGate::Syc
            | StandardGate::RXX(_)
            | StandardGate::RYY(_)
            | StandardGate::RZZ(_)
            | StandardGate::RZX(_)
            | StandardGate::RXXYY(_)
            | StandardGate::ECR
            | StandardGate::MS(_, _, _) => 2,

            StandardGate::CCX | StandardGate::CSwap => 3,
        }
    }

    /// Number of leading operands that act as controls.
    #[inline]
    pub fn num_controls(&self) -> u32 {
        match self {
            StandardGate::CX
            | StandardGate::CY
            | StandardGate::CZ
            | StandardGate::CH
            | StandardGate::CSX
            | StandardGate::CSXdg
            | StandardGate::CRx(_)
            | StandardGate::CRy(_)
            | StandardGate::CRz(_)
            | StandardGate::CU1(_)
            | StandardGate::CPhase(_)
            | StandardGate::CSwap => 1,
            StandardGate::CCX => 2,
            _ => 0,
        }
    }
}

/// A quantum gate, either standard or custom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GateKind {
    /// A standard gate with known semantics.
    Standard(StandardGate),
    /// A custom user-defined gate.
    Custom(CustomGate),
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::Standard(g) => g.name(),
            GateKind::Custom(g) => &g.name,
        }
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            GateKind::Standard(g) => g.num_qubits(),
            GateKind::Custom(g) => g.num_qubits,
        }
    }
}

/// A user-defined gate, drawn as a box carrying its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomGate {
    /// The name of the gate.
    pub name: String,
    /// The number of qubits it operates on, controls included.
    pub num_qubits: u32,
}

impl CustomGate {
    /// Create a new custom gate.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
        }
    }
}

/// A gate with an optional display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// Optional label shown instead of the derived draw label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Gate {
    /// Create a new gate from a standard gate.
    pub fn standard(gate: StandardGate) -> Self {
        Self {
            kind: GateKind::Standard(gate),
            label: None,
        }
    }

    /// Create a new gate from a custom gate.
    pub fn custom(gate: CustomGate) -> Self {
        Self {
            kind: GateKind::Custom(gate),
            label: None,
        }
    }

    /// Add a label to the gate.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the name of this gate.
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.kind.num_qubits()
    }

    /// Label drawn on the target of a controlled gate.
    pub fn draw_label(&self) -> &str {
        if let Some(label) = &self.label {
            return label;
        }
        match &self.kind {
            GateKind::Standard(g) => g.draw_label(),
            GateKind::Custom(g) => &g.name,
        }
    }
}

impl From<StandardGate> for Gate {
    fn from(gate: StandardGate) -> Self {
        Gate::standard(gate)
    }
}

impl From<CustomGate> for Gate {
    fn from(gate: CustomGate) -> Self {
        Gate::custom(gate)
    }
}
