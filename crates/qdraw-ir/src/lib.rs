//! qdraw Circuit Object Model
//!
//! This crate provides the circuit data structures consumed by the
//! `qdraw-plot` diagram renderer.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] for addressing the quantum register
//! - **Gates**: [`StandardGate`] for named gates (H, CX, SWAP, fSim, ...) and
//!   [`CustomGate`] for user-defined boxes
//! - **Channels**: [`ChannelKind`] for noise channels
//! - **Instructions**: [`Instruction`] combining an operation with its target
//!   and control qubits; fused groups nest instructions one level deep
//! - **Circuit**: [`Circuit`] builder with validation and JSON loading
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qdraw_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.depth(), 3);
//! ```
//!
//! # Example: Fused Group
//!
//! ```rust
//! use qdraw_ir::{Circuit, Instruction, QubitId, StandardGate};
//!
//! let mut circuit = Circuit::new(2);
//! circuit
//!     .fuse([
//!         Instruction::single_qubit_gate(StandardGate::H, QubitId(0)),
//!         Instruction::two_qubit_gate(StandardGate::CZ, QubitId(0), QubitId(1)),
//!     ])
//!     .unwrap();
//! assert_eq!(circuit.depth(), 1);
//! ```

pub mod channel;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use channel::ChannelKind;
pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{CustomGate, Gate, GateKind, StandardGate};
pub use instruction::{Instruction, InstructionKind};
pub use qubit::QubitId;
