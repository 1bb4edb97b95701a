//! Noise channel kinds.
//!
//! Channels are non-unitary operations. For drawing purposes they behave
//! like identity and measurement: one box per target qubit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A noise channel applied to one or more qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ChannelKind {
    /// General channel given by Kraus operators.
    Kraus,
    /// Probabilistic mixture of unitaries.
    Unitary,
    /// Depolarizing channel with parameter `lam`.
    Depolarizing {
        /// Depolarizing strength (0.0 to 1.0).
        lam: f64,
    },
    /// Readout error: measurement reports the wrong outcome with probability `p`.
    ReadoutError {
        /// Misclassification probability (0.0 to 1.0).
        p: f64,
    },
}

impl ChannelKind {
    /// Get the name of this channel.
    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::Kraus => "KrausChannel",
            ChannelKind::Unitary => "UnitaryChannel",
            ChannelKind::Depolarizing { .. } => "DepolarizingChannel",
            ChannelKind::ReadoutError { .. } => "ReadoutErrorChannel",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Kraus => write!(f, "kraus"),
            ChannelKind::Unitary => write!(f, "unitary"),
            ChannelKind::Depolarizing { lam } => write!(f, "depolarizing(λ={lam:.4})"),
            ChannelKind::ReadoutError { p } => write!(f, "readout_error(p={p:.4})"),
        }
    }
}
