//! Error types for configuration loading and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading style or symbol configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or YAML for its table.
    #[error("Failed to parse configuration file {}: {message}", .path.display())]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },

    /// The file extension does not name a supported format.
    #[error("Unsupported configuration format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Errors raised while laying out or drawing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrawError {
    /// A gate references a qubit label missing from the label list.
    #[error("Qubit label '{label}' is not in the label list")]
    LabelNotFound {
        /// The missing label.
        label: String,
    },

    /// The circuit has no qubits, so there is no wire to draw.
    #[error("Cannot draw a circuit with zero qubits")]
    EmptyRegister,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for rendering.
pub type DrawResult<T> = Result<T, DrawError>;
