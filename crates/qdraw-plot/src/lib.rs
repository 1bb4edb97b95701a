//! qdraw Circuit Diagram Renderer
//!
//! Turns a [`qdraw_ir::Circuit`] into a schematic [`Figure`]: one horizontal
//! wire per qubit, gate glyphs arranged in time-step columns, control
//! connectors, measurement boxes and dashed brackets around fused groups.
//!
//! # Pipeline
//!
//! ```text
//! Circuit
//!    │  Flattener          instructions → GateTuple sequence
//!    ▼
//! Vec<GateTuple>
//!    │  cluster            greedy single-qubit column packing
//!    ▼
//! Vec<Column>
//!    │  Labels + Grid      wire/column coordinates
//!    ▼
//! Painter ──► Canvas (Figure)  ──► SVG / JSON
//! ```
//!
//! Style and symbol tables live in an immutable [`DrawConfig`] passed to
//! every render call.
//!
//! # Example
//!
//! ```rust
//! use qdraw_ir::{Circuit, QubitId};
//! use qdraw_plot::{DrawConfig, RenderOptions, plot};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! let config = DrawConfig::builtin().unwrap();
//! let figure = plot(&circuit, &RenderOptions::default(), &config).unwrap();
//! let svg = figure.to_svg();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod cluster;
pub mod config;
pub mod draw;
pub mod error;
pub mod figure;
pub mod flatten;
pub mod layout;
pub mod style;
pub mod svg;
pub mod tuple;

use qdraw_ir::{Circuit, QubitId};
use tracing::{debug, info, instrument};

pub use config::{DEFAULT_STYLE, DrawConfig};
pub use draw::{InitialStates, Painter};
pub use error::{ConfigError, ConfigResult, DrawError, DrawResult};
pub use figure::{Canvas, Figure, Primitive};
pub use flatten::Flattener;
pub use layout::{Grid, Labels, MeasuredWires};
pub use style::{PlotParams, StyleChoice, StyleOverride};
pub use tuple::{Column, FusedBarrier, GateTuple, qubit_label};

/// Options accepted by [`plot`].
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Distance between wires and columns. Applied after the style.
    pub scale: f64,
    /// Pack disjoint single-qubit gates into shared columns.
    pub cluster_gates: bool,
    /// Style to use; `None` selects the registry's `default` entry.
    pub style: Option<StyleChoice>,
    /// Draw `|label⟩` text left of each wire.
    pub plot_labels: bool,
    /// Replacement text for wire labels.
    pub initial_states: InitialStates,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 0.6,
            cluster_gates: true,
            style: None,
            plot_labels: true,
            initial_states: InitialStates::default(),
        }
    }
}

impl RenderOptions {
    /// Set the scale.
    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Enable or disable column clustering.
    #[must_use]
    pub fn with_clustering(mut self, cluster_gates: bool) -> Self {
        self.cluster_gates = cluster_gates;
        self
    }

    /// Select a style.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<StyleChoice>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Enable or disable wire labels.
    #[must_use]
    pub fn with_labels(mut self, plot_labels: bool) -> Self {
        self.plot_labels = plot_labels;
        self
    }

    /// Show `state` instead of the label of `label`; `None` blanks it.
    #[must_use]
    pub fn with_initial_state(mut self, label: impl Into<String>, state: Option<String>) -> Self {
        self.initial_states.insert(label.into(), state);
        self
    }

    fn label_options(&self) -> LabelOptions {
        LabelOptions {
            plot_labels: self.plot_labels,
            initial_states: self.initial_states.clone(),
        }
    }
}

/// Wire-label settings for the lower-level entry points.
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Draw `|label⟩` text left of each wire.
    pub plot_labels: bool,
    /// Replacement text for wire labels.
    pub initial_states: InitialStates,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            plot_labels: true,
            initial_states: InitialStates::default(),
        }
    }
}

/// Render a circuit.
///
/// Wires are labelled `q_0` to `q_{n-1}`, top to bottom. A circuit without
/// instructions renders bare wires on a square grid.
#[instrument(skip_all, fields(name = circuit.name(), num_qubits = circuit.num_qubits()))]
pub fn plot(circuit: &Circuit, options: &RenderOptions, config: &DrawConfig) -> DrawResult<Figure> {
    let num_qubits = circuit.num_qubits();
    if num_qubits == 0 {
        return Err(DrawError::EmptyRegister);
    }

    let mut params = config.resolve(options.style.as_ref());
    params.scale = options.scale;

    let labels: Vec<String> = (0..num_qubits as u32).map(|q| qubit_label(QubitId(q))).collect();
    let label_options = options.label_options();

    if circuit.is_empty() {
        debug!("No instructions, drawing {} bare wires", num_qubits);
        return plot_lines(&labels, &params, config, &label_options);
    }

    let tuples = Flattener::new(num_qubits, options.cluster_gates).flatten(circuit.instructions());
    let columns = cluster::columns(tuples, options.cluster_gates);
    debug!(
        "Laid out {} columns (clustering {})",
        columns.len(),
        if options.cluster_gates { "on" } else { "off" }
    );

    let figure = plot_columns(&columns, Some(labels.as_slice()), &params, config, &label_options)?;
    info!(
        "Rendered {} instructions into {} columns, {} primitives",
        circuit.depth(),
        columns.len(),
        figure.primitives.len()
    );
    Ok(figure)
}

/// Render prepared columns.
///
/// Without `labels` (or with an empty list) the labels are inferred from the
/// columns in first-seen order.
pub fn plot_columns(
    columns: &[Column],
    labels: Option<&[String]>,
    params: &PlotParams,
    config: &DrawConfig,
    label_options: &LabelOptions,
) -> DrawResult<Figure> {
    let labels = match labels {
        Some(labels) if !labels.is_empty() => Labels::new(labels.iter().cloned()),
        _ => Labels::infer(columns),
    };
    if labels.is_empty() {
        return Err(DrawError::EmptyRegister);
    }

    let grid = Grid::new(labels.len(), columns.len(), params.scale);
    let measured = MeasuredWires::scan(columns, &labels)?;
    let mut figure = new_figure(&grid, params);

    let painter = Painter::new(params, config, &labels, &grid);
    painter.draw_wires(&mut figure);
    if label_options.plot_labels {
        painter.draw_labels(&mut figure, &label_options.initial_states)?;
    }
    painter.draw_columns(&mut figure, columns, &measured)?;
    Ok(figure)
}

/// Render bare wires with a column count equal to the wire count.
pub fn plot_lines(
    labels: &[String],
    params: &PlotParams,
    config: &DrawConfig,
    label_options: &LabelOptions,
) -> DrawResult<Figure> {
    let labels = Labels::new(labels.iter().cloned());
    if labels.is_empty() {
        return Err(DrawError::EmptyRegister);
    }

    let grid = Grid::new(labels.len(), labels.len(), params.scale);
    let mut figure = new_figure(&grid, params);

    let painter = Painter::new(params, config, &labels, &grid);
    painter.draw_wires(&mut figure);
    if label_options.plot_labels {
        painter.draw_labels(&mut figure, &label_options.initial_states)?;
    }
    Ok(figure)
}

fn new_figure(grid: &Grid, params: &PlotParams) -> Figure {
    let (xlim, ylim) = grid.limits();
    Figure::new(
        grid.figure_size(),
        xlim,
        ylim,
        params.facecolor.clone(),
        params.edgecolor.clone(),
    )
}
