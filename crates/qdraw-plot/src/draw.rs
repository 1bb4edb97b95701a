//! Glyph drawing for wires, labels and gate columns.

use rustc_hash::FxHashMap;

use crate::config::DrawConfig;
use crate::error::DrawResult;
use crate::figure::{Canvas, Circle, Line, Rectangle, Text, TextBox};
use crate::flatten::contains_any;
use crate::layout::{Grid, Labels, MeasuredWires};
use crate::style::PlotParams;
use crate::tuple::{Column, FusedBarrier, GateTuple};

/// Offset of the second connector drawn for classically controlled gates.
const MEASURED_CONNECTOR_OFFSET: f64 = 0.04;

/// Horizontal padding of a fused-group bracket.
const FUSED_PAD_X: f64 = 0.30;

/// Vertical padding of a fused-group bracket.
const FUSED_PAD_Y: f64 = 0.25;

/// Font size used for text with dagger or root glyphs.
const SMALL_FONTSIZE: f64 = 12.0;

const DAGGER: &str = "†";

/// Two-qubit gate names drawn as a boxed symbol on every operand wire.
const BOXED_PAIR_GATES: &[&str] = &[
    "ISWAP",
    "SISWAP",
    "FSWAP",
    "FSIM",
    "SYC",
    "GENERALIZEDFSIM",
    "RXX",
    "RYY",
    "RZZ",
    "RZX",
    "RXXYY",
    "G",
    "RBS",
    "ECR",
    "MS",
];

/// Initial-state text per wire label. `None` blanks the label.
pub type InitialStates = FxHashMap<String, Option<String>>;

/// Draws gate glyphs onto a canvas using one render's resolved parameters.
pub struct Painter<'a> {
    params: &'a PlotParams,
    config: &'a DrawConfig,
    labels: &'a Labels,
    grid: &'a Grid,
}

impl<'a> Painter<'a> {
    /// Create a painter for one render.
    pub fn new(
        params: &'a PlotParams,
        config: &'a DrawConfig,
        labels: &'a Labels,
        grid: &'a Grid,
    ) -> Self {
        Self {
            params,
            config,
            labels,
            grid,
        }
    }

    /// One horizontal line per wire, one scale unit past the outer columns.
    pub fn draw_wires(&self, canvas: &mut impl Canvas) {
        let scale = self.grid.scale;
        let (left, right) = (
            self.grid.first_column() - scale,
            self.grid.last_column() + scale,
        );
        for &y in &self.grid.wires {
            self.line(canvas, left, right, y, y);
        }
    }

    /// Unboxed `|label⟩` text left of every wire.
    pub fn draw_labels(
        &self,
        canvas: &mut impl Canvas,
        initial_states: &InitialStates,
    ) -> DrawResult<()> {
        let x = self.grid.first_column() - self.grid.scale - self.params.label_buffer;
        for label in self.labels.as_slice() {
            let y = self.grid.wire_y(self.labels, label)?;
            self.text(canvas, x, y, render_label(label, initial_states), false);
        }
        Ok(())
    }

    /// Draw every tuple of every column.
    pub fn draw_columns(
        &self,
        canvas: &mut impl Canvas,
        columns: &[Column],
        measured: &MeasuredWires,
    ) -> DrawResult<()> {
        for (i, column) in columns.iter().enumerate() {
            for tuple in column {
                self.draw_tuple(canvas, i, tuple, measured)?;
            }
        }
        Ok(())
    }

    fn draw_tuple(
        &self,
        canvas: &mut impl Canvas,
        i: usize,
        tuple: &GateTuple,
        measured: &MeasuredWires,
    ) -> DrawResult<()> {
        match tuple {
            GateTuple::FusedStart(barrier) => self.draw_fused_bracket(canvas, i, barrier),
            GateTuple::FusedEnd(_) => Ok(()),
            GateTuple::Measure { .. } | GateTuple::Gate { .. } => {
                self.draw_target(canvas, i, tuple)?;
                if !tuple.controls().is_empty() {
                    self.draw_controls(canvas, i, tuple, measured)?;
                }
                Ok(())
            }
        }
    }

    fn draw_target(&self, canvas: &mut impl Canvas, i: usize, tuple: &GateTuple) -> DrawResult<()> {
        let (name, dagger) = split_dagger(tuple.name());
        let mut symbol = self.config.symbol(name).to_string();
        if symbol.is_empty() {
            return Ok(());
        }
        if dagger {
            symbol.push_str(DAGGER);
        }

        let x = self.grid.column_x(i);
        let y = self.grid.wire_y(self.labels, tuple.target())?;
        match name {
            "CNOT" | "TOFFOLI" => self.oplus(canvas, x, y),
            "CPHASE" => self.cdot(canvas, x, y),
            "SWAP" => self.swapx(canvas, x, y),
            "ALIGN" => {
                let index = tuple.target().strip_prefix("q_").unwrap_or(tuple.target());
                self.text(canvas, x, y, format!("A({index})"), true);
            }
            _ => self.text(canvas, x, y, symbol, true),
        }
        Ok(())
    }

    fn draw_controls(
        &self,
        canvas: &mut impl Canvas,
        i: usize,
        tuple: &GateTuple,
        measured: &MeasuredWires,
    ) -> DrawResult<()> {
        let target = self.labels.flipped_index(tuple.target())?;
        let controls = tuple
            .controls()
            .iter()
            .map(|c| self.labels.flipped_index(c))
            .collect::<DrawResult<Vec<_>>>()?;
        let min_wire = controls.iter().copied().fold(target, usize::min);
        let max_wire = controls.iter().copied().fold(target, usize::max);

        let x = self.grid.column_x(i);
        let (y_min, y_max) = (self.grid.wires[min_wire], self.grid.wires[max_wire]);
        self.line(canvas, x, x, y_min, y_max);
        if controls.iter().any(|&c| measured.measured_before(c, i)) {
            let dx = MEASURED_CONNECTOR_OFFSET;
            self.line(canvas, x + dx, x + dx, y_min, y_max);
        }

        let (name, dagger) = split_dagger(tuple.name());
        for &wire in &controls {
            let y = self.grid.wires[wire];
            if name == "SWAP" {
                self.swapx(canvas, x, y);
            } else if BOXED_PAIR_GATES.contains(&name) {
                let mut symbol = self.config.symbol(name).to_string();
                if dagger {
                    symbol.push_str(DAGGER);
                }
                self.text(canvas, x, y, symbol, true);
            } else {
                self.cdot(canvas, x, y);
            }
        }
        Ok(())
    }

    /// Dashed box around the inner columns of a fused group.
    fn draw_fused_bracket(
        &self,
        canvas: &mut impl Canvas,
        i: usize,
        barrier: &FusedBarrier,
    ) -> DrawResult<()> {
        let scale = self.grid.scale;
        let x1 = self.grid.column_x(i + 1) - FUSED_PAD_X;
        let x2 = self.grid.column_x(i + barrier.columns) + FUSED_PAD_X;

        let top = self.grid.wire_y(self.labels, &barrier.low)? + FUSED_PAD_Y;
        let high = self.grid.wire_y(self.labels, &barrier.high)?;
        let bottom = if barrier.equal_qubits {
            // Two-wire box raised by 0.9 scale units.
            high - scale - FUSED_PAD_Y + 0.9 * scale
        } else {
            high - FUSED_PAD_Y
        };
        self.rectangle(canvas, x1, x2, bottom, top);
        Ok(())
    }

    fn line(&self, canvas: &mut impl Canvas, x1: f64, x2: f64, y1: f64, y2: f64) {
        canvas.line(Line {
            x1,
            y1,
            x2,
            y2,
            color: self.params.linecolor.clone(),
            width: self.params.linewidth,
        });
    }

    fn text(&self, canvas: &mut impl Canvas, x: f64, y: f64, text: String, boxed: bool) {
        let size = if contains_any(&text, &[DAGGER, "√"]) {
            SMALL_FONTSIZE
        } else {
            self.params.fontsize
        };
        let boxed = boxed.then(|| TextBox {
            edgecolor: self.params.edgecolor.clone(),
            fillcolor: self.params.gatecolor.clone(),
            linewidth: self.params.linewidth,
        });
        canvas.text(Text {
            x,
            y,
            text,
            color: self.params.textcolor.clone(),
            size,
            boxed,
        });
    }

    fn oplus(&self, canvas: &mut impl Canvas, x: f64, y: f64) {
        let r = self.params.not_radius;
        canvas.circle(Circle {
            cx: x,
            cy: y,
            radius: r,
            edgecolor: self.params.edgecolor.clone(),
            fillcolor: self.params.gatecolor.clone(),
            width: self.params.linewidth,
        });
        self.line(canvas, x, x, y - r, y + r);
    }

    fn cdot(&self, canvas: &mut impl Canvas, x: f64, y: f64) {
        canvas.circle(Circle {
            cx: x,
            cy: y,
            radius: self.params.control_radius * self.params.scale,
            edgecolor: self.params.edgecolor.clone(),
            fillcolor: self.params.controlcolor.clone(),
            width: self.params.linewidth,
        });
    }

    fn swapx(&self, canvas: &mut impl Canvas, x: f64, y: f64) {
        let d = self.params.swap_delta;
        self.line(canvas, x - d, x + d, y - d, y + d);
        self.line(canvas, x - d, x + d, y + d, y - d);
    }

    fn rectangle(&self, canvas: &mut impl Canvas, x1: f64, x2: f64, y1: f64, y2: f64) {
        canvas.rectangle(Rectangle {
            x: x1.min(x2),
            y: y1.min(y2),
            width: (x2 - x1).abs(),
            height: (y2 - y1).abs(),
            edgecolor: self.params.edgecolor.clone(),
            fillcolor: None,
            linewidth: self.params.linewidth,
            dashed: true,
        });
    }
}

/// Strip a trailing `DG` and report whether it was present.
fn split_dagger(name: &str) -> (&str, bool) {
    match name.strip_suffix("DG") {
        Some(base) => (base, true),
        None => (name, false),
    }
}

/// `|label⟩`, or the initial state in its place. A `None` state blanks it.
pub fn render_label(label: &str, initial_states: &InitialStates) -> String {
    match initial_states.get(label) {
        Some(None) => String::new(),
        Some(Some(state)) => format!("|{state}⟩"),
        None => format!("|{label}⟩"),
    }
}
