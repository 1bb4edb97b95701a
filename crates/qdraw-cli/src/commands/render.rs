//! Render command implementation.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;
use std::fs;
use std::io::Write;
use tracing::info;

use qdraw_plot::{RenderOptions, StyleChoice, StyleOverride, plot};

use super::common::{load_circuit, load_config};

/// Output encodings for the rendered figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Standalone SVG document
    Svg,
    /// Primitive list as JSON
    Json,
}

/// Arguments of the render command.
#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub input: String,
    pub output: Option<String>,
    pub scale: f64,
    pub cluster: bool,
    pub labels: bool,
    pub style: Option<String>,
    pub style_file: Option<String>,
    pub symbols_file: Option<String>,
    pub format: OutputFormat,
}

/// Execute the render command.
pub fn execute(args: &RenderArgs) -> Result<()> {
    if !(args.scale.is_finite() && args.scale > 0.0) {
        anyhow::bail!("Scale must be a positive number, got {}", args.scale);
    }

    // Progress goes to stdout only when the figure itself does not
    let verbose = args.output.is_some();
    if verbose {
        println!(
            "{} Rendering {}",
            style("→").cyan().bold(),
            style(&args.input).green()
        );
    }

    let circuit = load_circuit(&args.input)?;
    if verbose {
        println!(
            "  Loaded: {} qubits, depth {}",
            circuit.num_qubits(),
            circuit.depth()
        );
    }

    let config = load_config(None, args.symbols_file.as_deref())?;

    let choice = match (&args.style, &args.style_file) {
        (Some(name), _) => Some(StyleChoice::from(name.as_str())),
        (None, Some(path)) => Some(StyleChoice::Custom(
            StyleOverride::from_file(path)
                .with_context(|| format!("Failed to load style from {path}"))?,
        )),
        (None, None) => None,
    };

    let mut options = RenderOptions::default()
        .with_scale(args.scale)
        .with_clustering(args.cluster)
        .with_labels(args.labels);
    options.style = choice;

    let figure = plot(&circuit, &options, &config)?;
    info!(
        primitives = figure.primitives.len(),
        width = figure.width,
        height = figure.height,
        "Figure rendered"
    );

    let rendered = match args.format {
        OutputFormat::Svg => figure.to_svg(),
        OutputFormat::Json => figure.to_json()?,
    };

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).with_context(|| format!("Failed to write {path}"))?;
            println!(
                "{} Wrote {} ({:.2} x {:.2})",
                style("✓").green().bold(),
                style(path).green(),
                figure.width,
                figure.height
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
