//! qdraw Command-Line Interface
//!
//! Renders circuits stored as JSON into SVG diagrams.
//!
//! ```text
//! q_0 ──[H]──●──[M]──
//!            │
//! q_1 ───────⊕──[M]──
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::render::{OutputFormat, RenderArgs};
use commands::{render, styles, version};

/// qdraw - quantum circuit diagrams from the command line
#[derive(Parser)]
#[command(name = "qdraw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a circuit to SVG or figure JSON
    Render {
        /// Input circuit file (JSON)
        #[arg(short, long)]
        input: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Distance between wires and columns
        #[arg(long, default_value = "0.6")]
        scale: f64,

        /// Draw one gate per column
        #[arg(long)]
        no_cluster: bool,

        /// Hide the wire labels
        #[arg(long)]
        no_labels: bool,

        /// Named style (default, garnacha, fardelejo, quantumspain, color-blind, cachirulo)
        #[arg(long, conflicts_with = "style_file")]
        style: Option<String>,

        /// File with a single style's parameters (JSON or YAML)
        #[arg(long)]
        style_file: Option<String>,

        /// File with additional gate symbols (JSON or YAML)
        #[arg(long)]
        symbols_file: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "svg")]
        format: OutputFormat,
    },

    /// List the built-in styles
    Styles {
        /// Additional style registry file (JSON or YAML)
        #[arg(long)]
        styles_file: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Render {
            input,
            output,
            scale,
            no_cluster,
            no_labels,
            style,
            style_file,
            symbols_file,
            format,
        } => render::execute(&RenderArgs {
            input,
            output,
            scale,
            cluster: !no_cluster,
            labels: !no_labels,
            style,
            style_file,
            symbols_file,
            format,
        }),

        Commands::Styles { styles_file } => styles::execute(styles_file.as_deref()),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
