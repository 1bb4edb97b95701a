//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - quantum circuit diagrams",
        style("qdraw").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qdraw-ir    Circuit builder and instruction model");
    println!("  qdraw-plot  Flattening, clustering, layout and drawing");
    println!("  qdraw-cli   Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
