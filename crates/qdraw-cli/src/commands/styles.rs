//! Styles command implementation.

use anyhow::Result;
use console::style;

use qdraw_plot::DEFAULT_STYLE;

use super::common::load_config;

/// Execute the styles command.
pub fn execute(styles_file: Option<&str>) -> Result<()> {
    let config = load_config(styles_file, None)?;
    let resolved = |name: &str| config.resolve(Some(&name.into()));

    println!("{}", style("Available styles:").bold());
    for name in config.style_names() {
        let params = resolved(name);
        let marker = if name == DEFAULT_STYLE { "*" } else { " " };
        println!(
            " {} {:<14} face {:<9} gates {:<9} lines {}",
            marker,
            style(name).cyan(),
            params.facecolor,
            params.gatecolor,
            params.linecolor
        );
    }

    Ok(())
}
