//! Style registry and symbol table.
//!
//! A [`DrawConfig`] is built once, either from the tables embedded in the
//! crate or from user files, and passed by reference to every render call.

use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::style::{PlotParams, StyleChoice, StyleOverride};

const BUILTIN_STYLES: &str = include_str!("../assets/styles.json");
const BUILTIN_SYMBOLS: &str = include_str!("../assets/symbols.json");

/// Name of the style used when none is requested.
pub const DEFAULT_STYLE: &str = "default";

/// Immutable style registry and symbol table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawConfig {
    styles: BTreeMap<String, StyleOverride>,
    symbols: BTreeMap<String, String>,
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Ok(Format::Yaml)
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl DrawConfig {
    /// The tables shipped with the crate.
    pub fn builtin() -> ConfigResult<Self> {
        let origin = Path::new("<builtin>");
        Ok(Self {
            styles: parse(BUILTIN_STYLES, Format::Json, origin)?,
            symbols: parse(BUILTIN_SYMBOLS, Format::Json, origin)?,
        })
    }

    /// Load both tables from JSON or YAML files, chosen by extension.
    pub fn from_files(
        styles: impl AsRef<Path>,
        symbols: impl AsRef<Path>,
    ) -> ConfigResult<Self> {
        Ok(Self {
            styles: load(styles.as_ref())?,
            symbols: load(symbols.as_ref())?,
        })
    }

    /// Add or replace styles with the entries of a file.
    pub fn with_styles_file(mut self, path: impl AsRef<Path>) -> ConfigResult<Self> {
        let styles: BTreeMap<String, StyleOverride> = load(path.as_ref())?;
        self.styles.extend(styles);
        Ok(self)
    }

    /// Add or replace symbols with the entries of a file.
    pub fn with_symbols_file(mut self, path: impl AsRef<Path>) -> ConfigResult<Self> {
        let symbols: BTreeMap<String, String> = load(path.as_ref())?;
        self.symbols.extend(symbols);
        Ok(self)
    }

    /// Register a named style.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, style: StyleOverride) -> Self {
        self.styles.insert(name.into(), style);
        self
    }

    /// Register a symbol for a gate name.
    #[must_use]
    pub fn with_symbol(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.symbols.insert(name.into(), symbol.into());
        self
    }

    /// Look up a named style.
    pub fn style(&self, name: &str) -> Option<&StyleOverride> {
        self.styles.get(name)
    }

    /// Registered style names, sorted.
    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Display string for a gate name; the name itself when unmapped.
    pub fn symbol<'a>(&'a self, name: &'a str) -> &'a str {
        self.symbols.get(name).map_or(name, String::as_str)
    }

    /// Resolve a style choice into fresh plot parameters.
    ///
    /// Unknown names fall back to the `default` entry, and to the built-in
    /// parameter values when the registry has no `default` either.
    pub fn resolve(&self, choice: Option<&StyleChoice>) -> PlotParams {
        let mut params = PlotParams::default();
        match choice {
            Some(StyleChoice::Custom(style)) => style.apply_to(&mut params),
            Some(StyleChoice::Named(name)) => {
                let style = self.style(name).or_else(|| {
                    debug!("Unknown style '{}', using '{}'", name, DEFAULT_STYLE);
                    self.style(DEFAULT_STYLE)
                });
                if let Some(style) = style {
                    style.apply_to(&mut params);
                }
            }
            None => {
                if let Some(style) = self.style(DEFAULT_STYLE) {
                    style.apply_to(&mut params);
                }
            }
        }
        params
    }
}

impl StyleOverride {
    /// Load a single style from a JSON or YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        load(path.as_ref())
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> ConfigResult<T> {
    let format = Format::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Loaded configuration from {}", path.display());
    parse(&contents, format, path)
}

fn parse<T: DeserializeOwned>(contents: &str, format: Format, path: &Path) -> ConfigResult<T> {
    let parse_error = |message: String| ConfigError::Parse {
        path: PathBuf::from(path),
        message,
    };
    match format {
        Format::Json => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string())),
        Format::Yaml => serde_yaml_ng::from_str(contents).map_err(|e| parse_error(e.to_string())),
    }
}
