//! Plot parameters and style overrides.

use serde::{Deserialize, Serialize};

/// Drawing parameters for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotParams {
    /// Distance between adjacent wires and adjacent columns.
    pub scale: f64,
    /// Default text size.
    pub fontsize: f64,
    /// Stroke width for lines and outlines.
    pub linewidth: f64,
    /// Control dot radius, multiplied by `scale`.
    pub control_radius: f64,
    /// Radius of the oplus circle.
    pub not_radius: f64,
    /// Half-width of the swap cross.
    pub swap_delta: f64,
    /// Extra left shift of the wire labels.
    pub label_buffer: f64,
    /// Figure background.
    pub facecolor: String,
    /// Outline colour for boxes and circles.
    pub edgecolor: String,
    /// Fill colour for fused-group brackets.
    pub fillcolor: String,
    /// Wire and connector colour.
    pub linecolor: String,
    /// Text colour.
    pub textcolor: String,
    /// Gate box fill.
    pub gatecolor: String,
    /// Control dot fill.
    pub controlcolor: String,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            fontsize: 14.0,
            linewidth: 1.0,
            control_radius: 0.05,
            not_radius: 0.15,
            swap_delta: 0.08,
            label_buffer: 0.0,
            facecolor: "w".into(),
            edgecolor: "#000000".into(),
            fillcolor: "#000000".into(),
            linecolor: "k".into(),
            textcolor: "k".into(),
            gatecolor: "w".into(),
            controlcolor: "#000000".into(),
        }
    }
}

/// A partial set of plot parameters. Missing fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleOverride {
    pub scale: Option<f64>,
    pub fontsize: Option<f64>,
    pub linewidth: Option<f64>,
    pub control_radius: Option<f64>,
    pub not_radius: Option<f64>,
    pub swap_delta: Option<f64>,
    pub label_buffer: Option<f64>,
    pub facecolor: Option<String>,
    pub edgecolor: Option<String>,
    pub fillcolor: Option<String>,
    pub linecolor: Option<String>,
    pub textcolor: Option<String>,
    pub gatecolor: Option<String>,
    pub controlcolor: Option<String>,
}

macro_rules! merge {
    ($params:ident, $over:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = &$over.$field {
                $params.$field = value.clone();
            }
        )+
    };
}

impl StyleOverride {
    /// Write every present field into `params`.
    pub fn apply_to(&self, params: &mut PlotParams) {
        merge!(
            params,
            self,
            scale,
            fontsize,
            linewidth,
            control_radius,
            not_radius,
            swap_delta,
            label_buffer,
            facecolor,
            edgecolor,
            fillcolor,
            linecolor,
            textcolor,
            gatecolor,
            controlcolor,
        );
    }
}

/// Which style a render uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleChoice {
    /// A style from the registry, by name.
    Named(String),
    /// An explicit parameter override.
    Custom(StyleOverride),
}

impl From<&str> for StyleChoice {
    fn from(name: &str) -> Self {
        StyleChoice::Named(name.to_string())
    }
}

impl From<StyleOverride> for StyleChoice {
    fn from(style: StyleOverride) -> Self {
        StyleChoice::Custom(style)
    }
}
