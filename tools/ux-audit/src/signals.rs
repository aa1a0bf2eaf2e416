//! Page signals captured by the browser-side provider for one audit run.
//!
//! Everything in here is plain data. The engine never goes back to the page,
//! so any section the provider could not capture is simply left at its
//! default (empty list, `false`, zero) and the matching check treats it as
//! degenerate input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{AuditError, Result};

/// Device the page was rendered for. Selects every device-dependent threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceContext {
    Mobile,
    Desktop,
}

impl DeviceContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceContext::Mobile => "mobile",
            DeviceContext::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceContext {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mobile" => Ok(DeviceContext::Mobile),
            "desktop" => Ok(DeviceContext::Desktop),
            other => Err(format!("unknown device '{other}' (expected mobile or desktop)")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSignals {
    pub cumulative_layout_shift: f64,
    pub interactive_elements: Vec<ElementBox>,
    pub text_elements: Vec<TextElement>,
    pub viewport_meta: Option<String>,
    pub horizontal_overflow: HorizontalOverflow,
    pub sticky_headers: Vec<ElementBox>,
    pub body_text: String,
    pub paragraphs: Vec<String>,
    pub navigation: NavigationSignals,
    pub classification: ClassificationSignals,
    pub interstitials: InterstitialSignals,
    pub images: Vec<ImageRecord>,
}

/// Bounding box of a rendered element, in CSS pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementBox {
    pub tag: String,
    pub text: String,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// An element with its own (direct) text node and its computed font size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextElement {
    pub tag: String,
    pub text: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalOverflow {
    /// Document scroll width exceeded the viewport at the rendered size.
    pub current: bool,
    pub breakpoints: Vec<BreakpointOverflow>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakpointOverflow {
    pub width: u32,
    pub overflows: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationSignals {
    /// Hostname of the audited page; links on any other host are external.
    pub hostname: String,
    /// Whether the page has any nav-like region (`nav`, `header`, `[role=navigation]`).
    pub has_nav_region: bool,
    pub links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkRecord {
    pub text: String,
    pub path: String,
    pub hostname: String,
    pub in_nav: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassificationSignals {
    pub url: String,
    pub structured_data_types: Vec<String>,
    pub markers: DomMarkers,
    pub cta_texts: Vec<String>,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DomMarkers {
    pub add_to_cart: bool,
    pub article: bool,
    pub price: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterstitialSignals {
    pub overlay: bool,
    pub scroll_block: bool,
    pub modal: bool,
    pub viewport: Option<Size>,
    pub positioned_elements: Vec<PositionedElement>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionedElement {
    pub position: Position,
    pub width: f64,
    pub height: f64,
    pub z_index: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageRecord {
    pub src: String,
    pub has_width_attr: bool,
    pub has_height_attr: bool,
    pub has_css_aspect_ratio: bool,
}

impl ImageRecord {
    pub fn has_reserved_space(&self) -> bool {
        (self.has_width_attr && self.has_height_attr) || self.has_css_aspect_ratio
    }
}

/// Read a signal bundle written by the page-signal provider.
pub fn load_signals(path: &Path) -> Result<RawSignals> {
    let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| AuditError::Json {
        path: path.to_path_buf(),
        source,
    })
}
