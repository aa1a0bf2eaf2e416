use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

use crate::checks::CheckKind;
use crate::error::{AuditError, Result};
use crate::signals::DeviceContext;

/// Widths (px) a mobile render is re-checked at for horizontal overflow.
pub const MOBILE_SCROLL_BREAKPOINTS: &[u32] = &[320, 375, 414, 480];

/// Every threshold, cap and weight the audit uses.
///
/// A profile is built once and shared read-only by every audit run. Partial
/// JSON files are accepted: any field left out keeps its standard value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditProfile {
    #[serde(deserialize_with = "deserialize_mobile")]
    pub mobile: DeviceThresholds,
    #[serde(deserialize_with = "deserialize_desktop")]
    pub desktop: DeviceThresholds,
    /// Minimum passing share (percent) for the ratio checks: tap targets,
    /// text size and image stability.
    pub ratio_pass_percent: f64,
    pub max_text_size_issues: usize,
    pub max_image_issues: usize,
    pub readability: ReadabilityTargets,
    pub navigation: NavigationRules,
    pub interstitial: InterstitialRules,
    pub weights: CheckWeights,
}

impl Default for AuditProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl AuditProfile {
    pub fn standard() -> Self {
        Self {
            mobile: DeviceThresholds::mobile(),
            desktop: DeviceThresholds::desktop(),
            ratio_pass_percent: 90.0,
            max_text_size_issues: 20,
            max_image_issues: 10,
            readability: ReadabilityTargets::default(),
            navigation: NavigationRules::default(),
            interstitial: InterstitialRules::default(),
            weights: CheckWeights::default(),
        }
    }

    /// Stricter accessibility profile: larger touch targets (the 48/32px
    /// minimums), 16px body text on desktop too, and a 95% ratio pass bar.
    pub fn strict() -> Self {
        let mut profile = Self::standard();
        profile.mobile.tap_target_min_px = 48.0;
        profile.desktop.tap_target_min_px = 32.0;
        profile.desktop.text_min_px = 16.0;
        profile.ratio_pass_percent = 95.0;
        profile
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| AuditError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve a `--profile` argument: a built-in name or a JSON file path.
    pub fn resolve(name_or_path: &str) -> Result<Self> {
        match name_or_path {
            "standard" => Ok(Self::standard()),
            "strict" => Ok(Self::strict()),
            other if other.ends_with(".json") => Self::from_json_file(Path::new(other)),
            other => Err(AuditError::UnknownProfile(other.to_string())),
        }
    }

    pub fn device(&self, device: DeviceContext) -> &DeviceThresholds {
        match device {
            DeviceContext::Mobile => &self.mobile,
            DeviceContext::Desktop => &self.desktop,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceThresholds {
    /// Prefix used in human-readable details, e.g. "Mobile".
    pub label: String,
    pub cls_limit: f64,
    pub tap_target_min_px: f64,
    pub text_min_px: f64,
    pub sticky_header_max_px: f64,
    pub require_viewport_meta: bool,
    pub scroll_breakpoints: Vec<u32>,
}

impl DeviceThresholds {
    pub fn mobile() -> Self {
        Self {
            label: "Mobile".to_string(),
            cls_limit: 0.15,
            tap_target_min_px: 44.0,
            text_min_px: 16.0,
            sticky_header_max_px: 64.0,
            require_viewport_meta: true,
            scroll_breakpoints: MOBILE_SCROLL_BREAKPOINTS.to_vec(),
        }
    }

    pub fn desktop() -> Self {
        Self {
            label: "Desktop".to_string(),
            cls_limit: 0.10,
            tap_target_min_px: 24.0,
            text_min_px: 14.0,
            sticky_header_max_px: 100.0,
            require_viewport_meta: false,
            scroll_breakpoints: Vec::new(),
        }
    }
}

/// Partial device thresholds as written in a profile file. Missing fields
/// fall back to the device's own standard values, not the other device's.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DeviceOverrides {
    label: Option<String>,
    cls_limit: Option<f64>,
    tap_target_min_px: Option<f64>,
    text_min_px: Option<f64>,
    sticky_header_max_px: Option<f64>,
    require_viewport_meta: Option<bool>,
    scroll_breakpoints: Option<Vec<u32>>,
}

impl DeviceOverrides {
    fn apply(self, base: DeviceThresholds) -> DeviceThresholds {
        DeviceThresholds {
            label: self.label.unwrap_or(base.label),
            cls_limit: self.cls_limit.unwrap_or(base.cls_limit),
            tap_target_min_px: self.tap_target_min_px.unwrap_or(base.tap_target_min_px),
            text_min_px: self.text_min_px.unwrap_or(base.text_min_px),
            sticky_header_max_px: self.sticky_header_max_px.unwrap_or(base.sticky_header_max_px),
            require_viewport_meta: self
                .require_viewport_meta
                .unwrap_or(base.require_viewport_meta),
            scroll_breakpoints: self.scroll_breakpoints.unwrap_or(base.scroll_breakpoints),
        }
    }
}

fn deserialize_mobile<'de, D>(deserializer: D) -> std::result::Result<DeviceThresholds, D::Error>
where
    D: Deserializer<'de>,
{
    DeviceOverrides::deserialize(deserializer).map(|o| o.apply(DeviceThresholds::mobile()))
}

fn deserialize_desktop<'de, D>(deserializer: D) -> std::result::Result<DeviceThresholds, D::Error>
where
    D: Deserializer<'de>,
{
    DeviceOverrides::deserialize(deserializer).map(|o| o.apply(DeviceThresholds::desktop()))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadabilityTargets {
    pub product: TargetRange,
    pub article: TargetRange,
    /// Added to the upper bound only when deciding pass/fail.
    pub max_tolerance: f64,
    /// Paragraphs must be strictly longer than this (in chars) to be diagnosed.
    pub paragraph_min_chars: usize,
    pub max_paragraph_issues: usize,
    pub long_sentence_asl: f64,
    pub complex_vocabulary_asw: f64,
}

impl Default for ReadabilityTargets {
    fn default() -> Self {
        Self {
            product: TargetRange { min: 40.0, max: 60.0 },
            article: TargetRange { min: 50.0, max: 70.0 },
            max_tolerance: 15.0,
            paragraph_min_chars: 50,
            max_paragraph_issues: 5,
            long_sentence_asl: 20.0,
            complex_vocabulary_asw: 1.6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationRules {
    pub max_depth: usize,
    pub pass_percent: f64,
}

impl Default for NavigationRules {
    fn default() -> Self {
        Self { max_depth: 3, pass_percent: 80.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterstitialRules {
    /// Fraction of both viewport dimensions an overlay must cover.
    pub overlay_coverage: f64,
    /// Overlay z-index must be strictly greater than this.
    pub overlay_min_z_index: i64,
    pub modal_min_width: f64,
    pub modal_min_height: f64,
    /// Modal z-index must be strictly greater than this.
    pub modal_min_z_index: i64,
}

impl Default for InterstitialRules {
    fn default() -> Self {
        Self {
            overlay_coverage: 0.9,
            overlay_min_z_index: 1000,
            modal_min_width: 300.0,
            modal_min_height: 250.0,
            modal_min_z_index: 999,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckWeights {
    pub cls: f64,
    pub tap_targets: f64,
    pub text_size: f64,
    pub viewport: f64,
    pub horizontal_scroll: f64,
    pub sticky_header: f64,
    pub readability: f64,
    pub navigation_depth: f64,
    pub intrusive_interstitials: f64,
    pub image_stability: f64,
}

impl Default for CheckWeights {
    fn default() -> Self {
        Self {
            cls: 2.0,
            tap_targets: 3.0,
            text_size: 3.0,
            viewport: 3.0,
            horizontal_scroll: 3.0,
            sticky_header: 1.0,
            readability: 2.0,
            navigation_depth: 2.0,
            intrusive_interstitials: 3.0,
            image_stability: 2.0,
        }
    }
}

impl CheckWeights {
    pub fn weight(&self, kind: CheckKind) -> f64 {
        match kind {
            CheckKind::LayoutShift => self.cls,
            CheckKind::TapTargets => self.tap_targets,
            CheckKind::TextSize => self.text_size,
            CheckKind::Viewport => self.viewport,
            CheckKind::HorizontalScroll => self.horizontal_scroll,
            CheckKind::StickyHeader => self.sticky_header,
            CheckKind::Readability => self.readability,
            CheckKind::NavigationDepth => self.navigation_depth,
            CheckKind::IntrusiveInterstitials => self.intrusive_interstitials,
            CheckKind::ImageStability => self.image_stability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_standard_values() {
        let profile: AuditProfile =
            serde_json::from_str(r#"{"mobile": {"tapTargetMinPx": 48}, "weights": {"cls": 5}}"#)
                .unwrap();
        assert_eq!(profile.mobile.tap_target_min_px, 48.0);
        assert_eq!(profile.mobile.cls_limit, 0.15);
        assert_eq!(profile.mobile.scroll_breakpoints, MOBILE_SCROLL_BREAKPOINTS);
        assert_eq!(profile.weights.cls, 5.0);
        assert_eq!(profile.weights.tap_targets, 3.0);
        assert_eq!(profile.desktop, DeviceThresholds::desktop());
    }

    #[test]
    fn partial_desktop_override_keeps_desktop_defaults() {
        let profile: AuditProfile =
            serde_json::from_str(r#"{"desktop": {"clsLimit": 0.05}}"#).unwrap();
        assert_eq!(profile.desktop.cls_limit, 0.05);
        assert_eq!(profile.desktop.label, "Desktop");
        assert_eq!(profile.desktop.tap_target_min_px, 24.0);
        assert!(profile.desktop.scroll_breakpoints.is_empty());
    }

    #[test]
    fn strict_profile_raises_touch_minimums() {
        let strict = AuditProfile::strict();
        assert_eq!(strict.device(DeviceContext::Mobile).tap_target_min_px, 48.0);
        assert_eq!(strict.device(DeviceContext::Desktop).tap_target_min_px, 32.0);
        assert!(strict.ratio_pass_percent > AuditProfile::standard().ratio_pass_percent);
    }

    #[test]
    fn resolve_rejects_unknown_names() {
        assert!(matches!(
            AuditProfile::resolve("lenient"),
            Err(AuditError::UnknownProfile(name)) if name == "lenient"
        ));
        assert_eq!(AuditProfile::resolve("standard").unwrap(), AuditProfile::standard());
    }

    #[test]
    fn resolve_loads_json_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("profile.json");
        std::fs::write(&path, r#"{"ratioPassPercent": 75}"#).unwrap();

        let profile = AuditProfile::resolve(path.to_str().unwrap()).unwrap();
        assert_eq!(profile.ratio_pass_percent, 75.0);
    }

    #[test]
    fn standard_weights_sum() {
        let weights = CheckWeights::default();
        let total: f64 = CheckKind::ALL.iter().map(|k| weights.weight(*k)).sum();
        assert_eq!(total, 24.0);
    }
}
