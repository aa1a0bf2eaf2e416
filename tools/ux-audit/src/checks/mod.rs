pub mod horizontal_scroll;
pub mod image_stability;
pub mod interstitials;
pub mod layout_shift;
pub mod navigation_depth;
pub mod readability;
pub mod sticky_header;
pub mod tap_targets;
pub mod text_size;
pub mod viewport;

use serde::Serialize;
use std::fmt;

use crate::config::{AuditProfile, DeviceThresholds};
use crate::page_type::PageType;
use crate::signals::{DeviceContext, RawSignals};
use crate::text_stats::{ParagraphIssue, TextStats};

/// The audit dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CheckKind {
    LayoutShift,
    TapTargets,
    TextSize,
    Viewport,
    HorizontalScroll,
    StickyHeader,
    Readability,
    NavigationDepth,
    IntrusiveInterstitials,
    ImageStability,
}

impl CheckKind {
    pub const ALL: [CheckKind; 10] = [
        CheckKind::LayoutShift,
        CheckKind::TapTargets,
        CheckKind::TextSize,
        CheckKind::Viewport,
        CheckKind::HorizontalScroll,
        CheckKind::StickyHeader,
        CheckKind::Readability,
        CheckKind::NavigationDepth,
        CheckKind::IntrusiveInterstitials,
        CheckKind::ImageStability,
    ];

    /// Key used for this check in the serialized report.
    pub fn key(&self) -> &'static str {
        match self {
            CheckKind::LayoutShift => "cls",
            CheckKind::TapTargets => "tapTargets",
            CheckKind::TextSize => "textSize",
            CheckKind::Viewport => "viewport",
            CheckKind::HorizontalScroll => "horizontalScroll",
            CheckKind::StickyHeader => "stickyHeader",
            CheckKind::Readability => "readability",
            CheckKind::NavigationDepth => "navigationDepth",
            CheckKind::IntrusiveInterstitials => "intrusiveInterstitials",
            CheckKind::ImageStability => "imageStability",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CheckKind::LayoutShift => "Layout shift (CLS)",
            CheckKind::TapTargets => "Tap target size",
            CheckKind::TextSize => "Text size",
            CheckKind::Viewport => "Viewport meta tag",
            CheckKind::HorizontalScroll => "Horizontal scroll",
            CheckKind::StickyHeader => "Sticky header height",
            CheckKind::Readability => "Readability",
            CheckKind::NavigationDepth => "Navigation depth",
            CheckKind::IntrusiveInterstitials => "Intrusive interstitials",
            CheckKind::ImageStability => "Image dimension stability",
        }
    }

    /// Binary checks contribute all-or-nothing to the overall score.
    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            CheckKind::Viewport
                | CheckKind::HorizontalScroll
                | CheckKind::StickyHeader
                | CheckKind::IntrusiveInterstitials
        )
    }

    pub fn evaluator(&self) -> CheckFn {
        match self {
            CheckKind::LayoutShift => layout_shift::check,
            CheckKind::TapTargets => tap_targets::check,
            CheckKind::TextSize => text_size::check,
            CheckKind::Viewport => viewport::check,
            CheckKind::HorizontalScroll => horizontal_scroll::check,
            CheckKind::StickyHeader => sticky_header::check,
            CheckKind::Readability => readability::check,
            CheckKind::NavigationDepth => navigation_depth::check,
            CheckKind::IntrusiveInterstitials => interstitials::check,
            CheckKind::ImageStability => image_stability::check,
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

pub type CheckFn = fn(&RawSignals, &CheckContext) -> CheckResult;

/// What every evaluator gets besides the signals.
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    pub device: DeviceContext,
    pub profile: &'a AuditProfile,
}

impl<'a> CheckContext<'a> {
    pub fn new(device: DeviceContext, profile: &'a AuditProfile) -> Self {
        Self { device, profile }
    }

    pub fn thresholds(&self) -> &'a DeviceThresholds {
        self.profile.device(self.device)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

impl Status {
    pub fn from_pass(passed: bool) -> Self {
        if passed {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        *self == Status::Pass
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    /// 0-100 for most checks; raw CLS for layout shift and raw Flesch
    /// reading ease for readability.
    pub score: f64,
    pub status: Status,
    pub details: Details,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl CheckResult {
    /// A pass/fail check whose score is 100 or 0.
    pub fn binary(passed: bool, details: impl Into<String>) -> Self {
        Self {
            score: if passed { 100.0 } else { 0.0 },
            status: Status::from_pass(passed),
            details: Details::Text(details.into()),
            meta: None,
        }
    }

    pub fn passed(&self) -> bool {
        self.status.is_pass()
    }

    pub fn issue_count(&self) -> usize {
        match &self.details {
            Details::Issues(issues) => issues.len(),
            Details::Text(_) => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Details {
    Text(String),
    Issues(Vec<Issue>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Issue {
    TapTarget(ElementIssue),
    TextSize(TextSizeIssue),
    Image(ImageIssue),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIssue {
    pub tag: String,
    pub text: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSizeIssue {
    pub tag: String,
    pub text: String,
    pub font_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageIssue {
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDepth {
    pub text: String,
    pub href: String,
    pub depth: usize,
}

/// Supporting numbers for a check. Only the fields a check fills are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapped_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_stats: Option<TextStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problematic_content: Option<Vec<ParagraphIssue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<LinkDepth>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<String>>,
}

impl Meta {
    pub fn counts(total: usize, failed: usize) -> Self {
        Self {
            total: Some(total),
            passed: Some(total - failed),
            failed: Some(failed),
            ..Self::default()
        }
    }
}

/// Share of passing items as a 0-100 score; 100 when there is nothing to check.
pub fn ratio_score(total: usize, failed: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    100.0 * total.saturating_sub(failed) as f64 / total as f64
}

/// First `max_chars` characters of `text`, trimmed.
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.trim().chars().take(max_chars).collect()
}
