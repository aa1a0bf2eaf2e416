use crate::checks::{CheckContext, CheckResult, Meta};
use crate::config::InterstitialRules;
use crate::signals::{InterstitialSignals, Position, PositionedElement, RawSignals, Size};

const OVERLAY_REASON: &str = "Full-screen overlay detected";
const SCROLL_BLOCK_REASON: &str = "Scroll blocking detected";
const MODAL_REASON: &str = "Large modal detected";

/// Which kinds of obstruction were found on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterstitialFlags {
    pub overlay: bool,
    pub scroll_block: bool,
    pub modal: bool,
}

impl InterstitialFlags {
    pub fn reasons(&self) -> Vec<String> {
        [
            (self.overlay, OVERLAY_REASON),
            (self.scroll_block, SCROLL_BLOCK_REASON),
            (self.modal, MODAL_REASON),
        ]
        .into_iter()
        .filter(|(found, _)| *found)
        .map(|(_, reason)| reason.to_string())
        .collect()
    }
}

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let label = &ctx.thresholds().label;
    let reasons = detect(&signals.interstitials, &ctx.profile.interstitial).reasons();

    let mut result = if reasons.is_empty() {
        CheckResult::binary(true, format!("{label}: No intrusive interstitials detected."))
    } else {
        CheckResult::binary(false, format!("{label}: {}", reasons.join(", ")))
    };
    result.meta = Some(Meta { reasons: Some(reasons), ..Meta::default() });
    result
}

/// Combine the provider's own flags with what the positioned-element
/// geometry shows.
pub fn detect(signals: &InterstitialSignals, rules: &InterstitialRules) -> InterstitialFlags {
    let mut flags = InterstitialFlags {
        overlay: signals.overlay,
        scroll_block: signals.scroll_block,
        modal: signals.modal,
    };

    for el in &signals.positioned_elements {
        if signals.viewport.is_some_and(|vp| is_overlay(el, vp, rules)) {
            flags.overlay = true;
        } else if is_modal(el, rules) {
            flags.modal = true;
        }
    }
    flags
}

fn is_overlay(el: &PositionedElement, viewport: Size, rules: &InterstitialRules) -> bool {
    matches!(el.position, Position::Fixed | Position::Absolute)
        && viewport.width > 0.0
        && viewport.height > 0.0
        && el.width >= viewport.width * rules.overlay_coverage
        && el.height >= viewport.height * rules.overlay_coverage
        && el.z_index > rules.overlay_min_z_index
}

fn is_modal(el: &PositionedElement, rules: &InterstitialRules) -> bool {
    el.position == Position::Fixed
        && el.width >= rules.modal_min_width
        && el.height >= rules.modal_min_height
        && el.z_index > rules.modal_min_z_index
}
