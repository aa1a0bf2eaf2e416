use crate::checks::{CheckContext, CheckResult};
use crate::signals::RawSignals;

const REQUIRED_DIRECTIVES: &[&str] = &["width=device-width", "initial-scale=1"];

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    if !ctx.thresholds().require_viewport_meta {
        return CheckResult::binary(true, "Not required for desktop.");
    }

    match signals.viewport_meta.as_deref() {
        None => CheckResult::binary(false, "Viewport meta tag missing."),
        Some(content) if is_responsive(content) => {
            CheckResult::binary(true, "Viewport meta tag is correct.")
        }
        Some(content) => CheckResult::binary(
            false,
            format!("Viewport meta tag found but content is: {content}"),
        ),
    }
}

fn is_responsive(content: &str) -> bool {
    let normalized: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    REQUIRED_DIRECTIVES.iter().all(|d| normalized.contains(d))
}
