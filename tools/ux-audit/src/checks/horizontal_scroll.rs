use crate::checks::{CheckContext, CheckResult};
use crate::signals::RawSignals;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let overflow = &signals.horizontal_overflow;
    let breakpoints = &ctx.thresholds().scroll_breakpoints;

    let mut failing: Vec<String> = Vec::new();
    if overflow.current {
        failing.push("Current Viewport".to_string());
    }
    // Only the widths this device is configured to re-check count.
    for bp in &overflow.breakpoints {
        if bp.overflows && breakpoints.contains(&bp.width) {
            failing.push(format!("{}px", bp.width));
        }
    }

    if failing.is_empty() {
        CheckResult::binary(true, "No horizontal scroll detected.")
    } else {
        CheckResult::binary(
            false,
            format!("Horizontal scroll detected at: {}", failing.join(", ")),
        )
    }
}
