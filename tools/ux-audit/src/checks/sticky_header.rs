use crate::checks::{CheckContext, CheckResult, Meta};
use crate::signals::RawSignals;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let limit = ctx.thresholds().sticky_header_max_px;
    let height = signals
        .sticky_headers
        .iter()
        .map(|h| h.height)
        .fold(0.0_f64, f64::max);

    let mut result = CheckResult::binary(
        height <= limit,
        format!("Sticky header height: {height}px. Limit: {limit}px."),
    );
    result.meta = Some(Meta {
        height: Some(height),
        limit: Some(limit),
        ..Meta::default()
    });
    result
}
