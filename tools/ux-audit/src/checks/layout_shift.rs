use crate::checks::{CheckContext, CheckResult, Details, Meta, Status};
use crate::signals::RawSignals;

/// CLS at or above this maps to a zero contribution.
const POOR_CLS: f64 = 0.25;
/// CLS at or below this maps into the 90-100 band.
const GOOD_CLS: f64 = 0.1;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let cls = signals.cumulative_layout_shift;
    let limit = ctx.thresholds().cls_limit;

    CheckResult {
        score: cls,
        status: Status::from_pass(cls <= limit),
        details: Details::Text(format!("CLS is {cls:.4}. Limit is {limit}.")),
        meta: Some(Meta {
            mapped_score: Some(mapped_score(cls)),
            limit: Some(limit),
            ..Meta::default()
        }),
    }
}

/// Map a raw CLS value onto 0-100 for aggregation.
///
/// `[0, 0.1]` falls linearly from 100 to 90, `(0.1, 0.25)` from 90 towards 50,
/// and anything from 0.25 up scores 0.
pub fn mapped_score(cls: f64) -> f64 {
    let cls = cls.max(0.0);
    if cls >= POOR_CLS {
        0.0
    } else if cls > GOOD_CLS {
        90.0 - (cls - GOOD_CLS) / (POOR_CLS - GOOD_CLS) * 40.0
    } else {
        100.0 - cls / GOOD_CLS * 10.0
    }
}
