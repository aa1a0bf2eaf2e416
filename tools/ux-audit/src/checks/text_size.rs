use crate::checks::{
    ratio_score, snippet, CheckContext, CheckResult, Details, Issue, Meta, Status, TextSizeIssue,
};
use crate::signals::RawSignals;

const LABEL_CHARS: usize = 20;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let min_size = ctx.thresholds().text_min_px;
    let total = signals.text_elements.len();

    let small: Vec<_> = signals
        .text_elements
        .iter()
        .filter(|el| el.font_size < min_size)
        .collect();

    let score = ratio_score(total, small.len());
    let issues: Vec<Issue> = small
        .iter()
        .take(ctx.profile.max_text_size_issues)
        .map(|el| {
            Issue::TextSize(TextSizeIssue {
                tag: el.tag.clone(),
                text: snippet(&el.text, LABEL_CHARS),
                font_size: el.font_size,
            })
        })
        .collect();

    CheckResult {
        score,
        status: Status::from_pass(score >= ctx.profile.ratio_pass_percent),
        details: Details::Issues(issues),
        meta: Some(Meta {
            limit: Some(min_size),
            ..Meta::counts(total, small.len())
        }),
    }
}
