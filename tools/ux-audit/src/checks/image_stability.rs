use crate::checks::{
    ratio_score, CheckContext, CheckResult, Details, ImageIssue, Issue, Meta, Status,
};
use crate::signals::RawSignals;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let total = signals.images.len();
    let missing: Vec<_> = signals
        .images
        .iter()
        .filter(|img| !img.has_reserved_space())
        .collect();

    let score = ratio_score(total, missing.len());
    let issues: Vec<Issue> = missing
        .iter()
        .take(ctx.profile.max_image_issues)
        .map(|img| Issue::Image(ImageIssue { src: img.src.clone() }))
        .collect();

    CheckResult {
        score,
        status: Status::from_pass(score >= ctx.profile.ratio_pass_percent),
        details: Details::Issues(issues),
        meta: Some(Meta::counts(total, missing.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditProfile;
    use crate::signals::{DeviceContext, ImageRecord};

    fn image(src: &str, width: bool, height: bool, aspect: bool) -> ImageRecord {
        ImageRecord {
            src: src.to_string(),
            has_width_attr: width,
            has_height_attr: height,
            has_css_aspect_ratio: aspect,
        }
    }

    fn run(images: Vec<ImageRecord>) -> CheckResult {
        let profile = AuditProfile::standard();
        let signals = RawSignals { images, ..Default::default() };
        check(&signals, &CheckContext::new(DeviceContext::Mobile, &profile))
    }

    #[test]
    fn no_images_is_a_clean_pass() {
        let result = run(vec![]);
        assert_eq!(result.score, 100.0);
        assert!(result.passed());
    }

    #[test]
    fn aspect_ratio_counts_as_reserved_space() {
        let result = run(vec![
            image("/hero.jpg", false, false, true),
            image("/a.png", true, true, false),
        ]);
        assert_eq!(result.score, 100.0);
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn width_alone_is_not_enough() {
        let result = run(vec![
            image("/logo.svg", true, false, false),
            image("/a.png", true, true, false),
        ]);
        assert_eq!(result.score, 50.0);
        assert!(!result.passed());
        assert_eq!(
            result.details,
            Details::Issues(vec![Issue::Image(ImageIssue { src: "/logo.svg".to_string() })])
        );
    }

    #[test]
    fn issues_are_capped_at_ten() {
        let images: Vec<ImageRecord> = (0..15)
            .map(|i| image(&format!("/{i}.png"), false, false, false))
            .collect();
        let result = run(images);
        assert_eq!(result.issue_count(), 10);
        assert_eq!(result.meta.unwrap().failed, Some(15));
    }
}
