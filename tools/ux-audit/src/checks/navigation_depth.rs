use crate::checks::{snippet, CheckContext, CheckResult, Details, LinkDepth, Meta, Status};
use crate::signals::{LinkRecord, RawSignals};

const LINK_TEXT_CHARS: usize = 30;

pub fn check(signals: &RawSignals, ctx: &CheckContext) -> CheckResult {
    let rules = &ctx.profile.navigation;
    let nav = &signals.navigation;

    // Links inside nav-like regions when the page has any, otherwise every link.
    let internal: Vec<&LinkRecord> = nav
        .links
        .iter()
        .filter(|link| link.in_nav || !nav.has_nav_region)
        .filter(|link| link.hostname.eq_ignore_ascii_case(&nav.hostname))
        .collect();

    if internal.is_empty() {
        return CheckResult {
            score: 100.0,
            status: Status::Pass,
            details: Details::Text("No internal navigation links found.".to_string()),
            meta: Some(Meta { links: Some(Vec::new()), ..Meta::default() }),
        };
    }

    let links: Vec<LinkDepth> = internal
        .iter()
        .map(|link| LinkDepth {
            text: link_text(&link.text),
            href: link.path.clone(),
            depth: path_depth(&link.path),
        })
        .collect();

    let shallow = links.iter().filter(|l| l.depth <= rules.max_depth).count();
    let percentage = shallow as f64 / links.len() as f64 * 100.0;

    CheckResult {
        score: percentage,
        status: Status::from_pass(percentage >= rules.pass_percent),
        details: Details::Text(format!(
            "{shallow} out of {} navigation links are \u{2264}{} clicks deep ({percentage:.1}%).",
            links.len(),
            rules.max_depth,
        )),
        meta: Some(Meta {
            total: Some(links.len()),
            passed: Some(shallow),
            failed: Some(links.len() - shallow),
            links: Some(links),
            ..Meta::default()
        }),
    }
}

/// Number of non-empty path segments, ignoring any query or fragment.
pub fn path_depth(path: &str) -> usize {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).count()
}

fn link_text(text: &str) -> String {
    let text = snippet(text, LINK_TEXT_CHARS);
    if text.is_empty() {
        "No Text".to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuditProfile;
    use crate::signals::{DeviceContext, NavigationSignals};

    fn link(path: &str, hostname: &str, in_nav: bool) -> LinkRecord {
        LinkRecord {
            text: path.trim_matches('/').to_string(),
            path: path.to_string(),
            hostname: hostname.to_string(),
            in_nav,
        }
    }

    fn run(has_nav_region: bool, links: Vec<LinkRecord>) -> CheckResult {
        let profile = AuditProfile::standard();
        let signals = RawSignals {
            navigation: NavigationSignals {
                hostname: "example.com".to_string(),
                has_nav_region,
                links,
            },
            ..Default::default()
        };
        check(&signals, &CheckContext::new(DeviceContext::Desktop, &profile))
    }

    #[test]
    fn three_of_four_shallow_links_fail() {
        let result = run(
            true,
            vec![
                link("/home", "example.com", true),
                link("/about", "example.com", true),
                link("/products/software/tools", "example.com", true),
                link("/products/software/tools/v1", "example.com", true),
            ],
        );
        assert_eq!(result.score, 75.0);
        assert!(!result.passed());
        assert_eq!(
            result.details,
            Details::Text("3 out of 4 navigation links are \u{2264}3 clicks deep (75.0%).".to_string())
        );
    }

    #[test]
    fn no_internal_links_passes() {
        let result = run(true, vec![link("/deep/a/b/c/d", "other.com", true)]);
        assert_eq!(result.score, 100.0);
        assert!(result.passed());
    }

    #[test]
    fn nav_region_restricts_candidates() {
        let result = run(
            true,
            vec![link("/a", "example.com", true), link("/a/b/c/d/e", "example.com", false)],
        );
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn without_nav_region_every_link_counts() {
        let result = run(
            false,
            vec![link("/a", "example.com", false), link("/a/b/c/d/e", "example.com", false)],
        );
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn depth_ignores_slashes_and_query() {
        assert_eq!(path_depth("/"), 0);
        assert_eq!(path_depth("/a//b/"), 2);
        assert_eq!(path_depth("/a/b?c=/d/e"), 2);
    }

    #[test]
    fn empty_link_text_is_labelled() {
        assert_eq!(link_text("   "), "No Text");
    }
}
