//! Coarse content-type classification used to pick readability targets.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::config::{ReadabilityTargets, TargetRange};
use crate::signals::ClassificationSignals;

static PRODUCT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/(product|products|p|item|items|shop|dp)(/|$)").unwrap()
});

static ARTICLE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)/(blog|blogs|article|articles|news|post|posts|stories)(/|$)").unwrap()
});

static BUY_CTA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(add to (cart|bag|basket)|buy( it)? now|purchase|checkout)\b").unwrap()
});

const PRODUCT_SCHEMA_TYPES: &[&str] = &["Product", "Offer", "AggregateRating"];
const ARTICLE_SCHEMA_TYPES: &[&str] = &["BlogPosting", "Article", "NewsArticle"];

const LONG_FORM_WORDS: usize = 500;
const SHORT_FORM_WORDS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageType {
    #[serde(rename = "Product Page")]
    Product,
    #[serde(rename = "Article/Blog")]
    Article,
}

impl PageType {
    pub fn label(&self) -> &'static str {
        match self {
            PageType::Product => "Product Page",
            PageType::Article => "Article/Blog",
        }
    }

    pub fn targets(&self, readability: &ReadabilityTargets) -> TargetRange {
        match self {
            PageType::Product => readability.product,
            PageType::Article => readability.article,
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// First matching rule wins: product evidence, then article evidence, then
/// word-count fallbacks. Anything undecided is treated as an article.
pub fn classify(signals: &ClassificationSignals) -> PageType {
    let path = url_path(&signals.url);
    let has_buy_cta = signals.cta_texts.iter().any(|t| BUY_CTA.is_match(t));

    if PRODUCT_PATH.is_match(path)
        || has_schema_type(signals, PRODUCT_SCHEMA_TYPES)
        || has_buy_cta
        || signals.markers.add_to_cart
    {
        return PageType::Product;
    }

    if ARTICLE_PATH.is_match(path)
        || has_schema_type(signals, ARTICLE_SCHEMA_TYPES)
        || (signals.markers.article && signals.word_count > LONG_FORM_WORDS)
    {
        return PageType::Article;
    }

    if signals.word_count > LONG_FORM_WORDS {
        return PageType::Article;
    }
    if signals.word_count < SHORT_FORM_WORDS && (signals.markers.price || has_buy_cta) {
        return PageType::Product;
    }
    PageType::Article
}

fn has_schema_type(signals: &ClassificationSignals, wanted: &[&str]) -> bool {
    signals
        .structured_data_types
        .iter()
        .any(|t| wanted.iter().any(|w| t.trim().eq_ignore_ascii_case(w)))
}

/// Path portion of a URL, without scheme, host, query or fragment.
fn url_path(url: &str) -> &str {
    let without_scheme = match url.find("://") {
        Some(i) => &url[i + 3..],
        None => url,
    };
    let end = without_scheme.find(['?', '#']).unwrap_or(without_scheme.len());
    let without_query = &without_scheme[..end];
    match without_query.find('/') {
        Some(i) if url.contains("://") => &without_query[i..],
        Some(_) => without_query,
        None => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::DomMarkers;

    fn signals(url: &str) -> ClassificationSignals {
        ClassificationSignals { url: url.to_string(), ..Default::default() }
    }

    #[test]
    fn product_url_wins() {
        assert_eq!(classify(&signals("https://shop.test/product/blue-shoe")), PageType::Product);
        assert_eq!(classify(&signals("https://shop.test/products")), PageType::Product);
    }

    #[test]
    fn product_evidence_beats_article_evidence() {
        let mut s = signals("https://example.com/blog/review");
        s.structured_data_types = vec!["Offer".to_string()];
        assert_eq!(classify(&s), PageType::Product);
    }

    #[test]
    fn buy_cta_marks_product() {
        let mut s = signals("https://example.com/x");
        s.cta_texts = vec!["Add to Cart".to_string()];
        assert_eq!(classify(&s), PageType::Product);
    }

    #[test]
    fn article_by_schema_or_path() {
        let mut s = signals("https://example.com/about");
        s.structured_data_types = vec!["NewsArticle".to_string()];
        assert_eq!(classify(&s), PageType::Article);
        assert_eq!(classify(&signals("https://example.com/news/today?ref=1")), PageType::Article);
    }

    #[test]
    fn short_page_with_price_is_product() {
        let mut s = signals("https://example.com/widget");
        s.word_count = 120;
        s.markers = DomMarkers { price: true, ..Default::default() };
        assert_eq!(classify(&s), PageType::Product);
    }

    #[test]
    fn mid_length_page_with_price_defaults_to_article() {
        let mut s = signals("https://example.com/widget");
        s.word_count = 400;
        s.markers = DomMarkers { price: true, ..Default::default() };
        assert_eq!(classify(&s), PageType::Article);
    }

    #[test]
    fn path_segments_must_match_whole() {
        assert_eq!(url_path("https://example.com/productivity-tips"), "/productivity-tips");
        assert_eq!(classify(&signals("https://example.com/productivity-tips")), PageType::Article);
    }

    #[test]
    fn url_path_handles_bare_hosts_and_paths() {
        assert_eq!(url_path("https://example.com"), "/");
        assert_eq!(url_path("/blog/post-1#top"), "/blog/post-1");
    }

    #[test]
    fn slashes_in_query_are_not_path() {
        assert_eq!(url_path("https://a.test?r=/product/x"), "/");
        assert_eq!(url_path("https://a.test/blog/post#/product/x"), "/blog/post");
        assert_eq!(classify(&signals("https://a.test?r=/product/x")), PageType::Article);
    }

    #[test]
    fn targets_follow_page_type() {
        let targets = ReadabilityTargets::default();
        assert_eq!(PageType::Product.targets(&targets).min, 40.0);
        assert_eq!(PageType::Article.targets(&targets).max, 70.0);
    }
}
