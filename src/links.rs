use std::collections::BTreeSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};

pub const BASE_URL: &str = "https://ca.myprotein.com";
pub const CATEGORY_URL: &str = "https://ca.myprotein.com/c/nutrition/protein/";

const PRODUCT_PATH_PREFIX: &str = "/p/sports-nutrition/";

static ANCHOR_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Collect product URLs from the category page HTML.
///
/// Keeps anchors under the product path prefix, resolves them against the
/// site origin, and returns a deduplicated, lexicographically sorted list.
pub fn extract_product_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let mut links: BTreeSet<String> = BTreeSet::new();
    for a in doc.select(&ANCHOR_SEL) {
        let Some(href) = a.value().attr("href") else {
            continue;
        };
        if let Some(path) = href.strip_prefix(BASE_URL) {
            if path.starts_with(PRODUCT_PATH_PREFIX) {
                links.insert(href.to_string());
            }
        } else if href.starts_with(PRODUCT_PATH_PREFIX) {
            links.insert(format!("{BASE_URL}{href}"));
        }
    }

    links.into_iter().collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_product_paths() {
        let html = r#"
            <a href="/p/sports-nutrition/a">A</a>
            <a href="/other/b">B</a>
            <a href="/p/sports-nutrition/a">A again</a>
        "#;
        let links = extract_product_links(html);
        assert_eq!(links, vec!["https://ca.myprotein.com/p/sports-nutrition/a"]);
    }

    #[test]
    fn sorted_and_deduplicated() {
        let html = r#"
            <a href="/p/sports-nutrition/zinc">zinc</a>
            <a href="/p/sports-nutrition/whey">whey</a>
            <a href="/p/sports-nutrition/creatine">creatine</a>
            <a href="/p/sports-nutrition/whey">whey again</a>
        "#;
        let links = extract_product_links(html);
        assert_eq!(
            links,
            vec![
                "https://ca.myprotein.com/p/sports-nutrition/creatine",
                "https://ca.myprotein.com/p/sports-nutrition/whey",
                "https://ca.myprotein.com/p/sports-nutrition/zinc",
            ]
        );
    }

    #[test]
    fn absolute_and_relative_hrefs_collapse() {
        let html = r#"
            <a href="https://ca.myprotein.com/p/sports-nutrition/whey">abs</a>
            <a href="/p/sports-nutrition/whey">rel</a>
        "#;
        let links = extract_product_links(html);
        assert_eq!(links, vec!["https://ca.myprotein.com/p/sports-nutrition/whey"]);
    }

    #[test]
    fn order_independent() {
        let forward = r#"<a href="/p/sports-nutrition/a">1</a><a href="/p/sports-nutrition/b">2</a>"#;
        let reversed = r#"<a href="/p/sports-nutrition/b">2</a><a href="/p/sports-nutrition/a">1</a>"#;
        assert_eq!(extract_product_links(forward), extract_product_links(reversed));
    }

    #[test]
    fn idempotent() {
        let html = r#"<a href="/p/sports-nutrition/a">1</a><a href="/other/x">x</a>"#;
        assert_eq!(extract_product_links(html), extract_product_links(html));
    }

    #[test]
    fn no_anchors_yields_empty() {
        assert!(extract_product_links("<p>nothing here</p>").is_empty());
    }
}
