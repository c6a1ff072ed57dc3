use scraper::{Html, Selector};
use std::collections::BTreeSet;

pub struct LinkScraper<'a> {
    document: &'a Html,
}

impl<'a> LinkScraper<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    pub fn portfolio_urls(&self, homepage_url: &str) -> BTreeSet<String> {
        let Ok(selector) = Selector::parse("a[href]") else {
            return BTreeSet::new();
        };

        self.document
            .select(&selector)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| href.contains(homepage_url) && *href != homepage_url)
            .map(str::to_string)
            .collect()
    }
}

// .../allocation/aggressive-global-income/ -> aggressive-global-income
pub fn portfolio_slug(url: &str) -> Option<&str> {
    url.split('/').rfind(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::Scraper;

    const HOME: &str = "http://www.lazyportfolioetf.com/allocation/";

    #[test]
    fn discovers_distinct_sorted_portfolios() {
        let page = Scraper::new(
            r#"
            <a href="http://www.lazyportfolioetf.com/allocation/">All</a>
            <a href="http://www.lazyportfolioetf.com/allocation/foo/">Foo</a>
            <a href="http://www.lazyportfolioetf.com/allocation/bar/">Bar</a>
            <a href="http://www.lazyportfolioetf.com/allocation/foo/">Foo again</a>
            <a href="http://www.lazyportfolioetf.com/about/">About</a>
            <a name="anchor">no href</a>
            "#,
        );

        let urls: Vec<String> = page.links().portfolio_urls(HOME).into_iter().collect();
        assert_eq!(
            urls,
            vec![
                "http://www.lazyportfolioetf.com/allocation/bar/".to_string(),
                "http://www.lazyportfolioetf.com/allocation/foo/".to_string(),
            ]
        );

        let slugs: Vec<&str> = urls.iter().filter_map(|u| portfolio_slug(u)).collect();
        assert_eq!(slugs, vec!["bar", "foo"]);
    }

    #[test]
    fn relative_links_are_ignored() {
        let page = Scraper::new(r#"<a href="/allocation/foo/">Foo</a>"#);
        assert!(page.links().portfolio_urls(HOME).is_empty());
    }

    #[test]
    fn slug_ignores_trailing_slash() {
        assert_eq!(
            portfolio_slug("http://www.lazyportfolioetf.com/allocation/aggressive-global-income/"),
            Some("aggressive-global-income")
        );
        assert_eq!(
            portfolio_slug("http://www.lazyportfolioetf.com/allocation/all-weather"),
            Some("all-weather")
        );
        assert_eq!(portfolio_slug("///"), None);
    }
}
