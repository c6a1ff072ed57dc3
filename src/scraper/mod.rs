mod links;
mod table;

pub use links::{portfolio_slug, LinkScraper};
pub use table::{Row, TableScraper};

use scraper::Html;

pub struct Scraper {
    document: Html,
}

impl Scraper {
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    pub fn links(&self) -> LinkScraper {
        LinkScraper::new(&self.document)
    }

    pub fn tables(&self) -> TableScraper {
        TableScraper::new(&self.document)
    }
}
