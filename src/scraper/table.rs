use crate::error::{Result, ScraperError};
use scraper::{ElementRef, Html, Selector};

pub type Row = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extracted {
    Found(Vec<Row>),
    Absent,
}

impl Extracted {
    pub fn require(self, table: &'static str) -> Result<Vec<Row>> {
        match self {
            Extracted::Found(rows) => Ok(rows),
            Extracted::Absent => Err(ScraperError::MissingTable { table }.into()),
        }
    }

    pub fn found(self) -> Option<Vec<Row>> {
        match self {
            Extracted::Found(rows) => Some(rows),
            Extracted::Absent => None,
        }
    }
}

pub struct TableScraper<'a> {
    document: &'a Html,
}

impl<'a> TableScraper<'a> {
    pub(crate) fn new(document: &'a Html) -> Self {
        Self { document }
    }

    pub fn extract(&self, id: &str) -> Result<Extracted> {
        let table_selector = parse_selector(&format!("table#{}", id))?;
        let body_selector = parse_selector("tbody")?;

        let Some(table) = self.document.select(&table_selector).next() else {
            return Ok(Extracted::Absent);
        };
        let Some(body) = table.select(&body_selector).next() else {
            return Ok(Extracted::Absent);
        };

        let row_selector = parse_selector("tr")?;
        let cell_selector = parse_selector("td")?;

        let rows = body
            .select(&row_selector)
            .map(|row| {
                row.select(&cell_selector)
                    .map(cell_text)
                    .filter(|text| !text.is_empty())
                    .collect::<Row>()
            })
            .collect();

        Ok(Extracted::Found(rows))
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| ScraperError::SelectorError(format!("{}: {}", selector, e)).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scraper::Scraper;

    const PAGE: &str = r#"
        <html><body>
        <table id="portfolioAllocation">
          <thead><tr><th>Weight</th><th>Ticker</th></tr></thead>
          <tbody>
            <tr><td> 40.00% </td><td></td><td>VTI</td></tr>
            <tr><td>60.00%</td><td><a href="/x">BND</a> <span>bond</span></td></tr>
            <tr><td>   </td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn returns_trimmed_non_empty_cells() {
        let page = Scraper::new(PAGE);
        let rows = page.tables().extract("portfolioAllocation").unwrap();
        assert_eq!(
            rows,
            Extracted::Found(vec![
                vec!["40.00%".to_string(), "VTI".to_string()],
                vec!["60.00%".to_string(), "BND bond".to_string()],
                vec![],
            ])
        );
    }

    #[test]
    fn unknown_id_is_absent() {
        let page = Scraper::new(PAGE);
        let rows = page.tables().extract("portfolioRatingSummary").unwrap();
        assert_eq!(rows, Extracted::Absent);
        assert!(rows.require("portfolioRatingSummary").is_err());
    }

    #[test]
    fn bare_rows_get_implicit_body() {
        // html5ever inserts an implicit tbody around bare rows
        let page = Scraper::new(r#"<table id="t"><tr><td>a</td></tr></table>"#);
        let rows = page.tables().extract("t").unwrap();
        assert_eq!(rows, Extracted::Found(vec![vec!["a".to_string()]]));
    }

    #[test]
    fn empty_table_is_absent_body() {
        let page = Scraper::new(r#"<table id="t"></table>"#);
        assert_eq!(page.tables().extract("t").unwrap(), Extracted::Absent);
    }
}
