mod allocation;
mod historical;
mod rating;
mod returns;

pub use allocation::Allocation;
pub use historical::HistoricalReturns;
pub use rating::RatingSummary;
pub use returns::ReturnsByPeriod;

use crate::error::{Result, ScraperError};
use crate::scraper::Row;
use mongodb::bson::{Bson, Document};

pub const PORTFOLIO_KEY: &str = "Portfolio";

// Starts an unrelated trailing section
const SENTINEL: &str = "Components";

pub trait PortfolioTable {
    const TABLE_ID: &'static str;
    const COLLECTION: &'static str;

    fn to_document(&self, portfolio: &str) -> Document;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn portfolio_document(portfolio: &str) -> Document {
    let mut document = Document::new();
    document.insert(PORTFOLIO_KEY, portfolio);
    document
}

fn until_sentinel(rows: Vec<Row>) -> impl Iterator<Item = Row> {
    rows.into_iter()
        .take_while(|row| !row.iter().any(|cell| cell == SENTINEL))
}

fn first_line(cell: &str) -> String {
    cell.split('\n').next().unwrap_or_default().replace('\t', "")
}

fn fit_row(
    table: &'static str,
    index: usize,
    row: Vec<String>,
    columns: usize,
) -> Result<Vec<Option<String>>> {
    if row.len() > columns {
        return Err(ScraperError::MalformedRow {
            table,
            row: index,
            cells: row.len(),
            columns,
        }
        .into());
    }

    let mut fields: Vec<Option<String>> = row.into_iter().map(Some).collect();
    fields.resize(columns, None);
    Ok(fields)
}

fn sub_document<'a, C, V>(columns: C, values: V) -> Document
where
    C: IntoIterator<Item = &'a str>,
    V: IntoIterator<Item = &'a Option<String>>,
{
    columns
        .into_iter()
        .zip(values)
        .map(|(column, value)| (column.to_string(), optional(value)))
        .collect()
}

fn optional(value: &Option<String>) -> Bson {
    match value {
        Some(text) => Bson::String(text.clone()),
        None => Bson::Null,
    }
}
