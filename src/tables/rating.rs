use super::{first_line, fit_row, portfolio_document, sub_document, PortfolioTable};
use crate::error::Result;
use crate::scraper::{Row, Scraper};
use mongodb::bson::Document;

const COLUMNS: [&str; 6] = [
    "Category",
    "Grade",
    "Low Risk Portfolios Grade",
    "Low Risk Portfolios Rating",
    "All Portfolios Grade",
    "All Portfolios Rating",
];

const PIECE_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRow {
    pub category: String,
    pub grade: Option<String>,
    pub low_risk_grade: Option<String>,
    pub low_risk_rating: Option<String>,
    pub all_portfolios_grade: Option<String>,
    pub all_portfolios_rating: Option<String>,
}

impl RatingRow {
    fn from_fields(fields: Vec<Option<String>>) -> Option<Self> {
        let mut fields = fields.into_iter();
        let category = fields.next().flatten().filter(|c| !c.is_empty())?;
        Some(Self {
            category,
            grade: fields.next().flatten(),
            low_risk_grade: fields.next().flatten(),
            low_risk_rating: fields.next().flatten(),
            all_portfolios_grade: fields.next().flatten(),
            all_portfolios_rating: fields.next().flatten(),
        })
    }

    fn to_document(&self) -> Document {
        let values = [
            &self.grade,
            &self.low_risk_grade,
            &self.low_risk_rating,
            &self.all_portfolios_grade,
            &self.all_portfolios_rating,
        ];
        sub_document(COLUMNS[1..].iter().copied(), values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingSummary {
    pub rows: Vec<RatingRow>,
}

impl RatingSummary {
    // Ok(None) when the page has no rating summary
    pub fn normalize(page: &Scraper) -> Result<Option<Self>> {
        let Some(rows) = page.tables().extract(Self::TABLE_ID)?.found() else {
            return Ok(None);
        };

        let mut split: Vec<Vec<String>> = rows.iter().map(split_row).collect();
        // the last row is the table's footnote
        split.pop();

        let fitted = split
            .into_iter()
            .enumerate()
            .map(|(index, row)| fit_row(Self::TABLE_ID, index, row, COLUMNS.len()))
            .collect::<Result<Vec<_>>>()?;

        let rows = fitted.into_iter().filter_map(RatingRow::from_fields).collect();
        Ok(Some(Self { rows }))
    }
}

fn split_row(row: &Row) -> Vec<String> {
    row.iter()
        .flat_map(|cell| {
            first_line(cell)
                .split(PIECE_SEPARATOR)
                .map(clean_rating_piece)
                .collect::<Vec<_>>()
        })
        .collect()
}

// `A+ (25 Years Ann. Return)` -> `A (25 yr Return)`
pub fn clean_rating_piece(piece: &str) -> String {
    piece
        .replace('+', "")
        .replace('%', "")
        .replace('(', " (25 yr ")
        .replace("25 Years Ann. ", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl PortfolioTable for RatingSummary {
    const TABLE_ID: &'static str = "portfolioRatingSummary";
    const COLLECTION: &'static str = "PortfolioRatingSummary";

    fn to_document(&self, portfolio: &str) -> Document {
        let mut document = portfolio_document(portfolio);
        for row in &self.rows {
            document.insert(row.category.clone(), row.to_document());
        }
        document
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
