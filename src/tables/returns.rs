use super::{fit_row, portfolio_document, sub_document, until_sentinel, PortfolioTable};
use crate::error::Result;
use crate::scraper::Scraper;
use mongodb::bson::Document;

const PERIOD_COLUMNS: [&str; 6] = ["1M", "6M", "1Y", "5Y", "10Y", "25Y"];

pub const INFLATION_ADJUSTED: &str = "Inflation Adjusted return";
const NOMINAL: &str = "Return";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodReturns {
    pub name: String,
    pub current_month: Option<String>,
    pub one_month: Option<String>,
    pub six_months: Option<String>,
    pub one_year: Option<String>,
    pub five_years: Option<String>,
    pub ten_years: Option<String>,
    pub twenty_five_years: Option<String>,
}

impl PeriodReturns {
    fn from_fields(fields: Vec<Option<String>>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            name: fields.next().flatten().unwrap_or_default(),
            current_month: fields.next().flatten(),
            one_month: fields.next().flatten(),
            six_months: fields.next().flatten(),
            one_year: fields.next().flatten(),
            five_years: fields.next().flatten(),
            ten_years: fields.next().flatten(),
            twenty_five_years: fields.next().flatten(),
        }
    }

    fn values(&self) -> [&Option<String>; 7] {
        [
            &self.current_month,
            &self.one_month,
            &self.six_months,
            &self.one_year,
            &self.five_years,
            &self.ten_years,
            &self.twenty_five_years,
        ]
    }
}

// `width` counts `Name` too; columns past it are dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReturnsByPeriod {
    pub month_label: String,
    pub width: usize,
    pub rows: Vec<PeriodReturns>,
}

impl ReturnsByPeriod {
    pub fn normalize(page: &Scraper, month_label: &str) -> Result<Self> {
        let rows: Vec<_> = until_sentinel(
            page.tables().extract(Self::TABLE_ID)?.require(Self::TABLE_ID)?,
        )
        .filter(|row| !row.is_empty())
        .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let max_width = PERIOD_COLUMNS.len() + 2;

        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                fit_row(Self::TABLE_ID, index, row, max_width).map(PeriodReturns::from_fields)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            month_label: month_label.to_string(),
            width,
            rows,
        })
    }

    pub fn value_columns(&self) -> Vec<&str> {
        let mut columns = vec![self.month_label.as_str()];
        columns.extend(PERIOD_COLUMNS);
        columns.truncate(self.width.saturating_sub(1));
        columns
    }
}

impl PortfolioTable for ReturnsByPeriod {
    const TABLE_ID: &'static str = "componentsReturnsTable";
    const COLLECTION: &'static str = "ComponentsReturnsTable";

    fn to_document(&self, portfolio: &str) -> Document {
        let mut document = portfolio_document(portfolio);
        let columns = self.value_columns();

        for row in &self.rows {
            let key = if row.name == INFLATION_ADJUSTED {
                INFLATION_ADJUSTED
            } else {
                NOMINAL
            };
            document.insert(key, sub_document(columns.iter().copied(), row.values()));
        }

        document
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
