use super::{first_line, fit_row, portfolio_document, sub_document, until_sentinel, PortfolioTable};
use crate::error::Result;
use crate::scraper::Scraper;
use mongodb::bson::Document;

const COLUMNS: [&str; 6] = [
    "Period",
    "Return",
    "Return (Inflation Adjusted)",
    "Standard Deviation",
    "Max Drawdown",
    "Months (Pos - Neg)",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodStats {
    pub period: String,
    pub annual_return: Option<String>,
    pub inflation_adjusted_return: Option<String>,
    pub standard_deviation: Option<String>,
    pub max_drawdown: Option<String>,
    pub months_positive_negative: Option<String>,
}

impl PeriodStats {
    fn from_fields(fields: Vec<Option<String>>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            period: fields.next().flatten().unwrap_or_default(),
            annual_return: fields.next().flatten(),
            inflation_adjusted_return: fields.next().flatten(),
            standard_deviation: fields.next().flatten(),
            max_drawdown: fields.next().flatten(),
            months_positive_negative: fields.next().flatten(),
        }
    }

    fn to_document(&self) -> Document {
        let values = [
            &self.annual_return,
            &self.inflation_adjusted_return,
            &self.standard_deviation,
            &self.max_drawdown,
            &self.months_positive_negative,
        ];
        sub_document(COLUMNS[1..].iter().copied(), values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoricalReturns {
    pub periods: Vec<PeriodStats>,
}

impl HistoricalReturns {
    pub fn normalize(page: &Scraper) -> Result<Self> {
        let rows = page.tables().extract(Self::TABLE_ID)?.require(Self::TABLE_ID)?;

        let periods = until_sentinel(rows)
            .filter(|row| !row.is_empty())
            .enumerate()
            .map(|(index, row)| {
                let cells = row.iter().map(|cell| first_line(cell)).collect();
                fit_row(Self::TABLE_ID, index, cells, COLUMNS.len()).map(PeriodStats::from_fields)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { periods })
    }
}

impl PortfolioTable for HistoricalReturns {
    const TABLE_ID: &'static str = "historicalReturnsTable";
    const COLLECTION: &'static str = "HistoricalReturnsTable";

    fn to_document(&self, portfolio: &str) -> Document {
        let mut document = portfolio_document(portfolio);
        for stats in &self.periods {
            document.insert(stats.period.clone(), stats.to_document());
        }
        document
    }

    fn len(&self) -> usize {
        self.periods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    const PAGE: &str = include_str!("../../tests/fixtures/portfolio.html");

    #[test]
    fn keeps_first_line_of_each_cell() {
        let historical = HistoricalReturns::normalize(&Scraper::new(PAGE)).unwrap();
        let first = &historical.periods[0];
        assert_eq!(first.period, "1 Year");
        assert_eq!(first.annual_return.as_deref(), Some("11.39%"));
        assert_eq!(first.max_drawdown.as_deref(), Some("-3.48%"));
        assert_eq!(first.months_positive_negative.as_deref(), Some("9 - 3"));
    }

    #[test]
    fn stops_before_components() {
        let historical = HistoricalReturns::normalize(&Scraper::new(PAGE)).unwrap();
        let periods: Vec<&str> = historical.periods.iter().map(|p| p.period.as_str()).collect();
        assert_eq!(periods, vec!["1 Year", "5 Years", "30 Years"]);
    }

    #[test]
    fn document_is_keyed_by_period() {
        let historical = HistoricalReturns::normalize(&Scraper::new(PAGE)).unwrap();
        let doc = historical.to_document("golden-butterfly");

        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Portfolio", "1 Year", "5 Years", "30 Years"]);

        let thirty = doc.get_document("30 Years").unwrap();
        assert!(!thirty.contains_key("Period"));
        assert_eq!(thirty.get_str("Return (Inflation Adjusted)").unwrap(), "4.53%");
        assert_eq!(thirty.get("Months (Pos - Neg)"), Some(&Bson::Null));
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let page = Scraper::new(PAGE);
        assert_eq!(
            HistoricalReturns::normalize(&page).unwrap(),
            HistoricalReturns::normalize(&page).unwrap()
        );
    }
}
