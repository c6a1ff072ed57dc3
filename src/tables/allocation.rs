use super::{fit_row, portfolio_document, sub_document, PortfolioTable};
use crate::error::Result;
use crate::scraper::Scraper;
use mongodb::bson::{Bson, Document};

const COLUMNS: [&str; 4] = ["Weight", "Ticker", "ETF Name", "Investment Themes"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub weight: Option<String>,
    pub ticker: Option<String>,
    pub etf_name: Option<String>,
    pub investment_themes: Option<String>,
}

impl Holding {
    fn from_fields(fields: Vec<Option<String>>) -> Self {
        let mut fields = fields.into_iter();
        Self {
            weight: fields.next().flatten(),
            ticker: fields.next().flatten(),
            etf_name: fields.next().flatten(),
            investment_themes: fields.next().flatten(),
        }
    }

    fn to_document(&self) -> Document {
        let values = [
            &self.weight,
            &self.ticker,
            &self.etf_name,
            &self.investment_themes,
        ];
        sub_document(COLUMNS, values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocation {
    pub holdings: Vec<Holding>,
}

impl Allocation {
    pub fn normalize(page: &Scraper) -> Result<Self> {
        let rows = page.tables().extract(Self::TABLE_ID)?.require(Self::TABLE_ID)?;

        let holdings = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                fit_row(Self::TABLE_ID, index, row, COLUMNS.len()).map(Holding::from_fields)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { holdings })
    }
}

impl PortfolioTable for Allocation {
    const TABLE_ID: &'static str = "portfolioAllocation";
    const COLLECTION: &'static str = "PortfolioAllocation";

    fn to_document(&self, portfolio: &str) -> Document {
        let mut document = portfolio_document(portfolio);
        let holdings = self
            .holdings
            .iter()
            .map(|holding| Bson::Document(holding.to_document()))
            .collect::<Vec<_>>();
        document.insert("Holdings", holdings);
        document
    }

    fn len(&self) -> usize {
        self.holdings.len()
    }
}
