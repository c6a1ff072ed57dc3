use crate::client::Client;
use crate::error::Result;
use crate::scraper::{portfolio_slug, Scraper};
use crate::store::{upsert, DocumentStore};
use crate::tables::{
    Allocation, HistoricalReturns, PortfolioTable, RatingSummary, ReturnsByPeriod,
};
use crate::{log_info, log_warn};
use std::future::Future;

pub trait PageSource {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>>;
}

impl PageSource for Client {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        log_info!(
            "[pipeline] Fetched {} (status {}, {} bytes)",
            url,
            response.status,
            response.content.len()
        );
        Ok(response.content)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub portfolios: Vec<String>,
    pub without_rating: Vec<String>,
}

pub struct Pipeline<'a, P, S> {
    source: &'a P,
    store: &'a S,
    homepage_url: String,
    month_label: String,
}

impl<'a, P, S> Pipeline<'a, P, S>
where
    P: PageSource,
    S: DocumentStore,
{
    pub fn new(
        source: &'a P,
        store: &'a S,
        homepage_url: impl Into<String>,
        month_label: impl Into<String>,
    ) -> Self {
        Self {
            source,
            store,
            homepage_url: homepage_url.into(),
            month_label: month_label.into(),
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let homepage = self.source.fetch(&self.homepage_url).await?;
        let urls = Scraper::new(&homepage)
            .links()
            .portfolio_urls(&self.homepage_url);
        log_info!("[pipeline] Discovered {} portfolios", urls.len());

        let mut summary = RunSummary::default();
        for url in &urls {
            let Some(portfolio) = portfolio_slug(url) else {
                log_warn!("[pipeline] No portfolio name in {}", url);
                continue;
            };

            log_info!("[pipeline] Processing {} ({})", portfolio, url);
            let html = self.source.fetch(url).await?;

            if !self.process_page(portfolio, &html).await? {
                summary.without_rating.push(portfolio.to_string());
            }
            summary.portfolios.push(portfolio.to_string());
        }

        Ok(summary)
    }

    // true when a rating summary was stored
    pub async fn process_page(&self, portfolio: &str, html: &str) -> Result<bool> {
        let page = Scraper::new(html);

        let allocation = Allocation::normalize(&page)?;
        self.store_table(portfolio, &allocation).await?;

        let returns = ReturnsByPeriod::normalize(&page, &self.month_label)?;
        self.store_table(portfolio, &returns).await?;

        let historical = HistoricalReturns::normalize(&page)?;
        self.store_table(portfolio, &historical).await?;

        match RatingSummary::normalize(&page)? {
            Some(rating) => {
                self.store_table(portfolio, &rating).await?;
                Ok(true)
            }
            None => {
                log_warn!(
                    "[pipeline] {} has no {} table, skipping",
                    portfolio,
                    RatingSummary::TABLE_ID
                );
                Ok(false)
            }
        }
    }

    async fn store_table<T: PortfolioTable>(&self, portfolio: &str, table: &T) -> Result<()> {
        log_info!(
            "[pipeline] {}: {} rows -> {}",
            portfolio,
            table.len(),
            T::COLLECTION
        );
        upsert(self.store, portfolio, table).await
    }
}
