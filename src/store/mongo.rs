use super::DocumentStore;
use crate::error::{Result, StoreError};
use crate::tables::PORTFOLIO_KEY;
use mongodb::bson::Document;
use mongodb::{Client, Database};

pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| StoreError::Connect(e.to_string()))?;

        Ok(Self {
            database: client.database(database),
        })
    }
}

impl DocumentStore for MongoStore {
    async fn replace_one(
        &self,
        collection: &'static str,
        portfolio: &str,
        document: Document,
    ) -> Result<()> {
        let mut filter = Document::new();
        filter.insert(PORTFOLIO_KEY, portfolio);

        self.database
            .collection::<Document>(collection)
            .replace_one(filter, document)
            .upsert(true)
            .await
            .map_err(|e| StoreError::Write {
                collection,
                portfolio: portfolio.to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }
}
