mod mongo;
#[cfg(test)]
mod memory;

#[cfg(test)]
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::error::Result;
use crate::log_debug;
use crate::tables::PortfolioTable;
use mongodb::bson::Document;
use std::future::Future;

pub trait DocumentStore {
    fn replace_one(
        &self,
        collection: &'static str,
        portfolio: &str,
        document: Document,
    ) -> impl Future<Output = Result<()>>;
}

pub async fn upsert<S, T>(store: &S, portfolio: &str, table: &T) -> Result<()>
where
    S: DocumentStore,
    T: PortfolioTable,
{
    let document = table.to_document(portfolio);
    log_debug!(
        "[store] Upserting {} for {} ({} fields)",
        T::COLLECTION,
        portfolio,
        document.len()
    );
    store.replace_one(T::COLLECTION, portfolio, document).await
}
