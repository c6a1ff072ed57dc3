use super::DocumentStore;
use crate::error::Result;
use mongodb::bson::Document;
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<(String, String), Document>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, collection: &str, portfolio: &str) -> Option<Document> {
        self.documents
            .lock()
            .unwrap()
            .get(&(collection.to_string(), portfolio.to_string()))
            .cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }

    pub fn snapshot(&self) -> BTreeMap<(String, String), Document> {
        self.documents.lock().unwrap().clone()
    }
}

impl DocumentStore for MemoryStore {
    async fn replace_one(
        &self,
        collection: &'static str,
        portfolio: &str,
        document: Document,
    ) -> Result<()> {
        self.documents
            .lock()
            .unwrap()
            .insert((collection.to_string(), portfolio.to_string()), document);
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
