use std::collections::BTreeMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::ports::{into_body, DocumentStore, StoredDocument};

/// Process-local document store. Used when no database is configured and as
/// the backing store for tests.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> DomainError {
    DomainError::Internal("in-memory store lock poisoned".to_string())
}

impl DocumentStore for InMemoryDocumentStore {
    fn create_document(&self, collection: &str, document: Value) -> Result<Uuid, DomainError> {
        let body = into_body(document)?;
        let id = Uuid::new_v4();

        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body });

        log::debug!("Inserted document {} into '{}'", id, collection);
        Ok(id)
    }

    fn create_documents(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<Vec<Uuid>, DomainError> {
        let batch = documents
            .into_iter()
            .map(|document| {
                into_body(document).map(|body| StoredDocument {
                    id: Uuid::new_v4(),
                    body,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let ids: Vec<Uuid> = batch.iter().map(|doc| doc.id).collect();

        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .extend(batch);

        log::debug!("Inserted {} documents into '{}'", ids.len(), collection);
        Ok(ids)
    }

    fn get_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, DomainError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        let collections = self.collections.read().map_err(poisoned)?;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    fn is_persistent(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn documents_come_back_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        let a = store.create_document("product", json!({ "n": 1 })).unwrap();
        let b = store.create_document("product", json!({ "n": 2 })).unwrap();

        let docs = store.get_documents("product").unwrap();
        assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(docs[1].body["n"], json!(2));
    }

    #[test]
    fn unknown_collection_is_empty() {
        let store = InMemoryDocumentStore::new();
        assert!(store.get_documents("nothing").unwrap().is_empty());
        assert!(store.list_collections().unwrap().is_empty());
    }

    #[test]
    fn list_collections_is_sorted() {
        let store = InMemoryDocumentStore::new();
        store.create_document("product", json!({})).unwrap();
        store.create_document("order", json!({})).unwrap();

        assert_eq!(store.list_collections().unwrap(), vec!["order", "product"]);
    }

    #[test]
    fn batch_insert_keeps_order_and_returns_ids() {
        let store = InMemoryDocumentStore::new();
        let ids = store
            .create_documents("product", vec![json!({ "n": 1 }), json!({ "n": 2 })])
            .unwrap();

        let docs = store.get_documents("product").unwrap();
        assert_eq!(docs.iter().map(|d| d.id).collect::<Vec<_>>(), ids);
        assert_eq!(docs[0].body["n"], json!(1));
    }

    #[test]
    fn batch_with_a_bad_document_writes_nothing() {
        let store = InMemoryDocumentStore::new();
        let err = store
            .create_documents(
                "product",
                vec![json!({}), json!({}), json!({}), json!(4), json!({})],
            )
            .unwrap_err();

        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert!(store.get_documents("product").unwrap().is_empty());
    }

    #[test]
    fn scalar_documents_are_rejected() {
        let store = InMemoryDocumentStore::new();
        let err = store.create_document("product", json!("latte")).unwrap_err();
        assert!(err.to_string().contains("a string"));
        assert!(store.list_collections().unwrap().is_empty());
    }
}
