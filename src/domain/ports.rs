use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use super::errors::DomainError;

/// A document as it comes back from a store: the store-assigned id plus the
/// body that was handed to `create_document`.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: Uuid,
    pub body: Map<String, Value>,
}

pub trait DocumentStore: Send + Sync + 'static {
    /// Persist `document` in `collection` and return its new id.
    fn create_document(&self, collection: &str, document: Value) -> Result<Uuid, DomainError>;
    /// Persist all of `documents` or none of them. Ids come back in input order.
    fn create_documents(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<Vec<Uuid>, DomainError>;
    /// All documents of `collection`, oldest first.
    fn get_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, DomainError>;
    /// Sorted names of the collections that hold at least one document.
    fn list_collections(&self) -> Result<Vec<String>, DomainError>;
    fn backend(&self) -> &'static str;
    /// False for stores that lose their contents when the process exits.
    fn is_persistent(&self) -> bool;
}

impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    fn create_document(&self, collection: &str, document: Value) -> Result<Uuid, DomainError> {
        (**self).create_document(collection, document)
    }

    fn create_documents(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<Vec<Uuid>, DomainError> {
        (**self).create_documents(collection, documents)
    }

    fn get_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, DomainError> {
        (**self).get_documents(collection)
    }

    fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        (**self).list_collections()
    }

    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn is_persistent(&self) -> bool {
        (**self).is_persistent()
    }
}

/// Only JSON objects can be stored as documents.
pub fn into_body(document: Value) -> Result<Map<String, Value>, DomainError> {
    match document {
        Value::Object(map) => Ok(map),
        other => Err(DomainError::InvalidInput(format!(
            "documents must be JSON objects, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
