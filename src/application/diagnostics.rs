use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::ports::DocumentStore;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_LEN: usize = 50;

/// Best-effort view of the service and its store. Every field is a
/// human-readable status string; nothing here is an error.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Diagnostics {
    pub backend: String,
    /// Which document store adapter is in use, e.g. `postgres` or `memory`.
    pub store: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub struct DiagnosticsService<S> {
    store: S,
    database_url_set: bool,
    database_name_set: bool,
}

impl<S: DocumentStore> DiagnosticsService<S> {
    pub fn new(store: S, database_url_set: bool, database_name_set: bool) -> Self {
        Self {
            store,
            database_url_set,
            database_name_set,
        }
    }

    pub fn report(&self) -> Diagnostics {
        let mut report = Diagnostics {
            backend: "✅ Running".to_string(),
            store: self.store.backend().to_string(),
            database: "❌ Not Available".to_string(),
            database_url: set_marker(self.database_url_set),
            database_name: set_marker(self.database_name_set),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        };

        let listed = self.store.list_collections();

        // A process-local store is not a database, whatever it holds.
        if !self.store.is_persistent() || !self.database_url_set {
            report.database = "⚠️  Available but not initialized".to_string();
            if let Ok(names) = listed {
                report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
            }
            return report;
        }

        match listed {
            Ok(names) => {
                report.database = "✅ Connected & Working".to_string();
                report.connection_status = "Connected".to_string();
                report.collections = names.into_iter().take(MAX_COLLECTIONS).collect();
            }
            Err(DomainError::Unavailable(msg)) => {
                log::warn!("Diagnostics could not reach the store: {}", msg);
                report.database = format!("❌ Error: {}", truncate(&msg));
            }
            Err(e) => {
                log::warn!("Diagnostics could not list collections: {}", e);
                report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
                report.connection_status = "Connected".to_string();
            }
        }

        report
    }
}

fn set_marker(set: bool) -> String {
    let marker = if set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

fn truncate(msg: &str) -> String {
    msg.chars().take(MAX_ERROR_LEN).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::StoredDocument;
    use crate::infrastructure::InMemoryDocumentStore;

    struct FailingStore(fn() -> DomainError);

    impl DocumentStore for FailingStore {
        fn create_document(&self, _: &str, _: Value) -> Result<Uuid, DomainError> {
            Err((self.0)())
        }

        fn create_documents(&self, _: &str, _: Vec<Value>) -> Result<Vec<Uuid>, DomainError> {
            Err((self.0)())
        }

        fn get_documents(&self, _: &str) -> Result<Vec<StoredDocument>, DomainError> {
            Err((self.0)())
        }

        fn list_collections(&self) -> Result<Vec<String>, DomainError> {
            Err((self.0)())
        }

        fn backend(&self) -> &'static str {
            "failing"
        }

        fn is_persistent(&self) -> bool {
            true
        }
    }

    /// Stands in for a database that answers with a fixed collection list.
    struct ListingStore(Vec<String>);

    impl DocumentStore for ListingStore {
        fn create_document(&self, _: &str, _: Value) -> Result<Uuid, DomainError> {
            Ok(Uuid::new_v4())
        }

        fn create_documents(&self, _: &str, docs: Vec<Value>) -> Result<Vec<Uuid>, DomainError> {
            Ok(docs.iter().map(|_| Uuid::new_v4()).collect())
        }

        fn get_documents(&self, _: &str) -> Result<Vec<StoredDocument>, DomainError> {
            Ok(Vec::new())
        }

        fn list_collections(&self) -> Result<Vec<String>, DomainError> {
            Ok(self.0.clone())
        }

        fn backend(&self) -> &'static str {
            "listing"
        }

        fn is_persistent(&self) -> bool {
            true
        }
    }

    #[test]
    fn in_memory_store_is_not_reported_as_a_database() {
        let store = InMemoryDocumentStore::new();
        for i in 0..12 {
            store
                .create_document(&format!("c{:02}", i), json!({}))
                .unwrap();
        }

        let report = DiagnosticsService::new(store, false, false).report();

        assert_eq!(report.backend, "✅ Running");
        assert_eq!(report.store, "memory");
        assert_eq!(report.database, "⚠️  Available but not initialized");
        assert_eq!(report.connection_status, "Not Connected");
        assert_eq!(report.database_url, "❌ Not Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.collections.len(), 10);
        assert_eq!(report.collections[0], "c00");
    }

    #[test]
    fn reachable_database_reports_collections() {
        let store = ListingStore(vec!["order".to_string(), "product".to_string()]);

        let report = DiagnosticsService::new(store, true, false).report();

        assert_eq!(report.database, "✅ Connected & Working");
        assert_eq!(report.connection_status, "Connected");
        assert_eq!(report.database_url, "✅ Set");
        assert_eq!(report.database_name, "❌ Not Set");
        assert_eq!(report.collections, vec!["order", "product"]);
    }

    #[test]
    fn serializes_every_status_field() {
        let report = DiagnosticsService::new(InMemoryDocumentStore::new(), false, false).report();
        let json = serde_json::to_value(&report).unwrap();

        for key in [
            "backend",
            "store",
            "database",
            "database_url",
            "database_name",
            "connection_status",
            "collections",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn unreachable_store_is_reported_not_raised() {
        let store = FailingStore(|| DomainError::Unavailable("x".repeat(80)));

        let report = DiagnosticsService::new(store, true, false).report();

        assert_eq!(report.connection_status, "Not Connected");
        assert!(report.database.starts_with("❌ Error: "));
        assert_eq!(
            report.database.trim_start_matches("❌ Error: ").chars().count(),
            50
        );
        assert!(report.collections.is_empty());
    }

    #[test]
    fn query_failure_counts_as_connected_with_error() {
        let store = FailingStore(|| DomainError::Internal("relation does not exist".to_string()));

        let report = DiagnosticsService::new(store, true, true).report();

        assert_eq!(report.connection_status, "Connected");
        assert!(report.database.starts_with("⚠️  Connected but Error:"));
        assert!(report.database.contains("relation does not exist"));
    }
}
