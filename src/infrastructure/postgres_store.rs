use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::{into_body, DocumentStore, StoredDocument};
use crate::schema::documents;

use super::models::{DocumentRow, NewDocumentRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Document store backed by a single JSONB table in Postgres.
pub struct PostgresDocumentStore {
    pool: DbPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl DocumentStore for PostgresDocumentStore {
    fn create_document(&self, collection: &str, document: Value) -> Result<Uuid, DomainError> {
        let body = Value::Object(into_body(document)?);
        let mut conn = self.pool.get()?;

        let id = Uuid::new_v4();
        diesel::insert_into(documents::table)
            .values(&NewDocumentRow {
                id,
                collection,
                body,
            })
            .execute(&mut conn)?;

        log::debug!("Inserted document {} into '{}'", id, collection);
        Ok(id)
    }

    fn create_documents(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<Vec<Uuid>, DomainError> {
        let rows = documents
            .into_iter()
            .map(|document| {
                into_body(document).map(|body| NewDocumentRow {
                    id: Uuid::new_v4(),
                    collection,
                    body: Value::Object(body),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            diesel::insert_into(documents::table)
                .values(&rows)
                .execute(conn)?;
            Ok(())
        })?;

        log::debug!("Inserted {} documents into '{}'", ids.len(), collection);
        Ok(ids)
    }

    fn get_documents(&self, collection: &str) -> Result<Vec<StoredDocument>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = documents::table
            .filter(documents::collection.eq(collection))
            .select(DocumentRow::as_select())
            .order((documents::created_at.asc(), documents::id.asc()))
            .load(&mut conn)?;

        rows.into_iter()
            .map(|row| match row.body {
                Value::Object(body) => Ok(StoredDocument { id: row.id, body }),
                _ => Err(DomainError::InvalidDocument {
                    collection: row.collection,
                    reason: format!("document {} is not a JSON object", row.id),
                }),
            })
            .collect()
    }

    fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        let mut conn = self.pool.get()?;

        let names = documents::table
            .select(documents::collection)
            .distinct()
            .order(documents::collection.asc())
            .load::<String>(&mut conn)?;
        Ok(names)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }

    fn is_persistent(&self) -> bool {
        true
    }
}
