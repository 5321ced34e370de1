use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::client::{Comparator, ExtensionClient, Predicate, StoreResult};
use super::index::IndexSpec;
use super::lifecycle::{is_collectable, mark_deleted, prepare_create, prepare_update};
use super::list_options::{ListOptions, PageRequest, Sort};
use super::list_result::ListResult;
use super::query_engine;
use super::{Extension, StoreError};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS extensions (
        kind TEXT NOT NULL,
        name TEXT NOT NULL,
        version BIGINT NOT NULL,
        data JSONB NOT NULL,
        PRIMARY KEY (kind, name)
    )
"#;

/// Stores each extension as a JSONB document keyed by kind and name.
///
/// Filtering and ordering run in process over the documents of one kind.
pub struct PostgresExtensionStore<E: Extension> {
    pool: PgPool,
    indexes: Vec<IndexSpec<E>>,
}

impl<E: Extension> PostgresExtensionStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            indexes: E::indexes(),
        }
    }

    pub async fn ensure_schema(pool: &PgPool) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL)
            .execute(pool)
            .await
            .map_err(provider_error)?;
        Ok(())
    }

    fn kind() -> &'static str {
        E::gvk().kind
    }

    fn decode(row: &PgRow) -> StoreResult<E> {
        let data: JsonValue = row.try_get("data").map_err(provider_error)?;
        Ok(serde_json::from_value(data)?)
    }

    async fn load_all(&self) -> StoreResult<Vec<E>> {
        let rows = sqlx::query("SELECT data FROM extensions WHERE kind = $1 ORDER BY name")
            .bind(Self::kind())
            .fetch_all(&self.pool)
            .await
            .map_err(provider_error)?;

        rows.iter().map(Self::decode).collect()
    }

    async fn write_version(&self, extension: &E, expected_version: Option<i64>) -> StoreResult<()> {
        let data = serde_json::to_value(extension)?;
        let result = sqlx::query(
            "UPDATE extensions SET data = $3, version = $4 WHERE kind = $1 AND name = $2 AND version = $5",
        )
        .bind(Self::kind())
        .bind(extension.name())
        .bind(data)
        .bind(extension.metadata().version.unwrap_or(0))
        .bind(expected_version.unwrap_or(0))
        .execute(&self.pool)
        .await
        .map_err(provider_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Conflict {
                kind: Self::kind(),
                name: extension.name().to_string(),
            });
        }
        Ok(())
    }

    async fn remove(&self, name: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM extensions WHERE kind = $1 AND name = $2")
            .bind(Self::kind())
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(provider_error)?;
        Ok(())
    }

    async fn fetch_required(&self, name: &str) -> StoreResult<E> {
        self.fetch(name).await?.ok_or_else(|| StoreError::NotFound {
            kind: Self::kind(),
            name: name.to_string(),
        })
    }
}

fn provider_error(error: sqlx::Error) -> StoreError {
    StoreError::Provider(error.to_string())
}

#[async_trait]
impl<E: Extension> ExtensionClient<E> for PostgresExtensionStore<E> {
    async fn list(
        &self,
        predicate: Option<Predicate<E>>,
        comparator: Option<Comparator<E>>,
    ) -> StoreResult<Vec<E>> {
        let mut items: Vec<E> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|extension| predicate.as_ref().is_none_or(|p| p(extension)))
            .collect();
        if let Some(comparator) = comparator {
            items.sort_by(|a, b| comparator(a, b));
        }
        Ok(items)
    }

    async fn list_by(
        &self,
        options: &ListOptions,
        page: &PageRequest,
    ) -> StoreResult<ListResult<E>> {
        let items = query_engine::select(self.load_all().await?, options, &page.sort, &self.indexes)?;
        Ok(ListResult::paginate(items, page.page, page.size))
    }

    async fn list_all(&self, options: &ListOptions, sort: &Sort) -> StoreResult<Vec<E>> {
        query_engine::select(self.load_all().await?, options, sort, &self.indexes)
    }

    async fn fetch(&self, name: &str) -> StoreResult<Option<E>> {
        let row = sqlx::query("SELECT data FROM extensions WHERE kind = $1 AND name = $2")
            .bind(Self::kind())
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(provider_error)?;

        row.as_ref().map(Self::decode).transpose()
    }

    async fn create(&self, extension: E) -> StoreResult<E> {
        let created = prepare_create(extension, Utc::now())?;
        let data = serde_json::to_value(&created)?;
        let result = sqlx::query(
            "INSERT INTO extensions (kind, name, version, data) VALUES ($1, $2, $3, $4) ON CONFLICT DO NOTHING",
        )
        .bind(Self::kind())
        .bind(created.name())
        .bind(created.metadata().version.unwrap_or(1))
        .bind(data)
        .execute(&self.pool)
        .await
        .map_err(provider_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::AlreadyExists {
                kind: Self::kind(),
                name: created.name().to_string(),
            });
        }
        Ok(created)
    }

    async fn update(&self, extension: E) -> StoreResult<E> {
        let stored = self.fetch_required(extension.name()).await?;
        let updated = prepare_update(&stored, extension)?;
        if is_collectable(&updated) {
            self.remove(updated.name()).await?;
        } else {
            self.write_version(&updated, stored.metadata().version).await?;
        }
        Ok(updated)
    }

    async fn delete(&self, extension: E) -> StoreResult<E> {
        let stored = self.fetch_required(extension.name()).await?;
        let expected_version = stored.metadata().version;
        let (deleted, removable) = mark_deleted(stored, Utc::now());
        if removable {
            self.remove(deleted.name()).await?;
        } else {
            self.write_version(&deleted, expected_version).await?;
        }
        Ok(deleted)
    }
}
