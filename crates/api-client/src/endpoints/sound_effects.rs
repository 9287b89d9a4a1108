//! Sound-effects table endpoints
//!
//! Rows are scoped by `user_id`; every read and delete filters on it.
//! Writes are PostgREST upserts keyed on `id`.

use crate::client::StoreClient;
use crate::error::ApiResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upsert preference: merge on primary key, no body in the response
const UPSERT_PREFER: &str = "resolution=merge-duplicates,return=minimal";

/// Sound-effects table interface
#[derive(Clone)]
pub struct SoundEffectsApi {
    client: StoreClient,
}

impl SoundEffectsApi {
    /// Create a new table interface
    pub(crate) fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// All rows belonging to an owner
    ///
    /// GET /rest/v1/{table}?select=*&user_id=eq.{owner}
    pub async fn list_for_owner(&self, owner_id: &str) -> ApiResult<Vec<SoundEffectRow>> {
        let owner = eq(owner_id);
        let url = self
            .client
            .table_url(&[("select", "*"), ("user_id", &owner)])?;
        let rows: Vec<SoundEffectRow> = self.client.get(url).await?;
        debug!(owner_id, count = rows.len(), "Fetched sound-effect rows");
        Ok(rows)
    }

    /// The category column of every row belonging to an owner, in row order
    ///
    /// GET /rest/v1/{table}?select=category&user_id=eq.{owner}
    pub async fn categories_for_owner(&self, owner_id: &str) -> ApiResult<Vec<String>> {
        let owner = eq(owner_id);
        let url = self
            .client
            .table_url(&[("select", "category"), ("user_id", &owner)])?;
        let rows: Vec<CategoryRow> = self.client.get(url).await?;
        Ok(rows.into_iter().map(|row| row.category).collect())
    }

    /// Insert or replace a single row
    ///
    /// POST /rest/v1/{table}?on_conflict=id
    pub async fn upsert(&self, row: &SoundEffectRow) -> ApiResult<()> {
        let url = self.client.table_url(&[("on_conflict", "id")])?;
        self.client.post(url, row, UPSERT_PREFER).await
    }

    /// Insert or replace many rows in one request
    ///
    /// An empty batch is a no-op and sends nothing.
    pub async fn upsert_many(&self, rows: &[SoundEffectRow]) -> ApiResult<()> {
        if rows.is_empty() {
            return Ok(());
        }

        let url = self.client.table_url(&[("on_conflict", "id")])?;
        self.client.post(url, &rows, UPSERT_PREFER).await?;
        debug!(count = rows.len(), "Upserted sound-effect rows");
        Ok(())
    }

    /// Delete one row, only if it belongs to the owner
    ///
    /// DELETE /rest/v1/{table}?id=eq.{id}&user_id=eq.{owner}
    pub async fn delete(&self, id: u32, owner_id: &str) -> ApiResult<()> {
        let id = eq(&id.to_string());
        let owner = eq(owner_id);
        let url = self.client.table_url(&[("id", &id), ("user_id", &owner)])?;
        self.client.delete(url).await
    }
}

fn eq(value: &str) -> String {
    format!("eq.{value}")
}

// ============================================================================
// Row Types
// ============================================================================

/// One row of the sound-effects table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundEffectRow {
    /// Sound id, shared with the local library
    pub id: u32,
    /// Owner id
    pub user_id: String,
    /// Display name
    pub name: String,
    /// Category
    pub category: String,
    /// Description, nullable in the table
    #[serde(default)]
    pub description: Option<String>,
    /// Audio file path or URL
    pub file: String,
    /// `svg`, `image` or `component`
    pub icon_type: String,
    /// Icon payload; a marker string for the default svg
    pub icon_content: String,
    /// Icon color
    #[serde(default)]
    pub icon_color: Option<String>,
    /// Set by the database on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    category: String,
}
