//! Filtered, paginated translation search.
//!
//! The query is assembled from the optional filters in a
//! [`SearchFilter`]: exact language match, tag membership (via a join on
//! `translation_tag`, deduplicated by translation id), key match (exact,
//! or `LIKE` when the pattern contains `%`), and a case-sensitive
//! substring match on the value. Results eagerly attach each
//! translation's language and tags so the page can be serialized without
//! additional lookups.

use std::collections::HashMap;

use glossa_core::{KeyPattern, Page, SearchFilter, TranslationDetail};
use rusqlite::types::Value;
use rusqlite::params_from_iter;
use tracing::debug;

use crate::db::Database;
use crate::error::Result;
use crate::repository::translation_from_row;

/// WHERE clause plus bound parameters for a filter, shared by the page
/// query and the count query.
fn build_conditions(filter: &SearchFilter) -> (String, Vec<Value>) {
    let mut conditions = vec!["t.deleted_at IS NULL".to_string()];
    let mut params: Vec<Value> = Vec::new();

    if let Some(language_id) = filter.language_id {
        conditions.push("t.language_id = ?".into());
        params.push(Value::Integer(language_id));
    }
    if let Some(tag_id) = filter.tag_id {
        conditions.push("tt.tag_id = ?".into());
        params.push(Value::Integer(tag_id));
    }
    if let Some(key) = &filter.key {
        match key {
            KeyPattern::Exact(k) => {
                conditions.push("t.key = ?".into());
                params.push(Value::Text(k.clone()));
            }
            KeyPattern::Like(pattern) => {
                conditions.push("t.key LIKE ?".into());
                params.push(Value::Text(pattern.clone()));
            }
        }
    }
    if let Some(value) = &filter.value {
        conditions.push("t.value LIKE ?".into());
        params.push(Value::Text(format!("%{value}%")));
    }

    (conditions.join(" AND "), params)
}

/// FROM clause; the tag join is only added when the tag filter is set.
fn from_clause(filter: &SearchFilter) -> &'static str {
    if filter.tag_id.is_some() {
        "FROM translations t JOIN translation_tag tt ON tt.translation_id = t.id"
    } else {
        "FROM translations t"
    }
}

impl Database {
    /// Produces one page of translations for the given filter set.
    ///
    /// Fails only on invalid pagination input; an empty result set is a
    /// valid (empty) page.
    pub fn search_translations(&self, filter: &SearchFilter) -> Result<Page<TranslationDetail>> {
        filter.validate().map_err(crate::StoreError::from)?;

        let (conditions, params) = build_conditions(filter);
        let from = from_clause(filter);

        let count_sql = format!("SELECT COUNT(DISTINCT t.id) {from} WHERE {conditions}");
        let page_sql = format!(
            "SELECT DISTINCT t.id, t.key, t.value, t.language_id,
                    t.created_at, t.updated_at, t.deleted_at
             {from} WHERE {conditions}
             ORDER BY t.id LIMIT ? OFFSET ?"
        );

        debug!(sql = %page_sql, "Searching translations");

        let (total, rows) = {
            let conn = self.conn();

            let total: i64 =
                conn.query_row(&count_sql, params_from_iter(params.iter()), |row| {
                    row.get(0)
                })?;

            let mut page_params = params;
            page_params.push(Value::Integer(i64::from(filter.per_page())));
            // Saturate: a wrapping cast would turn an absurd page number
            // into a negative OFFSET, which SQLite reads as page 1
            page_params.push(Value::Integer(
                i64::try_from(filter.offset()).unwrap_or(i64::MAX),
            ));

            let mut stmt = conn.prepare(&page_sql)?;
            let rows = stmt
                .query_map(params_from_iter(page_params.iter()), translation_from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;

            (total, rows)
        };

        // Eager-load languages and tags for the page in two queries
        let ids: Vec<i64> = rows.iter().map(|t| t.id).collect();
        let mut tags_by_id = self.tags_for_translations(&ids)?;

        let mut languages = HashMap::new();
        let mut items = Vec::with_capacity(rows.len());
        for translation in rows {
            if !languages.contains_key(&translation.language_id) {
                let loaded = self.get_language(translation.language_id)?;
                languages.insert(translation.language_id, loaded);
            }
            let language = languages[&translation.language_id].clone();

            let tags = tags_by_id.remove(&translation.id).unwrap_or_default();
            items.push(TranslationDetail {
                translation,
                language,
                tags,
            });
        }

        Ok(Page {
            items,
            total: total as u64,
            page: filter.page(),
            per_page: filter.per_page(),
        })
    }
}
