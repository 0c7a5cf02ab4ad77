//! JSON response shapes for the Glossa API.

use glossa_store::glossa_core::{Language, Page, Tag, TranslationDetail};
use serde::Serialize;

/// Language resource.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageResponse {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl From<&Language> for LanguageResponse {
    fn from(language: &Language) -> Self {
        Self {
            id: language.id,
            code: language.code.clone(),
            name: language.name.clone(),
        }
    }
}

/// Tag resource.
#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
        }
    }
}

/// Translation resource con language y tags embebidos.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationResponse {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub language: LanguageResponse,
    pub tags: Vec<TagResponse>,
}

impl From<&TranslationDetail> for TranslationResponse {
    fn from(detail: &TranslationDetail) -> Self {
        Self {
            id: detail.translation.id,
            key: detail.translation.key.clone(),
            value: detail.translation.value.clone(),
            language: LanguageResponse::from(&detail.language),
            tags: detail.tags.iter().map(TagResponse::from).collect(),
        }
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub last_page: u32,
}

/// One page of resources plus metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl PageResponse<TranslationResponse> {
    /// Converts a store page into its response shape.
    pub fn from_page(page: &Page<TranslationDetail>) -> Self {
        Self {
            data: page.items.iter().map(TranslationResponse::from).collect(),
            meta: PageMeta {
                current_page: page.page,
                per_page: page.per_page,
                total: page.total,
                last_page: page.last_page(),
            },
        }
    }
}
