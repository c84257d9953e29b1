//! Book catalog model and search types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A book in the catalog
///
/// `available_copies` never exceeds `total_copies` and never goes negative;
/// only the rental service mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub genre: String,
    pub description: String,
    pub cover_image: String,
    pub published_year: i32,
    pub total_copies: u32,
    pub available_copies: u32,
    pub rating: f64,
    pub tags: Vec<String>,
}

/// Sort field for catalog search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Relevance,
    Title,
    Author,
    Year,
    Rating,
}

/// Sort direction for catalog search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Catalog search query parameters
///
/// All filters are optional and combine with logical AND. Unknown sortBy or
/// sortOrder values are rejected at extraction time.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookQuery {
    /// Free-text search across title, author, description and tags
    pub q: Option<String>,
    /// Exact genre match (case-insensitive)
    pub genre: Option<String>,
    /// Author substring match (case-insensitive)
    pub author: Option<String>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
