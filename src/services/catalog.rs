//! Catalog query engine: filter, sort and paginate the book catalog

use std::cmp::Ordering;

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookQuery, SortField, SortOrder},
    repository::Repository,
};

/// One page of search results
#[derive(Debug, Clone)]
pub struct BookPage {
    pub books: Vec<Book>,
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Search the catalog
    ///
    /// Filters combine with AND; the sort is stable, so books that compare
    /// equal keep their relative order; an out-of-range page yields an
    /// empty slice rather than an error. Each call recomputes from current
    /// store state.
    pub fn search_books(&self, query: &BookQuery) -> AppResult<BookPage> {
        let page = query.page.unwrap_or(1);
        let limit = query.limit.unwrap_or(10);
        if page < 1 {
            return Err(AppError::Validation(
                "Page must be a positive integer".to_string(),
            ));
        }
        if !(1..=100).contains(&limit) {
            return Err(AppError::Validation(
                "Limit must be between 1 and 100".to_string(),
            ));
        }

        let needle = query.q.as_deref().map(str::to_lowercase);
        let author_needle = query.author.as_deref().map(str::to_lowercase);

        let mut books: Vec<Book> = {
            let db = self.repository.read();
            db.books
                .iter()
                .filter(|book| matches_query(book, needle.as_deref()))
                .filter(|book| {
                    query
                        .genre
                        .as_deref()
                        .map_or(true, |genre| book.genre.eq_ignore_ascii_case(genre))
                })
                .filter(|book| {
                    author_needle
                        .as_deref()
                        .map_or(true, |author| book.author.to_lowercase().contains(author))
                })
                .cloned()
                .collect()
        };

        let sort_by = query.sort_by.unwrap_or_default();
        let sort_order = query.sort_order.unwrap_or_default();
        books.sort_by(|a, b| {
            let ordering = compare(a, b, sort_by);
            match sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = books.len() as i64;
        let total_pages = (total + limit - 1) / limit;
        let start = (page - 1).saturating_mul(limit) as usize;
        let books: Vec<Book> = books
            .into_iter()
            .skip(start)
            .take(limit as usize)
            .collect();

        Ok(BookPage {
            books,
            page,
            limit,
            total,
            total_pages,
        })
    }

    /// Get a book by ID
    pub fn get_book(&self, id: Uuid) -> AppResult<Book> {
        let db = self.repository.read();
        db.books
            .get(&id)
            .cloned()
            .ok_or(AppError::BookNotFound(id))
    }
}

/// Free-text match against title, author, description or any tag
fn matches_query(book: &Book, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
        || book.description.to_lowercase().contains(needle)
        || book
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Base comparator for a sort field, ascending
///
/// Relevance proxies rating; combined with the descending default
/// direction, the best-rated books come first.
fn compare(a: &Book, b: &Book, field: SortField) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Author => a.author.cmp(&b.author),
        SortField::Year => a.published_year.cmp(&b.published_year),
        SortField::Rating | SortField::Relevance => a.rating.total_cmp(&b.rating),
    }
}
