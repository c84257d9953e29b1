//! Book catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Book, BookQuery, Rental},
};

use super::{ApiResponse, AuthenticatedUser, Pagination};

/// List books with search, sorting and pagination
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("q" = Option<String>, Query, description = "Free-text search across title, author, description and tags"),
        ("genre" = Option<String>, Query, description = "Filter by genre (exact, case-insensitive)"),
        ("author" = Option<String>, Query, description = "Filter by author (substring, case-insensitive)"),
        ("sortBy" = Option<String>, Query, description = "Sort field: relevance, title, author, year or rating"),
        ("sortOrder" = Option<String>, Query, description = "Sort direction: asc or desc"),
        ("page" = Option<i64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<i64>, Query, description = "Items per page, 1-100 (default: 10)")
    ),
    responses(
        (status = 200, description = "One page of books", body = Vec<Book>),
        (status = 400, description = "Invalid query parameters")
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let page = state.services.catalog.search_books(&query)?;

    Ok(Json(ApiResponse::paginated(
        page.books,
        Pagination {
            page: page.page,
            limit: page.limit,
            total: page.total,
            total_pages: page.total_pages,
        },
    )))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.catalog.get_book(id)?;
    Ok(Json(ApiResponse::ok(book)))
}

/// Rent a book for the authenticated user
#[utoipa::path(
    post,
    path = "/books/{id}/rent",
    tag = "books",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book rented", body = Rental),
        (status = 400, description = "No copies available"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Already rented by this user")
    )
)]
pub async fn rent_book(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Rental>>> {
    let rental = state.services.rentals.rent(id, user.id, Utc::now())?;

    Ok(Json(ApiResponse::ok_with_message(
        rental,
        "Book rented successfully",
    )))
}
