//! Rental endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{rental::CreateRentalRequest, Rental},
};

use super::{ApiResponse, AuthenticatedUser};

/// Rent a book
///
/// The body may name a userId, but it must be the caller's own.
#[utoipa::path(
    post,
    path = "/rentals",
    tag = "rentals",
    security(("bearer_auth" = [])),
    request_body = CreateRentalRequest,
    responses(
        (status = 201, description = "Book rented", body = Rental),
        (status = 400, description = "No copies available"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Renting on behalf of another user"),
        (status = 404, description = "Book not found"),
        (status = 409, description = "Already rented by this user")
    )
)]
pub async fn create_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Json(request): Json<CreateRentalRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Rental>>)> {
    if request.user_id.is_some_and(|id| id != user.id) {
        return Err(AppError::AccessDenied(
            "You can only rent books for yourself".to_string(),
        ));
    }

    let rental = state
        .services
        .rentals
        .rent(request.book_id, user.id, Utc::now())?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            rental,
            "Book rented successfully!",
        )),
    ))
}

/// Return a rented book
#[utoipa::path(
    post,
    path = "/rentals/{id}/return",
    tag = "rentals",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = Rental),
        (status = 400, description = "Already returned"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Rental belongs to another user"),
        (status = 404, description = "Rental not found")
    )
)]
pub async fn return_rental(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Rental>>> {
    let rental = state.services.rentals.return_rental(id, user.id, Utc::now())?;

    let message = match rental.late_fee {
        Some(fee) => format!("Book returned successfully. Late fee: ${:.2}", fee),
        None => "Book returned successfully".to_string(),
    };

    Ok(Json(ApiResponse::ok_with_message(rental, message)))
}
