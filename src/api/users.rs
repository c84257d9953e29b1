//! User endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::RentalView,
};

use super::{ApiResponse, AuthenticatedUser};

/// Get the books a user currently has on loan
#[utoipa::path(
    get,
    path = "/users/{id}/books",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID; must be the caller")
    ),
    responses(
        (status = 200, description = "The user's active rentals", body = Vec<RentalView>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Requesting another user's books")
    )
)]
pub async fn get_user_books(
    State(state): State<crate::AppState>,
    AuthenticatedUser(user): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<RentalView>>>> {
    if id != user.id {
        return Err(AppError::AccessDenied(
            "You can only view your own books".to_string(),
        ));
    }

    let rentals = state.services.rentals.user_rentals(user.id, Utc::now());
    Ok(Json(ApiResponse::ok(rentals)))
}
