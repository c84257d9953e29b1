//! Authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::user::{LoginRequest, PublicUser, RegisterRequest},
};

use super::{ApiResponse, AuthenticatedUser};

/// Token and profile returned on login or registration
#[derive(Serialize, ToSchema)]
pub struct AuthData {
    pub user: PublicUser,
    pub token: String,
}

/// Register a new user account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthData),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<crate::AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthData>>)> {
    request.validate()?;

    let (token, user) = state.services.auth.register(&request)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok_with_message(
            AuthData {
                user: PublicUser::from(&user),
                token,
            },
            "Registration successful",
        )),
    ))
}

/// Log in with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthData),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<ApiResponse<AuthData>>> {
    request.validate()?;

    let (token, user) = state.services.auth.authenticate(&request)?;

    Ok(Json(ApiResponse::ok_with_message(
        AuthData {
            user: PublicUser::from(&user),
            token,
        },
        "Login successful",
    )))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = PublicUser),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn me(
    AuthenticatedUser(user): AuthenticatedUser,
) -> AppResult<Json<ApiResponse<PublicUser>>> {
    Ok(Json(ApiResponse::ok(PublicUser::from(&user))))
}
