use axum::{Json, extract::State};
use std::sync::Arc;

use super::{
    ApiError, AppState, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserDto,
    UserSummaryDto,
};

/// POST /register
/// Create a new user with a hashed password. No session or token is issued;
/// registration is an acknowledgement only.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let existing = state
        .store()
        .get_user_by_username(&payload.username)
        .await
        .map_err(|e| ApiError::database("Registration failed", e))?;

    if existing.is_some() {
        return Err(ApiError::conflict("Username already exists"));
    }

    state
        .store()
        .create_user(
            &payload.username,
            payload.phone.as_deref(),
            payload.email.as_deref(),
            &payload.password,
            &state.config().security,
        )
        .await
        .map_err(|e| ApiError::database("Registration failed", e))?;

    tracing::info!("Registered user: {}", payload.username);

    Ok(Json(MessageResponse::new("Registration successful")))
}

/// POST /login
/// One-shot password check. Success returns the stored user record.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .store()
        .get_user_by_username(&payload.username)
        .await
        .map_err(|e| ApiError::database("Login failed", e))?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let valid = state
        .store()
        .verify_user_password(&payload.username, &payload.password)
        .await
        .map_err(|e| ApiError::database("Login failed", e))?;

    if !valid {
        return Err(ApiError::invalid_credentials("Invalid password"));
    }

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserDto::from(user),
    }))
}

/// GET /users
/// Every registered user, projected to {username, email, phone, address}.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserSummaryDto>>, ApiError> {
    let users = state
        .store()
        .list_users()
        .await
        .map_err(|e| ApiError::database("Error fetching users", e))?;

    Ok(Json(users.into_iter().map(UserSummaryDto::from).collect()))
}
