use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{
    ApiError, AppState, LoanDto, LoanStatsResponse, MessageResponse, UpdateStatusRequest,
    UpdateStatusResponse,
};
use crate::models::loan::LoanApplication;

/// POST /apply-loan
/// Accepts whatever subset of the loan shape the caller's form collected;
/// no per-loanType validation. The store supplies status and timestamp.
pub async fn apply_loan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoanApplication>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .store()
        .create_loan(&payload)
        .await
        .map_err(|e| ApiError::database("Failed to submit loan application", e))?;

    Ok(Json(MessageResponse::new(
        "Loan application submitted successfully",
    )))
}

/// GET /loan-applications
/// Every application, newest first. Unbounded.
pub async fn list_applications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LoanDto>>, ApiError> {
    let loans = state
        .store()
        .list_loans()
        .await
        .map_err(|e| ApiError::database("Failed to fetch loan applications", e))?;

    Ok(Json(loans.into_iter().map(LoanDto::from).collect()))
}

/// GET /my-loans/{username}
/// Applications whose fullName exactly equals the given string, newest
/// first. fullName is free text, so this matches on display name, not on
/// any enforced user identity.
pub async fn my_loans(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<LoanDto>>, ApiError> {
    let loans = state
        .store()
        .list_loans_by_full_name(&username)
        .await
        .map_err(|e| ApiError::database("Failed to fetch user loans", e))?;

    Ok(Json(loans.into_iter().map(LoanDto::from).collect()))
}

/// PUT /update-loan-status/{id}
/// Set the status of one application. The id is validated before any store
/// access; the status value itself is an open string and stored as given.
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::invalid_argument("Invalid loan ID format"))?;

    let loan = state
        .store()
        .update_loan_status(id, &payload.status)
        .await
        .map_err(|e| ApiError::database("Failed to update loan status", e))?
        .ok_or_else(|| ApiError::not_found("Loan not found"))?;

    Ok(Json(UpdateStatusResponse {
        message: "Status updated successfully".to_string(),
        loan: LoanDto::from(loan),
    }))
}

/// GET /loan-stats/{username}
/// Per-user aggregate counts. Three independent count queries; no snapshot
/// guarantee across them if writes race the read.
pub async fn loan_stats(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<LoanStatsResponse>, ApiError> {
    let store = state.store();

    let applied = store
        .count_loans_by_full_name(&username)
        .await
        .map_err(|e| ApiError::database("Failed to fetch loan stats", e))?;

    let approved = store
        .count_loans_by_full_name_and_status(&username, "Approved")
        .await
        .map_err(|e| ApiError::database("Failed to fetch loan stats", e))?;

    let rejected = store
        .count_loans_by_full_name_and_status(&username, "Rejected")
        .await
        .map_err(|e| ApiError::database("Failed to fetch loan stats", e))?;

    Ok(Json(LoanStatsResponse {
        applied,
        approved,
        rejected,
    }))
}
