use axum::{
    extract::{Json, Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{AppState, error::AppError, models::User, result::MessageResponse};

#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(user) = payload?;
    state.users.create_user(&user).await?;
    Ok((StatusCode::OK, Json(MessageResponse::success())))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = state.users.get_user(&name).await?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(user) = payload?;
    state.users.update_user(&user).await?;
    Ok((StatusCode::OK, Json(MessageResponse::success())))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state.users.delete_user(&name).await?;
    Ok((StatusCode::OK, Json(MessageResponse::success())))
}
