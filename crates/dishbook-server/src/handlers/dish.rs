use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use validator::Validate;

use crate::{
    error::{AppError, Result},
    models::dish::{Dish, DishPatch, DishReplacement, MessageResponse, NewDish},
    state::AppState,
};

fn not_found() -> AppError {
    AppError::NotFound("Dish not found".into())
}

/// List all dishes
#[utoipa::path(
    get,
    path = "/api/dishes",
    responses(
        (status = 200, description = "All dishes", body = [Dish]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn list_dishes(State(state): State<AppState>) -> Result<Json<Vec<Dish>>> {
    let dishes = state.dishes.list().await?;
    Ok(Json(dishes))
}

/// Get a dish by its name
#[utoipa::path(
    get,
    path = "/api/dishes/{name}",
    params(
        ("name" = String, Path, description = "Dish name, case-sensitive")
    ),
    responses(
        (status = 200, description = "Dish found", body = Dish),
        (status = 404, description = "Dish not found", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn get_dish_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Dish>> {
    state
        .dishes
        .find_by_name(&name)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Get a dish by its id
#[utoipa::path(
    get,
    path = "/api/dishes/id/{id}",
    params(
        ("id" = String, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Dish found", body = Dish),
        (status = 404, description = "Dish not found", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn get_dish_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Dish>> {
    state
        .dishes
        .find_by_id(&id)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Add a new dish
#[utoipa::path(
    post,
    path = "/api/dishes",
    request_body = NewDish,
    responses(
        (status = 201, description = "Dish added", body = MessageResponse),
        (status = 400, description = "A required field is missing or empty", body = MessageResponse),
        (status = 409, description = "A dish with this name already exists", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn create_dish(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewDish>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let Json(dish) = payload?;
    dish.validate()?;

    let created = state.dishes.create(dish).await?;
    tracing::info!(id = %created.id, name = %created.name, "Dish added");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Dish added successfully").with_id(created.id)),
    ))
}

/// Replace every field of a dish
#[utoipa::path(
    put,
    path = "/api/dishes/{id}",
    params(
        ("id" = String, Path, description = "Dish ID")
    ),
    request_body = DishReplacement,
    responses(
        (status = 200, description = "Updated dish", body = Dish),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 404, description = "Dish not found", body = MessageResponse),
        (status = 409, description = "New name belongs to another dish", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn replace_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<DishReplacement>, JsonRejection>,
) -> Result<Json<Dish>> {
    let Json(body) = payload?;
    tracing::info!(%id, ?body, "Replacing dish");

    state
        .dishes
        .replace(&id, body)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Update only the supplied fields of a dish
#[utoipa::path(
    patch,
    path = "/api/dishes/{id}",
    params(
        ("id" = String, Path, description = "Dish ID")
    ),
    request_body = DishPatch,
    responses(
        (status = 200, description = "Updated dish", body = Dish),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 404, description = "Dish not found", body = MessageResponse),
        (status = 409, description = "New name belongs to another dish", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn patch_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<DishPatch>, JsonRejection>,
) -> Result<Json<Dish>> {
    let Json(patch) = payload?;
    tracing::info!(%id, ?patch, "Patching dish");

    state
        .dishes
        .patch(&id, patch)
        .await?
        .map(Json)
        .ok_or_else(not_found)
}

/// Delete a dish
#[utoipa::path(
    delete,
    path = "/api/dishes/{id}",
    params(
        ("id" = String, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Dish deleted", body = MessageResponse),
        (status = 404, description = "Dish not found", body = MessageResponse),
        (status = 500, description = "Internal server error"),
    ),
    tag = "Dish"
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    tracing::info!(%id, "Deleting dish");

    state.dishes.delete(&id).await?.ok_or_else(not_found)?;
    Ok(Json(MessageResponse::new("Dish deleted successfully")))
}
