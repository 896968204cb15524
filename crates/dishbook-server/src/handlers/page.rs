use axum::{extract::State, response::Html};
use tera::Context;

use crate::{
    error::{AppError, Result},
    state::AppState,
    web,
};

/// Dish management page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "HTML page listing dishes", body = String, content_type = "text/html"),
    ),
    tag = "Page"
)]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let mut context = Context::new();
    context.insert("api_base", &state.api_base);

    web::render("index.html", &context)
        .map(Html)
        .map_err(|e| AppError::Internal(format!("Failed to render page: {e}")))
}
