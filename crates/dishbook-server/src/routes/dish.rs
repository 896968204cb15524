use axum::{
    routing::{get, MethodRouter},
    Router,
};
use utoipa::OpenApi;

use crate::{
    handlers::dish::{
        create_dish, delete_dish, get_dish_by_id, get_dish_by_name, list_dishes, patch_dish,
        replace_dish,
    },
    models::dish::{Dish, DishPatch, DishReplacement, MessageResponse, NewDish},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::dish::list_dishes,
        crate::handlers::dish::get_dish_by_name,
        crate::handlers::dish::get_dish_by_id,
        crate::handlers::dish::create_dish,
        crate::handlers::dish::replace_dish,
        crate::handlers::dish::patch_dish,
        crate::handlers::dish::delete_dish,
    ),
    components(schemas(Dish, NewDish, DishReplacement, DishPatch, MessageResponse)),
    tags(
        (name = "Dish", description = "Dish management APIs")
    ),
)]
pub struct DishApi;

/// List and create, shared by the nested root and its trailing-slash form.
pub fn collection_routes() -> MethodRouter<AppState> {
    get(list_dishes).post(create_dish)
}

// `/{key}` is a name for GET and an id for PUT/PATCH/DELETE; one pattern
// serves both since the router rejects two parameters at the same position.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", collection_routes())
        .route("/id/{id}", get(get_dish_by_id))
        .route(
            "/{key}",
            get(get_dish_by_name)
                .put(replace_dish)
                .patch(patch_dish)
                .delete(delete_dish),
        )
}
