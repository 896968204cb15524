mod dish;
mod health;

use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::page::index,
    routes::{dish::DishApi, health::HealthApi},
    state::AppState,
};

pub const DISHES_PATH: &str = "/api/dishes";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dishbook API",
        description = "Create, read, update and delete dishes"
    ),
    paths(crate::handlers::page::index),
)]
struct ApiDoc;

fn create_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60))
}

pub fn create_routes(state: AppState) -> Router {
    let mut doc = ApiDoc::openapi();
    doc.merge(DishApi::openapi());
    doc.merge(HealthApi::openapi());

    Router::new()
        .route("/", get(index))
        .nest(DISHES_PATH, dish::create_router())
        .route(&format!("{DISHES_PATH}/"), dish::collection_routes())
        .merge(health::create_router())
        .with_state(state)
        .layer(create_cors())
        .layer(TraceLayer::new_for_http())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", doc))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::{dish::DishStore, memory_db};

    async fn app() -> Router {
        let db = memory_db().await;
        create_routes(AppState::new(DishStore::new(db.client())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn pasta() -> Value {
        json!({
            "name": "Pasta",
            "ingredients": ["flour", "egg"],
            "preparationSteps": ["mix", "boil"],
            "cookingTime": "20m",
            "origin": "Italy",
            "spiceLevel": "mild"
        })
    }

    #[tokio::test]
    async fn test_pasta_lifecycle() {
        let app = app().await;

        let created = send(&app, Method::POST, "/api/dishes", Some(pasta())).await;
        assert_eq!(created.status(), StatusCode::CREATED);
        let created = json_body(created).await;
        assert_eq!(created["message"], "Dish added successfully");

        let again = send(&app, Method::POST, "/api/dishes", Some(pasta())).await;
        assert_eq!(again.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(again).await["message"], "Dish already exists");

        let found = send(&app, Method::GET, "/api/dishes/Pasta", None).await;
        assert_eq!(found.status(), StatusCode::OK);
        let found = json_body(found).await;
        let id = found["id"].as_str().unwrap().to_string();
        assert_eq!(created["id"], found["id"]);
        let mut expected = pasta();
        expected["id"] = json!(id);
        assert_eq!(found, expected);

        let patched = send(
            &app,
            Method::PATCH,
            &format!("/api/dishes/{id}"),
            Some(json!({ "spiceLevel": "hot" })),
        )
        .await;
        assert_eq!(patched.status(), StatusCode::OK);
        expected["spiceLevel"] = json!("hot");
        assert_eq!(json_body(patched).await, expected);

        let deleted = send(&app, Method::DELETE, &format!("/api/dishes/{id}"), None).await;
        assert_eq!(deleted.status(), StatusCode::OK);
        assert_eq!(
            json_body(deleted).await["message"],
            "Dish deleted successfully"
        );

        let gone = send(&app, Method::GET, "/api/dishes/Pasta", None).await;
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(gone).await["message"], "Dish not found");
    }

    #[tokio::test]
    async fn test_create_with_missing_field_is_rejected() {
        let app = app().await;

        for field in [
            "name",
            "ingredients",
            "preparationSteps",
            "cookingTime",
            "origin",
            "spiceLevel",
        ] {
            let mut body = pasta();
            body.as_object_mut().unwrap().remove(field);

            let response = send(&app, Method::POST, "/api/dishes", Some(body)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "without {field}");
            assert_eq!(
                json_body(response).await["message"],
                "All fields are required"
            );
        }

        let mut empty = pasta();
        empty["cookingTime"] = json!("");
        let response = send(&app, Method::POST, "/api/dishes", Some(empty)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let list = json_body(send(&app, Method::GET, "/api/dishes", None).await).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app().await;
        let mut body = pasta();
        body["ingredients"] = json!("flour, egg");

        let response = send(&app, Method::POST, "/api/dishes", Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["message"],
            "Malformed request body"
        );
    }

    #[tokio::test]
    async fn test_get_by_id_and_list() {
        let app = app().await;
        let created =
            json_body(send(&app, Method::POST, "/api/dishes", Some(pasta())).await).await;
        let id = created["id"].as_str().unwrap();

        let found = send(&app, Method::GET, &format!("/api/dishes/id/{id}"), None).await;
        assert_eq!(found.status(), StatusCode::OK);
        assert_eq!(json_body(found).await["name"], "Pasta");

        let missing = send(&app, Method::GET, "/api/dishes/id/nope", None).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let list = send(&app, Method::GET, "/api/dishes", None).await;
        assert_eq!(list.status(), StatusCode::OK);
        let list = json_body(list).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["ingredients"], json!(["flour", "egg"]));
    }

    #[tokio::test]
    async fn test_put_replaces_all_fields() {
        let app = app().await;
        let created =
            json_body(send(&app, Method::POST, "/api/dishes", Some(pasta())).await).await;
        let id = created["id"].as_str().unwrap();

        let replacement = json!({
            "name": "Tagliatelle",
            "ingredients": ["flour", "egg", ""],
            "preparationSteps": ["roll", "cut", "boil"],
            "cookingTime": "",
            "origin": "Emilia-Romagna",
            "spiceLevel": "none"
        });
        let response = send(
            &app,
            Method::PUT,
            &format!("/api/dishes/{id}"),
            Some(replacement.clone()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let mut expected = replacement;
        expected["id"] = json!(id);
        assert_eq!(json_body(response).await, expected);
    }

    #[tokio::test]
    async fn test_updates_on_unknown_id_are_not_found() {
        let app = app().await;
        send(&app, Method::POST, "/api/dishes", Some(pasta())).await;

        let mut replacement = pasta();
        replacement["name"] = json!("Ghost");
        let put = send(&app, Method::PUT, "/api/dishes/nope", Some(replacement)).await;
        assert_eq!(put.status(), StatusCode::NOT_FOUND);

        let patch = send(
            &app,
            Method::PATCH,
            "/api/dishes/nope",
            Some(json!({ "origin": "Italy" })),
        )
        .await;
        assert_eq!(patch.status(), StatusCode::NOT_FOUND);

        let delete = send(&app, Method::DELETE, "/api/dishes/nope", None).await;
        assert_eq!(delete.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(delete).await["message"], "Dish not found");

        let list = json_body(send(&app, Method::GET, "/api/dishes", None).await).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["name"], "Pasta");
    }

    #[tokio::test]
    async fn test_collection_answers_with_trailing_slash() {
        let app = app().await;

        let created = send(&app, Method::POST, "/api/dishes/", Some(pasta())).await;
        assert_eq!(created.status(), StatusCode::CREATED);

        let list = send(&app, Method::GET, "/api/dishes/", None).await;
        assert_eq!(list.status(), StatusCode::OK);
        let list = json_body(list).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["name"], "Pasta");

        let without_slash = json_body(send(&app, Method::GET, "/api/dishes", None).await).await;
        assert_eq!(without_slash, list);
    }

    #[tokio::test]
    async fn test_page_and_health() {
        let app = app().await;

        let page = send(&app, Method::GET, "/", None).await;
        assert_eq!(page.status(), StatusCode::OK);
        let bytes = to_bytes(page.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("addDishForm"));

        let health = send(&app, Method::GET, "/health", None).await;
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(json_body(health).await["status"], "ok");

        let doc = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(doc.status(), StatusCode::OK);
        assert!(json_body(doc).await["paths"]["/api/dishes/id/{id}"].is_object());
    }
}
