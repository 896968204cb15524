//! Inserts a sample dish using the service's own settings and store.

use dishbook_server::{
    db::{dish::DishStore, Database},
    error::AppError,
    logging::init_tracing,
    models::dish::NewDish,
    settings::Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load_default()?;
    init_tracing(settings.log.level.as_deref());

    let db = Database::connect(&settings.surrealdb).await?;
    let store = DishStore::new(db.client());

    let sample = NewDish {
        name: "Pasta".to_string(),
        ingredients: vec!["flour".to_string(), "egg".to_string()],
        preparation_steps: vec!["mix".to_string(), "boil".to_string()],
        cooking_time: "20m".to_string(),
        origin: "Italy".to_string(),
        spice_level: "mild".to_string(),
    };

    match store.create(sample).await {
        Ok(dish) => tracing::info!(id = %dish.id, "Inserted {}", dish.name),
        Err(AppError::Conflict(_)) => tracing::info!("Pasta already present, nothing to do"),
        Err(e) => return Err(e.into()),
    }

    let total = store.list().await?.len();
    tracing::info!("{total} dishes in store");

    drop(store);
    db.close().await?;
    Ok(())
}
