use surrealdb::{engine::any::Any, Surreal};
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    models::dish::{Dish, DishPatch, DishRecord, DishReplacement, NewDish},
};

const TABLE: &str = "dishes";

/// Create the dishes table and its unique indexes.
pub async fn create_dish_table(db: &Surreal<Any>) -> Result<()> {
    let query = r#"
        DEFINE TABLE IF NOT EXISTS dishes SCHEMAFULL;

        DEFINE FIELD IF NOT EXISTS dish_id           ON TABLE dishes TYPE string;
        DEFINE FIELD IF NOT EXISTS name              ON TABLE dishes TYPE string;
        DEFINE FIELD IF NOT EXISTS ingredients       ON TABLE dishes TYPE array<string>;
        DEFINE FIELD IF NOT EXISTS preparation_steps ON TABLE dishes TYPE array<string>;
        DEFINE FIELD IF NOT EXISTS cooking_time      ON TABLE dishes TYPE string;
        DEFINE FIELD IF NOT EXISTS origin            ON TABLE dishes TYPE string;
        DEFINE FIELD IF NOT EXISTS spice_level       ON TABLE dishes TYPE string;

        DEFINE INDEX IF NOT EXISTS dish_id_idx   ON TABLE dishes COLUMNS dish_id UNIQUE;
        DEFINE INDEX IF NOT EXISTS dish_name_idx ON TABLE dishes COLUMNS name UNIQUE;
    "#;

    db.query(query).await?.check()?;
    Ok(())
}

/// True when `err` reports a unique index violation.
///
/// Embedded engines return a typed error; remote ones only carry the server
/// message, so both are checked.
fn is_unique_violation(err: &surrealdb::Error) -> bool {
    matches!(
        err,
        surrealdb::Error::Db(surrealdb::error::Db::IndexExists { .. })
    ) || err.to_string().contains("already contains")
}

fn duplicate_name(err: surrealdb::Error) -> AppError {
    if is_unique_violation(&err) {
        AppError::Conflict("Dish already exists".into())
    } else {
        AppError::DbError(err)
    }
}

/// Dish persistence. Every method is a single statement against one record,
/// so concurrent writers are serialized by the database.
#[derive(Clone)]
pub struct DishStore {
    db: Surreal<Any>,
}

impl DishStore {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<Dish>> {
        let records: Vec<DishRecord> = self.db.select(TABLE).await?;
        Ok(records.into_iter().map(Dish::from).collect())
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Dish>> {
        let mut response = self
            .db
            .query("SELECT * FROM dishes WHERE name = $name LIMIT 1")
            .bind(("name", name.to_string()))
            .await?;
        let records: Vec<DishRecord> = response.take(0)?;
        Ok(records.into_iter().next().map(Dish::from))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Dish>> {
        let record: Option<DishRecord> = self.db.select((TABLE, id)).await?;
        Ok(record.map(Dish::from))
    }

    /// Insert a new dish under a fresh id. A taken name is rejected by the
    /// unique index and reported as [`AppError::Conflict`].
    pub async fn create(&self, dish: NewDish) -> Result<Dish> {
        let dish_id = Uuid::new_v4().to_string();
        let record = dish.into_record(dish_id.clone());

        let created: Option<DishRecord> = self
            .db
            .create((TABLE, dish_id))
            .content(record)
            .await
            .map_err(duplicate_name)?;

        created
            .map(Dish::from)
            .ok_or_else(|| AppError::Internal("Failed to create dish".into()))
    }

    /// Overwrite every mutable field. `None` when no dish has this id.
    pub async fn replace(&self, id: &str, body: DishReplacement) -> Result<Option<Dish>> {
        self.merge(id, body).await
    }

    /// Overwrite only the supplied fields. `None` when no dish has this id.
    pub async fn patch(&self, id: &str, patch: DishPatch) -> Result<Option<Dish>> {
        self.merge(id, patch).await
    }

    /// Returns the removed dish, or `None` when no dish has this id.
    pub async fn delete(&self, id: &str) -> Result<Option<Dish>> {
        let mut response = self
            .db
            .query("DELETE dishes WHERE dish_id = $id RETURN BEFORE")
            .bind(("id", id.to_string()))
            .await?;
        let removed: Vec<DishRecord> = response.take(0)?;
        Ok(removed.into_iter().next().map(Dish::from))
    }

    // `UPDATE ... WHERE` only touches existing rows, so an unknown id yields
    // an empty result instead of a new record.
    async fn merge<T>(&self, id: &str, fields: T) -> Result<Option<Dish>>
    where
        T: serde::Serialize + 'static,
    {
        let mut response = self
            .db
            .query("UPDATE dishes MERGE $fields WHERE dish_id = $id RETURN AFTER")
            .bind(("fields", fields))
            .bind(("id", id.to_string()))
            .await?;
        let updated: Vec<DishRecord> = response.take(0).map_err(duplicate_name)?;
        Ok(updated.into_iter().next().map(Dish::from))
    }
}
