use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Dish as stored in the `dishes` table.
///
/// The record key and `dish_id` carry the same value, so lookups by id can go
/// through either the record key or the indexed field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecord {
    pub dish_id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    pub cooking_time: String,
    pub origin: String,
    pub spice_level: String,
}

/// Dish as exposed over the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Generated at creation, never changes
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    /// Free-form, e.g. "30 minutes"
    pub cooking_time: String,
    pub origin: String,
    /// Free-form, e.g. "mild" or "hot"
    pub spice_level: String,
}

impl From<DishRecord> for Dish {
    fn from(record: DishRecord) -> Self {
        Self {
            id: record.dish_id,
            name: record.name,
            ingredients: record.ingredients,
            preparation_steps: record.preparation_steps,
            cooking_time: record.cooking_time,
            origin: record.origin,
            spice_level: record.spice_level,
        }
    }
}

/// Request body for creating a dish.
///
/// Absent fields deserialize as empty so that a missing field and an empty
/// one are rejected by the same validation rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct NewDish {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub ingredients: Vec<String>,
    #[validate(length(min = 1))]
    pub preparation_steps: Vec<String>,
    #[validate(length(min = 1))]
    pub cooking_time: String,
    #[validate(length(min = 1))]
    pub origin: String,
    #[validate(length(min = 1))]
    pub spice_level: String,
}

impl NewDish {
    pub fn into_record(self, dish_id: String) -> DishRecord {
        DishRecord {
            dish_id,
            name: self.name,
            ingredients: self.ingredients,
            preparation_steps: self.preparation_steps,
            cooking_time: self.cooking_time,
            origin: self.origin,
            spice_level: self.spice_level,
        }
    }
}

/// Full replacement of every mutable field. Values are written as given.
///
/// Read in camelCase from requests and written in snake_case as the `MERGE`
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all(deserialize = "camelCase"))]
#[schema(rename_all = "camelCase")]
pub struct DishReplacement {
    pub name: String,
    pub ingredients: Vec<String>,
    pub preparation_steps: Vec<String>,
    pub cooking_time: String,
    pub origin: String,
    pub spice_level: String,
}

/// Partial update. `None` (absent or `null`) leaves the stored value alone
/// and is left out of the `MERGE` payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all(deserialize = "camelCase"))]
#[schema(rename_all = "camelCase")]
pub struct DishPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<String>,
}

/// Body of create/delete confirmations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
