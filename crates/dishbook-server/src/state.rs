use crate::db::dish::DishStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishStore,
    /// Base path the browser page calls back into
    pub api_base: String,
}

impl AppState {
    pub fn new(dishes: DishStore) -> Self {
        Self {
            dishes,
            api_base: crate::routes::DISHES_PATH.to_string(),
        }
    }
}
