//! Dish catalogue service: a JSON API over a SurrealDB `dishes` table plus a
//! browser page that drives it.

pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;
pub mod web;
