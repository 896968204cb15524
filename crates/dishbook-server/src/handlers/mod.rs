pub mod dish;
pub mod health;
pub mod page;
