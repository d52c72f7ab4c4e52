//! Request handlers, one module per resource.

pub mod health;
pub mod index;
pub mod ingredient;
pub mod recipe;
