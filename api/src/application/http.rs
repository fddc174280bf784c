pub mod cooking_session;
pub mod health;
pub mod history;
pub mod ingredients;
pub mod recipe;
pub mod server;
