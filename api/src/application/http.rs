pub mod health;
pub mod image;
pub mod recipe;
pub mod server;
