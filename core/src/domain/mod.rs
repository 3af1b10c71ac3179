pub mod common;
pub mod image;
pub mod recipe;
pub mod upstream;
