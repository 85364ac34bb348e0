pub mod category;
pub mod fields;
pub mod image;
pub mod model;

pub use model::{Author, Category, Post};
