pub mod common;
pub mod education;
pub mod ingredient;
pub mod product_analysis;
