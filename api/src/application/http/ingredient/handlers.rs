pub mod get_education;
pub mod lookup_ingredient;
