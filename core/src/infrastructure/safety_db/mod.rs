pub mod database;
mod records;

pub use database::StaticSafetyDatabase;
