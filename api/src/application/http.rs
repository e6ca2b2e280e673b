pub mod analysis;
pub mod health;
pub mod ingredient;
pub mod server;
