pub mod gemini_client;
pub mod schema;

pub use gemini_client::GeminiIngredientClient;
