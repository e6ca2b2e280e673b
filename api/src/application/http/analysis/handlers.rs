pub mod analyze_ingredients;
pub mod analyze_text;
pub mod compare_products;
pub mod summarize_ingredients;
