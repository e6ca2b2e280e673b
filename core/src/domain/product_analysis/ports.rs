use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    education::entities::EducationEntry,
    ingredient::entities::IngredientAnalysis,
    product_analysis::{
        entities::{Comparison, ProductAnalysis, SafetySummary},
        value_objects::ProductDetails,
    },
};

/// Service trait for ingredient safety analysis
#[cfg_attr(test, mockall::automock)]
pub trait IngredientSafetyService: Send + Sync {
    /// Analyze a product from raw ingredient text
    fn analyze_text(
        &self,
        details: ProductDetails,
        text: String,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;

    /// Analyze a product from an already split ingredient list
    fn analyze_ingredients(
        &self,
        details: ProductDetails,
        names: Vec<String>,
    ) -> impl Future<Output = Result<ProductAnalysis, CoreError>> + Send;

    /// Resolve a single ingredient
    fn lookup_one(
        &self,
        name: String,
    ) -> impl Future<Output = Result<IngredientAnalysis, CoreError>> + Send;

    fn compare(&self, a: &ProductAnalysis, b: &ProductAnalysis) -> Comparison;

    fn summarize(&self, analyses: &[IngredientAnalysis]) -> Result<SafetySummary, CoreError>;

    fn education_for(&self, ingredient: &str) -> Option<EducationEntry>;
}
