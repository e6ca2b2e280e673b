use glowguard_core::domain::{
    ingredient::entities::IngredientAnalysis,
    product_analysis::{entities::ProductAnalysis, value_objects::ProductDetails},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_ingredient_names(names: &[String]) -> Result<(), ValidationError> {
    if names.iter().all(|name| name.trim().is_empty()) {
        return Err(ValidationError::new("ingredients")
            .with_message("at least one non-empty ingredient name is required".into()));
    }
    Ok(())
}

fn validate_ingredient_scores(ingredients: &[IngredientAnalysis]) -> Result<(), ValidationError> {
    if ingredients.iter().any(|i| i.safety_score > 100) {
        return Err(ValidationError::new("safety_score")
            .with_message("safety_score must be between 0 and 100".into()));
    }
    Ok(())
}

fn validate_product_scores(product: &ProductAnalysis) -> Result<(), ValidationError> {
    if product.overall_score > 100 {
        return Err(ValidationError::new("overall_score")
            .with_message("overall_score must be between 0 and 100".into()));
    }
    validate_ingredient_scores(&product.ingredients)
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeTextRequest {
    pub product_id: Option<String>,
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "brand must be at most 200 characters"))]
    pub brand: String,
    #[validate(length(
        min = 1,
        max = 5000,
        message = "text must be between 1 and 5000 characters"
    ))]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct AnalyzeIngredientsRequest {
    pub product_id: Option<String>,
    #[validate(length(
        min = 1,
        max = 200,
        message = "name must be between 1 and 200 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 200, message = "brand must be at most 200 characters"))]
    pub brand: String,
    #[validate(
        length(
            min = 1,
            max = 100,
            message = "ingredients must contain between 1 and 100 names"
        ),
        custom(function = "validate_ingredient_names")
    )]
    pub ingredients: Vec<String>,
}

fn product_details(product_id: Option<String>, name: String, brand: String) -> ProductDetails {
    ProductDetails {
        product_id,
        name,
        brand,
    }
}

impl AnalyzeTextRequest {
    pub fn into_parts(self) -> (ProductDetails, String) {
        (
            product_details(self.product_id, self.name, self.brand),
            self.text,
        )
    }
}

impl AnalyzeIngredientsRequest {
    pub fn into_parts(self) -> (ProductDetails, Vec<String>) {
        (
            product_details(self.product_id, self.name, self.brand),
            self.ingredients,
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CompareProductsRequest {
    #[validate(custom(function = "validate_product_scores"))]
    pub first: ProductAnalysis,
    #[validate(custom(function = "validate_product_scores"))]
    pub second: ProductAnalysis,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SummarizeIngredientsRequest {
    #[validate(
        length(min = 1, message = "ingredients must not be empty"),
        custom(function = "validate_ingredient_scores")
    )]
    pub ingredients: Vec<IngredientAnalysis>,
}
