use chrono::Utc;
use tracing::debug;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    ingredient::entities::IngredientAnalysis,
    product_analysis::{
        entities::ProductAnalysis,
        recommendations::RecommendationEngine,
        value_objects::{CategoryPartition, ProductDetails, overall_score},
    },
};

/// Combines ingredient analyses into a product-level verdict.
#[derive(Debug, Clone, Default)]
pub struct ProductAggregator {
    recommendations: RecommendationEngine,
}

impl ProductAggregator {
    pub fn new(recommendations: RecommendationEngine) -> Self {
        Self { recommendations }
    }

    pub fn aggregate(
        &self,
        details: ProductDetails,
        analyses: Vec<IngredientAnalysis>,
    ) -> Result<ProductAnalysis, CoreError> {
        let overall_score = overall_score(&analyses).ok_or(CoreError::EmptyIngredientSet)?;

        let partition = CategoryPartition::of(&analyses);
        debug!(
            harmful = partition.harmful.len(),
            moderate = partition.moderate.len(),
            safe = partition.safe.len(),
            overall_score,
            "aggregated ingredient analyses"
        );

        let recommendations = self.recommendations.recommend(&analyses);
        let safer_alternatives = self.recommendations.safer_alternatives(&analyses);

        let product_id = details
            .product_id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| generate_uuid_v7().to_string());

        Ok(ProductAnalysis {
            product_id,
            name: details.name,
            brand: details.brand,
            overall_score,
            ingredients: analyses,
            recommendations,
            safer_alternatives,
            last_updated: Utc::now(),
        })
    }
}
