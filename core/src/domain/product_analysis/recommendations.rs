use std::sync::Arc;

use crate::domain::{
    ingredient::entities::IngredientAnalysis,
    product_analysis::{
        catalog::AlternativesCatalog, entities::RoutineProduct, value_objects::CategoryPartition,
    },
};

pub const MAX_RECOMMENDATIONS: usize = 5;
pub const MAX_SAFER_ALTERNATIVES: usize = 3;

const HARMFUL_WARNING: &str =
    "This product contains harmful ingredients. Consider switching to a safer alternative.";
const MODERATE_CAUTION: &str =
    "Some ingredients may cause irritation or sensitivity. Patch test before regular use.";
const ALL_SAFE: &str = "Great choice! All ingredients in this product are considered safe.";

/// Derives guidance lines and substitute products from ingredient analyses.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    alternatives: Arc<AlternativesCatalog>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(AlternativesCatalog::default())
    }
}

impl RecommendationEngine {
    pub fn new(alternatives: AlternativesCatalog) -> Self {
        Self {
            alternatives: Arc::new(alternatives),
        }
    }

    /// At most five lines: general warnings first, then one line per harmful
    /// ingredient, then one per moderate ingredient.
    pub fn recommend(&self, analyses: &[IngredientAnalysis]) -> Vec<String> {
        let partition = CategoryPartition::of(analyses);
        let mut lines = Vec::new();

        if !partition.harmful.is_empty() {
            lines.push(HARMFUL_WARNING.to_string());
        }
        if !partition.moderate.is_empty() {
            lines.push(MODERATE_CAUTION.to_string());
        }
        if partition.harmful.is_empty() && partition.moderate.is_empty() {
            lines.push(ALL_SAFE.to_string());
        }

        lines.extend(
            partition
                .harmful
                .iter()
                .map(|a| format!("Avoid {}: {}", a.ingredient, a.description)),
        );
        lines.extend(
            partition
                .moderate
                .iter()
                .map(|a| format!("Use {} with caution: {}", a.ingredient, a.description)),
        );

        lines.truncate(MAX_RECOMMENDATIONS);
        lines
    }

    /// At most three substitutes for the harmful ingredients, in match order.
    pub fn safer_alternatives(&self, analyses: &[IngredientAnalysis]) -> Vec<RoutineProduct> {
        let partition = CategoryPartition::of(analyses);
        let mut suggestions: Vec<RoutineProduct> = Vec::new();

        for harmful in partition.harmful {
            for entry in self.alternatives.matching(&harmful.ingredient) {
                for product in &entry.products {
                    if !suggestions.iter().any(|p| p.id == product.id) {
                        suggestions.push(product.clone());
                    }
                }
            }
        }

        suggestions.truncate(MAX_SAFER_ALTERNATIVES);
        suggestions
    }
}
