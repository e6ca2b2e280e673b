use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::IngredientAnalysis,
    product_analysis::{
        entities::{ProductAnalysis, SafetyBreakdown, SafetyLevel, SafetySummary},
        value_objects::{CategoryPartition, overall_score},
    },
};

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 * 1000.0 / total as f64).round() / 10.0
}

impl SafetySummary {
    fn build(analyses: &[IngredientAnalysis], overall_score: u8) -> Self {
        let partition = CategoryPartition::of(analyses);
        let total = analyses.len();
        let (safe, moderate, harmful) = (
            partition.safe.len(),
            partition.moderate.len(),
            partition.harmful.len(),
        );

        Self {
            total,
            safe,
            moderate,
            harmful,
            overall_score,
            safety_level: SafetyLevel::from_score(overall_score),
            breakdown: SafetyBreakdown {
                safe_percent: percent(safe, total),
                moderate_percent: percent(moderate, total),
                harmful_percent: percent(harmful, total),
            },
        }
    }

    /// Summary of a stored product, trusting its recorded overall score.
    pub fn of_product(product: &ProductAnalysis) -> Self {
        Self::build(&product.ingredients, product.overall_score)
    }
}

/// Counts, overall score and level for a set of analyses.
pub fn summarize(analyses: &[IngredientAnalysis]) -> Result<SafetySummary, CoreError> {
    if let Some(analysis) = analyses.iter().find(|a| a.safety_score > 100) {
        return Err(CoreError::InvalidInput(format!(
            "safety score {} for '{}' is outside 0..=100",
            analysis.safety_score, analysis.ingredient
        )));
    }

    let score = overall_score(analyses).ok_or(CoreError::EmptyIngredientSet)?;
    Ok(SafetySummary::build(analyses, score))
}
