use crate::domain::ingredient::entities::{IngredientAnalysis, SafetyCategory};

/// Identity of the product being analyzed. A fresh id is generated when none is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetails {
    pub product_id: Option<String>,
    pub name: String,
    pub brand: String,
}

impl ProductDetails {
    pub fn new(name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            brand: brand.into(),
        }
    }

    pub fn with_id(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }
}

/// Rounded mean of the safety scores, `None` for an empty slice.
pub fn overall_score(analyses: &[IngredientAnalysis]) -> Option<u8> {
    if analyses.is_empty() {
        return None;
    }

    let total: u32 = analyses.iter().map(|a| u32::from(a.safety_score)).sum();
    let mean = f64::from(total) / analyses.len() as f64;

    Some(mean.round() as u8)
}

/// Analyses split by category, each group in input order.
#[derive(Debug, Default)]
pub struct CategoryPartition<'a> {
    pub harmful: Vec<&'a IngredientAnalysis>,
    pub moderate: Vec<&'a IngredientAnalysis>,
    pub safe: Vec<&'a IngredientAnalysis>,
}

impl<'a> CategoryPartition<'a> {
    pub fn of(analyses: &'a [IngredientAnalysis]) -> Self {
        let mut partition = Self::default();
        for analysis in analyses {
            match analysis.category {
                SafetyCategory::Harmful => partition.harmful.push(analysis),
                SafetyCategory::Moderate => partition.moderate.push(analysis),
                SafetyCategory::Safe => partition.safe.push(analysis),
            }
        }
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(score: u8) -> IngredientAnalysis {
        IngredientAnalysis {
            ingredient: format!("ingredient-{score}"),
            category: crate::domain::ingredient::value_objects::category_for_score(score),
            safety_score: score,
            description: String::new(),
            sources: vec![],
        }
    }

    #[test]
    fn test_overall_score_rounds_mean() {
        let analyses = vec![analysis(20), analysis(90), analysis(30)];
        assert_eq!(overall_score(&analyses), Some(47));

        let analyses = vec![analysis(50), analysis(51)];
        assert_eq!(overall_score(&analyses), Some(51));
    }

    #[test]
    fn test_overall_score_of_nothing() {
        assert_eq!(overall_score(&[]), None);
    }

    #[test]
    fn test_partition_by_category() {
        let analyses = vec![analysis(10), analysis(95), analysis(45), analysis(5)];
        let partition = CategoryPartition::of(&analyses);

        assert_eq!(partition.harmful.len(), 2);
        assert_eq!(partition.moderate.len(), 1);
        assert_eq!(partition.safe.len(), 1);
        assert_eq!(partition.harmful[1].safety_score, 5);
    }
}
