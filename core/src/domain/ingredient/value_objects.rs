use crate::domain::ingredient::entities::{IngredientAnalysis, IngredientFinding, SafetyCategory};

pub const MIN_SAFETY_SCORE: i32 = 0;
pub const MAX_SAFETY_SCORE: i32 = 100;

/// Category band for a score: 0-39 harmful, 40-69 moderate, 70-100 safe.
pub fn category_for_score(score: u8) -> SafetyCategory {
    match score {
        0..=39 => SafetyCategory::Harmful,
        40..=69 => SafetyCategory::Moderate,
        _ => SafetyCategory::Safe,
    }
}

/// Score used when a source names a category but gives no number.
pub fn default_score_for(category: SafetyCategory) -> u8 {
    match category {
        SafetyCategory::Safe => 85,
        SafetyCategory::Moderate => 55,
        SafetyCategory::Harmful => 25,
    }
}

pub fn default_description_for(category: SafetyCategory) -> &'static str {
    match category {
        SafetyCategory::Safe => "Generally considered safe for cosmetic and hair care use.",
        SafetyCategory::Moderate => {
            "May cause irritation or sensitivity for some people; use in moderation."
        }
        SafetyCategory::Harmful => {
            "Associated with irritation, toxicity or other health concerns; best avoided."
        }
    }
}

pub fn clamp_score(score: i32) -> u8 {
    score.clamp(MIN_SAFETY_SCORE, MAX_SAFETY_SCORE) as u8
}

/// Turns a source finding into a scored analysis.
///
/// A category given by the source always wins; banding only fills in a missing
/// category. Returns `None` when the finding carries neither a category nor a score.
pub fn score_finding(name: &str, finding: IngredientFinding) -> Option<IngredientAnalysis> {
    let (category, safety_score) = match (finding.category, finding.safety_score) {
        (Some(category), Some(score)) => (category, clamp_score(score)),
        (Some(category), None) => (category, default_score_for(category)),
        (None, Some(score)) => {
            let score = clamp_score(score);
            (category_for_score(score), score)
        }
        (None, None) => return None,
    };

    let description = finding
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| default_description_for(category).to_string());

    let ingredient = if finding.ingredient.trim().is_empty() {
        name.trim().to_string()
    } else {
        finding.ingredient.trim().to_string()
    };

    Some(IngredientAnalysis {
        ingredient,
        category,
        safety_score,
        description,
        sources: finding.sources,
    })
}
