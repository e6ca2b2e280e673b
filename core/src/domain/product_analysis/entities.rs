use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ingredient::entities::IngredientAnalysis;

/// Aggregated safety verdict for a full ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductAnalysis {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub overall_score: u8, // 0-100
    pub ingredients: Vec<IngredientAnalysis>,
    pub recommendations: Vec<String>,
    pub safer_alternatives: Vec<RoutineProduct>,
    pub last_updated: DateTime<Utc>,
}

/// A substitute product suggested in place of one with harmful ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoutineProduct {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub category: String, // 'shampoo' | 'conditioner' | 'moisturizer' | ...
    pub ingredients: BTreeSet<String>,
    pub safety_score: u8,
    pub is_verified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyLevel {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl SafetyLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => SafetyLevel::Excellent,
            60..=79 => SafetyLevel::Good,
            40..=59 => SafetyLevel::Moderate,
            _ => SafetyLevel::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SafetyBreakdown {
    pub safe_percent: f64,
    pub moderate_percent: f64,
    pub harmful_percent: f64,
}

/// Derived view over a set of analyses. Recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SafetySummary {
    pub total: usize,
    pub safe: usize,
    pub moderate: usize,
    pub harmful: usize,
    pub overall_score: u8,
    pub safety_level: SafetyLevel,
    pub breakdown: SafetyBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ComparisonSide {
    First,
    Second,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Comparison {
    pub first: SafetySummary,
    pub second: SafetySummary,
    pub winner: ComparisonSide,
    pub winner_id: String,
    pub score_difference: u8,
}
