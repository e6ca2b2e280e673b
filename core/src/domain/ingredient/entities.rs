use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::LookupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SafetyCategory {
    Safe,
    Moderate,
    Harmful,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Citation {
    pub title: String,
    pub url: Option<String>,
}

impl Citation {
    pub fn new(title: impl Into<String>, url: Option<String>) -> Self {
        Self {
            title: title.into(),
            url,
        }
    }
}

/// Safety verdict for one ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IngredientAnalysis {
    pub ingredient: String,
    pub category: SafetyCategory,
    pub safety_score: u8, // 0-100, higher is safer
    pub description: String,
    pub sources: Vec<Citation>,
}

/// What a knowledge source knows about an ingredient, before scoring.
///
/// Every source adapter translates its own payload into this shape, so nothing
/// provider specific reaches the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientFinding {
    pub ingredient: String,
    pub category: Option<SafetyCategory>,
    pub safety_score: Option<i32>,
    pub description: Option<String>,
    pub sources: Vec<Citation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub journal: Option<String>,
    pub published: Option<String>,
    pub url: String,
}

impl From<Article> for Citation {
    fn from(article: Article) -> Self {
        let title = match article.journal {
            Some(journal) if !journal.is_empty() => format!("{} ({})", article.title, journal),
            _ => article.title,
        };

        Citation::new(title, Some(article.url))
    }
}

/// Per-ingredient outcome of a batch lookup, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResolution {
    pub results: Vec<Result<IngredientAnalysis, LookupError>>,
}

impl BatchResolution {
    pub fn successes(&self) -> impl Iterator<Item = &IngredientAnalysis> {
        self.results.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &LookupError> {
        self.results.iter().filter_map(|r| r.as_ref().err())
    }

    pub fn succeeded(&self) -> usize {
        self.successes().count()
    }

    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_analyses(self) -> Vec<IngredientAnalysis> {
        self.results.into_iter().filter_map(Result::ok).collect()
    }
}
