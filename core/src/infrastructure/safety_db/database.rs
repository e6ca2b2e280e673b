use std::collections::HashMap;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::{
        entities::{Citation, IngredientFinding},
        ports::StaticIngredientLookup,
    },
};

use super::records::{RECORDS, SafetyRecord};

/// Names shorter than this are matched exactly only, never as substrings.
const MIN_CONTAINED_NAME_LEN: usize = 5;

/// In-memory safety database of common cosmetic and hair care ingredients.
#[derive(Debug, Clone)]
pub struct StaticSafetyDatabase {
    index: HashMap<String, usize>,
}

impl Default for StaticSafetyDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl StaticSafetyDatabase {
    pub fn new() -> Self {
        let mut index = HashMap::new();
        for (position, record) in RECORDS.iter().enumerate() {
            index.insert(record.name.to_string(), position);
            for alias in record.aliases {
                index.entry(alias.to_string()).or_insert(position);
            }
        }

        Self { index }
    }

    pub fn len(&self) -> usize {
        RECORDS.len()
    }

    pub fn is_empty(&self) -> bool {
        RECORDS.is_empty()
    }

    fn record_for(&self, name: &str) -> Option<&'static SafetyRecord> {
        let key = normalize_key(name);
        if key.is_empty() {
            return None;
        }

        if let Some(&position) = self.index.get(&key) {
            return RECORDS.get(position);
        }

        // "methylparaben" should hit "paraben"; prefer the most specific name
        RECORDS
            .iter()
            .filter(|r| r.name.len() >= MIN_CONTAINED_NAME_LEN && key.contains(r.name))
            .max_by_key(|r| r.name.len())
    }

    pub fn get(&self, name: &str) -> Option<IngredientFinding> {
        self.record_for(name).map(|record| IngredientFinding {
            ingredient: name.trim().to_string(),
            category: Some(record.category),
            safety_score: Some(record.score),
            description: Some(record.description.to_string()),
            sources: vec![Citation::new(record.source, None)],
        })
    }
}

impl StaticIngredientLookup for StaticSafetyDatabase {
    async fn find(&self, name: String) -> Result<Option<IngredientFinding>, CoreError> {
        Ok(self.get(&name))
    }
}
