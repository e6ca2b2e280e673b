use std::collections::BTreeSet;

use crate::domain::product_analysis::entities::RoutineProduct;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativeEntry {
    pub keyword: String,
    pub products: Vec<RoutineProduct>,
}

/// Harmful-ingredient keyword to substitute products, in match order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativesCatalog {
    entries: Vec<AlternativeEntry>,
}

impl AlternativesCatalog {
    pub fn new(entries: Vec<AlternativeEntry>) -> Self {
        Self { entries }
    }

    /// Entries whose keyword and the ingredient name contain one another, ignoring case.
    pub fn matching<'a>(&'a self, ingredient: &str) -> impl Iterator<Item = &'a AlternativeEntry> {
        let needle = ingredient.trim().to_lowercase();

        self.entries.iter().filter(move |entry| {
            let keyword = entry.keyword.to_lowercase();
            !needle.is_empty()
                && !keyword.is_empty()
                && (needle.contains(&keyword) || keyword.contains(&needle))
        })
    }
}

fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: &str,
    ingredients: &[&str],
    safety_score: u8,
) -> RoutineProduct {
    RoutineProduct {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        ingredients: ingredients.iter().map(|i| i.to_string()).collect::<BTreeSet<_>>(),
        safety_score,
        is_verified: true,
    }
}

fn entry(keyword: &str, products: Vec<RoutineProduct>) -> AlternativeEntry {
    AlternativeEntry {
        keyword: keyword.to_string(),
        products,
    }
}

impl Default for AlternativesCatalog {
    fn default() -> Self {
        Self::new(vec![
            entry(
                "sulfate",
                vec![
                    product(
                        "alt-sulfate-free-shampoo",
                        "Gentle Cleanse Sulfate-Free Shampoo",
                        "Pure Roots",
                        "shampoo",
                        &["Aqua", "Decyl Glucoside", "Aloe Vera", "Glycerin"],
                        92,
                    ),
                    product(
                        "alt-cowash",
                        "Hydrating Co-Wash",
                        "Curl Haven",
                        "cleansing conditioner",
                        &["Aqua", "Cetearyl Alcohol", "Shea Butter", "Panthenol"],
                        90,
                    ),
                ],
            ),
            entry(
                "paraben",
                vec![product(
                    "alt-paraben-free-conditioner",
                    "Botanical Repair Conditioner",
                    "Green Strand",
                    "conditioner",
                    &["Aqua", "Argan Oil", "Behentrimonium Methosulfate", "Sodium Benzoate"],
                    88,
                )],
            ),
            entry(
                "formaldehyde",
                vec![product(
                    "alt-formaldehyde-free-smoothing",
                    "Keratin-Free Smoothing Cream",
                    "Silk & Stem",
                    "styling",
                    &["Aqua", "Coconut Oil", "Hydrolyzed Rice Protein", "Glycerin"],
                    86,
                )],
            ),
            entry(
                "phthalate",
                vec![product(
                    "alt-unscented-lotion",
                    "Unscented Daily Lotion",
                    "Calm Skin Co.",
                    "moisturizer",
                    &["Aqua", "Glycerin", "Squalane", "Ceramide NP"],
                    94,
                )],
            ),
            entry(
                "triclosan",
                vec![product(
                    "alt-plant-soap",
                    "Plant-Based Hand Wash",
                    "Meadow Lane",
                    "cleanser",
                    &["Aqua", "Coco-Glucoside", "Aloe Vera", "Lavender Oil"],
                    89,
                )],
            ),
            entry(
                "mineral oil",
                vec![product(
                    "alt-jojoba-oil",
                    "Cold-Pressed Jojoba Hair Oil",
                    "Pure Roots",
                    "hair oil",
                    &["Simmondsia Chinensis Seed Oil", "Tocopherol"],
                    96,
                )],
            ),
            entry(
                "oxybenzone",
                vec![product(
                    "alt-mineral-sunscreen",
                    "Mineral Sunscreen SPF 30",
                    "Sunleaf",
                    "sunscreen",
                    &["Zinc Oxide", "Caprylic/Capric Triglyceride", "Tocopherol"],
                    91,
                )],
            ),
            entry(
                "coal tar",
                vec![product(
                    "alt-henna-dye",
                    "Henna Color Gloss",
                    "Earth Hue",
                    "hair color",
                    &["Lawsonia Inermis Leaf Powder", "Indigofera Tinctoria Leaf"],
                    87,
                )],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_is_case_insensitive_both_ways() {
        let catalog = AlternativesCatalog::default();

        let keywords: Vec<_> = catalog
            .matching("Sodium Lauryl SULFATE")
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["sulfate"]);

        let keywords: Vec<_> = catalog
            .matching("Paraben")
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["paraben"]);

        let keywords: Vec<_> = catalog
            .matching("Mineral")
            .map(|e| e.keyword.as_str())
            .collect();
        assert_eq!(keywords, vec!["mineral oil"]);
    }

    #[test]
    fn test_blank_name_matches_nothing() {
        let catalog = AlternativesCatalog::default();
        assert_eq!(catalog.matching("  ").count(), 0);
    }
}
