use std::sync::Arc;

use crate::domain::education::entities::EducationEntry;

/// Read-only keyword table of ingredient education content.
#[derive(Debug, Clone)]
pub struct EducationCatalog {
    entries: Arc<Vec<EducationEntry>>,
}

impl EducationCatalog {
    pub fn new(entries: Vec<EducationEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// First entry whose keyword appears in the ingredient name, ignoring case.
    pub fn education_for(&self, ingredient: &str) -> Option<&EducationEntry> {
        let name = ingredient.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find(|entry| name.contains(&entry.keyword.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    keyword: &str,
    title: &str,
    summary: &str,
    concerns: &[&str],
    tips: &[&str],
) -> EducationEntry {
    EducationEntry {
        keyword: keyword.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        concerns: concerns.iter().map(|c| c.to_string()).collect(),
        tips: tips.iter().map(|t| t.to_string()).collect(),
    }
}

impl Default for EducationCatalog {
    fn default() -> Self {
        Self::new(vec![
            entry(
                "sulfate",
                "Sulfates",
                "Strong surfactants that create lather and remove oil from hair and skin.",
                &[
                    "Strip natural oils, leaving hair dry and brittle",
                    "Can irritate the scalp and sensitive skin",
                    "Fade color-treated hair faster",
                ],
                &[
                    "Look for sulfate-free shampoos with glucoside cleansers",
                    "Try co-washing between shampoos",
                ],
            ),
            entry(
                "paraben",
                "Parabens",
                "Preservatives that prevent bacteria and mold growth in cosmetics.",
                &[
                    "Can mimic estrogen in the body",
                    "Have been detected in breast tissue samples",
                ],
                &[
                    "Choose products preserved with sodium benzoate or potassium sorbate",
                    "Check labels for methyl-, ethyl-, propyl- and butylparaben",
                ],
            ),
            entry(
                "formaldehyde",
                "Formaldehyde and releasers",
                "Used in smoothing treatments and as a preservative, sometimes released slowly by other ingredients.",
                &[
                    "Classified as a known human carcinogen",
                    "Causes allergic skin reactions and respiratory irritation",
                ],
                &[
                    "Avoid DMDM hydantoin, quaternium-15 and imidazolidinyl urea",
                    "Ask salons for formaldehyde-free smoothing options",
                ],
            ),
            entry(
                "phthalate",
                "Phthalates",
                "Plasticizers often hidden inside fragrance blends to make scents last longer.",
                &[
                    "Linked to hormone disruption",
                    "Rarely listed individually on labels",
                ],
                &["Prefer fragrance-free or phthalate-free labeled products"],
            ),
            entry(
                "fragrance",
                "Fragrance (parfum)",
                "A catch-all label that can hide dozens of undisclosed chemicals.",
                &[
                    "Common cause of contact dermatitis",
                    "May contain phthalates and allergens",
                ],
                &["Choose fragrance-free products or ones scented with listed essential oils"],
            ),
            entry(
                "silicone",
                "Silicones",
                "Coat the hair shaft to add slip and shine.",
                &[
                    "Can build up and weigh hair down",
                    "Some require sulfates to wash out",
                ],
                &["Use water-soluble silicones or clarify periodically"],
            ),
            entry(
                "cone",
                "Silicones",
                "Ingredients ending in -cone or -siloxane coat the hair shaft to add slip and shine.",
                &["Can build up and weigh hair down"],
                &["Use water-soluble silicones or clarify periodically"],
            ),
            entry(
                "mineral oil",
                "Mineral oil",
                "A petroleum-derived occlusive that locks moisture in.",
                &[
                    "Can clog pores and build up on the scalp",
                    "Seals out moisture as well as in",
                ],
                &["Swap for plant oils such as jojoba or argan"],
            ),
            entry(
                "alcohol denat",
                "Drying alcohols",
                "Short-chain alcohols used for quick drying and a light feel.",
                &["Dry out hair and skin with frequent use"],
                &[
                    "Fatty alcohols such as cetyl or cetearyl alcohol are moisturizing and fine to use",
                ],
            ),
            entry(
                "triclosan",
                "Triclosan",
                "An antibacterial agent restricted in many markets.",
                &[
                    "Linked to hormone disruption",
                    "Contributes to antibiotic resistance",
                ],
                &["Plain soap and water cleans just as well for everyday use"],
            ),
        ])
    }
}
