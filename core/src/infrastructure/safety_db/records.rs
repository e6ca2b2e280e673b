use crate::domain::ingredient::entities::SafetyCategory::{self, Harmful, Moderate, Safe};

pub(super) struct SafetyRecord {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub category: SafetyCategory,
    pub score: i32,
    pub description: &'static str,
    pub source: &'static str,
}

const CIR: &str = "Cosmetic Ingredient Review safety assessment";
const EU_ANNEX: &str = "EU Cosmetics Regulation (EC) No 1223/2009 annexes";
const SCCS: &str = "Scientific Committee on Consumer Safety opinion";
const IARC: &str = "IARC Monographs on the Identification of Carcinogenic Hazards";

pub(super) const RECORDS: &[SafetyRecord] = &[
    SafetyRecord {
        name: "sodium lauryl sulfate",
        aliases: &["sls", "sodium dodecyl sulfate"],
        category: Harmful,
        score: 20,
        description: "Harsh surfactant that strips natural oils and commonly irritates scalp and skin.",
        source: CIR,
    },
    SafetyRecord {
        name: "sodium laureth sulfate",
        aliases: &["sles"],
        category: Moderate,
        score: 45,
        description: "Milder than SLS but still drying; may carry 1,4-dioxane traces from ethoxylation.",
        source: CIR,
    },
    SafetyRecord {
        name: "ammonium lauryl sulfate",
        aliases: &["als"],
        category: Harmful,
        score: 30,
        description: "Strong sulfate cleanser that can dry hair and irritate the scalp.",
        source: CIR,
    },
    SafetyRecord {
        name: "paraben",
        aliases: &["parabens"],
        category: Harmful,
        score: 30,
        description: "Preservative family suspected of endocrine disruption.",
        source: SCCS,
    },
    SafetyRecord {
        name: "formaldehyde",
        aliases: &["formalin", "methylene glycol"],
        category: Harmful,
        score: 5,
        description: "Known human carcinogen and strong skin sensitizer.",
        source: IARC,
    },
    SafetyRecord {
        name: "dmdm hydantoin",
        aliases: &[],
        category: Harmful,
        score: 20,
        description: "Formaldehyde-releasing preservative linked to allergic reactions.",
        source: CIR,
    },
    SafetyRecord {
        name: "phthalate",
        aliases: &["phthalates", "dbp", "dep"],
        category: Harmful,
        score: 15,
        description: "Plasticizers linked to hormone disruption, often hidden in fragrance.",
        source: SCCS,
    },
    SafetyRecord {
        name: "triclosan",
        aliases: &[],
        category: Harmful,
        score: 15,
        description: "Antibacterial agent linked to hormone disruption and antibiotic resistance.",
        source: SCCS,
    },
    SafetyRecord {
        name: "oxybenzone",
        aliases: &["benzophenone-3"],
        category: Harmful,
        score: 25,
        description: "UV filter absorbed through skin with suspected endocrine activity.",
        source: SCCS,
    },
    SafetyRecord {
        name: "coal tar",
        aliases: &[],
        category: Harmful,
        score: 5,
        description: "Carcinogenic byproduct used in some dandruff treatments and dyes.",
        source: IARC,
    },
    SafetyRecord {
        name: "hydroquinone",
        aliases: &[],
        category: Harmful,
        score: 10,
        description: "Skin lightener restricted in cosmetics due to toxicity concerns.",
        source: EU_ANNEX,
    },
    SafetyRecord {
        name: "lead acetate",
        aliases: &[],
        category: Harmful,
        score: 2,
        description: "Heavy metal compound once used in progressive hair dyes; neurotoxic.",
        source: EU_ANNEX,
    },
    SafetyRecord {
        name: "diethanolamine",
        aliases: &["dea", "cocamide dea"],
        category: Harmful,
        score: 25,
        description: "Foaming agent that can form carcinogenic nitrosamines.",
        source: IARC,
    },
    SafetyRecord {
        name: "fragrance",
        aliases: &["parfum", "perfume"],
        category: Moderate,
        score: 50,
        description: "Undisclosed blend that is a leading cause of cosmetic contact allergies.",
        source: SCCS,
    },
    SafetyRecord {
        name: "mineral oil",
        aliases: &["paraffinum liquidum", "petrolatum"],
        category: Moderate,
        score: 55,
        description: "Petroleum-derived occlusive that can build up on hair and scalp.",
        source: CIR,
    },
    SafetyRecord {
        name: "dimethicone",
        aliases: &["silicone", "cyclopentasiloxane", "amodimethicone"],
        category: Moderate,
        score: 60,
        description: "Silicone that adds shine but can build up without clarifying washes.",
        source: CIR,
    },
    SafetyRecord {
        name: "alcohol denat",
        aliases: &["denatured alcohol", "sd alcohol", "isopropyl alcohol"],
        category: Moderate,
        score: 45,
        description: "Drying short-chain alcohol that can weaken the moisture barrier.",
        source: CIR,
    },
    SafetyRecord {
        name: "cocamidopropyl betaine",
        aliases: &["capb"],
        category: Moderate,
        score: 65,
        description: "Gentle coconut-derived surfactant that occasionally causes sensitization.",
        source: CIR,
    },
    SafetyRecord {
        name: "propylene glycol",
        aliases: &[],
        category: Moderate,
        score: 60,
        description: "Humectant and penetration enhancer that can irritate sensitive skin.",
        source: CIR,
    },
    SafetyRecord {
        name: "aloe vera",
        aliases: &["aloe barbadensis leaf juice", "aloe barbadensis"],
        category: Safe,
        score: 90,
        description: "Soothing, hydrating plant extract suitable for most skin and hair types.",
        source: CIR,
    },
    SafetyRecord {
        name: "glycerin",
        aliases: &["glycerol", "glycerine"],
        category: Safe,
        score: 95,
        description: "Humectant that draws moisture into skin and hair.",
        source: CIR,
    },
    SafetyRecord {
        name: "water",
        aliases: &["aqua", "eau"],
        category: Safe,
        score: 100,
        description: "Solvent base of most formulations.",
        source: CIR,
    },
    SafetyRecord {
        name: "shea butter",
        aliases: &["butyrospermum parkii butter"],
        category: Safe,
        score: 92,
        description: "Rich plant butter that seals in moisture and softens hair.",
        source: CIR,
    },
    SafetyRecord {
        name: "coconut oil",
        aliases: &["cocos nucifera oil"],
        category: Safe,
        score: 88,
        description: "Penetrating oil that reduces protein loss in hair.",
        source: CIR,
    },
    SafetyRecord {
        name: "argan oil",
        aliases: &["argania spinosa kernel oil"],
        category: Safe,
        score: 93,
        description: "Lightweight oil rich in fatty acids and vitamin E.",
        source: CIR,
    },
    SafetyRecord {
        name: "jojoba oil",
        aliases: &["simmondsia chinensis seed oil"],
        category: Safe,
        score: 94,
        description: "Wax ester similar to natural sebum; non-comedogenic.",
        source: CIR,
    },
    SafetyRecord {
        name: "panthenol",
        aliases: &["provitamin b5", "d-panthenol"],
        category: Safe,
        score: 92,
        description: "Provitamin that hydrates and strengthens hair.",
        source: CIR,
    },
    SafetyRecord {
        name: "niacinamide",
        aliases: &["vitamin b3"],
        category: Safe,
        score: 90,
        description: "Vitamin that supports the skin barrier and evens tone.",
        source: CIR,
    },
    SafetyRecord {
        name: "hyaluronic acid",
        aliases: &["sodium hyaluronate"],
        category: Safe,
        score: 95,
        description: "Humectant that holds many times its weight in water.",
        source: CIR,
    },
    SafetyRecord {
        name: "cetearyl alcohol",
        aliases: &["cetyl alcohol", "stearyl alcohol"],
        category: Safe,
        score: 85,
        description: "Moisturizing fatty alcohol used as an emollient and thickener.",
        source: CIR,
    },
    SafetyRecord {
        name: "tocopherol",
        aliases: &["vitamin e"],
        category: Safe,
        score: 92,
        description: "Antioxidant that protects oils from going rancid.",
        source: CIR,
    },
    SafetyRecord {
        name: "keratin",
        aliases: &["hydrolyzed keratin"],
        category: Safe,
        score: 85,
        description: "Structural protein that temporarily fills gaps in damaged hair.",
        source: CIR,
    },
];
