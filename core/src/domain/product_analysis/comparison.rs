use crate::domain::product_analysis::entities::{
    Comparison, ComparisonSide, ProductAnalysis, SafetySummary,
};

/// Ranks two products by overall score. A tie goes to `a`.
pub fn compare(a: &ProductAnalysis, b: &ProductAnalysis) -> Comparison {
    let (winner, winner_id) = if b.overall_score > a.overall_score {
        (ComparisonSide::Second, b.product_id.clone())
    } else {
        (ComparisonSide::First, a.product_id.clone())
    };

    Comparison {
        first: SafetySummary::of_product(a),
        second: SafetySummary::of_product(b),
        winner,
        winner_id,
        score_difference: a.overall_score.abs_diff(b.overall_score),
    }
}
