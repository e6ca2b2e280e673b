use crate::domain::{
    common::LookupConfig,
    education::catalog::EducationCatalog,
    ingredient::{
        ports::{LiteratureSearch, LiveIngredientLookup, StaticIngredientLookup},
        services::IngredientResolver,
    },
    product_analysis::{aggregator::ProductAggregator, recommendations::RecommendationEngine},
};

/// Entry point of the engine, generic over its outward sources.
pub struct Service<L, S, A> {
    pub(crate) resolver: IngredientResolver<L, S, A>,
    pub(crate) aggregator: ProductAggregator,
    pub(crate) education: EducationCatalog,
}

impl<L, S, A> Clone for Service<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            aggregator: self.aggregator.clone(),
            education: self.education.clone(),
        }
    }
}

impl<L, S, A> Service<L, S, A>
where
    L: LiveIngredientLookup,
    S: StaticIngredientLookup,
    A: LiteratureSearch,
{
    pub fn new(
        live: L,
        fallback: S,
        literature: A,
        lookup: LookupConfig,
        literature_limit: usize,
    ) -> Self {
        Self {
            resolver: IngredientResolver::new(live, fallback, literature, lookup, literature_limit),
            aggregator: ProductAggregator::default(),
            education: EducationCatalog::default(),
        }
    }

    pub fn with_recommendations(mut self, recommendations: RecommendationEngine) -> Self {
        self.aggregator = ProductAggregator::new(recommendations);
        self
    }

    pub fn with_education(mut self, education: EducationCatalog) -> Self {
        self.education = education;
        self
    }
}
