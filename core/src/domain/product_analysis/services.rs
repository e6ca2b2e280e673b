use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    education::entities::EducationEntry,
    ingredient::{
        entities::IngredientAnalysis,
        normalizer::normalize,
        ports::{LiteratureSearch, LiveIngredientLookup, StaticIngredientLookup},
    },
    product_analysis::{
        comparison,
        entities::{Comparison, ProductAnalysis, SafetySummary},
        ports::IngredientSafetyService,
        summary,
        value_objects::ProductDetails,
    },
};

impl<L, S, A> IngredientSafetyService for Service<L, S, A>
where
    L: LiveIngredientLookup,
    S: StaticIngredientLookup,
    A: LiteratureSearch,
{
    #[instrument(skip(self, text), fields(product = %details.name))]
    async fn analyze_text(
        &self,
        details: ProductDetails,
        text: String,
    ) -> Result<ProductAnalysis, CoreError> {
        let names = normalize(&text);
        if names.is_empty() {
            return Err(CoreError::InvalidInput(
                "no ingredient names found in text".to_string(),
            ));
        }

        self.analyze_ingredients(details, names).await
    }

    #[instrument(skip(self, names), fields(product = %details.name))]
    async fn analyze_ingredients(
        &self,
        details: ProductDetails,
        names: Vec<String>,
    ) -> Result<ProductAnalysis, CoreError> {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if names.is_empty() {
            return Err(CoreError::InvalidInput(
                "at least one ingredient name is required".to_string(),
            ));
        }

        let resolution = self.resolver.resolve_batch(&names).await?;
        if resolution.failed() > 0 {
            info!(
                resolved = resolution.succeeded(),
                unresolved = resolution.failed(),
                "analyzing product with partially resolved ingredients"
            );
        }

        self.aggregator.aggregate(details, resolution.into_analyses())
    }

    #[instrument(skip(self))]
    async fn lookup_one(&self, name: String) -> Result<IngredientAnalysis, CoreError> {
        if name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "ingredient name must not be empty".to_string(),
            ));
        }

        Ok(self.resolver.resolve(&name).await?)
    }

    fn compare(&self, a: &ProductAnalysis, b: &ProductAnalysis) -> Comparison {
        comparison::compare(a, b)
    }

    fn summarize(&self, analyses: &[IngredientAnalysis]) -> Result<SafetySummary, CoreError> {
        summary::summarize(analyses)
    }

    fn education_for(&self, ingredient: &str) -> Option<EducationEntry> {
        self.education.education_for(ingredient).cloned()
    }
}
