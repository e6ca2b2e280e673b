use std::{sync::Arc, time::Duration};

use futures::future::{join, join_all};
use tokio::time::{Instant, timeout, timeout_at};
use tracing::{info, instrument, warn};

use crate::domain::{
    common::{
        LookupConfig,
        entities::app_errors::{CoreError, LookupError},
    },
    ingredient::{
        entities::{BatchResolution, Citation, IngredientAnalysis},
        ports::{LiteratureSearch, LiveIngredientLookup, StaticIngredientLookup},
        value_objects::score_finding,
    },
};

/// Resolves ingredient names into scored analyses.
///
/// Sources are consulted live first, static database second. Literature citations
/// are gathered alongside and never decide success.
pub struct IngredientResolver<L, S, A> {
    live: Arc<L>,
    fallback: Arc<S>,
    literature: Arc<A>,
    config: LookupConfig,
    literature_limit: usize,
}

impl<L, S, A> Clone for IngredientResolver<L, S, A> {
    fn clone(&self) -> Self {
        Self {
            live: Arc::clone(&self.live),
            fallback: Arc::clone(&self.fallback),
            literature: Arc::clone(&self.literature),
            config: self.config.clone(),
            literature_limit: self.literature_limit,
        }
    }
}

impl<L, S, A> IngredientResolver<L, S, A>
where
    L: LiveIngredientLookup,
    S: StaticIngredientLookup,
    A: LiteratureSearch,
{
    pub fn new(
        live: L,
        fallback: S,
        literature: A,
        config: LookupConfig,
        literature_limit: usize,
    ) -> Self {
        Self {
            live: Arc::new(live),
            fallback: Arc::new(fallback),
            literature: Arc::new(literature),
            config,
            literature_limit,
        }
    }

    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.config.lookup_timeout = lookup_timeout;
        self
    }

    /// Resolves one ingredient within `lookup_timeout`.
    ///
    /// The deadline bounds the sources; the literature search gets whatever time is
    /// left and only ever contributes citations.
    #[instrument(skip(self))]
    pub async fn resolve(&self, name: &str) -> Result<IngredientAnalysis, LookupError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LookupError::new(name, "ingredient name is empty"));
        }

        let lookup_timeout = self.config.lookup_timeout;
        let deadline = Instant::now() + lookup_timeout;

        let primary = async {
            timeout_at(deadline, self.resolve_from_sources(name))
                .await
                .unwrap_or_else(|_| {
                    Err(LookupError::new(
                        name,
                        format!("lookup timed out after {}ms", lookup_timeout.as_millis()),
                    ))
                })
        };
        let literature = async {
            timeout_at(deadline, self.search_literature(name))
                .await
                .unwrap_or_else(|_| {
                    warn!(ingredient = name, "literature search cut off by lookup deadline");
                    Vec::new()
                })
        };

        let (primary, citations) = join(primary, literature).await;

        let mut analysis = primary?;
        for citation in citations {
            if !analysis.sources.iter().any(|s| s.title == citation.title) {
                analysis.sources.push(citation);
            }
        }

        Ok(analysis)
    }

    /// Resolves every name concurrently, one result per name in input order.
    ///
    /// Fails only when the batch is non-empty and no name could be resolved.
    #[instrument(skip(self, names), fields(lookups = names.len()))]
    pub async fn resolve_batch(&self, names: &[String]) -> Result<BatchResolution, CoreError> {
        let lookups = names.iter().map(|name| self.resolve(name));
        let resolution = BatchResolution {
            results: join_all(lookups).await,
        };

        for failure in resolution.failures() {
            warn!(
                ingredient = %failure.ingredient,
                cause = %failure.cause,
                "ingredient lookup failed"
            );
        }

        info!(
            lookups = resolution.results.len(),
            failures = resolution.failed(),
            "ingredient batch resolved"
        );

        if resolution.succeeded() == 0 {
            if let Some(first_cause) = resolution.failures().next().cloned() {
                return Err(CoreError::AllLookupsFailed {
                    attempted: resolution.results.len(),
                    first_cause,
                });
            }
        }

        Ok(resolution)
    }

    async fn resolve_from_sources(&self, name: &str) -> Result<IngredientAnalysis, LookupError> {
        let source_timeout = self.config.source_timeout;

        let live_cause = match timeout(source_timeout, self.live.lookup(name.to_string())).await {
            Ok(Ok(finding)) => match score_finding(name, finding) {
                Some(analysis) => return Ok(analysis),
                None => "live lookup returned no safety data".to_string(),
            },
            Ok(Err(e)) => {
                warn!(ingredient = name, error = %e, "live ingredient lookup failed");
                "live lookup unavailable".to_string()
            }
            Err(_) => format!("live lookup timed out after {}ms", source_timeout.as_millis()),
        };

        let result = timeout(source_timeout, self.fallback.find(name.to_string())).await;
        match result {
            Ok(Ok(Some(finding))) => score_finding(name, finding).ok_or_else(|| {
                LookupError::new(name, format!("{live_cause}; static record has no safety data"))
            }),
            Ok(Ok(None)) => Err(LookupError::new(
                name,
                format!("{live_cause}; no static safety record"),
            )),
            Ok(Err(e)) => {
                warn!(ingredient = name, error = %e, "static ingredient lookup failed");
                Err(LookupError::new(
                    name,
                    format!("{live_cause}; static lookup unavailable"),
                ))
            }
            Err(_) => Err(LookupError::new(
                name,
                format!(
                    "{live_cause}; static lookup timed out after {}ms",
                    source_timeout.as_millis()
                ),
            )),
        }
    }

    async fn search_literature(&self, name: &str) -> Vec<Citation> {
        if self.literature_limit == 0 {
            return Vec::new();
        }

        let query = format!("{name} cosmetic safety");
        let search = self.literature.search(query, self.literature_limit);

        match timeout(self.config.source_timeout, search).await {
            Ok(Ok(articles)) => articles
                .into_iter()
                .take(self.literature_limit)
                .map(Citation::from)
                .collect(),
            Ok(Err(e)) => {
                warn!(ingredient = name, error = %e, "literature search failed");
                Vec::new()
            }
            Err(_) => {
                warn!(ingredient = name, "literature search timed out");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::domain::ingredient::{
        entities::{Article, IngredientFinding, SafetyCategory},
        ports::MockStaticIngredientLookup,
    };

    #[derive(Clone)]
    pub(crate) enum LiveBehavior {
        Found(IngredientFinding),
        Delayed(Duration, IngredientFinding),
        Fail,
        Hang,
    }

    #[derive(Default)]
    pub(crate) struct FakeLive {
        pub behaviors: HashMap<String, LiveBehavior>,
    }

    impl FakeLive {
        pub fn with(mut self, name: &str, behavior: LiveBehavior) -> Self {
            self.behaviors.insert(name.to_string(), behavior);
            self
        }
    }

    impl LiveIngredientLookup for FakeLive {
        async fn lookup(&self, name: String) -> Result<IngredientFinding, CoreError> {
            match self.behaviors.get(&name).cloned() {
                Some(LiveBehavior::Found(finding)) => Ok(finding),
                Some(LiveBehavior::Delayed(delay, finding)) => {
                    tokio::time::sleep(delay).await;
                    Ok(finding)
                }
                Some(LiveBehavior::Hang) => std::future::pending().await,
                Some(LiveBehavior::Fail) | None => Err(CoreError::ExternalServiceError(
                    "live service unreachable".to_string(),
                )),
            }
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeStatic {
        pub records: HashMap<String, IngredientFinding>,
        pub hang: bool,
    }

    impl FakeStatic {
        pub fn with(mut self, name: &str, finding: IngredientFinding) -> Self {
            self.records.insert(name.to_string(), finding);
            self
        }
    }

    impl StaticIngredientLookup for FakeStatic {
        async fn find(&self, name: String) -> Result<Option<IngredientFinding>, CoreError> {
            if self.hang {
                std::future::pending::<()>().await;
            }
            Ok(self.records.get(&name).cloned())
        }
    }

    #[derive(Default)]
    pub(crate) struct FakeLiterature {
        pub articles: Option<Vec<Article>>,
        pub hang: bool,
    }

    impl LiteratureSearch for FakeLiterature {
        async fn search(&self, _query: String, limit: usize) -> Result<Vec<Article>, CoreError> {
            if self.hang {
                std::future::pending::<()>().await;
            }
            match &self.articles {
                Some(articles) => Ok(articles.iter().take(limit).cloned().collect()),
                None => Err(CoreError::ExternalServiceError(
                    "literature index unavailable".to_string(),
                )),
            }
        }
    }

    pub(crate) fn finding(name: &str, category: SafetyCategory, score: i32) -> IngredientFinding {
        IngredientFinding {
            ingredient: name.to_string(),
            category: Some(category),
            safety_score: Some(score),
            description: Some(format!("{name} description")),
            sources: vec![],
        }
    }

    fn resolver(
        live: FakeLive,
        fallback: FakeStatic,
        literature: FakeLiterature,
    ) -> IngredientResolver<FakeLive, FakeStatic, FakeLiterature> {
        IngredientResolver::new(live, fallback, literature, LookupConfig::default(), 0)
    }

    fn article(id: &str, title: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            journal: None,
            published: None,
            url: format!("https://pubmed.ncbi.nlm.nih.gov/{id}/"),
        }
    }

    #[tokio::test]
    async fn test_resolve_prefers_live_source() {
        let live = FakeLive::default().with(
            "Aloe Vera",
            LiveBehavior::Found(finding("Aloe Vera", SafetyCategory::Safe, 90)),
        );
        let mut fallback = MockStaticIngredientLookup::new();
        fallback.expect_find().never();

        let resolver = IngredientResolver::new(
            live,
            fallback,
            FakeLiterature::default(),
            LookupConfig::default(),
            0,
        );

        let analysis = resolver.resolve("  Aloe Vera ").await.unwrap();
        assert_eq!(analysis.ingredient, "Aloe Vera");
        assert_eq!(analysis.category, SafetyCategory::Safe);
        assert_eq!(analysis.safety_score, 90);
    }

    #[tokio::test]
    async fn test_resolve_falls_back_to_static_database() {
        let live = FakeLive::default().with("Parabens", LiveBehavior::Fail);
        let fallback = FakeStatic::default().with(
            "Parabens",
            IngredientFinding {
                ingredient: "Parabens".to_string(),
                safety_score: Some(30),
                ..Default::default()
            },
        );

        let analysis = resolver(live, fallback, FakeLiterature::default())
            .resolve("Parabens")
            .await
            .unwrap();

        assert_eq!(analysis.safety_score, 30);
        assert_eq!(analysis.category, SafetyCategory::Harmful);
    }

    #[tokio::test]
    async fn test_unusable_live_finding_falls_back() {
        let live = FakeLive::default().with(
            "Glycerin",
            LiveBehavior::Found(IngredientFinding {
                ingredient: "Glycerin".to_string(),
                ..Default::default()
            }),
        );
        let fallback = FakeStatic::default().with(
            "Glycerin",
            finding("Glycerin", SafetyCategory::Safe, 95),
        );

        let analysis = resolver(live, fallback, FakeLiterature::default())
            .resolve("Glycerin")
            .await
            .unwrap();

        assert_eq!(analysis.safety_score, 95);
    }

    #[tokio::test]
    async fn test_resolve_fails_when_every_source_fails() {
        let err = resolver(
            FakeLive::default(),
            FakeStatic::default(),
            FakeLiterature::default(),
        )
        .resolve("Mystery Extract")
        .await
        .unwrap_err();

        assert_eq!(err.ingredient, "Mystery Extract");
        assert!(err.cause.contains("live lookup unavailable"));
        assert!(err.cause.contains("no static safety record"));
    }

    #[tokio::test]
    async fn test_resolve_rejects_blank_name() {
        let err = resolver(
            FakeLive::default(),
            FakeStatic::default(),
            FakeLiterature::default(),
        )
        .resolve("   ")
        .await
        .unwrap_err();

        assert_eq!(err.cause, "ingredient name is empty");
    }

    #[tokio::test(start_paused = true)]
    async fn test_live_timeout_falls_back_to_static() {
        let live = FakeLive::default().with("Fragrance", LiveBehavior::Hang);
        let fallback = FakeStatic::default().with(
            "Fragrance",
            finding("Fragrance", SafetyCategory::Moderate, 50),
        );

        let analysis = resolver(live, fallback, FakeLiterature::default())
            .resolve("Fragrance")
            .await
            .unwrap();

        assert_eq!(analysis.category, SafetyCategory::Moderate);
    }

    #[tokio::test]
    async fn test_literature_citations_are_appended_once() {
        let mut live_finding = finding("Triclosan", SafetyCategory::Harmful, 15);
        live_finding.sources = vec![Citation::new("Triclosan review", None)];
        let live = FakeLive::default().with("Triclosan", LiveBehavior::Found(live_finding));
        let literature = FakeLiterature {
            articles: Some(vec![
                article("1", "Triclosan review"),
                article("2", "Endocrine effects of triclosan"),
            ]),
            ..Default::default()
        };

        let resolver = IngredientResolver::new(
            live,
            FakeStatic::default(),
            literature,
            LookupConfig::default(),
            3,
        );
        let analysis = resolver.resolve("Triclosan").await.unwrap();

        let titles: Vec<_> = analysis.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Triclosan review", "Endocrine effects of triclosan"]
        );
    }

    #[tokio::test]
    async fn test_literature_failure_does_not_fail_resolution() {
        let live = FakeLive::default().with(
            "Water",
            LiveBehavior::Found(finding("Water", SafetyCategory::Safe, 100)),
        );

        let resolver = IngredientResolver::new(
            live,
            FakeStatic::default(),
            FakeLiterature::default(),
            LookupConfig::default(),
            3,
        );

        let analysis = resolver.resolve("Water").await.unwrap();
        assert!(analysis.sources.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_keeps_input_order_with_partial_failure() {
        let live = FakeLive::default()
            .with(
                "A",
                LiveBehavior::Delayed(
                    Duration::from_millis(300),
                    finding("A", SafetyCategory::Safe, 90),
                ),
            )
            .with("B", LiveBehavior::Fail)
            .with(
                "C",
                LiveBehavior::Delayed(
                    Duration::from_millis(10),
                    finding("C", SafetyCategory::Moderate, 50),
                ),
            )
            .with("D", LiveBehavior::Fail)
            .with("E", LiveBehavior::Found(finding("E", SafetyCategory::Harmful, 20)));

        let names: Vec<String> = ["A", "B", "C", "D", "E"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let resolution = resolver(live, FakeStatic::default(), FakeLiterature::default())
            .resolve_batch(&names)
            .await
            .unwrap();

        assert_eq!(resolution.results.len(), 5);
        assert_eq!(resolution.succeeded(), 3);
        assert_eq!(resolution.failed(), 2);

        let outcome: Vec<_> = resolution
            .results
            .iter()
            .map(|r| match r {
                Ok(analysis) => analysis.ingredient.clone(),
                Err(e) => format!("!{}", e.ingredient),
            })
            .collect();
        assert_eq!(outcome, vec!["A", "!B", "C", "!D", "E"]);
    }

    #[tokio::test]
    async fn test_batch_fails_when_all_lookups_fail() {
        let names = vec!["X".to_string(), "Y".to_string()];

        let err = resolver(
            FakeLive::default(),
            FakeStatic::default(),
            FakeLiterature::default(),
        )
        .resolve_batch(&names)
        .await
        .unwrap_err();

        match err {
            CoreError::AllLookupsFailed {
                attempted,
                first_cause,
            } => {
                assert_eq!(attempted, 2);
                assert_eq!(first_cause.ingredient, "X");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_batch_is_not_a_failure() {
        let resolution = resolver(
            FakeLive::default(),
            FakeStatic::default(),
            FakeLiterature::default(),
        )
        .resolve_batch(&[])
        .await
        .unwrap();

        assert!(resolution.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_deadline_only_affects_slow_ingredient() {
        let live = FakeLive::default()
            .with("Slow", LiveBehavior::Hang)
            .with("Fast", LiveBehavior::Found(finding("Fast", SafetyCategory::Safe, 80)));
        let fallback = FakeStatic {
            hang: true,
            ..Default::default()
        };

        let resolver = resolver(live, fallback, FakeLiterature::default())
            .with_lookup_timeout(Duration::from_millis(500));

        let names = vec!["Slow".to_string(), "Fast".to_string()];
        let resolution = resolver.resolve_batch(&names).await.unwrap();

        let slow = resolution.results[0].as_ref().unwrap_err();
        assert_eq!(slow.ingredient, "Slow");
        assert!(slow.cause.contains("timed out"));
        assert_eq!(resolution.results[1].as_ref().unwrap().safety_score, 80);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_literature_does_not_fail_resolved_batch() {
        let live = FakeLive::default()
            .with("Water", LiveBehavior::Found(finding("Water", SafetyCategory::Safe, 100)))
            .with("Aloe", LiveBehavior::Found(finding("Aloe", SafetyCategory::Safe, 90)));
        let literature = FakeLiterature {
            hang: true,
            ..Default::default()
        };
        let config = LookupConfig {
            lookup_timeout: Duration::from_millis(500),
            source_timeout: Duration::from_millis(2000),
        };

        let resolver = IngredientResolver::new(live, FakeStatic::default(), literature, config, 3);
        let names = vec!["Water".to_string(), "Aloe".to_string()];
        let resolution = resolver.resolve_batch(&names).await.unwrap();

        assert_eq!(resolution.succeeded(), 2);
        assert_eq!(resolution.results[0].as_ref().unwrap().safety_score, 100);
        assert!(resolution.results[1].as_ref().unwrap().sources.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_batch_lookups_overlap() {
        let names: Vec<String> = (1..=6).map(|i| format!("Ingredient {i}")).collect();
        let live = names.iter().fold(FakeLive::default(), |live, name| {
            live.with(
                name,
                LiveBehavior::Delayed(
                    Duration::from_millis(300),
                    finding(name, SafetyCategory::Safe, 90),
                ),
            )
        });

        let resolver = resolver(live, FakeStatic::default(), FakeLiterature::default());
        let start = Instant::now();
        let resolution = resolver.resolve_batch(&names).await.unwrap();
        let elapsed = Instant::now() - start;

        assert_eq!(resolution.succeeded(), 6);
        assert!(elapsed >= Duration::from_millis(300));
        assert!(elapsed < Duration::from_millis(600), "lookups ran sequentially: {elapsed:?}");
    }
}
