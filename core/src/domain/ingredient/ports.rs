use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    ingredient::entities::{Article, IngredientFinding},
};

/// Real-time ingredient knowledge source, consulted first.
#[cfg_attr(test, mockall::automock)]
pub trait LiveIngredientLookup: Send + Sync {
    fn lookup(
        &self,
        name: String,
    ) -> impl Future<Output = Result<IngredientFinding, CoreError>> + Send;
}

/// Curated safety database, consulted when the live source fails.
#[cfg_attr(test, mockall::automock)]
pub trait StaticIngredientLookup: Send + Sync {
    fn find(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<IngredientFinding>, CoreError>> + Send;
}

/// Scientific literature search used to attach citations.
#[cfg_attr(test, mockall::automock)]
pub trait LiteratureSearch: Send + Sync {
    fn search(
        &self,
        query: String,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Article>, CoreError>> + Send;
}
