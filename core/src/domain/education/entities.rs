use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EducationEntry {
    pub keyword: String,
    pub title: String,
    pub summary: String,
    pub concerns: Vec<String>,
    pub tips: Vec<String>,
}
