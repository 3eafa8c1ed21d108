//! Search expression request bodies.
//!
//! A search body is either a single [`ExpressionDto`] or an
//! [`ExpressionGroupDto`] whose members may themselves be groups.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    Contains,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Join {
    And,
    Or,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ExpressionDto {
    pub column_name: String,
    pub search_term: String,
    pub operator: Operator,
    #[serde(default)]
    pub fuzzy: bool,
    #[serde(default = "default_min_string_similarity")]
    pub min_string_similarity: Option<f64>,
}

pub fn default_min_string_similarity() -> Option<f64> {
    Some(0.1)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ExpressionGroupDto {
    #[serde(default)]
    pub join: Option<Join>,
    #[schema(no_recursion)]
    pub expressions: Vec<SearchDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum SearchDto {
    Group(ExpressionGroupDto),
    Expression(ExpressionDto),
}
