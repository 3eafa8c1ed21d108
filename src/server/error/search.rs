use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, search::Operator};

#[derive(Error, Debug)]
pub enum SearchError {
    /// Expression group without any member.
    #[error("an expression group needs at least one expression")]
    EmptyGroup,

    /// Group of several expressions without `AND`/`OR`.
    #[error("a join operator is needed for multiple expression")]
    MissingJoin,

    /// Group of a single expression with a join.
    #[error("a join operator is not needed for one expression")]
    RedundantJoin,

    /// Column not found on the searched entity or any joined relation.
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    /// Operator cannot be applied to the column type.
    #[error("Invalid operator: {operator:?} is not supported on column {column}")]
    InvalidOperator {
        /// Column the operator was applied to
        column: String,
        /// The rejected operator
        operator: Operator,
    },

    /// Search term cannot be converted to the column type.
    #[error("Invalid search term '{term}' for column {column}")]
    InvalidTerm {
        /// Column the term was compared with
        column: String,
        /// The rejected term
        term: String,
    },
}

impl SearchError {
    /// True for errors in the shape of the expression tree rather than in what it refers to.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyGroup | Self::MissingJoin | Self::RedundantJoin
        )
    }
}

/// Converts search errors into HTTP responses.
///
/// - Malformed expression trees → 422 Unprocessable Entity with the validation message
/// - Unknown columns, unsupported operators, unconvertible terms → 400 Bad Request with
///   "Error with search expressions: {reason}"
impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response();
        }

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: format!("Error with search expressions: {}", self),
            }),
        )
            .into_response()
    }
}
