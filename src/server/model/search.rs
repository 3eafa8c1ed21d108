//! Validated search expression trees.
//!
//! Request bodies arrive as [`SearchDto`] and are checked once by
//! [`SearchExpression::from_dto`]. The data layer only ever sees trees that
//! satisfy the join rules: a group of several expressions always carries a
//! join, and a single-member group is collapsed into its member.

use crate::{
    model::search::{ExpressionDto, ExpressionGroupDto, Join, Operator, SearchDto},
    server::error::search::SearchError,
};

/// Similarity threshold used when a fuzzy expression does not provide one.
pub const DEFAULT_MIN_STRING_SIMILARITY: f64 = 0.1;

/// Single column comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLeaf {
    pub column_name: String,
    pub search_term: String,
    pub operator: Operator,
    /// Use trigram word similarity instead of `operator` on text columns.
    pub fuzzy: bool,
    pub min_string_similarity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchExpression {
    Leaf(SearchLeaf),
    Group {
        join: Join,
        expressions: Vec<SearchExpression>,
    },
}

impl SearchLeaf {
    fn from_dto(dto: ExpressionDto) -> Self {
        Self {
            column_name: dto.column_name,
            search_term: dto.search_term,
            operator: dto.operator,
            fuzzy: dto.fuzzy,
            min_string_similarity: dto
                .min_string_similarity
                .unwrap_or(DEFAULT_MIN_STRING_SIMILARITY),
        }
    }
}

impl SearchExpression {
    /// Validates a search request body into an expression tree.
    ///
    /// # Arguments
    /// - `dto` - Expression or expression group from the request body
    ///
    /// # Returns
    /// - `Ok(SearchExpression)` - Tree satisfying the join rules
    /// - `Err(SearchError::EmptyGroup)` - A group without expressions
    /// - `Err(SearchError::MissingJoin)` - A group of several expressions without a join
    /// - `Err(SearchError::RedundantJoin)` - A group of one expression with a join
    pub fn from_dto(dto: SearchDto) -> Result<Self, SearchError> {
        match dto {
            SearchDto::Expression(leaf) => Ok(Self::Leaf(SearchLeaf::from_dto(leaf))),
            SearchDto::Group(group) => Self::from_group_dto(group),
        }
    }

    fn from_group_dto(group: ExpressionGroupDto) -> Result<Self, SearchError> {
        let mut expressions = group
            .expressions
            .into_iter()
            .map(Self::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        match (expressions.len(), group.join) {
            (0, _) => Err(SearchError::EmptyGroup),
            (1, Some(_)) => Err(SearchError::RedundantJoin),
            (1, None) => expressions.pop().ok_or(SearchError::EmptyGroup),
            (_, None) => Err(SearchError::MissingJoin),
            (_, Some(join)) => Ok(Self::Group { join, expressions }),
        }
    }

    /// Exact comparison leaf.
    pub fn compare(column_name: &str, operator: Operator, search_term: &str) -> Self {
        Self::Leaf(SearchLeaf {
            column_name: column_name.to_string(),
            search_term: search_term.to_string(),
            operator,
            fuzzy: false,
            min_string_similarity: DEFAULT_MIN_STRING_SIMILARITY,
        })
    }

    /// Trigram similarity leaf.
    pub fn fuzzy(column_name: &str, search_term: &str, min_string_similarity: f64) -> Self {
        Self::Leaf(SearchLeaf {
            column_name: column_name.to_string(),
            search_term: search_term.to_string(),
            operator: Operator::Eq,
            fuzzy: true,
            min_string_similarity,
        })
    }

    pub fn all(expressions: Vec<SearchExpression>) -> Self {
        Self::Group {
            join: Join::And,
            expressions,
        }
    }

    pub fn any(expressions: Vec<SearchExpression>) -> Self {
        Self::Group {
            join: Join::Or,
            expressions,
        }
    }

    /// Returns true if any leaf of the tree compares against `name`.
    pub fn uses_column(&self, name: &str) -> bool {
        match self {
            Self::Leaf(leaf) => leaf.column_name == name,
            Self::Group { expressions, .. } => expressions.iter().any(|e| e.uses_column(name)),
        }
    }
}
