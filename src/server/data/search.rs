//! Translation of search expression trees into SeaORM conditions.
//!
//! Each leaf names a column by its database name. Columns resolve against the
//! searched entity first and then against every joined relation in order, so a
//! relation can only contribute columns the entity itself does not have.
//!
//! Fuzzy leaves on text columns become `word_similarity(term, column) >= min`
//! (PostgreSQL `pg_trgm`). The same similarity expressions are returned in tree
//! order so callers can rank results by them.

use chrono::NaiveDate;
use sea_orm::{
    sea_query::{Alias, ColumnType, Expr, ExprTrait, Func, LikeExpr, SimpleExpr},
    ColumnTrait, Condition, EntityTrait, IdenStatic, Iterable, RelationDef, Value,
};

use crate::{
    model::search::{Join, Operator},
    server::{
        error::search::SearchError,
        model::search::{SearchExpression, SearchLeaf},
    },
};

/// Name of the `pg_trgm` function used for fuzzy leaves.
const WORD_SIMILARITY: &str = "word_similarity";

/// Broad type of a column, used to convert search terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
    Boolean,
    Date,
    Other,
}

impl ColumnKind {
    pub fn of(column_type: &ColumnType) -> Self {
        match column_type {
            ColumnType::Char(_) | ColumnType::String(_) | ColumnType::Text => Self::Text,
            ColumnType::TinyInteger
            | ColumnType::SmallInteger
            | ColumnType::Integer
            | ColumnType::BigInteger
            | ColumnType::TinyUnsigned
            | ColumnType::SmallUnsigned
            | ColumnType::Unsigned
            | ColumnType::BigUnsigned => Self::Integer,
            ColumnType::Float | ColumnType::Double | ColumnType::Decimal(_) => Self::Float,
            ColumnType::Boolean => Self::Boolean,
            ColumnType::Date => Self::Date,
            _ => Self::Other,
        }
    }
}

/// A column found by name, as a table-qualified expression.
pub struct ResolvedColumn {
    pub expr: SimpleExpr,
    pub kind: ColumnKind,
}

/// Finds a column of `E` by its database name.
pub fn find_column<E: EntityTrait>(name: &str) -> Option<E::Column> {
    E::Column::iter().find(|column| column.as_str() == name)
}

/// Resolves a column of `E` by its database name.
pub fn resolve_column<E: EntityTrait>(name: &str) -> Option<ResolvedColumn> {
    let column = find_column::<E>(name)?;

    Some(ResolvedColumn {
        kind: ColumnKind::of(column.def().get_column_type()),
        expr: Expr::col((column.entity_name(), column)).into(),
    })
}

/// A relation joined into a search, contributing its columns to name resolution.
#[derive(Clone)]
pub struct SearchRelation {
    pub join: RelationDef,
    resolve: fn(&str) -> Option<ResolvedColumn>,
}

impl SearchRelation {
    /// Joins along `join` and resolves extra columns on the related entity `R`.
    ///
    /// # Arguments
    /// - `join` - Relation from the searched entity to `R`
    pub fn to<R: EntityTrait>(join: RelationDef) -> Self {
        Self {
            join,
            resolve: resolve_column::<R>,
        }
    }
}

/// Filter and ranking produced from an expression tree.
pub struct SearchFilter {
    pub condition: Condition,
    /// Similarity expressions of fuzzy leaves, in tree order.
    pub rankings: Vec<SimpleExpr>,
}

/// Translates an expression tree into a filter condition over `E` and `relations`.
///
/// # Arguments
/// - `expression` - Validated expression tree
/// - `relations` - Relations joined into the query, in resolution order
///
/// # Returns
/// - `Ok(SearchFilter)` - Condition mirroring the tree plus fuzzy ranking expressions
/// - `Err(SearchError::InvalidColumn)` - A leaf names a column found nowhere
/// - `Err(SearchError::InvalidOperator)` - `contains` used on a non-text column
/// - `Err(SearchError::InvalidTerm)` - A term cannot be converted to its column type
pub fn build_filter<E: EntityTrait>(
    expression: &SearchExpression,
    relations: &[SearchRelation],
) -> Result<SearchFilter, SearchError> {
    let mut rankings = Vec::new();
    let condition = condition_for::<E>(expression, relations, &mut rankings)?;

    Ok(SearchFilter {
        condition,
        rankings,
    })
}

fn condition_for<E: EntityTrait>(
    expression: &SearchExpression,
    relations: &[SearchRelation],
    rankings: &mut Vec<SimpleExpr>,
) -> Result<Condition, SearchError> {
    match expression {
        SearchExpression::Leaf(leaf) => {
            let column = resolve_column::<E>(&leaf.column_name)
                .or_else(|| {
                    relations
                        .iter()
                        .find_map(|relation| (relation.resolve)(&leaf.column_name))
                })
                .ok_or_else(|| SearchError::InvalidColumn(leaf.column_name.clone()))?;

            Ok(Condition::all().add(leaf_expr(leaf, column, rankings)?))
        }
        SearchExpression::Group { join, expressions } => {
            let mut condition = match join {
                Join::And => Condition::all(),
                Join::Or => Condition::any(),
            };
            for member in expressions {
                condition = condition.add(condition_for::<E>(member, relations, rankings)?);
            }
            Ok(condition)
        }
    }
}

fn leaf_expr(
    leaf: &SearchLeaf,
    column: ResolvedColumn,
    rankings: &mut Vec<SimpleExpr>,
) -> Result<SimpleExpr, SearchError> {
    if leaf.fuzzy && column.kind == ColumnKind::Text {
        let similarity: SimpleExpr = Func::cust(Alias::new(WORD_SIMILARITY))
            .arg(leaf.search_term.clone())
            .arg(column.expr)
            .into();
        rankings.push(similarity.clone());

        return Ok(Expr::expr(similarity).gte(leaf.min_string_similarity));
    }

    let kind = column.kind;
    let target = Expr::expr(column.expr);

    Ok(match leaf.operator {
        Operator::Eq => target.eq(term_value(leaf, kind)?),
        Operator::Ne => target.ne(term_value(leaf, kind)?),
        Operator::Gt => target.gt(term_value(leaf, kind)?),
        Operator::Ge => target.gte(term_value(leaf, kind)?),
        Operator::Lt => target.lt(term_value(leaf, kind)?),
        Operator::Le => target.lte(term_value(leaf, kind)?),
        Operator::Contains if kind == ColumnKind::Text => target.like(
            LikeExpr::new(format!("%{}%", escape_like(&leaf.search_term))).escape('\\'),
        ),
        Operator::Contains => {
            return Err(SearchError::InvalidOperator {
                column: leaf.column_name.clone(),
                operator: leaf.operator,
            })
        }
    })
}

/// Converts a search term to a value of the column's type. Terms never
/// convert to JSON or other structured columns.
fn term_value(leaf: &SearchLeaf, kind: ColumnKind) -> Result<Value, SearchError> {
    let term = leaf.search_term.trim();
    let invalid = || SearchError::InvalidTerm {
        column: leaf.column_name.clone(),
        term: leaf.search_term.clone(),
    };

    Ok(match kind {
        ColumnKind::Integer => term.parse::<i64>().map_err(|_| invalid())?.into(),
        ColumnKind::Float => term.parse::<f64>().map_err(|_| invalid())?.into(),
        ColumnKind::Boolean => match term.to_ascii_lowercase().as_str() {
            "true" | "t" | "1" | "yes" => true.into(),
            "false" | "f" | "0" | "no" => false.into(),
            _ => return Err(invalid()),
        },
        ColumnKind::Date => NaiveDate::parse_from_str(term, "%Y-%m-%d")
            .map_err(|_| invalid())?
            .into(),
        ColumnKind::Text => leaf.search_term.clone().into(),
        ColumnKind::Other => return Err(invalid()),
    })
}

/// Escapes `LIKE` wildcards so `contains` matches the term literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
