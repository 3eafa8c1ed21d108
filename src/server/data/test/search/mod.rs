use crate::{
    model::search::Operator,
    server::{
        data::search::{build_filter, SearchRelation},
        error::search::SearchError,
        model::search::SearchExpression,
    },
};
use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait, RelationTrait};

mod build_filter;

/// Renders the filter of `expression` over species as PostgreSQL.
fn species_sql(expression: &SearchExpression, relations: &[SearchRelation]) -> String {
    let filter = build_filter::<entity::prelude::Species>(expression, relations).unwrap();

    entity::prelude::Species::find()
        .filter(filter.condition)
        .build(DbBackend::Postgres)
        .to_string()
}
