use crate::{
    model::search::Operator,
    server::{
        data::{crud::CrudRepository, search::SearchRelation},
        error::{search::SearchError, AppError},
        model::search::SearchExpression,
    },
};
use sea_orm::{ActiveValue, DbErr, IntoActiveModel, RelationTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, data_source::DataSourceFactory, station::StationFactory},
};

mod create;
mod get;
mod get_multi;
mod remove;
mod search;
mod update;
