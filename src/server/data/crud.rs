//! Generic CRUD repository shared by every table.
//!
//! Entity specific repositories only add what this one cannot express
//! generically: upserts, eager loading of satellite tables and association
//! maintenance.

use std::{collections::HashSet, marker::PhantomData};

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    Iterable, JoinType, ModelTrait, Order, PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::search::{build_filter, find_column, SearchRelation},
    error::AppError,
    model::{pagination::Page, search::SearchExpression},
};

type PrimaryKeyValue<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub struct CrudRepository<'a, E: EntityTrait> {
    db: &'a DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<'a, E> CrudRepository<'a, E>
where
    E: EntityTrait,
    E::Model: Sync,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<PrimaryKeyValue<E>>,
    {
        E::find_by_id(id).one(self.db).await
    }

    /// Gets one page of records in the requested order.
    ///
    /// The count covers the whole table, not just the page. A limit of 0
    /// yields an empty page.
    ///
    /// # Arguments
    /// - `skip` - Number of records to skip
    /// - `limit` - Maximum number of records on the page
    /// - `order_by` - Column names, `-` prefixed for descending order
    ///
    /// # Returns
    /// - `Ok(Page)` - Records of the page with total count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_multi(
        &self,
        skip: u64,
        limit: u64,
        order_by: &[String],
    ) -> Result<Page<E::Model>, DbErr> {
        let query = apply_order(E::find(), order_by);

        let count = query.clone().count(self.db).await?;
        let results = query.offset(skip).limit(limit).all(self.db).await?;

        Ok(Page {
            results,
            count,
            skip,
            limit,
        })
    }

    pub async fn get_all(&self, order_by: &[String]) -> Result<Vec<E::Model>, DbErr> {
        apply_order(E::find(), order_by).all(self.db).await
    }

    /// Finds records matching a search expression tree.
    ///
    /// Relations are left joined so their columns can be searched. Fuzzy
    /// matches rank first (best similarity first), then `order_by` applies.
    /// Rows repeated by a one-to-many join are collapsed to their first
    /// occurrence, so fewer than `limit` records may come back.
    ///
    /// # Arguments
    /// - `expression` - Validated expression tree
    /// - `relations` - Relations joined into the query
    /// - `order_by` - Column names, `-` prefixed for descending order
    /// - `limit` - Maximum number of rows, 0 for no limit
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Matching records without duplicates
    /// - `Err(AppError::SearchErr)` - Expression refers to unknown columns or invalid terms
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn search(
        &self,
        expression: &SearchExpression,
        relations: &[SearchRelation],
        order_by: &[String],
        limit: u64,
    ) -> Result<Vec<E::Model>, AppError> {
        let query = Self::search_query(expression, relations, order_by, limit)?;

        let models = query.all(self.db).await?;

        Ok(dedup_by_primary_key::<E>(models))
    }

    /// Builds the select behind [`search`](Self::search).
    ///
    /// Relations are left joined. Fuzzy similarity rankings order the rows,
    /// best first, ahead of the `order_by` columns.
    pub fn search_query(
        expression: &SearchExpression,
        relations: &[SearchRelation],
        order_by: &[String],
        limit: u64,
    ) -> Result<Select<E>, AppError> {
        let filter = build_filter::<E>(expression, relations)?;

        let mut query = E::find();
        for relation in relations {
            query = query.join(JoinType::LeftJoin, relation.join.clone());
        }
        query = query.filter(filter.condition);
        for ranking in filter.rankings {
            query = query.order_by(ranking, Order::Desc);
        }
        query = apply_order(query, order_by);
        if limit > 0 {
            query = query.limit(limit);
        }

        Ok(query)
    }

    pub async fn create<A>(&self, values: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        values.insert(self.db).await
    }

    /// Writes the fields of `changes` that are `Set`. The primary key must be
    /// present, usually by starting from `record.into_active_model()`.
    pub async fn update<A>(&self, changes: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        changes.update(self.db).await
    }

    /// Deletes a record by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The record as it was before deletion
    /// - `Ok(None)` - No record with this key
    /// - `Err(DbErr)` - Database error during delete
    pub async fn remove<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<PrimaryKeyValue<E>> + Clone,
    {
        let Some(model) = self.get(id.clone()).await? else {
            return Ok(None);
        };

        E::delete_by_id(id).exec(self.db).await?;

        Ok(Some(model))
    }
}

/// Applies `order_by` column names to a query.
///
/// A leading `-` sorts descending. Names that are not columns of `E` are
/// skipped.
pub fn apply_order<E: EntityTrait>(mut query: Select<E>, order_by: &[String]) -> Select<E> {
    for field in order_by {
        let (name, order) = match field.strip_prefix('-') {
            Some(name) => (name, Order::Desc),
            None => (field.as_str(), Order::Asc),
        };

        match find_column::<E>(name) {
            Some(column) => query = query.order_by(column, order),
            None => tracing::debug!("Ignoring unknown order_by column: {}", name),
        }
    }

    query
}

fn dedup_by_primary_key<E: EntityTrait>(models: Vec<E::Model>) -> Vec<E::Model> {
    let mut seen = HashSet::new();

    models
        .into_iter()
        .filter(|model| {
            let key: Vec<_> = E::PrimaryKey::iter()
                .map(|key| model.get(key.into_column()))
                .collect();
            seen.insert(format!("{:?}", key))
        })
        .collect()
}
