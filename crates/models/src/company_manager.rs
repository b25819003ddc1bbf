use std::collections::HashMap;

use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{company, errors};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_manager")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Company,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Company => Entity::belongs_to(company::Entity).from(Column::CompanyId).to(company::Column::Id).into() }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Manager ids of one company, ascending.
pub async fn list_for_company<C: ConnectionTrait>(db: &C, company_id: i64) -> Result<Vec<i64>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::CompanyId.eq(company_id))
        .order_by_asc(Column::UserId)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(|r| r.user_id).collect())
}

/// Manager ids of several companies in a single query.
pub async fn list_for_companies<C: ConnectionTrait>(db: &C, company_ids: &[i64]) -> Result<HashMap<i64, Vec<i64>>, errors::ModelError> {
    let mut out: HashMap<i64, Vec<i64>> = HashMap::new();
    if company_ids.is_empty() { return Ok(out); }
    let rows = Entity::find()
        .filter(Column::CompanyId.is_in(company_ids.iter().copied()))
        .order_by_asc(Column::UserId)
        .all(db)
        .await?;
    for r in rows {
        out.entry(r.company_id).or_default().push(r.user_id);
    }
    Ok(out)
}

/// Replace the whole manager set of a company. Duplicates in `user_ids` collapse.
pub async fn replace_for_company<C: ConnectionTrait>(db: &C, company_id: i64, user_ids: &[i64]) -> Result<(), errors::ModelError> {
    Entity::delete_many()
        .filter(Column::CompanyId.eq(company_id))
        .exec(db)
        .await?;

    let mut unique = user_ids.to_vec();
    unique.sort_unstable();
    unique.dedup();
    if unique.is_empty() { return Ok(()); }

    let now: DateTimeWithTimeZone = Utc::now().into();
    let rows = unique.into_iter().map(|user_id| ActiveModel {
        company_id: Set(company_id),
        user_id: Set(user_id),
        created_at: Set(now),
    });
    Entity::insert_many(rows).exec(db).await?;
    Ok(())
}

pub async fn is_manager<C: ConnectionTrait>(db: &C, company_id: i64, user_id: i64) -> Result<bool, errors::ModelError> {
    let found = Entity::find_by_id((company_id, user_id)).one(db).await?;
    Ok(found.is_some())
}
