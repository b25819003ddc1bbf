use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{company, errors};

/// A service offered by a company (wash, tyre change, ...).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price: i64,
    pub duration_minutes: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Company }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Company => Entity::belongs_to(company::Entity)
                .from(Column::CompanyId)
                .to(company::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_price(price: i64) -> Result<(), errors::ModelError> {
    if price < 0 {
        return Err(errors::ModelError::Validation("price must be >= 0".into()));
    }
    Ok(())
}

pub fn validate_duration(minutes: i32) -> Result<(), errors::ModelError> {
    if minutes <= 0 {
        return Err(errors::ModelError::Validation("duration_minutes must be > 0".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    company_id: i64,
    name: &str,
    description: Option<&str>,
    price: i64,
    duration_minutes: i32,
) -> Result<Model, errors::ModelError> {
    company::validate_name(name)?;
    validate_price(price)?;
    validate_duration(duration_minutes)?;

    let now = Utc::now().into();
    let am = ActiveModel {
        company_id: Set(company_id),
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        price: Set(price),
        duration_minutes: Set(duration_minutes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All services of a company ordered by id.
pub async fn list_by_company<C: ConnectionTrait>(db: &C, company_id: i64) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::CompanyId.eq(company_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_price_and_empty_duration() {
        assert!(validate_price(-1).is_err());
        assert!(validate_price(0).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(45).is_ok());
    }
}
