use sea_orm::{entity::prelude::*, ConnectionTrait, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    if name.chars().count() > 255 {
        return Err(errors::ModelError::Validation("name too long (<=255)".into()));
    }
    Ok(())
}

/// Matches the `company.address` column width.
pub const ADDRESS_MAX_LEN: usize = 512;

pub fn validate_address(address: &str) -> Result<(), errors::ModelError> {
    if address.chars().count() > ADDRESS_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("address too long (<={ADDRESS_MAX_LEN})")));
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), errors::ModelError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = phone.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
    if !allowed || digits < 5 || phone.len() > 32 {
        return Err(errors::ModelError::Validation("invalid phone".into()));
    }
    Ok(())
}

/// Fields of a new company row.
#[derive(Clone, Debug, Default)]
pub struct NewCompany {
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Field changes for an existing company row; `None` keeps the stored value.
#[derive(Clone, Debug, Default)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

pub async fn create<C: ConnectionTrait>(db: &C, new: NewCompany) -> Result<Model, errors::ModelError> {
    validate_name(&new.name)?;
    if let Some(a) = new.address.as_deref() { validate_address(a)?; }
    if let Some(p) = new.phone.as_deref() { validate_phone(p)?; }
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(new.name),
        description: Set(new.description),
        address: Set(new.address),
        phone: Set(new.phone),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Apply `changes` to company `id`; returns `Ok(None)` when the row does not exist.
pub async fn update<C: ConnectionTrait>(db: &C, id: i64, changes: CompanyChanges) -> Result<Option<Model>, errors::ModelError> {
    let Some(existing) = Entity::find_by_id(id).one(db).await? else { return Ok(None); };
    let mut am: ActiveModel = existing.into();
    if let Some(n) = changes.name { validate_name(&n)?; am.name = Set(n); }
    if let Some(d) = changes.description { am.description = Set(Some(d)); }
    if let Some(a) = changes.address { validate_address(&a)?; am.address = Set(Some(a)); }
    if let Some(p) = changes.phone { validate_phone(&p)?; am.phone = Set(Some(p)); }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(Some(updated))
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?.is_some())
}

/// Hard delete; returns whether a row was removed.
pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
