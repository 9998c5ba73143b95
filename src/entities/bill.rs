use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::audit::Audited;
use crate::utils::validation::{self, ValidationResult};

/// Amounts are stored as supplied; no pricing rules are applied here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bill")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub total_cost: f64,
    pub coupon_code: String,
    pub tax: f64,
    pub discount: f64,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
    pub updated_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    #[sea_orm(has_many = "super::delivery::Entity")]
    Deliveries,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::delivery::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deliveries.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let model = self.stamp(insert);
        model.validate()?;
        Ok(model)
    }
}

impl Audited for ActiveModel {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Option<Column> = Some(Column::UpdatedAt);
}

impl ActiveModel {
    fn validate(&self) -> ValidationResult {
        if let Some(coupon_code) = self.coupon_code.try_as_ref() {
            validation::max_length("coupon_code", coupon_code, 20)?;
        }
        if let Some(total_cost) = self.total_cost.try_as_ref() {
            validation::finite("total_cost", *total_cost)?;
        }
        if let Some(tax) = self.tax.try_as_ref() {
            validation::finite("tax", *tax)?;
        }
        if let Some(discount) = self.discount.try_as_ref() {
            validation::finite("discount", *discount)?;
        }
        Ok(())
    }
}
