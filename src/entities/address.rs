use std::fmt;

use sea_orm::entity::prelude::*;
use sea_orm::QueryOrder;
use serde::{Deserialize, Serialize};

use super::audit::Audited;
use crate::utils::validation::{self, ValidationResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "address")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state_id: Uuid,
    pub zip_code: String,
    pub landmark: String,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))")]
    pub longitude: Decimal,
    #[sea_orm(column_type = "Decimal(Some((9, 6)))")]
    pub latitude: Decimal,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
    pub updated_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::state::Entity",
        from = "Column::StateId",
        to = "super::state::Column::Id",
        on_delete = "NoAction"
    )]
    State,
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
    #[sea_orm(has_many = "super::restaurant::Entity")]
    Restaurants,
}

impl Related<super::state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::State.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurants.def()
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
        if let Some(line1) = self.address_line1.try_as_ref() {
            validation::required("address_line1", line1)?;
            validation::max_length("address_line1", line1, 512)?;
        }
        if let Some(line2) = self.address_line2.try_as_ref() {
            validation::max_length("address_line2", line2, 512)?;
        }
        if let Some(city) = self.city.try_as_ref() {
            validation::required("city", city)?;
            validation::max_length("city", city, 256)?;
        }
        if let Some(zip_code) = self.zip_code.try_as_ref() {
            validation::required("zip_code", zip_code)?;
            validation::max_length("zip_code", zip_code, 12)?;
        }
        if let Some(landmark) = self.landmark.try_as_ref() {
            validation::max_length("landmark", landmark, 100)?;
        }
        if let Some(longitude) = self.longitude.try_as_ref() {
            validation::decimal("longitude", longitude, 9, 6)?;
        }
        if let Some(latitude) = self.latitude.try_as_ref() {
            validation::decimal("latitude", latitude, 9, 6)?;
        }
        Ok(())
    }
}

impl Model {
    /// `line1, line2, state, city, zip` in that order.
    ///
    /// Note this is not the listing order of [`Entity::find_ordered`].
    pub fn format_full_address(&self, state_name: &str) -> String {
        [
            self.address_line1.as_str(),
            self.address_line2.as_str(),
            state_name,
            self.city.as_str(),
            self.zip_code.as_str(),
        ]
        .join(", ")
    }

    /// Loads the owning state and formats the full address.
    pub async fn full_address<C>(&self, db: &C) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
    {
        let state = self
            .find_related(super::state::Entity)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("State {} not found", self.state_id)))?;

        Ok(self.format_full_address(&state.name))
    }

    /// Display form, given the already loaded state.
    pub fn display<'a>(&'a self, state: &'a super::state::Model) -> FullAddress<'a> {
        FullAddress {
            address: self,
            state,
        }
    }
}

pub struct FullAddress<'a> {
    address: &'a Model,
    state: &'a super::state::Model,
}

impl fmt::Display for FullAddress<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address.format_full_address(&self.state.name))
    }
}

impl Entity {
    /// Default listing order: state, city, zip code.
    pub fn find_ordered() -> Select<Entity> {
        Self::find()
            .order_by_asc(Column::StateId)
            .order_by_asc(Column::City)
            .order_by_asc(Column::ZipCode)
    }
}
