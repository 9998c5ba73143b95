use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::audit::Audited;
use crate::utils::validation::{self, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[sea_orm(num_value = 1)]
    Customer,
    #[sea_orm(num_value = 2)]
    DeliveryBoy,
    #[sea_orm(num_value = 3)]
    RestaurantOwner,
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Customer => "Customer",
            Self::DeliveryBoy => "Delivery Boy",
            Self::RestaurantOwner => "Restaurant Owner",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[sea_orm(num_value = 1)]
    Male,
    #[sea_orm(num_value = 2)]
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "Male",
            Self::Female => "Female",
        })
    }
}

/// Account plus customer / delivery agent / owner profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub date_joined: DateTimeWithTimeZone,
    pub user_type: UserType,
    pub mobile: String,
    pub date_of_birth: Option<Date>,
    pub gender: Option<Gender>,
    pub city: Option<String>,
    pub address_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::address::Entity",
        from = "Column::AddressId",
        to = "super::address::Column::Id",
        on_delete = "Cascade"
    )]
    Address,
    #[sea_orm(has_many = "super::cart::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notifications,
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Address.def()
    }
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl Related<super::notification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Notifications.def()
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

// Users keep `date_joined` in place of the audit timestamps.
impl Audited for ActiveModel {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::DateJoined;
    const UPDATED_AT: Option<Column> = None;
}

impl ActiveModel {
    fn validate(&self) -> ValidationResult {
        if let Some(username) = self.username.try_as_ref() {
            validation::required("username", username)?;
            validation::max_length("username", username, 150)?;
        }
        if let Some(first_name) = self.first_name.try_as_ref() {
            validation::max_length("first_name", first_name, 150)?;
        }
        if let Some(last_name) = self.last_name.try_as_ref() {
            validation::max_length("last_name", last_name, 150)?;
        }
        if let Some(email) = self.email.try_as_ref() {
            validation::email("email", email, 254)?;
        }
        if let Some(mobile) = self.mobile.try_as_ref() {
            validation::mobile(mobile)?;
        }
        if let Some(Some(city)) = self.city.try_as_ref() {
            validation::max_length("city", city, 255)?;
        }
        Ok(())
    }
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
