use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::audit::Audited;

/// What is being rated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum RatingType {
    #[sea_orm(num_value = 1)]
    App,
    #[sea_orm(num_value = 2)]
    Order,
    #[sea_orm(num_value = 3)]
    Delivery,
    #[sea_orm(num_value = 4)]
    DeliveryBoy,
    #[sea_orm(num_value = 5)]
    Restaurant,
    #[sea_orm(num_value = 6)]
    Menu,
}

impl fmt::Display for RatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::App => "App",
            Self::Order => "Order",
            Self::Delivery => "Delivery",
            Self::DeliveryBoy => "Delivery Boy",
            Self::Restaurant => "Restaurant",
            Self::Menu => "Menu",
        })
    }
}

/// Star score, stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum RatingScore {
    #[sea_orm(num_value = 1)]
    One,
    #[sea_orm(num_value = 2)]
    Two,
    #[sea_orm(num_value = 3)]
    Three,
    #[sea_orm(num_value = 4)]
    Four,
    #[sea_orm(num_value = 5)]
    Five,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rating")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub rating: RatingType,
    pub user_id: Uuid,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub score: RatingScore,
    pub menu_id: Option<Uuid>,
    pub restaurant_id: Option<Uuid>,
    pub delivery_boy_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "NoAction"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DeliveryBoyId",
        to = "super::user::Column::Id",
        on_delete = "NoAction"
    )]
    DeliveryBoy,
    #[sea_orm(
        belongs_to = "super::menu::Entity",
        from = "Column::MenuId",
        to = "super::menu::Column::Id",
        on_delete = "NoAction"
    )]
    Menu,
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_delete = "NoAction"
    )]
    Restaurant,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Menu.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        Ok(self.stamp(insert))
    }
}

impl Audited for ActiveModel {
    const ID: Column = Column::Id;
    const CREATED_AT: Column = Column::CreatedAt;
    const UPDATED_AT: Option<Column> = Some(Column::UpdatedAt);
}
