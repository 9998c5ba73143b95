use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::audit::Audited;

/// Links an order's bill to the customer, the delivery agent, the drop-off
/// address and the restaurant. Assignment itself happens elsewhere.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "delivery")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub delivery_boy_id: Uuid,
    pub user_address_id: Uuid,
    pub restaurant_id: Uuid,
    pub bill_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
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
        belongs_to = "super::address::Entity",
        from = "Column::UserAddressId",
        to = "super::address::Column::Id",
        on_delete = "NoAction"
    )]
    UserAddress,
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_delete = "NoAction"
    )]
    Restaurant,
    #[sea_orm(
        belongs_to = "super::bill::Entity",
        from = "Column::BillId",
        to = "super::bill::Column::Id",
        on_delete = "NoAction"
    )]
    Bill,
}

// Two relations point at `user`; only the customer side is `Related`.
impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAddress.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl Related<super::bill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bill.def()
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
