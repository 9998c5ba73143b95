use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::audit::Audited;
use crate::utils::validation::{self, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum MenuType {
    #[sea_orm(num_value = 1)]
    Veg,
    #[sea_orm(num_value = 2)]
    NonVeg,
    #[sea_orm(num_value = 3)]
    Vegan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[derive(Serialize, Deserialize)]
#[sea_orm(rs_type = "i16", db_type = "SmallInteger")]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    #[sea_orm(num_value = 1)]
    Breakfast,
    #[sea_orm(num_value = 2)]
    Lunch,
    #[sea_orm(num_value = 3)]
    Dinner,
    #[sea_orm(num_value = 4)]
    Snack,
    #[sea_orm(num_value = 5)]
    Beverage,
    #[sea_orm(num_value = 6)]
    Dessert,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub menu_type: MenuType,
    pub meal_type: MealType,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Storage path of the uploaded media file.
    pub media: String,
    /// Storage path of the banner image.
    pub banner: String,
    pub price: f64,
    pub restaurant_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub created_by: Option<Uuid>,
    pub updated_at: DateTimeWithTimeZone,
    pub updated_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant::Entity",
        from = "Column::RestaurantId",
        to = "super::restaurant::Column::Id",
        on_delete = "NoAction"
    )]
    Restaurant,
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
        if let Some(name) = self.name.try_as_ref() {
            validation::required("name", name)?;
            validation::max_length("name", name, 100)?;
        }
        if let Some(media) = self.media.try_as_ref() {
            validation::max_length("media", media, 100)?;
        }
        if let Some(banner) = self.banner.try_as_ref() {
            validation::max_length("banner", banner, 100)?;
        }
        if let Some(price) = self.price.try_as_ref() {
            validation::finite("price", *price)?;
        }
        Ok(())
    }
}
