//! In-memory database and row fixtures for tests.

use sea_orm::prelude::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

use crate::entities::order::OrderStatus;
use crate::entities::user::UserType;
use crate::entities::{address, bill, menu, order, restaurant, state, user};

pub async fn memory() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    super::migrate(&db).await.expect("Failed to run migrations");
    db
}

pub async fn seed_state(db: &DatabaseConnection, name: &str, alias: &str) -> state::Model {
    state::ActiveModel {
        name: Set(name.to_string()),
        alias: Set(alias.to_string()),
        description: Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert state")
}

pub async fn seed_address(db: &DatabaseConnection, state: &state::Model) -> address::Model {
    address::ActiveModel {
        address_line1: Set("123 Main St".to_string()),
        address_line2: Set("Apt 4".to_string()),
        city: Set("Springfield".to_string()),
        state_id: Set(state.id),
        zip_code: Set("90210".to_string()),
        landmark: Set("Near the park".to_string()),
        longitude: Set(Decimal::new(-118_243_683, 6)),
        latitude: Set(Decimal::new(34_052_235, 6)),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert address")
}

pub fn new_user(username: &str, address: &address::Model) -> user::ActiveModel {
    user::ActiveModel {
        username: Set(username.to_string()),
        password: Set("not-a-real-hash".to_string()),
        first_name: Set(String::new()),
        last_name: Set(String::new()),
        email: Set(format!("{}@example.com", username)),
        is_staff: Set(false),
        is_active: Set(true),
        is_superuser: Set(false),
        last_login: Set(None),
        user_type: Set(UserType::Customer),
        mobile: Set("9876543210".to_string()),
        date_of_birth: Set(None),
        gender: Set(None),
        city: Set(Some("Springfield".to_string())),
        address_id: Set(address.id),
        ..Default::default()
    }
}

pub async fn seed_user(
    db: &DatabaseConnection,
    username: &str,
    address: &address::Model,
) -> user::Model {
    new_user(username, address)
        .insert(db)
        .await
        .expect("Failed to insert user")
}

pub async fn seed_restaurant(
    db: &DatabaseConnection,
    address: &address::Model,
) -> restaurant::Model {
    restaurant::ActiveModel {
        name: Set("Luigi's".to_string()),
        website: Set("https://luigis.example.com".to_string()),
        description: Set("Wood-fired pizza".to_string()),
        city: Set(Some("Springfield".to_string())),
        address_id: Set(address.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert restaurant")
}

pub async fn seed_menu(db: &DatabaseConnection, restaurant: &restaurant::Model) -> menu::Model {
    menu::ActiveModel {
        name: Set("Margherita".to_string()),
        menu_type: Set(menu::MenuType::Veg),
        meal_type: Set(menu::MealType::Dinner),
        description: Set("Tomato, mozzarella, basil".to_string()),
        media: Set("media/margherita.mp4".to_string()),
        banner: Set("banners/margherita.jpg".to_string()),
        price: Set(9.5),
        restaurant_id: Set(restaurant.id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert menu")
}

pub async fn seed_bill(db: &DatabaseConnection) -> bill::Model {
    bill::ActiveModel {
        total_cost: Set(21.0),
        coupon_code: Set("WELCOME10".to_string()),
        tax: Set(1.5),
        discount: Set(2.0),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert bill")
}

pub async fn seed_order(
    db: &DatabaseConnection,
    user: &user::Model,
    bill: &bill::Model,
) -> order::Model {
    order::ActiveModel {
        user_id: Set(user.id),
        bill_id: Set(bill.id),
        status: Set(OrderStatus::Placed),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to insert order")
}
