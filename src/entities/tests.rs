use std::collections::HashSet;

use sea_orm::{
    ActiveEnum, ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, PaginatorTrait,
    Set, SqlErr,
};
use sea_orm::sea_query::Query;

use super::order::OrderStatus;
use super::payment::PaymentStatus;
use super::user::UserType;
use super::{address, delivery, menu, order, payment, restaurant, state, user};
use crate::db::testing::{self, memory};

#[tokio::test]
async fn test_ids_are_unique_and_stable_across_updates() {
    let db = memory().await;

    let mut ids = HashSet::new();
    for i in 0..5 {
        let state =
            testing::seed_state(&db, &format!("State {}", i), &format!("state-{}", i)).await;
        assert!(ids.insert(state.id));
    }

    let original = state::Entity::find()
        .one(&db)
        .await
        .unwrap()
        .expect("state exists");

    let mut active: state::ActiveModel = original.clone().into();
    active.name = Set("Renamed".to_string());
    let updated = active.update(&db).await.unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_created_at_is_immutable() {
    let db = memory().await;
    let original = testing::seed_state(&db, "Oregon", "oregon").await;

    let mut active: state::ActiveModel = original.clone().into();
    active.created_at = Set(original.created_at - chrono::Duration::days(30));
    active.description = Set(Some("Pacific northwest".to_string()));
    let updated = active.update(&db).await.unwrap();

    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at >= original.updated_at);
}

#[tokio::test]
async fn test_full_address_order() {
    let db = memory().await;
    let california = testing::seed_state(&db, "California", "california").await;
    let address = testing::seed_address(&db, &california).await;

    assert_eq!(
        address.full_address(&db).await.unwrap(),
        "123 Main St, Apt 4, California, Springfield, 90210"
    );
    assert_eq!(
        address.display(&california).to_string(),
        "123 Main St, Apt 4, California, Springfield, 90210"
    );
}

#[tokio::test]
async fn test_addresses_list_by_state_city_zip() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Texas", "texas").await;

    for (city, zip) in [("Houston", "77002"), ("Austin", "73301"), ("Austin", "73300")] {
        let mut active: address::ActiveModel = testing::seed_address(&db, &state).await.into();
        active.city = Set(city.to_string());
        active.zip_code = Set(zip.to_string());
        active.update(&db).await.unwrap();
    }

    let listed: Vec<(String, String)> = address::Entity::find_ordered()
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|a| (a.city, a.zip_code))
        .collect();

    assert_eq!(
        listed,
        vec![
            ("Austin".to_string(), "73300".to_string()),
            ("Austin".to_string(), "73301".to_string()),
            ("Houston".to_string(), "77002".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_deleting_referenced_state_is_rejected() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Nevada", "nevada").await;
    testing::seed_address(&db, &state).await;

    let err = state::Entity::delete_by_id(state.id)
        .exec(&db)
        .await
        .expect_err("state is still referenced");

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert_eq!(state::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_address_cascades_to_user() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Ohio", "ohio").await;
    let address = testing::seed_address(&db, &state).await;
    let user = testing::seed_user(&db, "homer", &address).await;

    address.delete(&db).await.unwrap();

    assert!(user::Entity::find_by_id(user.id).one(&db).await.unwrap().is_none());
    // The state itself is untouched.
    assert_eq!(state::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_user_with_orders_is_rejected() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Utah", "utah").await;
    let address = testing::seed_address(&db, &state).await;
    let user = testing::seed_user(&db, "marge", &address).await;
    let bill = testing::seed_bill(&db).await;
    testing::seed_order(&db, &user, &bill).await;

    let err = user
        .clone()
        .delete(&db)
        .await
        .expect_err("user still has orders");

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(user::Entity::find_by_id(user.id).one(&db).await.unwrap().is_some());
}

#[tokio::test]
async fn test_deleting_address_used_by_restaurant_is_rejected() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Idaho", "idaho").await;
    let address = testing::seed_address(&db, &state).await;
    let restaurant = testing::seed_restaurant(&db, &address).await;

    let err = address::Entity::delete_by_id(address.id)
        .exec(&db)
        .await
        .expect_err("address still hosts a restaurant");

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(address::Entity::find_by_id(address.id).one(&db).await.unwrap().is_some());
    assert!(
        restaurant::Entity::find_by_id(restaurant.id)
            .one(&db)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_deleting_restaurant_with_menus_is_rejected() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Kansas", "kansas").await;
    let address = testing::seed_address(&db, &state).await;
    let restaurant = testing::seed_restaurant(&db, &address).await;
    let menu = testing::seed_menu(&db, &restaurant).await;

    let err = restaurant::Entity::delete_by_id(restaurant.id)
        .exec(&db)
        .await
        .expect_err("restaurant still has menus");

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));
    assert!(menu::Entity::find_by_id(menu.id).one(&db).await.unwrap().is_some());
}

#[tokio::test]
async fn test_deleting_rows_referenced_by_payment_or_delivery_is_rejected() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Iowa", "iowa").await;
    let address = testing::seed_address(&db, &state).await;
    let customer = testing::seed_user(&db, "maggie", &address).await;
    let mut agent = testing::new_user("otto", &address);
    agent.user_type = Set(UserType::DeliveryBoy);
    let agent = agent.insert(&db).await.unwrap();
    let restaurant = testing::seed_restaurant(&db, &address).await;
    let bill = testing::seed_bill(&db).await;
    let order = testing::seed_order(&db, &customer, &bill).await;

    payment::ActiveModel {
        name: Set("Card".to_string()),
        amount: Set(20.5),
        address_id: Set(address.id),
        order_id: Set(order.id),
        payment_status: Set(PaymentStatus::Completed),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    delivery::ActiveModel {
        user_id: Set(customer.id),
        delivery_boy_id: Set(agent.id),
        user_address_id: Set(address.id),
        restaurant_id: Set(restaurant.id),
        bill_id: Set(bill.id),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    // Payment -> Order
    let err = order::Entity::delete_by_id(order.id).exec(&db).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    // Delivery -> User (agent)
    let err = user::Entity::delete_by_id(agent.id).exec(&db).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ));

    assert_eq!(order::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(delivery::Entity::find().count(&db).await.unwrap(), 1);
    assert_eq!(payment::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_user_mobile_validation() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Maine", "maine").await;
    let address = testing::seed_address(&db, &state).await;

    let mut too_long = testing::new_user("bart", &address);
    too_long.mobile = Set("1234567890123456".to_string());
    let err = too_long.insert(&db).await.expect_err("mobile too long");
    assert!(matches!(err, DbErr::Custom(ref m) if m.starts_with("mobile")));

    let mut not_numeric = testing::new_user("lisa", &address);
    not_numeric.mobile = Set("555-CALL-NOW".to_string());
    assert!(matches!(not_numeric.insert(&db).await, Err(DbErr::Custom(_))));

    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);

    let saved = testing::seed_user(&db, "maggie", &address).await;
    let mut active: user::ActiveModel = saved.into();
    active.mobile = Set("12a".to_string());
    assert!(matches!(active.update(&db).await, Err(DbErr::Custom(_))));
}

#[tokio::test]
async fn test_user_email_must_be_valid() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Vermont", "vermont").await;
    let address = testing::seed_address(&db, &state).await;

    let mut bad_email = testing::new_user("nelson", &address);
    bad_email.email = Set("haw-haw".to_string());
    let err = bad_email.insert(&db).await.expect_err("malformed email");
    assert!(matches!(err, DbErr::Custom(ref m) if m.starts_with("email")));

    let mut blank_email = testing::new_user("milhouse", &address);
    blank_email.email = Set(String::new());
    assert!(blank_email.insert(&db).await.is_ok());
}

#[tokio::test]
async fn test_state_alias_is_unique_slug() {
    let db = memory().await;
    testing::seed_state(&db, "Georgia", "georgia").await;

    let duplicate = state::ActiveModel {
        name: Set("Georgia (country)".to_string()),
        alias: Set("georgia".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect_err("alias must be unique");
    assert!(matches!(
        duplicate.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let bad_slug = state::ActiveModel {
        name: Set("New York".to_string()),
        alias: Set("new york".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(matches!(bad_slug, Err(DbErr::Custom(_))));
}

#[test]
fn test_order_status_codes() {
    assert_eq!(OrderStatus::Placed.to_value(), 1);
    assert_eq!(OrderStatus::Cancelled.to_value(), 6);
    assert_eq!(OrderStatus::try_from_value(&4).unwrap(), OrderStatus::OutForDelivery);
    assert!(OrderStatus::try_from_value(&0).is_err());
    assert!(OrderStatus::try_from_value(&7).is_err());
    assert_eq!(OrderStatus::OutForDelivery.to_string(), "Out For Delivery");
}

#[tokio::test]
async fn test_order_status_out_of_range_is_rejected_by_store() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Idaho", "idaho").await;
    let address = testing::seed_address(&db, &state).await;
    let user = testing::seed_user(&db, "ned", &address).await;
    let bill = testing::seed_bill(&db).await;
    let placed = testing::seed_order(&db, &user, &bill).await;

    // Bypass the typed model to write a raw code.
    let stmt = Query::update()
        .table(order::Entity)
        .value(order::Column::Status, 42i16)
        .and_where(sea_orm::sea_query::Expr::col(order::Column::Id).eq(placed.id))
        .to_owned();
    let backend = db.get_database_backend();
    assert!(db.execute(backend.build(&stmt)).await.is_err());

    let reloaded = order::Entity::find_by_id(placed.id).one(&db).await.unwrap().unwrap();
    assert_eq!(reloaded.status, OrderStatus::Placed);
}

#[tokio::test]
async fn test_restaurant_website_must_be_url() {
    let db = memory().await;
    let state = testing::seed_state(&db, "Vermont", "vermont").await;
    let address = testing::seed_address(&db, &state).await;
    let restaurant = testing::seed_restaurant(&db, &address).await;

    let mut active: super::restaurant::ActiveModel = restaurant.into();
    active.website = Set("not a url".to_string());
    assert!(matches!(active.update(&db).await, Err(DbErr::Custom(_))));
}
