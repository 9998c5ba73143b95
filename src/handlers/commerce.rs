use axum::{
    extract::{Path, State},
    Extension, Json,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::order::{self, OrderStatus};
use crate::entities::payment::{self, PaymentStatus};
use crate::entities::{address, bill, cart, menu};
use crate::error::{AppError, AppResult};
use crate::utils::jwt::Claims;
use crate::AppState;

// ============ Cart ============

/// List the current user's cart lines
pub async fn my_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<cart::Model>>> {
    let lines = cart::Entity::find()
        .filter(cart::Column::UserId.eq(claims.sub))
        .order_by_asc(cart::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(lines))
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub menu_id: Uuid,
}

/// Add a menu item to the current user's cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<cart::Model>> {
    let menu = menu::Entity::find_by_id(payload.menu_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid menu".to_string()))?;

    // The restaurant is taken from the menu so the two cannot disagree.
    let line = cart::ActiveModel {
        menu_id: Set(menu.id),
        user_id: Set(claims.sub),
        restaurant_id: Set(menu.restaurant_id),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(line))
}

/// Remove one of the current user's cart lines
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = cart::Entity::delete_many()
        .filter(cart::Column::Id.eq(id))
        .filter(cart::Column::UserId.eq(claims.sub))
        .exec(&state.db)
        .await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Cart item not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Cart item removed" })))
}

// ============ Orders ============

#[derive(Debug, Deserialize)]
pub struct BillRequest {
    pub total_cost: f64,
    #[serde(default)]
    pub coupon_code: String,
    pub tax: f64,
    pub discount: f64,
}

#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub bill: BillRequest,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    #[serde(flatten)]
    pub order: order::Model,
    pub bill: Option<bill::Model>,
}

/// Place an order: stores the supplied bill and a new order in one transaction
pub async fn place_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<PlaceOrderRequest>,
) -> AppResult<Json<OrderResponse>> {
    let txn = state.db.begin().await?;

    let bill = bill::ActiveModel {
        total_cost: Set(payload.bill.total_cost),
        coupon_code: Set(payload.bill.coupon_code),
        tax: Set(payload.bill.tax),
        discount: Set(payload.bill.discount),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let order = order::ActiveModel {
        user_id: Set(claims.sub),
        bill_id: Set(bill.id),
        status: Set(OrderStatus::Placed),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, user_id = %claims.sub, "Order placed");
    Ok(Json(OrderResponse {
        order,
        bill: Some(bill),
    }))
}

/// List the current user's orders, newest first
pub async fn my_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = order::Entity::find()
        .filter(order::Column::UserId.eq(claims.sub))
        .order_by_desc(order::Column::CreatedAt)
        .find_also_related(bill::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(
        orders
            .into_iter()
            .map(|(order, bill)| OrderResponse { order, bill })
            .collect(),
    ))
}

async fn find_visible_order(
    state: &AppState,
    claims: &Claims,
    id: Uuid,
) -> AppResult<order::Model> {
    let order = order::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    if order.user_id != claims.sub && !claims.is_staff {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(order)
}

/// Get an order (owner or staff)
pub async fn get_order(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<OrderResponse>> {
    let order = find_visible_order(&state, &claims, id).await?;
    let bill = bill::Entity::find_by_id(order.bill_id).one(&state.db).await?;

    Ok(Json(OrderResponse { order, bill }))
}

/// List all orders (staff)
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<order::Model>>> {
    let orders = order::Entity::find()
        .order_by_desc(order::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(orders))
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Set an order's status (staff)
pub async fn update_order_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<order::Model>> {
    let order = order::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    let previous = order.status;
    let mut active: order::ActiveModel = order.into();
    active.status = Set(payload.status);
    active.updated_by = Set(Some(claims.sub));
    let updated = active.update(&state.db).await?;

    tracing::info!(
        order_id = %updated.id,
        from = %previous,
        to = %updated.status,
        "Order status changed"
    );
    Ok(Json(updated))
}

/// Delete an order (staff). Rejected while payments or notifications
/// reference it.
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let result = order::Entity::delete_by_id(id).exec(&state.db).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound("Order not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Order deleted" })))
}

// ============ Payments ============

#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub name: String,
    pub amount: f64,
    pub address_id: Uuid,
    pub order_id: Uuid,
    pub payment_status: PaymentStatus,
}

/// Record a payment against one of the current user's orders
pub async fn create_payment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CreatePaymentRequest>,
) -> AppResult<Json<payment::Model>> {
    let order = find_visible_order(&state, &claims, payload.order_id).await?;

    address::Entity::find_by_id(payload.address_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid address".to_string()))?;

    let payment = payment::ActiveModel {
        name: Set(payload.name),
        amount: Set(payload.amount),
        address_id: Set(payload.address_id),
        order_id: Set(order.id),
        payment_status: Set(payload.payment_status),
        created_by: Set(Some(claims.sub)),
        updated_by: Set(Some(claims.sub)),
        ..Default::default()
    }
    .insert(&state.db)
    .await?;

    Ok(Json(payment))
}

/// List payments of an order (owner or staff)
pub async fn order_payments(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<Vec<payment::Model>>> {
    let order = find_visible_order(&state, &claims, order_id).await?;

    let payments = payment::Entity::find()
        .filter(payment::Column::OrderId.eq(order.id))
        .order_by_asc(payment::Column::CreatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(payments))
}
