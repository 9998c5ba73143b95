use std::net::SocketAddr;

use axum::middleware;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use food_order_backend::{
    config::Config,
    db,
    entities::user,
    middleware::rate_limit::{create_global_governor, log_request},
    routes, AppError, AppResult, AppState,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "food_order_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Starting server at {}", config.server_addr());

    // Connect to database
    let db = db::connect(&config).await?;
    tracing::info!("Connected to database");

    // Run migrations
    db::migrate(&db).await?;
    tracing::info!("Migrations complete");

    promote_admin(&db, &config).await?;

    let state = AppState {
        db,
        config: config.clone(),
    };

    // 1000 requests burst per IP, one slot refilled every 60ms
    let governor = create_global_governor(60, 1000)?;

    let app = routes::create_router(state)
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(governor);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::Internal(format!("Invalid server address: {}", e)))?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::Internal(format!("Server error: {}", e)))
}

/// Grants staff rights to the configured admin account. Accounts need an
/// address, so the admin registers normally first and is promoted here.
async fn promote_admin(db: &DatabaseConnection, config: &Config) -> AppResult<()> {
    let Some(username) = config.admin_username.as_deref() else {
        return Ok(());
    };

    let Some(admin) = user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
    else {
        tracing::warn!(username, "Admin account not found, skipping promotion");
        return Ok(());
    };

    if admin.is_staff && admin.is_superuser {
        return Ok(());
    }

    let mut active: user::ActiveModel = admin.into();
    active.is_staff = Set(true);
    active.is_superuser = Set(true);
    active.update(db).await?;

    tracing::info!(username, "Admin account promoted to staff");
    Ok(())
}
