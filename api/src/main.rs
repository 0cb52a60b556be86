//! Employees API Server
//!
//! CRUD service for employee records and their benefits.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;
mod validation;

#[cfg(test)]
mod test_utils;


use adapters::{SeaOrmBenefitRepository, SeaOrmEmployeeRepository};
use app::EmployeeService;
use config::Config;
use domain::ports::EmployeeRepository;
use validation::{create_employee_validator, update_employee_validator};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService<SeaOrmEmployeeRepository, SeaOrmBenefitRepository>>,
}

impl AppState {
    /// Wire repositories and validators over an open database connection
    pub fn new(db: DatabaseConnection) -> Self {
        let employee_repo = Arc::new(SeaOrmEmployeeRepository::new(db.clone()));
        let benefit_repo = Arc::new(SeaOrmBenefitRepository::new(db));

        let employee_service = Arc::new(EmployeeService::new(
            employee_repo,
            benefit_repo,
            create_employee_validator(),
            update_employee_validator(),
        ));

        Self { employee_service }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/employees",
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            "/employees/:id",
            get(handlers::get_employee)
                .put(handlers::update_employee)
                .delete(handlers::delete_employee),
        )
        .route("/employees/:id/benefits", get(handlers::list_benefits))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,employees_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Employees API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to the database
    tracing::info!("Connecting to database...");
    let db = adapters::database::connect(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to connect to database")?;
    adapters::database::ensure_schema(&db)
        .await
        .context("Failed to create database schema")?;
    tracing::info!("Database connected");

    if config.seed_data {
        seed_if_empty(&db).await?;
    }

    let app = router(AppState::new(db));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}

/// Insert demo data unless the store already holds employees
async fn seed_if_empty(db: &DatabaseConnection) -> anyhow::Result<()> {
    let employees = SeaOrmEmployeeRepository::new(db.clone());
    let benefits = SeaOrmBenefitRepository::new(db.clone());

    if employees.count().await? > 0 {
        tracing::info!("Store already populated, skipping seed data");
        return Ok(());
    }

    let seeded = app::seed_demo_data(&employees, &benefits).await?;
    tracing::info!(count = seeded.employees.len(), "Seeded demo employees");

    Ok(())
}
