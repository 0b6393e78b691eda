use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::routes::AppState;
use crate::services::detailed_plan_service::DetailedPlanService;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let store_result = check_store(&state).await;
    let planner_result = check_planner(&state.planner);

    // The planner degrades to a fallback plan, so only the store affects the
    // overall status.
    if store_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    health.services.insert("store".to_string(), store_result);
    health.services.insert("planner".to_string(), planner_result);

    HttpResponse::Ok().json(health)
}

async fn check_store(state: &AppState) -> ServiceStatus {
    match state.store.get_destination(1).await {
        Ok(Some(_)) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Reference data available".to_string()),
        },
        Ok(None) => ServiceStatus {
            status: "error".to_string(),
            details: Some("Reference data not seeded".to_string()),
        },
        Err(e) => {
            log::error!("Store health check failed: {}", e);
            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to query store: {}", e)),
            }
        }
    }
}

fn check_planner(planner: &DetailedPlanService) -> ServiceStatus {
    match planner.masked_api_key() {
        Some(masked_key) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Model API key configured ({})", masked_key)),
        },
        None => ServiceStatus {
            status: "fallback".to_string(),
            details: Some("QWEN_API_KEY not configured, detailed plans use the fallback".to_string()),
        },
    }
}
