use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use travel_planner_api::{
    db::{memory::MemoryStore, mongo, store::DynStore},
    routes::{self, AppState},
    services::{
        detailed_plan_service::{DetailedPlanService, PlannerConfig},
        recommendation_service::RecommendationWeights,
        reference_data::ReferenceData,
    },
};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

fn io_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

async fn create_store() -> std::io::Result<DynStore> {
    match std::env::var("MONGODB_URI") {
        Ok(uri) if !uri.is_empty() => {
            let client = mongo::create_mongo_client(&uri)
                .await
                .map_err(|e| io_error("Failed to create MongoDB client", e))?;
            Ok(Arc::new(mongo::MongoStore::new(&client)))
        }
        _ => {
            log::warn!("MONGODB_URI not set, using the in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let reference = Arc::new(ReferenceData::standard());
    let store = create_store().await?;
    store
        .seed_reference_data(&reference)
        .await
        .map_err(|e| io_error("Failed to seed reference data", e))?;

    let planner = DetailedPlanService::new(PlannerConfig::from_env())
        .map_err(|e| io_error("Failed to build planner client", e))?;
    let state = web::Data::new(AppState::new(
        store,
        reference,
        RecommendationWeights::from_env(),
        planner,
    ));

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    })
    .bind((host, port))?
    .run()
    .await
}
