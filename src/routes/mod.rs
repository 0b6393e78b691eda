use actix_web::{error::JsonPayloadError, web, HttpRequest};
use std::sync::Arc;

use crate::db::store::DynStore;
use crate::error::AppError;
use crate::services::{
    detailed_plan_service::DetailedPlanService, itinerary_generation_service::PlanGenerator,
    recommendation_service::{RecommendationService, RecommendationWeights},
    reference_data::ReferenceData,
};

pub mod destination;
pub mod health;
pub mod travel_plan;

/// Shared by every worker. Reference data and services are read-only; the
/// store synchronizes internally.
pub struct AppState {
    pub store: DynStore,
    pub reference: Arc<ReferenceData>,
    pub recommendations: RecommendationService,
    pub planner: DetailedPlanService,
    pub plan_generator: PlanGenerator,
}

impl AppState {
    pub fn new(
        store: DynStore,
        reference: Arc<ReferenceData>,
        weights: RecommendationWeights,
        planner: DetailedPlanService,
    ) -> Self {
        Self {
            store,
            recommendations: RecommendationService::new(reference.clone(), weights),
            reference,
            planner,
            plan_generator: PlanGenerator::new(),
        }
    }
}

/// Unreadable JSON bodies get the same `{message}` shape as other errors.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("Rejected JSON body: {}", err);
    AppError::Validation(format!("Invalid request body: {}", err)).into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/destination")
                        .route("", web::get().to(destination::list))
                        .route(
                            "/recommendations",
                            web::post().to(destination::recommendations),
                        )
                        .route(
                            "/recommendations/personalized",
                            web::post().to(destination::personalized_recommendations),
                        )
                        .route(
                            "/continent/{continent_id}",
                            web::get().to(destination::by_continent),
                        )
                        .route("/{id}", web::get().to(destination::get_by_id)),
                )
                .service(
                    web::scope("/travelplan")
                        .route("", web::post().to(travel_plan::save))
                        .route("/generate", web::post().to(travel_plan::generate))
                        .route("/detailed", web::post().to(travel_plan::detailed))
                        .route("/optimize", web::post().to(travel_plan::optimize))
                        .route("/user/{user_id}", web::get().to(travel_plan::for_user))
                        .route("/{id}", web::get().to(travel_plan::get_by_id))
                        .route("/{id}", web::put().to(travel_plan::update))
                        .route("/{id}", web::delete().to(travel_plan::delete)),
                ),
        );
}
