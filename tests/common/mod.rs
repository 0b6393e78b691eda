use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use travel_planner_api::{
    db::{memory::MemoryStore, store::TravelStore},
    routes::{self, AppState},
    services::{
        detailed_plan_service::{DetailedPlanService, PlannerConfig},
        recommendation_service::RecommendationWeights,
        reference_data::ReferenceData,
    },
};

pub struct TestApp {
    pub state: web::Data<AppState>,
}

impl TestApp {
    /// Seeded in-memory store; detailed plans always take the fallback path.
    pub async fn new() -> Self {
        Self::with_planner(PlannerConfig::default()).await
    }

    pub async fn with_planner(config: PlannerConfig) -> Self {
        let reference = Arc::new(ReferenceData::standard());
        let store = Arc::new(MemoryStore::new());
        store
            .seed_reference_data(&reference)
            .await
            .expect("Failed to seed reference data");

        let planner = DetailedPlanService::new(config).expect("Failed to build planner");
        let state = web::Data::new(AppState::new(
            store,
            reference,
            RecommendationWeights::default(),
            planner,
        ));

        Self { state }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config)
    }
}
