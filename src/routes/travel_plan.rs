use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::models::{
    destination::Destination,
    detailed_plan::DetailedPlanRequest,
    preference::{TravelPreference, TravelPreferenceDto},
    travel_plan::{
        GeneratePlanRequest, NewTravelPlan, PlanStatus, PlanUpdate, SaveTravelPlanRequest,
        UpdateTravelPlanRequest,
    },
};
use crate::routes::AppState;
use crate::services::budget_optimizer_service::BudgetOptimizerService;

pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<GeneratePlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let preferences = request.preferences.normalize()?;
    let destination = resolve_destination(&state, request.destination_id, &preferences).await?;

    log::info!(
        "Generating {} plan for {} ({} days)",
        preferences.budget_category.as_str(),
        destination.name,
        preferences.travel_duration_days
    );
    let plan = state.plan_generator.generate_plan(&destination, &preferences);
    Ok(HttpResponse::Ok().json(plan))
}

/// An explicit id wins over the questionnaire's destination slug.
async fn resolve_destination(
    state: &AppState,
    destination_id: Option<i32>,
    preferences: &TravelPreference,
) -> Result<Destination, AppError> {
    let id = match (destination_id, preferences.selected_destination.as_deref()) {
        (Some(id), _) => id,
        (None, Some(slug)) => state
            .reference
            .destination_id_for_slug(slug)
            .ok_or_else(|| AppError::Validation("Destination not found".to_string()))?,
        (None, None) => {
            return Err(AppError::Validation(
                "A destination id or selected destination is required".to_string(),
            ))
        }
    };

    state
        .store
        .get_destination(id)
        .await?
        .ok_or_else(|| AppError::Validation("Destination not found".to_string()))
}

/// Never fails on the model side; a failed call yields the fallback plan.
pub async fn detailed(
    state: web::Data<AppState>,
    body: web::Json<DetailedPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    request.validate()?;
    let plan = state.planner.generate_detailed_plan(&request).await;
    Ok(HttpResponse::Ok().json(plan))
}

/// Accepts both questionnaires' field names and age brackets.
pub async fn optimize(body: web::Json<TravelPreferenceDto>) -> Result<HttpResponse, AppError> {
    let preferences = body.into_inner().with_advanced_age_range().normalize()?;
    Ok(HttpResponse::Ok().json(BudgetOptimizerService::optimize(&preferences)))
}

pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match state.store.get_plan(id).await? {
        Some(plan) => Ok(HttpResponse::Ok().json(plan)),
        None => Err(plan_not_found(id)),
    }
}

pub async fn for_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let plans = state.store.plans_for_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(plans))
}

pub async fn save(
    state: web::Data<AppState>,
    body: web::Json<SaveTravelPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let title = request.title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }

    let plan = state
        .store
        .insert_plan(NewTravelPlan {
            user_id: request.user_id,
            travel_preference_id: request.travel_preference_id,
            title: title.to_string(),
            plan: request.travel_plan,
        })
        .await?;

    let location = plan
        .id
        .map(|id| format!("/api/travelplan/{}", id))
        .unwrap_or_default();
    log::info!("Saved travel plan {} for user {}", location, request.user_id);
    Ok(HttpResponse::Created()
        .insert_header(("Location", location))
        .json(plan))
}

/// Blank title or status leave the stored value unchanged.
fn plan_update(request: UpdateTravelPlanRequest) -> Result<PlanUpdate, AppError> {
    let status = match request.status.as_deref().map(str::trim) {
        Some(label) if !label.is_empty() => Some(
            PlanStatus::from_label(label)
                .ok_or_else(|| AppError::Validation(format!("Unknown status: {}", label)))?,
        ),
        _ => None,
    };

    Ok(PlanUpdate {
        title: request
            .title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty()),
        status,
        start_date: request.start_date,
        end_date: request.end_date,
    })
}

pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateTravelPlanRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let update = plan_update(body.into_inner())?;
    match state.store.update_plan(id, update).await? {
        Some(plan) => Ok(HttpResponse::Ok().json(plan)),
        None => Err(plan_not_found(id)),
    }
}

pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if state.store.delete_plan(id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(plan_not_found(id))
    }
}

fn plan_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Travel plan {} not found", id))
}
