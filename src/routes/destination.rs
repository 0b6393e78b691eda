use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::models::preference::TravelPreferenceDto;
use crate::routes::AppState;

#[derive(Deserialize)]
pub struct QueryParams {
    search: Option<String>,
}

pub async fn list(
    state: web::Data<AppState>,
    params: web::Query<QueryParams>,
) -> Result<HttpResponse, AppError> {
    let destinations = state.store.list_destinations(params.search.as_deref()).await?;
    Ok(HttpResponse::Ok().json(destinations))
}

pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match state.store.get_destination(id).await? {
        Some(destination) => Ok(HttpResponse::Ok().json(destination)),
        None => Err(AppError::NotFound(format!("Destination {} not found", id))),
    }
}

pub async fn by_continent(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let destinations = state
        .store
        .destinations_by_continent(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(destinations))
}

/// Popularity threshold strategy over the stored destinations.
pub async fn recommendations(
    state: web::Data<AppState>,
    body: web::Json<TravelPreferenceDto>,
) -> Result<HttpResponse, AppError> {
    let preferences = body.normalize()?;
    let destinations = state.store.list_destinations(None).await?;
    let recommended = state
        .recommendations
        .recommend_by_preference(&preferences, destinations);
    Ok(HttpResponse::Ok().json(recommended))
}

/// Profile-scored strategy over the appeal catalog.
pub async fn personalized_recommendations(
    state: web::Data<AppState>,
    body: web::Json<TravelPreferenceDto>,
) -> Result<HttpResponse, AppError> {
    let preferences = body.normalize()?;
    Ok(HttpResponse::Ok().json(state.recommendations.recommend(&preferences)))
}
