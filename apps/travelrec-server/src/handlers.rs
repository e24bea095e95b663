use axum::extract::State;
use axum::response::Html;
use axum::{Form, Json};
use minijinja::context;
use serde::{Deserialize, Serialize};
use tracing::info;
use travelrec_core::traits::Recommend;
use travelrec_core::types::{DatasetStats, RecommendationQuery};

use crate::app::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct ZoneRequest {
    pub zone: String,
}

#[derive(Debug, Deserialize)]
pub struct StateRequest {
    pub state: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub dataset: DatasetStats,
    pub neighbors: usize,
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    state.templates.render("index.html", context! {})
}

/// The form offers zones from the dataset and the remaining choices from
/// the encoder vocabularies, so every option it shows can be encoded.
pub async fn recommendation_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let rec = &state.recommender;
    let classes = |column: &str| -> Vec<String> {
        rec.encoder().encoder(column).map(|e| e.classes().to_vec()).unwrap_or_default()
    };
    state.templates.render(
        "recommendation.html",
        context! {
            zones => rec.dataset().zones(),
            age_groups => classes("Age Group"),
            genders => classes("Gender"),
            months => classes("Ideal Travel Months"),
            budgets => classes("Budget"),
        },
    )
}

pub async fn get_states(State(state): State<AppState>, Json(req): Json<ZoneRequest>) -> Json<Vec<String>> {
    Json(state.recommender.dataset().states_for_zone(&req.zone).to_vec())
}

pub async fn get_cities(State(state): State<AppState>, Json(req): Json<StateRequest>) -> Json<Vec<String>> {
    Json(state.recommender.dataset().cities_for_state(&req.state).to_vec())
}

pub async fn recommend(
    State(state): State<AppState>,
    Form(query): Form<RecommendationQuery>,
) -> Result<Html<String>, AppError> {
    let recommendations = state.recommender.recommend(&query)?;
    info!(city = %query.city, results = recommendations.len(), "served recommendations");
    state.templates.render(
        "recommendations.html",
        context! { query => query, recommendations => recommendations },
    )
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        dataset: state.recommender.dataset().stats(),
        neighbors: state.recommender.k(),
    })
}
