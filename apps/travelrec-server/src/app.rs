use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use travelrec_recommend::TravelRecommender;

use crate::handlers;
use crate::templates::Templates;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<TravelRecommender>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(recommender: TravelRecommender) -> Result<Self, minijinja::Error> {
        Ok(Self { recommender: Arc::new(recommender), templates: Arc::new(Templates::new()?) })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/recommendation", get(handlers::recommendation_form))
        .route("/get_states", post(handlers::get_states))
        .route("/get_cities", post(handlers::get_cities))
        .route("/recommend", post(handlers::recommend))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
