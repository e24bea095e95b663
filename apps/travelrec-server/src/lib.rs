//! travelrec-server
//!
//! Axum front end for the travel recommender: a landing page, the
//! recommendation form, the zone/state/city cascade endpoints and the
//! recommendation results page.

pub mod app;
pub mod error;
pub mod handlers;
pub mod telemetry;
pub mod templates;

pub use app::{router, AppState};
pub use error::AppError;
