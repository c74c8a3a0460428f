//! HTTP request handlers for the roster scheduler API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::{cycle_assignment, generate};
use crate::export::{events_for_schedule, serialize_calendar};
use crate::models::{DateRange, Person, Schedule};

use super::request::{CycleRequest, ExportRequest, GenerateRequest, PersonRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(generate_handler))
        .route("/schedule/cycle", post(cycle_handler))
        .route("/schedule/export", post(export_handler))
        .with_state(state)
}

/// Handler for the `POST /schedule` endpoint.
///
/// Generates a schedule for the requested range and roster and returns it
/// together with the fairness snapshot.
async fn generate_handler(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing generation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let people = resolve_roster(request.people, &state);
    let range = DateRange {
        start: request.start_date,
        end: request.end_date,
    };

    // Seedable for reproducibility; otherwise OS entropy so tie-break
    // ordering carries no input-order bias.
    let mut rng: StdRng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let start_time = Instant::now();
    match generate(range, &people, &mut rng) {
        Ok(outcome) => {
            let duration = start_time.elapsed();
            let unassigned = outcome
                .schedule
                .iter()
                .filter(|(_, a)| a.is_unassigned())
                .count();
            info!(
                correlation_id = %correlation_id,
                days = outcome.schedule.len(),
                people = people.len(),
                unassigned,
                duration_us = duration.as_micros(),
                "Generation completed successfully"
            );
            (StatusCode::OK, Json(outcome)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the `POST /schedule/cycle` endpoint.
///
/// Advances one day's assignment to the next eligible candidate and returns
/// the new schedule with exactly that one entry changed.
async fn cycle_handler(
    State(state): State<AppState>,
    payload: Result<Json<CycleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cycle request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let people = resolve_roster(request.people, &state);
    let updated: Schedule = cycle_assignment(&request.schedule, request.day, &people);

    info!(
        correlation_id = %correlation_id,
        day = %request.day,
        assignee = updated.assigned_person(request.day).unwrap_or("<unassigned>"),
        "Cycle completed"
    );
    (StatusCode::OK, Json(updated)).into_response()
}

/// Handler for the `POST /schedule/export` endpoint.
///
/// Serializes the assigned days of a schedule into a `text/calendar`
/// document using the configured event templates.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let people = resolve_roster(request.people, &state);
    match events_for_schedule(&request.schedule, &people, state.config().templates()) {
        Ok(events) => {
            let document = serialize_calendar(&events, Utc::now());
            info!(
                correlation_id = %correlation_id,
                events = events.len(),
                "Export completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
                document,
            )
                .into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Export failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Resolves the effective roster: the request's people when present, the
/// configured default roster otherwise.
fn resolve_roster(people: Option<Vec<PersonRequest>>, state: &AppState) -> Vec<Person> {
    match people {
        Some(people) => people.into_iter().map(Person::from).collect(),
        None => state.config().roster().to_vec(),
    }
}

/// Converts a JSON extraction rejection into a BAD_REQUEST response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;

    fn test_state() -> AppState {
        let config = ConfigLoader::load("./config/roster.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    #[test]
    fn test_resolve_roster_prefers_request_people() {
        let state = test_state();
        let people = resolve_roster(
            Some(vec![PersonRequest {
                id: "only".to_string(),
                name: "Only".to_string(),
                blocked_dates: Default::default(),
            }]),
            &state,
        );
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].id, "only");
    }

    #[test]
    fn test_resolve_roster_falls_back_to_config() {
        let state = test_state();
        let people = resolve_roster(None, &state);
        assert_eq!(people.len(), state.config().roster().len());
    }
}
