//! Reservation API Handlers

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use tracing::warn;

use shared::models::{Availability, ReservationRequest};

use crate::booking::FormController;
use crate::booking::availability::estimate;
use crate::booking::form::{BookingState, STORE_FAILED_MESSAGE};
use crate::core::ServerState;
use crate::utils::AppResult;

/// Availability query parameters
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
    pub time: String,
    pub party_size: u8,
}

/// GET /api/reservations/availability - 查询时段可用性
///
/// Pure estimate: same query always returns the same answer.
pub async fn availability(Query(query): Query<AvailabilityQuery>) -> Json<Availability> {
    Json(estimate(&query.date, &query.time, query.party_size))
}

/// Booking outcome returned to the form.
///
/// Both variants are regular 200 responses: an unavailable slot is a
/// user-recoverable condition, not an error.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BookingOutcome {
    Confirmed {
        id: String,
        date: String,
        time: String,
        party_size: u8,
        /// Demo notice shown with the confirmation (no real email is sent)
        notice: String,
    },
    Rejected {
        message: String,
    },
}

/// POST /api/reservations - 提交预订
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<BookingOutcome>> {
    let controller = FormController::new(state.store.clone());

    let outcome = match controller.submit(&payload)? {
        BookingState::Confirmed(confirmation) => BookingOutcome::Confirmed {
            id: confirmation.id,
            date: confirmation.date,
            time: confirmation.time,
            party_size: confirmation.party_size,
            notice: format!(
                "Un email de confirmation sera envoyé à {}. (Démo — non envoyé)",
                payload.email
            ),
        },
        BookingState::Rejected { message } => BookingOutcome::Rejected { message },
        // Submit always lands on a terminal state; anything else is a bug
        state => {
            warn!(?state, "Booking submit ended in a non-terminal state");
            BookingOutcome::Rejected {
                message: STORE_FAILED_MESSAGE.to_string(),
            }
        }
    };

    Ok(Json(outcome))
}
