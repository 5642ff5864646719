//! Reservation form controller
//!
//! Orchestrates one submission: validate → estimate availability → persist →
//! confirmation. The store is injected; the controller never touches global
//! state, and every side effect is confined to the reservation log.

use tracing::error;

use shared::models::{Reservation, ReservationRequest};
use shared::util::{confirmation_code, now_millis};

use crate::booking::availability;
use crate::booking::form::{
    BookingEvent, BookingState, Confirmation, SLOT_FULL_MESSAGE, reduce,
};
use crate::booking::slots;
use crate::store::ReservationStore;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_PHONE_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, time};

/// Confirmation code length (6 uppercase base-36 chars)
const CODE_LEN: usize = 6;

/// Drives the form state machine over an injected store
pub struct FormController {
    store: ReservationStore,
}

impl FormController {
    pub fn new(store: ReservationStore) -> Self {
        Self { store }
    }

    /// Run one submission through the state machine.
    ///
    /// Returns the terminal state: `Confirmed` with the generated code, or
    /// `Rejected` when the slot is unavailable or the write fails (both
    /// user-recoverable). Validation failures are errors; browsers block
    /// them client-side, the API still refuses them.
    pub fn submit(&self, request: &ReservationRequest) -> AppResult<BookingState> {
        validate(request)?;

        let mut state = reduce(&BookingState::Editing, &BookingEvent::Submitted);

        let availability =
            availability::estimate(&request.date, &request.time, request.party_size);

        let event = if !availability.bookable {
            BookingEvent::SlotUnavailable {
                message: SLOT_FULL_MESSAGE.to_string(),
            }
        } else {
            let reservation = Reservation {
                id: confirmation_code(CODE_LEN),
                name: request.name.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
                date: request.date.clone(),
                time: request.time.clone(),
                party_size: request.party_size,
                notes: request.notes.clone(),
                created_at: now_millis(),
            };

            match self.store.append(&reservation) {
                Ok(()) => BookingEvent::Persisted(Confirmation {
                    id: reservation.id,
                    date: reservation.date,
                    time: reservation.time,
                    party_size: reservation.party_size,
                }),
                Err(e) => {
                    // Recoverable: surface a generic retry message, keep serving
                    error!(error = %e, "Failed to persist reservation");
                    BookingEvent::StoreFailed
                }
            }
        };

        state = reduce(&state, &event);
        Ok(state)
    }
}

/// Field validation: required fields non-empty, date today or later, time
/// one of the fixed slots, party size 1–10. Email/phone formats are not
/// checked beyond non-empty.
fn validate(request: &ReservationRequest) -> AppResult<()> {
    validate_required_text(&request.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&request.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&request.phone, "phone", MAX_PHONE_LEN)?;
    validate_optional_text(&request.notes, "notes", MAX_NOTE_LEN)?;

    let date = time::parse_date(&request.date)?;
    time::validate_not_past(date)?;

    if !slots::is_valid_slot(&request.time) {
        return Err(AppError::validation(format!(
            "Time {} is not a bookable slot",
            request.time
        )));
    }

    if !(1..=10).contains(&request.party_size) {
        return Err(AppError::validation(format!(
            "Party size must be between 1 and 10, got {}",
            request.party_size
        )));
    }

    Ok(())
}
