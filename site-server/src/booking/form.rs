//! Reservation form state machine
//!
//! Explicit reducer over the four form states. Terminal states return to
//! `Editing` on any further input change.
//!
//! ```text
//! Editing ── Submitted ──▶ Submitting ── Persisted ──────▶ Confirmed
//!    ▲                          │
//!    │                          ├─ SlotUnavailable ──▶ Rejected
//!    │                          └─ StoreFailed ──────▶ Rejected
//!    └───────── InputChanged (from any state) ◀───────────┘
//! ```

use serde::Serialize;

/// Confirmation data echoed back to the guest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub id: String,
    pub date: String,
    pub time: String,
    pub party_size: u8,
}

/// Form controller states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingState {
    /// Collecting input
    Editing,
    /// Submission in flight
    Submitting,
    /// Booking persisted
    Confirmed(Confirmation),
    /// Slot unavailable or persistence failed; user may retry
    Rejected { message: String },
}

/// Events driving the form state machine
#[derive(Debug, Clone)]
pub enum BookingEvent {
    /// Any field edited
    InputChanged,
    /// Form submitted with validated fields
    Submitted,
    /// Estimator reported the slot as not bookable
    SlotUnavailable { message: String },
    /// Record persisted, booking confirmed
    Persisted(Confirmation),
    /// Store write failed; recoverable, nothing persisted
    StoreFailed,
}

/// Message inviting the guest to try a neighbouring slot
pub const SLOT_FULL_MESSAGE: &str =
    "Ce créneau est presque complet. Essayez un horaire voisin (±30 min).";

/// Generic message for persistence failures (recoverable)
pub const STORE_FAILED_MESSAGE: &str =
    "Votre réservation n'a pas pu être enregistrée. Merci de réessayer.";

/// Advance the form state machine by one event.
///
/// Unexpected (state, event) pairs leave the state unchanged.
pub fn reduce(state: &BookingState, event: &BookingEvent) -> BookingState {
    match (state, event) {
        (_, BookingEvent::InputChanged) => BookingState::Editing,
        (BookingState::Editing, BookingEvent::Submitted) => BookingState::Submitting,
        (BookingState::Submitting, BookingEvent::SlotUnavailable { message }) => {
            BookingState::Rejected {
                message: message.clone(),
            }
        }
        (BookingState::Submitting, BookingEvent::Persisted(confirmation)) => {
            BookingState::Confirmed(confirmation.clone())
        }
        (BookingState::Submitting, BookingEvent::StoreFailed) => BookingState::Rejected {
            message: STORE_FAILED_MESSAGE.to_string(),
        },
        (state, _) => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirmation() -> Confirmation {
        Confirmation {
            id: "A1B2C3".to_string(),
            date: "2099-01-10".to_string(),
            time: "19:30".to_string(),
            party_size: 2,
        }
    }

    #[test]
    fn happy_path_reaches_confirmed() {
        let state = reduce(&BookingState::Editing, &BookingEvent::Submitted);
        assert_eq!(state, BookingState::Submitting);

        let state = reduce(&state, &BookingEvent::Persisted(confirmation()));
        assert_eq!(state, BookingState::Confirmed(confirmation()));
    }

    #[test]
    fn unavailable_slot_reaches_rejected_with_message() {
        let state = reduce(&BookingState::Editing, &BookingEvent::Submitted);
        let state = reduce(
            &state,
            &BookingEvent::SlotUnavailable {
                message: SLOT_FULL_MESSAGE.to_string(),
            },
        );
        assert_eq!(
            state,
            BookingState::Rejected {
                message: SLOT_FULL_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn store_failure_reaches_rejected_with_generic_message() {
        let state = reduce(&BookingState::Submitting, &BookingEvent::StoreFailed);
        assert_eq!(
            state,
            BookingState::Rejected {
                message: STORE_FAILED_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn input_change_returns_to_editing_from_any_state() {
        for state in [
            BookingState::Editing,
            BookingState::Submitting,
            BookingState::Confirmed(confirmation()),
            BookingState::Rejected {
                message: SLOT_FULL_MESSAGE.to_string(),
            },
        ] {
            assert_eq!(
                reduce(&state, &BookingEvent::InputChanged),
                BookingState::Editing
            );
        }
    }

    #[test]
    fn unexpected_events_leave_state_unchanged() {
        // Persisted only applies while submitting
        let state = reduce(&BookingState::Editing, &BookingEvent::Persisted(confirmation()));
        assert_eq!(state, BookingState::Editing);

        // Double submit has no effect
        let state = reduce(&BookingState::Submitting, &BookingEvent::Submitted);
        assert_eq!(state, BookingState::Submitting);

        // A terminal state stays terminal until input changes
        let confirmed = BookingState::Confirmed(confirmation());
        assert_eq!(reduce(&confirmed, &BookingEvent::Submitted), confirmed);
    }
}
