//! Pseudo-availability estimate
//!
//! Deterministic stand-in for a real booking engine: occupancy for a slot is
//! derived from a hash of the date/time strings, never from stored
//! reservations. Identical queries always return identical results, and
//! prior bookings do not reduce the reported free seats.

use shared::models::Availability;

/// Fixed maximum concurrent party count
pub const CAPACITY: u32 = 12;

/// Polynomial rolling hash (`h = h*31 + code`) over UTF-16 code units with
/// wrapping 32-bit arithmetic, absolute value at the end. Matches the
/// classic `hashCode` construction so the occupancy pattern is stable
/// across reimplementations.
fn slot_hash(s: &str) -> u32 {
    let mut h: i32 = 0;
    for code in s.encode_utf16() {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(code));
    }
    h.unsigned_abs()
}

/// Estimate free seats for a slot.
///
/// `occupied = hash(date + time) % capacity + party_size % 3`, free seats
/// saturate at zero. Pure function of its arguments: no I/O, no clock, no
/// store access.
pub fn estimate(date: &str, time: &str, party_size: u8) -> Availability {
    let occupied = slot_hash(&format!("{date}{time}")) % CAPACITY + u32::from(party_size) % 3;
    let free_seats = CAPACITY.saturating_sub(occupied);

    Availability {
        free_seats,
        capacity: CAPACITY,
        bookable: free_seats > 0,
    }
}
