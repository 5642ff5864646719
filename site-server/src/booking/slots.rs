//! Reservation time slots

/// Enumerate the fixed 30-minute reservation slots, 11:30 through 22:00
/// inclusive (22 entries).
pub fn dinner_slots() -> Vec<String> {
    let mut out = Vec::new();
    for hour in 11..=22u32 {
        for minute in [0, 30u32] {
            if hour == 11 && minute < 30 {
                continue;
            }
            if hour == 22 && minute > 0 {
                continue;
            }
            out.push(format!("{hour:02}:{minute:02}"));
        }
    }
    out
}

/// Whether `time` is one of the bookable slots
pub fn is_valid_slot(time: &str) -> bool {
    dinner_slots().iter().any(|s| s == time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::parse_slot_time;

    #[test]
    fn slot_list_covers_service_hours() {
        let slots = dinner_slots();
        assert_eq!(slots.len(), 22);
        assert_eq!(slots.first().map(String::as_str), Some("11:30"));
        assert_eq!(slots.last().map(String::as_str), Some("22:00"));
    }

    #[test]
    fn all_slots_are_half_hour_aligned() {
        for slot in dinner_slots() {
            let time = parse_slot_time(&slot).unwrap();
            use chrono::Timelike;
            assert!(time.minute() == 0 || time.minute() == 30, "slot {slot}");
        }
    }

    #[test]
    fn membership_check_rejects_off_hours() {
        assert!(is_valid_slot("19:30"));
        assert!(is_valid_slot("11:30"));
        assert!(is_valid_slot("22:00"));
        assert!(!is_valid_slot("11:00"));
        assert!(!is_valid_slot("22:30"));
        assert!(!is_valid_slot("19:15"));
        assert!(!is_valid_slot(""));
    }
}
