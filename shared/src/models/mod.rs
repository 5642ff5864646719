//! Domain models

pub mod brand;
pub mod menu;
pub mod reservation;

// Re-exports
pub use brand::{Brand, OpeningHours, SocialLinks};
pub use menu::{MenuCategory, MenuItem};
pub use reservation::{Availability, Reservation, ReservationRequest};
