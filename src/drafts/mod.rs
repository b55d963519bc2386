//! Booking drafts: the host's in-progress selections for one hall.

pub mod draft;
pub mod routes;

pub use draft::{BookingDraft, BookingSubmission};
pub use routes::router;
