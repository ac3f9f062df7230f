pub mod reservation;
pub mod reservations_tags;
pub mod tag;
pub mod time_off_request;
