pub mod reservation;
pub mod tag;
pub mod time_off_request;

pub use reservation::*;
pub use tag::*;
pub use time_off_request::*;
