pub mod clock;
pub mod zone;

pub use clock::{convert, duration_minutes};
pub use zone::{format_stamp, ZonedTimeFormatter};
