pub mod constants;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use dates::normalize_date;
pub use progress::ProgressReporter;
