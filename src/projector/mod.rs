pub mod outcome;
pub mod roi;
pub mod targets;

pub use outcome::{Outcome, Severity, classify_outcome};
pub use roi::compute_roi;
pub use targets::parse_targets;
