pub mod post;
pub mod role;
pub mod signal;
pub mod target;

pub use post::AnalysisPost;
pub use role::Role;
pub use signal::{Direction, RawTargets, Signal, SignalStatus};
pub use target::{Target, TargetStatus};
