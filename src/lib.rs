//! Domain core for a crypto-signals subscription dashboard: typed models for
//! the backend's records, the target/ROI projector, the role-based access
//! policy, and per-viewer view assembly. Everything here is pure and I/O-free;
//! the embedding application owns networking, auth, and rendering.

pub mod error;
pub mod logger;
pub mod models;
pub mod policy;
pub mod presenter;
pub mod projector;
pub mod session;

pub use error::DecodeError;
pub use models::{
    AnalysisPost, Direction, RawTargets, Role, Signal, SignalStatus, Target, TargetStatus,
};
pub use presenter::{
    DashboardView, PostCard, Protected, SignalCard, StopLossView, TargetView, dashboard,
    present_post, present_signal,
};
pub use projector::{Outcome, Severity, classify_outcome, compute_roi, parse_targets};
pub use session::{Session, SessionSource, Theme, Viewer};
