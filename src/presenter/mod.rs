pub mod dashboard;
pub mod signal_card;

pub use dashboard::{DashboardView, PostCard, dashboard, present_post};
pub use signal_card::{Protected, SignalCard, StopLossView, TargetView, present_signal};
