use crate::models::{Signal, SignalStatus, Target, TargetStatus};

/// How an outcome should be toned when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Positive,
    Negative,
    Neutral,
}

/// Human-readable verdict on where a trade stands.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub text: String,
    pub severity: Severity,
}

impl Outcome {
    fn new(text: impl Into<String>, severity: Severity) -> Self {
        Outcome { text: text.into(), severity }
    }
}

/// Classify a signal's standing from its stored status and the parsed
/// target states. The rules are ordered; the first match wins.
pub fn classify_outcome(signal: &Signal, targets: &[Target]) -> Outcome {
    let hit: Vec<&str> = targets
        .iter()
        .filter(|target| target.status == TargetStatus::Hit)
        .map(|target| target.label.as_str())
        .collect();
    let all_hit = hit.len() == targets.len();

    match signal.status {
        SignalStatus::Success if all_hit => Outcome::new("All Targets Hit", Severity::Positive),
        SignalStatus::Success if !hit.is_empty() => {
            Outcome::new(format!("{} Hit", hit.join(", ")), Severity::Positive)
        }
        SignalStatus::Fail if signal.stop_loss.is_some() => {
            Outcome::new("Stop Loss Hit", Severity::Negative)
        }
        // Trade still open but some levels already reached.
        SignalStatus::Pending if !hit.is_empty() => {
            Outcome::new(format!("{} Hit", hit.join(", ")), Severity::Positive)
        }
        _ => Outcome::new("Awaiting Result", Severity::Neutral),
    }
}
