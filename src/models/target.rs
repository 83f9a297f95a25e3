use tracing::warn;

/// Lifecycle of a single profit level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Pending,
    Hit,
    Fail,
}

impl TargetStatus {
    /// Decode a stored status string. An entry with a status the backend
    /// never wrote stays `Pending` rather than poisoning its siblings.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "hit" => TargetStatus::Hit,
            "fail" => TargetStatus::Fail,
            "pending" | "" => TargetStatus::Pending,
            _ => {
                warn!("Unknown target status {:?}, treating as pending", raw);
                TargetStatus::Pending
            }
        }
    }
}

/// One profit level derived from a signal's raw `targets` field. `price` is
/// the stored text for display, `numeric_price` its parsed value (0.0 when
/// not numeric). Labels are assigned after sorting: `T1` is always the
/// nearest level in the trade's favorable direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub label: String, // "T1".."Tn"
    pub price: String,
    pub status: TargetStatus,
    pub numeric_price: f64,
}
