use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::DecodeError;

/// Trade direction. A `Buy` rises toward its targets, a `Sell` falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Buy,
    Sell,
}

impl Direction {
    /// The backend writes "buy"/"sell"; older records say "long"/"short".
    /// Anything else keeps the rises-toward-targets sense.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sell" | "short" => Direction::Sell,
            _ => Direction::Buy,
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(Direction::Buy, Direction::from_wire))
    }
}

/// Where the trade stands, as stored by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalStatus {
    #[default]
    Pending,
    Success,
    Fail,
}

impl SignalStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => SignalStatus::Success,
            "fail" => SignalStatus::Fail,
            "pending" | "" => SignalStatus::Pending,
            _ => {
                warn!("Unknown signal status {:?}, treating as pending", raw);
                SignalStatus::Pending
            }
        }
    }
}

impl<'de> Deserialize<'de> for SignalStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map_or(SignalStatus::Pending, SignalStatus::from_wire))
    }
}

/// The stored `targets` field, classified into every shape the backend has
/// ever written for it, so parsing is an exhaustive match.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawTargets {
    /// Price text mapped to status text.
    Mapping(Vec<(String, String)>),
    /// Comma-separated bare prices; no per-level status was stored.
    DelimitedList(Vec<String>),
    /// A single price.
    Scalar(String),
    #[default]
    Absent,
}

impl RawTargets {
    /// Classify a decoded JSON value. Null and anything the backend never
    /// wrote count as "no targets"; renderers treat the two identically.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => RawTargets::Absent,
            Value::Object(entries) => RawTargets::Mapping(
                entries
                    .into_iter()
                    .map(|(price, status)| (price, status_text(status)))
                    .collect(),
            ),
            Value::String(text) => Self::from_text(&text),
            Value::Number(price) => RawTargets::Scalar(price.to_string()),
            other => {
                warn!("Targets field has unsupported shape {}, treating as none", other);
                RawTargets::Absent
            }
        }
    }

    /// Classify free-form text: an embedded JSON document, a comma list, or
    /// a single numeric value.
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return RawTargets::Absent;
        }
        match serde_json::from_str::<Value>(trimmed) {
            Ok(embedded) => Self::from_value(embedded),
            Err(_) if trimmed.contains(',') => RawTargets::DelimitedList(
                trimmed.split(',').map(|token| token.trim().to_string()).collect(),
            ),
            // Not valid JSON but still a number, e.g. ".5" or "+45000".
            Err(_) if trimmed.parse::<f64>().is_ok() => RawTargets::Scalar(trimmed.to_string()),
            Err(_) => {
                warn!("Targets text {:?} is not parseable, treating as none", trimmed);
                RawTargets::Absent
            }
        }
    }
}

impl<'de> Deserialize<'de> for RawTargets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(RawTargets::from_value(value.unwrap_or(Value::Null)))
    }
}

fn status_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

/// A trading signal as the REST API returns it. The backend owns the record;
/// this crate only derives views from it.
#[derive(Debug, Clone, Deserialize)]
pub struct Signal {
    pub id: String,
    pub coin: String, // pair symbol, e.g. "BTCUSDT"
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub entry_price: Option<f64>,
    #[serde(default)]
    pub leverage: Option<u32>,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    #[serde(default)]
    pub targets: RawTargets,
    #[serde(default)]
    pub status: SignalStatus,
    pub created_at: DateTime<Utc>,
}

impl Signal {
    pub fn from_json(body: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(body).map_err(DecodeError::Signal)
    }

    pub fn list_from_json(body: &str) -> Result<Vec<Self>, DecodeError> {
        serde_json::from_str(body).map_err(DecodeError::Signal)
    }
}
