use chrono::{DateTime, Utc};

use crate::models::{Direction, Role, Signal, TargetStatus};
use crate::policy;
use crate::projector::{Outcome, classify_outcome, compute_roi, parse_targets};

/// A view-model slot holding either the real value or a locked upgrade
/// placeholder. Which one is decided by the access policy alone.
#[derive(Debug, Clone, PartialEq)]
pub enum Protected<T> {
    Visible(T),
    Locked,
}

/// One profit level ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetView {
    pub label: String,
    pub price: String,
    pub status: TargetStatus,
    pub roi: Option<f64>,
}

/// Stop-loss ready for rendering. ROI is negative for a sane trade.
#[derive(Debug, Clone, PartialEq)]
pub struct StopLossView {
    pub price: f64,
    pub roi: Option<f64>,
}

/// A signal prepared for one viewer. Target and stop-loss slots lock for
/// the free tier; the outcome line stays public for every tier.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalCard {
    pub id: String,
    pub coin: String,
    pub direction: Direction,
    pub entry_price: Option<f64>,
    pub leverage: Option<u32>,
    pub targets: Protected<Vec<TargetView>>,
    pub stop_loss: Protected<Option<StopLossView>>,
    pub outcome: Outcome,
    pub created_at: DateTime<Utc>,
    pub can_manage: bool,
}

/// Project a raw signal record into the card one viewer gets to see. The
/// visibility policy is consulted once and applied to both protected slots.
pub fn present_signal(signal: &Signal, role: Role) -> SignalCard {
    let parsed = parse_targets(&signal.targets, signal.direction);
    let outcome = classify_outcome(signal, &parsed);
    let unlocked = policy::can_view_protected_fields(role);

    let targets = if unlocked {
        Protected::Visible(
            parsed
                .into_iter()
                .map(|target| TargetView {
                    roi: compute_roi(
                        Some(target.numeric_price),
                        signal.entry_price,
                        signal.leverage,
                        signal.direction,
                    ),
                    label: target.label,
                    price: target.price,
                    status: target.status,
                })
                .collect(),
        )
    } else {
        Protected::Locked
    };

    let stop_loss = if unlocked {
        Protected::Visible(signal.stop_loss.map(|price| StopLossView {
            price,
            roi: compute_roi(Some(price), signal.entry_price, signal.leverage, signal.direction),
        }))
    } else {
        Protected::Locked
    };

    SignalCard {
        id: signal.id.clone(),
        coin: signal.coin.clone(),
        direction: signal.direction,
        entry_price: signal.entry_price,
        leverage: signal.leverage,
        targets,
        stop_loss,
        outcome,
        created_at: signal.created_at,
        can_manage: policy::can_author(role),
    }
}
