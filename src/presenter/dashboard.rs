use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{AnalysisPost, Role, Signal};
use crate::policy;
use crate::presenter::signal_card::{SignalCard, present_signal};
use crate::session::{SessionSource, Theme};

const EXCERPT_CHARS: usize = 140;

/// An analysis post prepared for card rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub can_manage: bool,
}

pub fn present_post(post: &AnalysisPost, role: Role) -> PostCard {
    PostCard {
        id: post.id.clone(),
        title: post.title.clone(),
        excerpt: excerpt(&post.body),
        image_url: post.image_url.clone(),
        created_at: post.created_at,
        can_manage: policy::can_author(role),
    }
}

// Cut on a character boundary, never mid code point.
fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", body[..cut].trim_end()),
        None => body.to_string(),
    }
}

/// Everything one dashboard render needs, assembled for the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub signals: Vec<SignalCard>,
    pub posts: Vec<PostCard>,
    pub can_author: bool,
    pub theme: Theme,
}

/// Assemble the dashboard for whoever the session says is looking. Cards are
/// ordered newest first; authoring flags and theme ride along for the chrome.
pub fn dashboard(
    source: &dyn SessionSource,
    signals: &[Signal],
    posts: &[AnalysisPost],
) -> DashboardView {
    let session = source.session();
    let role = session.visibility_role();

    let mut signal_cards: Vec<SignalCard> =
        signals.iter().map(|signal| present_signal(signal, role)).collect();
    signal_cards.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut post_cards: Vec<PostCard> =
        posts.iter().map(|post| present_post(post, role)).collect();
    post_cards.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    debug!(
        "Prepared dashboard with {} signals and {} posts for {:?} viewer",
        signal_cards.len(),
        post_cards.len(),
        role
    );

    DashboardView {
        signals: signal_cards,
        posts: post_cards,
        can_author: policy::can_author(role),
        theme: session.theme,
    }
}
