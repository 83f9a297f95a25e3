//! Explicit session context. The embedding application builds a `Session`
//! from its auth state and passes it down; nothing in this crate reads
//! ambient state.

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// An authenticated viewer as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
    pub role: Role,
}

/// Per-request presentation context: who is looking and their theme.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub viewer: Option<Viewer>,
    pub theme: Theme,
}

impl Session {
    pub fn for_viewer(viewer: Viewer, theme: Theme) -> Self {
        Session { viewer: Some(viewer), theme }
    }

    pub fn anonymous() -> Self {
        Session::default()
    }

    /// The role visibility decisions run under. Anonymous visitors browse
    /// with free-tier visibility and can never reach authoring actions.
    pub fn visibility_role(&self) -> Role {
        self.viewer.as_ref().map_or(Role::Free, |viewer| viewer.role)
    }
}

/// Source of the current session, injected into view assembly.
#[cfg_attr(test, mockall::automock)]
pub trait SessionSource {
    fn session(&self) -> Session;
}

impl SessionSource for Session {
    fn session(&self) -> Session {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_browses_as_free() {
        let session = Session::anonymous();
        assert_eq!(session.visibility_role(), Role::Free);
        assert_eq!(session.theme, Theme::Light);
    }

    #[test]
    fn test_viewer_role_carries_through() {
        let session = Session::for_viewer(
            Viewer { id: "u-9".to_string(), role: Role::Premium },
            Theme::Dark,
        );
        assert_eq!(session.visibility_role(), Role::Premium);
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn test_session_is_its_own_source() {
        let session = Session::anonymous();
        assert_eq!(SessionSource::session(&session), session);
    }
}
