//! Role-based presentation gating. Screens consult these predicates instead
//! of re-deriving role comparisons locally, so the rules cannot drift
//! between enforcement points. Presentation only; the backend enforces real
//! authorization on every request.

use crate::models::Role;

/// Whether stop-loss and target details are shown in full rather than as a
/// locked upgrade placeholder.
pub fn can_view_protected_fields(role: Role) -> bool {
    matches!(role, Role::Admin | Role::Premium)
}

/// Whether create/edit/delete affordances for signals and posts are shown.
pub fn can_author(role: Role) -> bool {
    matches!(role, Role::Admin)
}
