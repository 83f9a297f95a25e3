use tracing::warn;

/// Viewer access tier, as reported by the identity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Premium,
    Free,
}

impl Role {
    /// Decode a role string from the identity service. Unrecognized values
    /// collapse to `Free`: a bad role must never widen visibility.
    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "premium" => Role::Premium,
            "free" => Role::Free,
            _ => {
                warn!("Unknown role {:?}, treating as free", raw);
                Role::Free
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_decode() {
        assert_eq!(Role::from_wire("admin"), Role::Admin);
        assert_eq!(Role::from_wire("premium"), Role::Premium);
        assert_eq!(Role::from_wire("free"), Role::Free);
    }

    #[test]
    fn test_decode_ignores_case_and_whitespace() {
        assert_eq!(Role::from_wire("Admin"), Role::Admin);
        assert_eq!(Role::from_wire(" PREMIUM "), Role::Premium);
    }

    #[test]
    fn test_unknown_roles_fail_closed() {
        assert_eq!(Role::from_wire("superuser"), Role::Free);
        assert_eq!(Role::from_wire(""), Role::Free);
        assert_eq!(Role::from_wire("premium+"), Role::Free);
    }
}
