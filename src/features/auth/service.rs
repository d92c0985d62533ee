use crate::core::config::AdminConfig;

/// Marker cookie set on successful login and checked by the admin gate
pub const ADMIN_COOKIE_NAME: &str = "admin_auth";
pub const ADMIN_COOKIE_VALUE: &str = "1";

/// Session lifetime: 8 hours
const ADMIN_COOKIE_MAX_AGE_SECS: u64 = 60 * 60 * 8;

/// Single-shot credential check against the configured admin secrets.
///
/// This is a gate, not an identity system: exact string equality, a marker
/// cookie with a fixed lifetime, and nothing to revoke server-side.
pub struct AuthService {
    config: AdminConfig,
}

impl AuthService {
    pub fn new(config: AdminConfig) -> Self {
        Self { config }
    }

    /// Compare submitted credentials with the configured secrets
    pub fn verify(&self, username: &str, password: &str) -> bool {
        username == self.config.username && password == self.config.password
    }

    /// Cookie establishing the admin session (not HTTP-only, the dashboard
    /// frontend reads it to decide which navigation to render)
    pub fn session_cookie(&self) -> String {
        format!(
            "{}={}; Max-Age={}; Path=/",
            ADMIN_COOKIE_NAME, ADMIN_COOKIE_VALUE, ADMIN_COOKIE_MAX_AGE_SECS
        )
    }

    /// Cookie clearing the admin session
    pub fn clear_cookie(&self) -> String {
        format!("{}=; Max-Age=0; Path=/", ADMIN_COOKIE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AdminConfig {
            username: "admin".to_string(),
            password: "rahasia123".to_string(),
        })
    }

    #[test]
    fn test_verify_exact_equality() {
        let service = service();
        assert!(service.verify("admin", "rahasia123"));
        assert!(!service.verify("admin", "rahasia12"));
        assert!(!service.verify("Admin", "rahasia123"));
        assert!(!service.verify("", ""));
    }

    #[test]
    fn test_session_cookie_shape() {
        let cookie = service().session_cookie();
        assert_eq!(cookie, "admin_auth=1; Max-Age=28800; Path=/");
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(service().clear_cookie().contains("Max-Age=0"));
    }
}
