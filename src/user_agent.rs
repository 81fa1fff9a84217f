//! Shared User-Agent string for API clients.

/// Default User-Agent for API requests (identifies the library and version).
#[must_use]
pub(crate) fn default_client_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("starr/{version} (arr-api-client)")
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_contains_crate_version() {
        let ua = default_client_user_agent();
        assert_eq!(
            env!("CARGO_PKG_VERSION"),
            ua.strip_prefix("starr/")
                .and_then(|s| s.split(' ').next())
                .expect("UA has version"),
            "UA must contain crate version"
        );
        assert!(ua.contains("arr-api-client"), "UA must identify as api client: {ua}");
    }
}
