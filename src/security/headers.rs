//! Security response headers.
//!
//! # Responsibilities
//! - Build the Feature-Policy string sent with every templated response
//!
//! # Design Decisions
//! - The policy depends only on the runtime mode and is precomputed once
//!   at startup
//! - Embedded players need autoplay/encrypted-media for youtube.com; all
//!   sensor-style features are locked down

/// Response header name carrying the policy.
pub const FEATURE_POLICY_HEADER: &str = "feature-policy";

/// Build the Feature-Policy value for the given mode. Development keeps
/// sync-xhr open for local tooling; production locks it down too.
pub fn feature_policy(production: bool) -> String {
    let mut directives = vec![
        "geolocation 'none'",
        "camera 'none'",
        "microphone 'none'",
        "payment 'none'",
        "usb 'none'",
        "autoplay 'self' https://www.youtube.com",
        "encrypted-media 'self' https://www.youtube.com",
        "fullscreen 'self' https://www.youtube.com",
    ];
    if production {
        directives.push("sync-xhr 'none'");
    } else {
        directives.push("sync-xhr 'self'");
    }
    directives.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_depends_on_mode() {
        let prod = feature_policy(true);
        let dev = feature_policy(false);
        assert_ne!(prod, dev);
        assert!(prod.contains("sync-xhr 'none'"));
        assert!(dev.contains("sync-xhr 'self'"));
    }

    #[test]
    fn test_policy_allows_embedded_player() {
        let policy = feature_policy(true);
        assert!(policy.contains("autoplay 'self' https://www.youtube.com"));
        assert!(policy.contains("geolocation 'none'"));
    }
}
