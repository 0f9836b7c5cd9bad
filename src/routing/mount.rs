//! Mount prefix derivation.
//!
//! When the site is nested inside a larger routing tree, the path this
//! server sees is the original path with the mount prefix stripped.
//! Comparing the two recovers the externally visible prefix, which feeds
//! canonical URLs and intra-site links.

/// Compute the mount prefix from the original inbound path and the path
/// visible to this layer.
///
/// Returns the prefix before the last occurrence of `inner` within
/// `original`; degrades to the empty string when no original path is
/// available or `inner` is not a substring of it.
pub fn mount_url(original: Option<&str>, inner: &str) -> String {
    let Some(original) = original else {
        return String::new();
    };
    match original.rfind(inner) {
        Some(idx) => original[..idx].to_string(),
        None => String::new(),
    }
}
