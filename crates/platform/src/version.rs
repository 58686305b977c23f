//! OS release string composition with tiered fallbacks
//!
//! Each tier is optional; composition uses whatever tiers resolved and
//! fills the rest with defaults. The registry/API reads that feed these
//! live in the per-OS resolver.

/// Compose the dotted version from the discrete numeric tier, falling back
/// to the string tier, falling back to `"0.0"`.
pub fn version_from_tiers(major_minor: Option<(u32, u32)>, fallback: Option<String>) -> String {
    match major_minor {
        Some((major, minor)) => format!("{major}.{minor}"),
        None => fallback.unwrap_or_else(|| "0.0".to_string()),
    }
}

/// Join version, build number and update revision into one release string.
///
/// Missing tiers default to `"0"` / `0`.
pub fn release_string(version: &str, build: Option<String>, ubr: Option<u32>) -> String {
    let build = build.unwrap_or_else(|| "0".to_string());
    let ubr = ubr.unwrap_or(0);
    format!("{version}.{build}.{ubr}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tier_wins() {
        let version = version_from_tiers(Some((10, 0)), Some("6.3".to_string()));
        assert_eq!(version, "10.0");
    }

    #[test]
    fn string_tier_used_when_numeric_tier_fails() {
        let version = version_from_tiers(None, Some("6.3".to_string()));
        assert_eq!(version, "6.3");
    }

    #[test]
    fn all_tiers_failing_yields_default() {
        assert_eq!(version_from_tiers(None, None), "0.0");
    }

    #[test]
    fn release_joins_all_resolved_tiers() {
        let release = release_string("10.0", Some("19045".to_string()), Some(4291));
        assert_eq!(release, "10.0.19045.4291");
    }

    #[test]
    fn release_defaults_missing_tiers_to_zero() {
        assert_eq!(release_string("10.0", None, None), "10.0.0.0");
        assert_eq!(release_string("0.0", None, None), "0.0.0.0");
    }
}
