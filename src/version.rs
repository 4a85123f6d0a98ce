//! SDK version information.

/// Current SDK version.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the User-Agent string for SDK requests.
pub fn build_user_agent(suffix: Option<&str>) -> String {
    let mut ua = format!(
        "RandomCoords-SDK-Rust/{} ({}; {})",
        SDK_VERSION,
        std::env::consts::OS,
        std::env::consts::ARCH
    );

    if let Some(s) = suffix.map(str::trim).filter(|s| !s.is_empty()) {
        ua.push(' ');
        ua.push_str(s);
    }

    ua
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_user_agent() {
        let ua = build_user_agent(None);
        assert!(ua.starts_with("RandomCoords-SDK-Rust/"));
        assert!(ua.contains(SDK_VERSION));
        assert!(ua.contains(std::env::consts::OS));

        let ua_with_suffix = build_user_agent(Some("MyApp/1.0"));
        assert!(ua_with_suffix.ends_with(" MyApp/1.0"));
    }

    #[test]
    fn test_blank_suffix_ignored() {
        assert_eq!(build_user_agent(Some("  ")), build_user_agent(None));
    }
}
