/// Application-level constants
pub const APP_NAME: &str = "QuickFlow";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hotline number quoted in patient-facing SMS texts.
pub const CANCEL_HOTLINE: &str = "*2700";

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "quickflow=info"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_quickflow() {
        assert_eq!(APP_NAME, "QuickFlow");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_targets_crate() {
        assert!(default_log_filter().starts_with("quickflow"));
    }
}
