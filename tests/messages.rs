#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use workhours::libs::messages::macros::{debug_mode_from, DEBUG_ENV_VAR};
    use workhours::libs::messages::Message;

    fn env(vars: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<OsString> {
        move |key| vars.iter().find(|(name, _)| *name == key).map(|(_, value)| OsString::from(value))
    }

    #[test]
    fn test_rust_log_does_not_reroute_output() {
        assert!(!debug_mode_from(env(&[("RUST_LOG", "warn")])));
        assert!(!debug_mode_from(env(&[("RUST_LOG", "debug")])));
        assert!(!debug_mode_from(env(&[])));
    }

    #[test]
    fn test_workhours_debug_enables_tracing_output() {
        assert_eq!(DEBUG_ENV_VAR, "WORKHOURS_DEBUG");
        assert!(debug_mode_from(env(&[("WORKHOURS_DEBUG", "1")])));
        assert!(debug_mode_from(env(&[("WORKHOURS_DEBUG", "1"), ("RUST_LOG", "warn")])));
    }

    #[test]
    fn test_message_text() {
        assert_eq!(
            Message::WorkingHoursResult("2.00".to_string(), "2.0 hrs".to_string()).to_string(),
            "Working hours: 2.00 (2.0 hrs)"
        );
        assert_eq!(Message::WorkingDaysResult(5).to_string(), "Working days: 5");
    }
}
